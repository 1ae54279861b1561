use crate::config::LayoutConfig;
use crate::ir::NodeSpec;

use super::types::PositionedNode;

/// Box width for a node label: grows with label length but is capped at
/// twice the base width so long labels cannot dominate the layout.
pub(super) fn node_width(node: &NodeSpec, config: &LayoutConfig) -> f32 {
    let base = config.canvas.base_node_width;
    let label_width = node.label.chars().count() as f32 * config.char_width + config.label_padding;
    label_width.min(base * 2.0).max(base)
}

/// Box height is constant for now; labels are single-line.
pub(super) fn node_height(_node: &NodeSpec, config: &LayoutConfig) -> f32 {
    config.canvas.base_node_height
}

pub(super) fn center(node: &PositionedNode) -> (f32, f32) {
    (node.x + node.width / 2.0, node.y + node.height / 2.0)
}

pub(super) fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

pub(super) fn node_distance(a: &PositionedNode, b: &PositionedNode) -> f32 {
    distance(center(a), center(b))
}

/// Axis-aligned overlap test with each box inflated by `margin / 2.0` per
/// side, so two boxes "overlap" whenever their gap is below `margin`.
/// Symmetric in its arguments.
pub(super) fn overlaps(a: &PositionedNode, b: &PositionedNode, margin: f32) -> bool {
    let half = margin / 2.0;
    a.x - half < b.x + b.width + half
        && b.x - half < a.x + a.width + half
        && a.y - half < b.y + b.height + half
        && b.y - half < a.y + a.height + half
}

/// Minimum translation that would separate the inflated boxes: the smaller
/// of the two axis penetration depths. Zero when the boxes do not overlap.
pub(super) fn overlap_depth(a: &PositionedNode, b: &PositionedNode, margin: f32) -> f32 {
    let half = margin / 2.0;
    let overlap_x =
        (a.x + a.width + half).min(b.x + b.width + half) - (a.x - half).max(b.x - half);
    let overlap_y =
        (a.y + a.height + half).min(b.y + b.height + half) - (a.y - half).max(b.y - half);
    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return 0.0;
    }
    overlap_x.min(overlap_y)
}

/// Anchors for a straight edge: the center-to-center segment trimmed to each
/// box's boundary. Falls back to the raw centers when the boxes overlap or
/// share a center, where a boundary anchor is meaningless.
pub(super) fn edge_endpoints(
    from: &PositionedNode,
    to: &PositionedNode,
) -> ((f32, f32), (f32, f32)) {
    let start = center(from);
    let end = center(to);
    if overlaps(from, to, 0.0) {
        return (start, end);
    }
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len < f32::EPSILON {
        return (start, end);
    }
    (
        boundary_anchor(from, dx / len, dy / len),
        boundary_anchor(to, -dx / len, -dy / len),
    )
}

/// Point where a ray from the box center along (dx, dy) exits the box.
fn boundary_anchor(node: &PositionedNode, dx: f32, dy: f32) -> (f32, f32) {
    let (cx, cy) = center(node);
    let half_w = node.width / 2.0;
    let half_h = node.height / 2.0;
    let tx = if dx.abs() > f32::EPSILON {
        half_w / dx.abs()
    } else {
        f32::INFINITY
    };
    let ty = if dy.abs() > f32::EPSILON {
        half_h / dy.abs()
    } else {
        f32::INFINITY
    };
    let t = tx.min(ty);
    if !t.is_finite() {
        return (cx, cy);
    }
    (cx + dx * t, cy + dy * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(x: f32, y: f32, width: f32, height: f32) -> PositionedNode {
        PositionedNode {
            id: "n".to_string(),
            x,
            y,
            width,
            height,
        }
    }

    fn spec(label: &str) -> NodeSpec {
        NodeSpec::new("n", label)
    }

    #[test]
    fn node_width_stays_at_base_for_short_labels() {
        let config = LayoutConfig::default();
        assert_eq!(node_width(&spec("ok"), &config), 160.0);
    }

    #[test]
    fn node_width_grows_with_label_but_caps_at_double() {
        let config = LayoutConfig::default();
        // 25 chars * 8px + 20px = 220px, between base and cap.
        assert_eq!(node_width(&spec(&"x".repeat(25)), &config), 220.0);
        assert_eq!(node_width(&spec(&"x".repeat(200)), &config), 320.0);
    }

    #[test]
    fn overlap_test_is_symmetric() {
        let a = boxed(0.0, 0.0, 100.0, 50.0);
        let b = boxed(110.0, 0.0, 100.0, 50.0);
        // 10px gap: clear without margin, overlapping once margin exceeds it.
        assert!(!overlaps(&a, &b, 0.0));
        assert!(overlaps(&a, &b, 20.0));
        assert_eq!(overlaps(&a, &b, 20.0), overlaps(&b, &a, 20.0));
        assert_eq!(overlaps(&a, &b, 0.0), overlaps(&b, &a, 0.0));
    }

    #[test]
    fn overlap_depth_matches_smaller_axis_penetration() {
        let a = boxed(0.0, 0.0, 100.0, 50.0);
        let b = boxed(80.0, 10.0, 100.0, 50.0);
        // x penetration 20, y penetration 40.
        assert_eq!(overlap_depth(&a, &b, 0.0), 20.0);
        assert_eq!(overlap_depth(&a, &b, 0.0), overlap_depth(&b, &a, 0.0));
    }

    #[test]
    fn overlap_depth_zero_for_separated_boxes() {
        let a = boxed(0.0, 0.0, 100.0, 50.0);
        let b = boxed(500.0, 500.0, 100.0, 50.0);
        assert_eq!(overlap_depth(&a, &b, 40.0), 0.0);
    }

    #[test]
    fn edge_endpoints_sit_on_box_boundaries() {
        let a = boxed(0.0, 0.0, 100.0, 50.0);
        let b = boxed(300.0, 0.0, 100.0, 50.0);
        let (start, end) = edge_endpoints(&a, &b);
        assert_eq!(start, (100.0, 25.0));
        assert_eq!(end, (300.0, 25.0));
    }

    #[test]
    fn edge_endpoints_fall_back_to_centers_for_overlapping_boxes() {
        let a = boxed(0.0, 0.0, 100.0, 50.0);
        let b = boxed(20.0, 10.0, 100.0, 50.0);
        let (start, end) = edge_endpoints(&a, &b);
        assert_eq!(start, center(&a));
        assert_eq!(end, center(&b));
    }
}
