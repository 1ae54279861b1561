use crate::config::LayoutConfig;
use crate::ir::{EdgeSpec, NodeSpec};

use super::sized_box;
use super::types::PositionedNode;

/// Chronological band. Input order is temporal order; index i of n maps to
/// an even position along the horizontal axis, on a single band at the
/// vertical center. Edges play no part in placement.
pub(super) fn compute_timeline_placement(
    nodes: &[NodeSpec],
    _edges: &[EdgeSpec],
    config: &LayoutConfig,
) -> Vec<PositionedNode> {
    let n = nodes.len();
    let margin = config.canvas.margin();
    let span = (config.canvas.width - 2.0 * margin).max(0.0);
    let step = span / (n.saturating_sub(1)).max(1) as f32;
    let cy = config.canvas.height / 2.0;

    nodes
        .iter()
        .enumerate()
        .map(|(i, spec)| sized_box(spec, margin + i as f32 * step, cy, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::NodeSpec;

    fn specs(count: usize) -> Vec<NodeSpec> {
        (0..count)
            .map(|i| NodeSpec::new(format!("n{i}"), format!("Step {i}")))
            .collect()
    }

    #[test]
    fn preserves_input_order_left_to_right() {
        let placed = compute_timeline_placement(&specs(5), &[], &LayoutConfig::default());
        for pair in placed.windows(2) {
            assert!(pair[0].x < pair[1].x);
            assert_eq!(pair[0].y, pair[1].y);
        }
    }

    #[test]
    fn spans_the_canvas_between_margins() {
        let config = LayoutConfig::default();
        let placed = compute_timeline_placement(&specs(4), &[], &config);
        let margin = config.canvas.margin();
        let first_cx = placed[0].x + placed[0].width / 2.0;
        let last_cx = placed[3].x + placed[3].width / 2.0;
        assert!((first_cx - margin).abs() < 1e-3);
        assert!((last_cx - (config.canvas.width - margin)).abs() < 1e-3);
    }

    #[test]
    fn spacing_is_uniform() {
        let placed = compute_timeline_placement(&specs(6), &[], &LayoutConfig::default());
        let gaps: Vec<f32> = placed.windows(2).map(|p| p[1].x - p[0].x).collect();
        for gap in &gaps {
            assert!((gap - gaps[0]).abs() < 1e-3);
        }
    }
}
