use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::config::LayoutConfig;
use crate::ir::{EdgeSpec, NodeSpec};

use super::types::PositionedNode;
use super::{geometry, sized_box};

/// Ring layout. Nodes sit evenly on a circle at the canvas center, starting
/// at twelve o'clock. The radius is the smallest that keeps adjacent
/// inflated boxes apart, capped so the ring stays inside the canvas.
pub(super) fn compute_cycle_placement(
    nodes: &[NodeSpec],
    _edges: &[EdgeSpec],
    config: &LayoutConfig,
) -> Vec<PositionedNode> {
    let n = nodes.len();
    if n == 0 {
        return Vec::new();
    }
    let center_x = config.canvas.width / 2.0;
    let center_y = config.canvas.height / 2.0;
    let margin = config.canvas.margin();

    let max_width = nodes
        .iter()
        .map(|spec| geometry::node_width(spec, config))
        .fold(config.canvas.base_node_width, f32::max);
    let height = config.canvas.base_node_height;
    let sep = config.canvas.min_separation;

    // Adjacent centers are a chord apart. Boxes separated by less than the
    // chord on both axes would overlap, so the chord must reach the corner
    // distance of the inflated box extents.
    let chord = ((max_width + sep).powi(2) + (height + sep).powi(2)).sqrt();
    let wanted = if n >= 2 {
        chord / (2.0 * (PI / n as f32).sin())
    } else {
        0.0
    };
    let fit_x = center_x - margin - max_width / 2.0;
    let fit_y = center_y - margin - height / 2.0;
    let radius = wanted.min(fit_x.min(fit_y)).max(0.0);

    nodes
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let angle = -FRAC_PI_2 + TAU * i as f32 / n as f32;
            let cx = center_x + radius * angle.cos();
            let cy = center_y + radius * angle.sin();
            sized_box(spec, cx, cy, config)
        })
        .collect()
}
