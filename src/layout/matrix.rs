use crate::config::LayoutConfig;
use crate::ir::{EdgeSpec, NodeSpec};

use super::sized_box;
use super::types::PositionedNode;

/// Near-square grid. Nodes fill cells row-major in input order; the grid
/// block is centered on the canvas.
pub(super) fn compute_matrix_placement(
    nodes: &[NodeSpec],
    _edges: &[EdgeSpec],
    config: &LayoutConfig,
) -> Vec<PositionedNode> {
    let n = nodes.len();
    if n == 0 {
        return Vec::new();
    }
    let cols = (n as f32).sqrt().ceil().max(1.0) as usize;
    let rows = n.div_ceil(cols);

    let cell_w = config.canvas.base_node_width + config.canvas.min_separation;
    let cell_h = config.canvas.base_node_height + config.canvas.min_separation;
    let origin_x = (config.canvas.width - cols as f32 * cell_w) / 2.0 + cell_w / 2.0;
    let origin_y = (config.canvas.height - rows as f32 * cell_h) / 2.0 + cell_h / 2.0;

    nodes
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let col = i % cols;
            let row = i / cols;
            let cx = origin_x + col as f32 * cell_w;
            let cy = origin_y + row as f32 * cell_h;
            sized_box(spec, cx, cy, config)
        })
        .collect()
}
