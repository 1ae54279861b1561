use super::geometry;
use super::types::PositionedNode;

/// All overlapping pairs under the given separation margin, enumerated as
/// `(i, j)` with `i < j` in input order. The order is part of the contract:
/// diagnostics and resolution passes must be reproducible.
pub(super) fn detect_all(nodes: &[PositionedNode], margin: f32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if geometry::overlaps(&nodes[i], &nodes[j], margin) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

pub(super) fn count(nodes: &[PositionedNode], margin: f32) -> usize {
    let mut total = 0;
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if geometry::overlaps(&nodes[i], &nodes[j], margin) {
                total += 1;
            }
        }
    }
    total
}
