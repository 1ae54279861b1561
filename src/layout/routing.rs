use std::collections::HashMap;

use tracing::warn;

use crate::ir::EdgeSpec;

use super::geometry;
use super::types::{LayoutEdge, PositionedNode};

/// Routes every declared edge as a straight polyline between the resolved
/// node boxes. An edge whose endpoint id is unknown is kept in the output
/// with an empty point list so callers can still see it was declared;
/// renderers skip point-less edges.
pub(super) fn route_edges(edges: &[EdgeSpec], nodes: &[PositionedNode]) -> Vec<LayoutEdge> {
    let index: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.as_str(), i))
        .collect();

    edges
        .iter()
        .map(|edge| {
            let from = index.get(edge.from.as_str());
            let to = index.get(edge.to.as_str());
            let points = match (from, to) {
                (Some(&f), Some(&t)) => {
                    let (start, end) = geometry::edge_endpoints(&nodes[f], &nodes[t]);
                    vec![start, end]
                }
                _ => {
                    warn!(
                        from = edge.from.as_str(),
                        to = edge.to.as_str(),
                        "edge references unknown node id, leaving it unrouted"
                    );
                    Vec::new()
                }
            };
            LayoutEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
                points,
                label: edge.label.clone(),
            }
        })
        .collect()
}
