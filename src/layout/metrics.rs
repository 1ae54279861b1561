use crate::config::ScoreConfig;

use super::types::{BoundingBox, LayoutEdge, LayoutMetrics, PositionedNode};
use super::{geometry, overlap};

pub(super) fn compute_metrics(
    nodes: &[PositionedNode],
    edges: &[LayoutEdge],
    bounds: &BoundingBox,
    margin: f32,
    score: &ScoreConfig,
) -> LayoutMetrics {
    LayoutMetrics {
        overlap_count: overlap::count(nodes, margin),
        edge_crossings: count_edge_crossings(edges),
        total_area: bounds.width * bounds.height,
        average_node_spacing: average_node_spacing(nodes),
        layout_balance: layout_balance(nodes, score.balance_normalization),
    }
}

/// Confidence is dominated by the zero-overlap signal, with processing time
/// as a secondary adjustment, clamped into [0, 1].
pub(super) fn confidence(
    overlap_count: usize,
    processing_time_ms: u64,
    score: &ScoreConfig,
) -> f32 {
    let mut value = score.base_confidence;
    if overlap_count == 0 {
        value += score.zero_overlap_bonus;
    } else {
        value -= score.overlap_penalty * overlap_count as f32;
    }
    if processing_time_ms < score.fast_threshold_ms {
        value += score.fast_bonus;
    } else if processing_time_ms > score.slow_threshold_ms {
        value -= score.slow_penalty;
    }
    value.clamp(0.0, 1.0)
}

/// Mean pairwise center-to-center distance; zero for fewer than two nodes.
fn average_node_spacing(nodes: &[PositionedNode]) -> f32 {
    let n = nodes.len();
    if n < 2 {
        return 0.0;
    }
    let mut total = 0.0f32;
    for i in 0..n {
        for j in (i + 1)..n {
            total += geometry::node_distance(&nodes[i], &nodes[j]);
        }
    }
    total / (n * (n - 1) / 2) as f32
}

/// 1.0 when node centers spread around their centroid, falling toward 0.0
/// as the mean squared centroid distance approaches the normalization
/// constant. A proxy for "spread out" versus "piled in one corner".
fn layout_balance(nodes: &[PositionedNode], normalization: f32) -> f32 {
    if nodes.is_empty() || normalization <= 0.0 {
        return 1.0;
    }
    let centers: Vec<(f32, f32)> = nodes.iter().map(geometry::center).collect();
    let n = centers.len() as f32;
    let centroid_x = centers.iter().map(|c| c.0).sum::<f32>() / n;
    let centroid_y = centers.iter().map(|c| c.1).sum::<f32>() / n;
    let variance = centers
        .iter()
        .map(|c| {
            let dx = c.0 - centroid_x;
            let dy = c.1 - centroid_y;
            dx * dx + dy * dy
        })
        .sum::<f32>()
        / n;
    (1.0 - variance / normalization).max(0.0)
}

/// Counts proper crossings between routed edge segments. Segments that
/// share an endpoint (edges meeting at a node anchor) do not count.
fn count_edge_crossings(edges: &[LayoutEdge]) -> usize {
    let mut segments: Vec<((f32, f32), (f32, f32))> = Vec::new();
    for edge in edges {
        for pair in edge.points.windows(2) {
            segments.push((pair[0], pair[1]));
        }
    }
    let mut crossings = 0;
    for i in 0..segments.len() {
        for j in (i + 1)..segments.len() {
            if segments_cross(segments[i], segments[j]) {
                crossings += 1;
            }
        }
    }
    crossings
}

fn segments_cross(a: ((f32, f32), (f32, f32)), b: ((f32, f32), (f32, f32))) -> bool {
    const EPS: f32 = 1e-3;
    let close = |p: (f32, f32), q: (f32, f32)| (p.0 - q.0).abs() < EPS && (p.1 - q.1).abs() < EPS;
    // Shared anchors are expected wherever edges fan out of one node.
    if close(a.0, b.0) || close(a.0, b.1) || close(a.1, b.0) || close(a.1, b.1) {
        return false;
    }
    let d1 = orientation(b.0, b.1, a.0);
    let d2 = orientation(b.0, b.1, a.1);
    let d3 = orientation(a.0, a.1, b.0);
    let d4 = orientation(a.0, a.1, b.1);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

/// Cross product sign of (b - a) x (c - a): positive when c lies to the
/// left of the a->b line.
fn orientation(a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> f32 {
    (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
}
