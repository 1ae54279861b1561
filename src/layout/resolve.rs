use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::config::LayoutConfig;

use super::types::PositionedNode;
use super::{clamp_to_canvas, geometry, overlap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ResolveOutcome {
    /// Zero overlapping pairs remain.
    Resolved,
    /// The round budget ran out with overlaps left; the layout is still
    /// returned and confidence takes the penalty.
    Exhausted,
    /// The caller's cancel flag was raised between rounds.
    Cancelled,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct ResolveReport {
    pub(super) outcome: ResolveOutcome,
    pub(super) rounds_used: usize,
    pub(super) remaining_overlaps: usize,
}

/// Iterative separation: scan for overlapping pairs, push each pair apart
/// symmetrically along the line between their centers, re-clamp into the
/// canvas, and scan again. Terminates on zero overlaps or on the round
/// budget. Clamping can reintroduce an overlap near the frame, which the
/// next scan picks up.
///
/// The symmetric push preserves each pair's combined centroid so repeated
/// rounds do not drift the whole layout toward a corner. Pairs whose
/// centers coincide are pushed along the x axis.
pub(super) fn resolve_overlaps(
    nodes: &mut [PositionedNode],
    config: &LayoutConfig,
    cancel: Option<&AtomicBool>,
) -> ResolveReport {
    let margin = config.canvas.min_separation;
    let mut rounds_used = 0;

    loop {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                let remaining = overlap::count(nodes, margin);
                debug!(rounds_used, remaining, "layout resolution cancelled");
                return ResolveReport {
                    outcome: ResolveOutcome::Cancelled,
                    rounds_used,
                    remaining_overlaps: remaining,
                };
            }
        }

        let pairs = overlap::detect_all(nodes, margin);
        if pairs.is_empty() {
            return ResolveReport {
                outcome: ResolveOutcome::Resolved,
                rounds_used,
                remaining_overlaps: 0,
            };
        }
        if rounds_used == config.resolve.max_rounds {
            warn!(
                remaining = pairs.len(),
                rounds = rounds_used,
                "overlap resolution exhausted its round budget"
            );
            return ResolveReport {
                outcome: ResolveOutcome::Exhausted,
                rounds_used,
                remaining_overlaps: pairs.len(),
            };
        }
        rounds_used += 1;

        for (i, j) in pairs {
            let depth = geometry::overlap_depth(&nodes[i], &nodes[j], margin);
            if depth <= 0.0 {
                // An earlier push in this pass already separated the pair.
                continue;
            }
            let (ax, ay) = geometry::center(&nodes[i]);
            let (bx, by) = geometry::center(&nodes[j]);
            let (mut dir_x, mut dir_y) = (bx - ax, by - ay);
            let len = (dir_x * dir_x + dir_y * dir_y).sqrt();
            if len < f32::EPSILON {
                dir_x = 1.0;
                dir_y = 0.0;
            } else {
                dir_x /= len;
                dir_y /= len;
            }
            let push = depth / 2.0 + config.resolve.push_epsilon;
            nodes[i].x -= dir_x * push;
            nodes[i].y -= dir_y * push;
            nodes[j].x += dir_x * push;
            nodes[j].y += dir_y * push;
        }
        clamp_to_canvas(nodes, &config.canvas);
    }
}
