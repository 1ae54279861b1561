use std::collections::VecDeque;

use crate::config::LayoutConfig;
use crate::ir::{EdgeSpec, NodeSpec};

use super::types::PositionedNode;
use super::{node_index, sized_box};

/// Left-to-right process flow. Nodes are placed one column each, in
/// topological order, on a single lane; a branch beyond the first child
/// opens a new lane one row further down.
pub(super) fn compute_flow_placement(
    nodes: &[NodeSpec],
    edges: &[EdgeSpec],
    config: &LayoutConfig,
) -> Vec<PositionedNode> {
    let n = nodes.len();
    let index = node_index(nodes);
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut indegree = vec![0usize; n];
    for edge in edges {
        let (Some(&from), Some(&to)) = (index.get(edge.from.as_str()), index.get(edge.to.as_str()))
        else {
            continue;
        };
        if from == to {
            continue;
        }
        children[from].push(to);
        indegree[to] += 1;
    }

    // Kahn's ordering, roots and ties in input order so placement is
    // reproducible. Nodes stuck in a cycle are appended in input order.
    let mut queue: VecDeque<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();
    let mut remaining = indegree;
    let mut seen = vec![false; n];
    let mut order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        if seen[u] {
            continue;
        }
        seen[u] = true;
        order.push(u);
        for &v in &children[u] {
            if !seen[v] {
                remaining[v] = remaining[v].saturating_sub(1);
                if remaining[v] == 0 {
                    queue.push_back(v);
                }
            }
        }
    }
    for u in 0..n {
        if !seen[u] {
            order.push(u);
        }
    }

    // Lane assignment: the first child continues the parent's lane, every
    // further unassigned child opens a fresh lane.
    let mut lane: Vec<Option<usize>> = vec![None; n];
    let mut next_lane = 0usize;
    for &u in &order {
        let u_lane = match lane[u] {
            Some(l) => l,
            None => {
                let l = next_lane;
                next_lane += 1;
                lane[u] = Some(l);
                l
            }
        };
        let mut straight_taken = false;
        for &v in &children[u] {
            if lane[v].is_none() {
                if straight_taken {
                    lane[v] = Some(next_lane);
                    next_lane += 1;
                } else {
                    lane[v] = Some(u_lane);
                    straight_taken = true;
                }
            }
        }
    }

    let margin = config.canvas.margin();
    let pitch_x = config.canvas.base_node_width + config.canvas.min_separation;
    let pitch_y = config.canvas.base_node_height + config.canvas.min_separation;
    let base_cy = config.canvas.height / 2.0;

    let mut seq_of = vec![0usize; n];
    for (seq, &u) in order.iter().enumerate() {
        seq_of[u] = seq;
    }

    nodes
        .iter()
        .enumerate()
        .map(|(u, spec)| {
            let cx = margin + config.canvas.base_node_width / 2.0 + seq_of[u] as f32 * pitch_x;
            let cy = base_cy + lane[u].unwrap_or(0) as f32 * pitch_y;
            sized_box(spec, cx, cy, config)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::EdgeSpec;

    fn specs(ids: &[&str]) -> Vec<NodeSpec> {
        ids.iter().map(|id| NodeSpec::new(*id, *id)).collect()
    }

    #[test]
    fn chain_runs_left_to_right_on_one_lane() {
        let nodes = specs(&["a", "b", "c", "d"]);
        let edges = vec![
            EdgeSpec::new("a", "b"),
            EdgeSpec::new("b", "c"),
            EdgeSpec::new("c", "d"),
        ];
        let placed = compute_flow_placement(&nodes, &edges, &LayoutConfig::default());
        for pair in placed.windows(2) {
            assert!(pair[0].x < pair[1].x);
            assert_eq!(pair[0].y, pair[1].y);
        }
    }

    #[test]
    fn branch_opens_a_second_lane() {
        let nodes = specs(&["a", "b", "c"]);
        let edges = vec![EdgeSpec::new("a", "b"), EdgeSpec::new("a", "c")];
        let placed = compute_flow_placement(&nodes, &edges, &LayoutConfig::default());
        assert_eq!(placed[0].y, placed[1].y);
        assert!(placed[2].y > placed[1].y);
    }

    #[test]
    fn cycle_falls_back_to_input_order() {
        let nodes = specs(&["a", "b", "c"]);
        let edges = vec![
            EdgeSpec::new("a", "b"),
            EdgeSpec::new("b", "c"),
            EdgeSpec::new("c", "a"),
        ];
        let placed = compute_flow_placement(&nodes, &edges, &LayoutConfig::default());
        assert!(placed[0].x < placed[1].x);
        assert!(placed[1].x < placed[2].x);
    }

    #[test]
    fn dangling_edge_endpoints_are_ignored() {
        let nodes = specs(&["a", "b"]);
        let edges = vec![EdgeSpec::new("a", "ghost"), EdgeSpec::new("a", "b")];
        let placed = compute_flow_placement(&nodes, &edges, &LayoutConfig::default());
        assert_eq!(placed.len(), 2);
        assert!(placed[0].x < placed[1].x);
    }
}
