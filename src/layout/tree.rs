use std::collections::VecDeque;

use crate::config::LayoutConfig;
use crate::ir::{EdgeSpec, NodeSpec};

use super::types::PositionedNode;
use super::{node_index, sized_box};

/// Top-down hierarchy. Depth is assigned by BFS from the roots (nodes with
/// no incoming edge), depth maps to a vertical rank, and siblings spread
/// evenly centered under their parent. Cross-family collisions within a
/// rank are left to the resolution pass.
pub(super) fn compute_tree_placement(
    nodes: &[NodeSpec],
    edges: &[EdgeSpec],
    config: &LayoutConfig,
) -> Vec<PositionedNode> {
    let n = nodes.len();
    if n == 0 {
        return Vec::new();
    }
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

    let mut roots: Vec<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();
    if roots.is_empty() {
        // Fully cyclic input: treat the first declared node as the root.
        roots.push(0);
    }

    let mut depth = vec![usize::MAX; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut queue: VecDeque<usize> = VecDeque::new();
    for &r in &roots {
        depth[r] = 0;
        queue.push_back(r);
    }
    let mut bfs_order = Vec::with_capacity(n);
    while let Some(u) = queue.pop_front() {
        bfs_order.push(u);
        for &v in &children[u] {
            if depth[v] == usize::MAX {
                depth[v] = depth[u] + 1;
                parent[v] = Some(u);
                queue.push_back(v);
            }
        }
    }
    // Nodes unreachable from any root join the root rank.
    for u in 0..n {
        if depth[u] == usize::MAX {
            depth[u] = 0;
            roots.push(u);
        }
    }

    let margin = config.canvas.margin();
    let sibling_pitch = config.canvas.base_node_width + config.canvas.min_separation;
    let rank_spacing = config.canvas.base_node_height + config.canvas.min_separation;
    let top_cy = margin + config.canvas.base_node_height / 2.0;

    // Roots spread evenly across the canvas, then each BFS-discovered family
    // centers under its parent.
    let mut cx = vec![0.0f32; n];
    let root_count = roots.len();
    for (i, &r) in roots.iter().enumerate() {
        cx[r] = config.canvas.width * (i + 1) as f32 / (root_count + 1) as f32;
    }
    for &u in &bfs_order {
        let brood: Vec<usize> = children[u]
            .iter()
            .copied()
            .filter(|&v| parent[v] == Some(u))
            .collect();
        let m = brood.len();
        for (i, &v) in brood.iter().enumerate() {
            cx[v] = cx[u] + (i as f32 - (m as f32 - 1.0) / 2.0) * sibling_pitch;
        }
    }

    nodes
        .iter()
        .enumerate()
        .map(|(u, spec)| {
            let cy = top_cy + depth[u] as f32 * rank_spacing;
            sized_box(spec, cx[u], cy, config)
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
    fn depth_maps_to_vertical_rank() {
        let nodes = specs(&["root", "left", "right", "leaf"]);
        let edges = vec![
            EdgeSpec::new("root", "left"),
            EdgeSpec::new("root", "right"),
            EdgeSpec::new("left", "leaf"),
        ];
        let placed = compute_tree_placement(&nodes, &edges, &LayoutConfig::default());
        assert!(placed[1].y > placed[0].y);
        assert_eq!(placed[1].y, placed[2].y);
        assert!(placed[3].y > placed[1].y);
    }

    #[test]
    fn siblings_center_under_their_parent() {
        let nodes = specs(&["root", "a", "b"]);
        let edges = vec![EdgeSpec::new("root", "a"), EdgeSpec::new("root", "b")];
        let placed = compute_tree_placement(&nodes, &edges, &LayoutConfig::default());
        let parent_cx = placed[0].x + placed[0].width / 2.0;
        let a_cx = placed[1].x + placed[1].width / 2.0;
        let b_cx = placed[2].x + placed[2].width / 2.0;
        assert!(((a_cx + b_cx) / 2.0 - parent_cx).abs() < 1e-3);
        assert!(a_cx < b_cx);
    }

    #[test]
    fn cyclic_graph_still_places_every_node() {
        let nodes = specs(&["a", "b"]);
        let edges = vec![EdgeSpec::new("a", "b"), EdgeSpec::new("b", "a")];
        let placed = compute_tree_placement(&nodes, &edges, &LayoutConfig::default());
        assert_eq!(placed.len(), 2);
        assert!(placed[1].y > placed[0].y);
    }

    #[test]
    fn disconnected_nodes_join_the_root_rank() {
        let nodes = specs(&["root", "child", "island"]);
        let edges = vec![EdgeSpec::new("root", "child")];
        let placed = compute_tree_placement(&nodes, &edges, &LayoutConfig::default());
        assert_eq!(placed[0].y, placed[2].y);
        assert!(placed[1].y > placed[0].y);
    }
}
