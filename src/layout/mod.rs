mod cycle;
mod flow;
mod geometry;
mod matrix;
mod metrics;
mod overlap;
mod resolve;
mod routing;
mod timeline;
mod tree;
pub(crate) mod types;
pub use types::*;

use std::collections::HashSet;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use tracing::warn;

use crate::config::{CanvasConfig, LayoutConfig};
use crate::ir::{DiagramArchetype, EdgeSpec, NodeSpec};

use cycle::compute_cycle_placement;
use flow::compute_flow_placement;
use matrix::compute_matrix_placement;
use timeline::compute_timeline_placement;
use tree::compute_tree_placement;

/// Computes a complete layout for one diagram: archetype-specific initial
/// placement, overlap resolution, boundary clamping, edge routing and
/// quality scoring. Always returns a result; recoverable input problems are
/// logged and skipped, and any internal fault is converted into a
/// `success = false` result at this boundary.
pub fn generate_layout(
    nodes: &[NodeSpec],
    edges: &[EdgeSpec],
    archetype: DiagramArchetype,
    config: &LayoutConfig,
) -> LayoutResult {
    generate_layout_with_cancel(nodes, edges, archetype, config, None)
}

/// Like [`generate_layout`], but checks `cancel` between resolution rounds.
/// Cancellation is cooperative and round-granular so nodes are never left
/// half-clamped; a cancelled call still returns its best layout so far.
pub fn generate_layout_with_cancel(
    nodes: &[NodeSpec],
    edges: &[EdgeSpec],
    archetype: DiagramArchetype,
    config: &LayoutConfig,
    cancel: Option<&AtomicBool>,
) -> LayoutResult {
    let started = Instant::now();
    if let Err(err) = config.validate() {
        return LayoutResult::failure(err.to_string());
    }

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        layout_graph(nodes, edges, archetype, config, cancel)
    }));
    let elapsed = started.elapsed().as_millis() as u64;
    match outcome {
        Ok(mut result) => {
            result.processing_time_ms = elapsed;
            result.confidence =
                metrics::confidence(result.metrics.overlap_count, elapsed, &config.score);
            result
        }
        Err(panic) => {
            let message = panic_message(panic.as_ref());
            warn!(message = message.as_str(), "layout engine caught a panic");
            let mut result = LayoutResult::failure(format!("layout failed: {message}"));
            result.processing_time_ms = elapsed;
            result
        }
    }
}

fn layout_graph(
    nodes: &[NodeSpec],
    edges: &[EdgeSpec],
    archetype: DiagramArchetype,
    config: &LayoutConfig,
    cancel: Option<&AtomicBool>,
) -> LayoutResult {
    let specs = validate_nodes(nodes);

    if specs.is_empty() {
        return LayoutResult {
            nodes: Vec::new(),
            edges: Vec::new(),
            bounds: BoundingBox::zero(),
            metrics: LayoutMetrics::zero(),
            processing_time_ms: 0,
            success: true,
            confidence: 0.0,
            error: None,
        };
    }

    if specs.len() == 1 {
        // A lone node sits at the canvas center; declared edges are moot.
        let cx = config.canvas.width / 2.0;
        let cy = config.canvas.height / 2.0;
        let mut placed = vec![sized_box(&specs[0], cx, cy, config)];
        clamp_to_canvas(&mut placed, &config.canvas);
        let bounds = BoundingBox::of(&placed);
        let layout_metrics = metrics::compute_metrics(
            &placed,
            &[],
            &bounds,
            config.canvas.min_separation,
            &config.score,
        );
        return LayoutResult {
            nodes: placed,
            edges: Vec::new(),
            bounds,
            metrics: layout_metrics,
            processing_time_ms: 0,
            success: true,
            confidence: 0.0,
            error: None,
        };
    }

    let mut placed = match archetype {
        DiagramArchetype::Flow => compute_flow_placement(&specs, edges, config),
        DiagramArchetype::Tree => compute_tree_placement(&specs, edges, config),
        DiagramArchetype::Timeline => compute_timeline_placement(&specs, edges, config),
        DiagramArchetype::Matrix => compute_matrix_placement(&specs, edges, config),
        DiagramArchetype::Cycle => compute_cycle_placement(&specs, edges, config),
    };

    clamp_to_canvas(&mut placed, &config.canvas);
    resolve::resolve_overlaps(&mut placed, config, cancel);
    clamp_to_canvas(&mut placed, &config.canvas);

    let routed = routing::route_edges(edges, &placed);
    let bounds = BoundingBox::of(&placed);
    let layout_metrics = metrics::compute_metrics(
        &placed,
        &routed,
        &bounds,
        config.canvas.min_separation,
        &config.score,
    );

    LayoutResult {
        nodes: placed,
        edges: routed,
        bounds,
        metrics: layout_metrics,
        processing_time_ms: 0,
        success: true,
        confidence: 0.0,
        error: None,
    }
}

/// Drops nodes the strategies cannot work with: blank ids and repeats of an
/// id already declared. Both are upstream classifier bugs worth a warning,
/// neither is worth failing the diagram.
fn validate_nodes(nodes: &[NodeSpec]) -> Vec<NodeSpec> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut kept = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.id.trim().is_empty() {
            warn!(label = node.label.as_str(), "dropping node with empty id");
            continue;
        }
        if !seen.insert(node.id.as_str()) {
            warn!(id = node.id.as_str(), "dropping node with duplicate id");
            continue;
        }
        kept.push(node.clone());
    }
    kept
}

/// Builds the sized box for a node spec centered at (cx, cy).
fn sized_box(
    spec: &NodeSpec,
    cx: f32,
    cy: f32,
    config: &LayoutConfig,
) -> PositionedNode {
    let width = geometry::node_width(spec, config);
    let height = geometry::node_height(spec, config);
    PositionedNode {
        id: spec.id.clone(),
        x: cx - width / 2.0,
        y: cy - height / 2.0,
        width,
        height,
    }
}

fn node_index<'a>(nodes: &'a [NodeSpec]) -> std::collections::HashMap<&'a str, usize> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.as_str(), i))
        .collect()
}

/// Clamps every box into the canvas minus the boundary margin. Boxes wider
/// or taller than the usable area pin to the top-left margin.
fn clamp_to_canvas(nodes: &mut [PositionedNode], canvas: &CanvasConfig) {
    let margin = canvas.margin();
    for node in nodes.iter_mut() {
        let max_x = (canvas.width - margin - node.width).max(margin);
        let max_y = (canvas.height - margin - node.height).max(margin);
        node.x = node.x.clamp(margin, max_x);
        node.y = node.y.clamp(margin, max_y);
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected panic".to_string()
    }
}
