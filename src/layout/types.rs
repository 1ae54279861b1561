/// A node box after placement: top-left corner plus size.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A routed edge. `points` holds at least the source and target anchors;
/// it is empty when an endpoint id could not be resolved, and renderers
/// skip such edges.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    pub from: String,
    pub to: String,
    pub points: Vec<(f32, f32)>,
    pub label: Option<String>,
}

/// Minimal axis-aligned rectangle containing all positioned nodes.
/// Always derived from the current node set, never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub width: f32,
    pub height: f32,
}

impl BoundingBox {
    pub fn zero() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: 0.0,
            max_y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn of(nodes: &[PositionedNode]) -> Self {
        if nodes.is_empty() {
            return Self::zero();
        }
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for node in nodes {
            min_x = min_x.min(node.x);
            min_y = min_y.min(node.y);
            max_x = max_x.max(node.x + node.width);
            max_y = max_y.max(node.y + node.height);
        }
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }
}

/// Summary quality metrics for one layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub overlap_count: usize,
    pub edge_crossings: usize,
    pub total_area: f32,
    pub average_node_spacing: f32,
    /// 1.0 when nodes are spread around their centroid, falling toward 0.0
    /// as they cluster.
    pub layout_balance: f32,
}

impl LayoutMetrics {
    pub fn zero() -> Self {
        Self {
            overlap_count: 0,
            edge_crossings: 0,
            total_area: 0.0,
            average_node_spacing: 0.0,
            layout_balance: 1.0,
        }
    }
}

/// The single artifact handed to the renderer. Immutable once built; every
/// call produces a fresh value with no state shared between calls.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    pub nodes: Vec<PositionedNode>,
    pub edges: Vec<LayoutEdge>,
    pub bounds: BoundingBox,
    pub metrics: LayoutMetrics,
    pub processing_time_ms: u64,
    pub success: bool,
    pub confidence: f32,
    pub error: Option<String>,
}

impl LayoutResult {
    /// Structured failure: the renderer shows a placeholder instead of a
    /// diagram. Used for invalid configuration and for faults caught at the
    /// engine boundary.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            bounds: BoundingBox::zero(),
            metrics: LayoutMetrics::zero(),
            processing_time_ms: 0,
            success: false,
            confidence: 0.0,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(id: &str, x: f32, y: f32, width: f32, height: f32) -> PositionedNode {
        PositionedNode {
            id: id.to_string(),
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn bounds_of_empty_set_is_zero() {
        assert_eq!(BoundingBox::of(&[]), BoundingBox::zero());
    }

    #[test]
    fn bounds_covers_all_boxes() {
        let nodes = [boxed("a", 10.0, 20.0, 100.0, 50.0), boxed("b", 200.0, 5.0, 60.0, 40.0)];
        let bounds = BoundingBox::of(&nodes);
        assert_eq!(bounds.min_x, 10.0);
        assert_eq!(bounds.min_y, 5.0);
        assert_eq!(bounds.max_x, 260.0);
        assert_eq!(bounds.max_y, 70.0);
        assert_eq!(bounds.width, 250.0);
        assert_eq!(bounds.height, 65.0);
    }

    #[test]
    fn failure_result_is_empty_and_flagged() {
        let result = LayoutResult::failure("boom");
        assert!(!result.success);
        assert_eq!(result.confidence, 0.0);
        assert!(result.nodes.is_empty());
        assert_eq!(result.error.as_deref(), Some("boom"));
    }
}
