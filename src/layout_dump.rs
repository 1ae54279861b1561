use crate::ir::DiagramArchetype;
use crate::layout::LayoutResult;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Flat, serializable snapshot of a layout result. The renderer and the
/// debug tooling both read this shape; field names follow the JSON
/// conventions of the surrounding pipeline.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDump {
    pub archetype: String,
    pub success: bool,
    pub confidence: f32,
    pub processing_time_ms: u64,
    pub error: Option<String>,
    pub bounds: BoundsDump,
    pub metrics: MetricsDump,
    pub nodes: Vec<NodeDump>,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDump {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDump {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
    pub points: Vec<[f32; 2]>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsDump {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsDump {
    pub overlap_count: usize,
    pub edge_crossings: usize,
    pub total_area: f32,
    pub average_node_spacing: f32,
    pub layout_balance: f32,
}

impl LayoutDump {
    pub fn from_result(result: &LayoutResult, archetype: DiagramArchetype) -> Self {
        let nodes = result
            .nodes
            .iter()
            .map(|node| NodeDump {
                id: node.id.clone(),
                x: node.x,
                y: node.y,
                width: node.width,
                height: node.height,
            })
            .collect();

        let edges = result
            .edges
            .iter()
            .map(|edge| EdgeDump {
                from: edge.from.clone(),
                to: edge.to.clone(),
                label: edge.label.clone(),
                points: edge.points.iter().map(|(x, y)| [*x, *y]).collect(),
            })
            .collect();

        LayoutDump {
            archetype: archetype.as_str().to_string(),
            success: result.success,
            confidence: result.confidence,
            processing_time_ms: result.processing_time_ms,
            error: result.error.clone(),
            bounds: BoundsDump {
                min_x: result.bounds.min_x,
                min_y: result.bounds.min_y,
                max_x: result.bounds.max_x,
                max_y: result.bounds.max_y,
                width: result.bounds.width,
                height: result.bounds.height,
            },
            metrics: MetricsDump {
                overlap_count: result.metrics.overlap_count,
                edge_crossings: result.metrics.edge_crossings,
                total_area: result.metrics.total_area,
                average_node_spacing: result.metrics.average_node_spacing,
                layout_balance: result.metrics.layout_balance,
            },
            nodes,
            edges,
        }
    }
}

pub fn write_layout_dump(
    path: &Path,
    result: &LayoutResult,
    archetype: DiagramArchetype,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_result(result, archetype);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
