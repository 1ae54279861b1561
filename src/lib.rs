pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod layout_dump;

pub use config::{CanvasConfig, LayoutConfig, ResolveConfig, ScoreConfig, load_config};
pub use error::ConfigError;
pub use ir::{DiagramArchetype, DiagramSpec, EdgeSpec, NodeSpec};
pub use layout::{
    BoundingBox, LayoutEdge, LayoutMetrics, LayoutResult, PositionedNode, generate_layout,
    generate_layout_with_cancel,
};
