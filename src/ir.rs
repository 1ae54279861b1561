#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramArchetype {
    Flow,
    Tree,
    Timeline,
    Matrix,
    Cycle,
}

impl DiagramArchetype {
    /// Maps the classifier's type token onto an archetype. Tokens are the
    /// lowercase labels the upstream classifier emits; a handful of common
    /// aliases are accepted.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "flow" | "flowchart" | "process" => Some(Self::Flow),
            "tree" | "hierarchy" | "org" => Some(Self::Tree),
            "timeline" | "sequence" | "chronology" => Some(Self::Timeline),
            "matrix" | "grid" | "table" => Some(Self::Matrix),
            "cycle" | "loop" | "circular" => Some(Self::Cycle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flow => "flow",
            Self::Tree => "tree",
            Self::Timeline => "timeline",
            Self::Matrix => "matrix",
            Self::Cycle => "cycle",
        }
    }
}

/// A node as declared by the upstream classifier. Read-only input.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    pub id: String,
    pub label: String,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// A directed edge between two declared node ids. Endpoints referencing
/// unknown ids are tolerated downstream (logged and skipped, never fatal).
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    pub fn with_label(
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: Some(label.into()),
        }
    }
}

/// Convenience bundle for callers that build a diagram incrementally.
/// Node order is preserved; the Timeline archetype reads it as temporal order.
#[derive(Debug, Clone)]
pub struct DiagramSpec {
    pub archetype: DiagramArchetype,
    pub nodes: Vec<NodeSpec>,
    pub edges: Vec<EdgeSpec>,
}

impl DiagramSpec {
    pub fn new(archetype: DiagramArchetype) -> Self {
        Self {
            archetype,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Inserts the node if its id is new, otherwise updates the label in place.
    pub fn ensure_node(&mut self, id: &str, label: Option<String>) {
        match self.nodes.iter_mut().find(|node| node.id == id) {
            Some(existing) => {
                if let Some(label) = label {
                    existing.label = label;
                }
            }
            None => self.nodes.push(NodeSpec {
                id: id.to_string(),
                label: label.unwrap_or_else(|| id.to_string()),
            }),
        }
    }

    pub fn connect(&mut self, from: &str, to: &str, label: Option<String>) {
        self.edges.push(EdgeSpec {
            from: from.to_string(),
            to: to.to_string(),
            label,
        });
    }
}
