use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas geometry the renderer will draw into. All dimensions are pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    pub base_node_width: f32,
    pub base_node_height: f32,
    pub min_separation: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            base_node_width: 160.0,
            base_node_height: 60.0,
            min_separation: 40.0,
        }
    }
}

impl CanvasConfig {
    pub fn new(
        width: f32,
        height: f32,
        base_node_width: f32,
        base_node_height: f32,
        min_separation: f32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            width,
            height,
            base_node_width,
            base_node_height,
            min_separation,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::NonPositiveCanvas {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.base_node_width > 0.0 && self.base_node_height > 0.0) {
            return Err(ConfigError::NonPositiveNodeSize {
                width: self.base_node_width,
                height: self.base_node_height,
            });
        }
        if !(self.min_separation > 0.0) {
            return Err(ConfigError::NonPositiveSeparation(self.min_separation));
        }
        Ok(())
    }

    /// Boundary margin nodes are clamped into. The separation distance
    /// doubles as the canvas margin so edge nodes keep the same clearance
    /// from the frame as from each other.
    pub fn margin(&self) -> f32 {
        self.min_separation
    }
}

/// Overlap-resolution loop bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveConfig {
    /// Hard cap on corrective rounds; bounds worst-case latency at
    /// O(rounds * n^2) regardless of how pathological the input is.
    pub max_rounds: usize,
    /// Extra distance added to every push so a resolved pair does not sit
    /// exactly on the overlap threshold.
    pub push_epsilon: f32,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            push_epsilon: 0.5,
        }
    }
}

/// Weights for the confidence formula and the balance metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreConfig {
    pub base_confidence: f32,
    pub zero_overlap_bonus: f32,
    /// Penalty per residual overlapping pair.
    pub overlap_penalty: f32,
    pub fast_bonus: f32,
    pub fast_threshold_ms: u64,
    pub slow_penalty: f32,
    pub slow_threshold_ms: u64,
    /// Normalization constant for the balance metric; the mean squared
    /// center-to-centroid distance is divided by this before inversion.
    pub balance_normalization: f32,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            base_confidence: 0.8,
            zero_overlap_bonus: 0.15,
            overlap_penalty: 0.10,
            fast_bonus: 0.05,
            fast_threshold_ms: 2000,
            slow_penalty: 0.10,
            slow_threshold_ms: 5000,
            balance_normalization: 1.0e6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub canvas: CanvasConfig,
    pub resolve: ResolveConfig,
    pub score: ScoreConfig,
    /// Pixels of box width budgeted per label character.
    pub char_width: f32,
    /// Total horizontal padding added around a label.
    pub label_padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            resolve: ResolveConfig::default(),
            score: ScoreConfig::default(),
            char_width: 8.0,
            label_padding: 20.0,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.canvas.validate()?;
        if self.resolve.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if !(self.char_width > 0.0) {
            return Err(ConfigError::NonPositiveCharWidth(self.char_width));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CanvasConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    base_node_width: Option<f32>,
    base_node_height: Option<f32>,
    min_separation: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ResolveConfigFile {
    max_rounds: Option<usize>,
    push_epsilon: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ScoreConfigFile {
    base_confidence: Option<f32>,
    zero_overlap_bonus: Option<f32>,
    overlap_penalty: Option<f32>,
    fast_bonus: Option<f32>,
    fast_threshold_ms: Option<u64>,
    slow_penalty: Option<f32>,
    slow_threshold_ms: Option<u64>,
    balance_normalization: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ConfigFile {
    canvas: Option<CanvasConfigFile>,
    resolve: Option<ResolveConfigFile>,
    score: Option<ScoreConfigFile>,
    char_width: Option<f32>,
    label_padding: Option<f32>,
}

/// Loads a layout configuration, merging an optional partial JSON file over
/// the defaults. Every key is optional; unknown keys are ignored.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<LayoutConfig> {
    let mut config = LayoutConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = serde_json::from_str(&contents)?;

    if let Some(canvas) = parsed.canvas {
        if let Some(v) = canvas.width {
            config.canvas.width = v;
        }
        if let Some(v) = canvas.height {
            config.canvas.height = v;
        }
        if let Some(v) = canvas.base_node_width {
            config.canvas.base_node_width = v;
        }
        if let Some(v) = canvas.base_node_height {
            config.canvas.base_node_height = v;
        }
        if let Some(v) = canvas.min_separation {
            config.canvas.min_separation = v;
        }
    }
    if let Some(resolve) = parsed.resolve {
        if let Some(v) = resolve.max_rounds {
            config.resolve.max_rounds = v;
        }
        if let Some(v) = resolve.push_epsilon {
            config.resolve.push_epsilon = v;
        }
    }
    if let Some(score) = parsed.score {
        if let Some(v) = score.base_confidence {
            config.score.base_confidence = v;
        }
        if let Some(v) = score.zero_overlap_bonus {
            config.score.zero_overlap_bonus = v;
        }
        if let Some(v) = score.overlap_penalty {
            config.score.overlap_penalty = v;
        }
        if let Some(v) = score.fast_bonus {
            config.score.fast_bonus = v;
        }
        if let Some(v) = score.fast_threshold_ms {
            config.score.fast_threshold_ms = v;
        }
        if let Some(v) = score.slow_penalty {
            config.score.slow_penalty = v;
        }
        if let Some(v) = score.slow_threshold_ms {
            config.score.slow_threshold_ms = v;
        }
        if let Some(v) = score.balance_normalization {
            config.score.balance_normalization = v;
        }
    }
    if let Some(v) = parsed.char_width {
        config.char_width = v;
    }
    if let Some(v) = parsed.label_padding {
        config.label_padding = v;
    }

    config.validate()?;
    Ok(config)
}
