//! Editor configuration: undo depth, commit precision, hit-test priority, and
//! the layer ids the editor publishes under.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashMap;
use std::env::VarError;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_PRECISION, DEFAULT_UNDO_LIMIT, EDGE_LAYER_ID, FILL_LAYER_ID, MAX_PRECISION, VERTEX_LAYER_ID,
};
use crate::error::EditorError;

const ENV_UNDO_LIMIT: &str = "POLYGON_EDITOR_UNDO_LIMIT";
const ENV_PRECISION: &str = "POLYGON_EDITOR_PRECISION";
const ENV_HIT_PRIORITY: &str = "POLYGON_EDITOR_HIT_PRIORITY";

/// Order in which hit-test results are evaluated. The first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HitPriority {
    /// Vertex markers win over the fill they sit on.
    #[default]
    VerticesFirst,
    /// The fill body wins over vertex markers.
    FillFirst,
}

/// Layer ids of the render layers the host draws the editor's frame into.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayerIds {
    pub fill: String,
    pub edges: String,
    pub vertices: String,
}

impl Default for LayerIds {
    fn default() -> Self {
        Self {
            fill: FILL_LAYER_ID.to_owned(),
            edges: EDGE_LAYER_ID.to_owned(),
            vertices: VERTEX_LAYER_ID.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub undo_limit: usize,
    pub precision: u32,
    pub hit_priority: HitPriority,
    pub layers: LayerIds,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_limit: DEFAULT_UNDO_LIMIT,
            precision: DEFAULT_PRECISION,
            hit_priority: HitPriority::default(),
            layers: LayerIds::default(),
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `POLYGON_EDITOR_UNDO_LIMIT`: default 100, must be at least 1
    /// - `POLYGON_EDITOR_PRECISION`: default 6, at most 15
    /// - `POLYGON_EDITOR_HIT_PRIORITY`: `vertices-first` (default) or `fill-first`
    pub fn from_env() -> Result<Self, EditorError> {
        let mut vars = HashMap::new();
        for key in [ENV_UNDO_LIMIT, ENV_PRECISION, ENV_HIT_PRIORITY] {
            match std::env::var(key) {
                Ok(value) => {
                    vars.insert(key, value);
                }
                Err(VarError::NotPresent) => {}
                Err(VarError::NotUnicode(_)) => {
                    return Err(EditorError::ConfigParse(format!("{key}: value is not valid unicode")));
                }
            }
        }
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    /// Build config from an arbitrary key lookup. Absent keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EditorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_UNDO_LIMIT) {
            config.undo_limit = parse_number(ENV_UNDO_LIMIT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PRECISION) {
            config.precision = parse_number(ENV_PRECISION, &raw)?;
        }
        config.hit_priority = parse_hit_priority(lookup(ENV_HIT_PRIORITY).as_deref())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse config from a JSON document. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, EditorError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| EditorError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the editor cannot honor.
    pub fn validate(&self) -> Result<(), EditorError> {
        if self.undo_limit == 0 {
            return Err(EditorError::ConfigParse("undo_limit must be at least 1".into()));
        }
        if self.precision > MAX_PRECISION {
            return Err(EditorError::ConfigParse(format!(
                "precision {} exceeds maximum of {MAX_PRECISION}",
                self.precision
            )));
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, EditorError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| EditorError::ConfigParse(format!("{key}: expected a non-negative integer, got '{raw}'")))
}

fn parse_hit_priority(raw: Option<&str>) -> Result<HitPriority, EditorError> {
    match raw.unwrap_or("vertices-first") {
        "vertices-first" => Ok(HitPriority::VerticesFirst),
        "fill-first" => Ok(HitPriority::FillFirst),
        other => Err(EditorError::ConfigParse(format!(
            "unknown {ENV_HIT_PRIORITY} '{other}' (expected 'vertices-first' or 'fill-first')"
        ))),
    }
}
