//! Hover resolution from the surface's rendered-feature query.
//!
//! The surface reports which of the editor's rendered features lie under the
//! pointer; this module picks one according to the configured priority and
//! turns it into a [`HoverTarget`].

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{HitPriority, LayerIds};
use crate::consts::{PROP_INDEX, PROP_PREVIEW};

/// The element currently under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverTarget {
    #[default]
    None,
    /// The polygon body.
    Polygon,
    /// The vertex at this draft index.
    Vertex(usize),
}

impl HoverTarget {
    #[must_use]
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

/// Geometry kind of a rendered feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryKind {
    Point,
    Line,
    Polygon,
}

/// A feature the surface found under a screen position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedFeature {
    /// Layer the feature was drawn in.
    pub layer: String,
    pub kind: GeometryKind,
    /// Metadata attached when the feature was published.
    pub properties: serde_json::Value,
}

/// Pick the hover target from `features` in priority order.
///
/// Malformed features are skipped: vertex markers without a usable index,
/// indices past `vertex_count`, the cursor preview point, and features from
/// layers the editor does not own.
#[must_use]
pub fn resolve_hover(
    features: &[RenderedFeature],
    layers: &LayerIds,
    priority: HitPriority,
    vertex_count: usize,
) -> HoverTarget {
    let order: [&str; 2] = match priority {
        HitPriority::VerticesFirst => [layers.vertices.as_str(), layers.fill.as_str()],
        HitPriority::FillFirst => [layers.fill.as_str(), layers.vertices.as_str()],
    };
    for layer in order {
        for feature in features.iter().filter(|f| f.layer == layer) {
            let target = if layer == layers.vertices {
                vertex_target(feature, vertex_count)
            } else {
                fill_target(feature)
            };
            if let Some(target) = target {
                return target;
            }
        }
    }
    HoverTarget::None
}

fn vertex_target(feature: &RenderedFeature, vertex_count: usize) -> Option<HoverTarget> {
    if feature.kind != GeometryKind::Point {
        debug!(kind = ?feature.kind, "skipping non-point feature in vertex layer");
        return None;
    }
    let props = &feature.properties;
    if props.get(PROP_PREVIEW).and_then(serde_json::Value::as_bool).unwrap_or(false) {
        return None;
    }
    let Some(index) = props.get(PROP_INDEX).and_then(serde_json::Value::as_u64) else {
        debug!(%props, "skipping vertex feature without index");
        return None;
    };
    let index = usize::try_from(index).unwrap_or(usize::MAX);
    if index >= vertex_count {
        debug!(index, vertex_count, "skipping stale vertex index");
        return None;
    }
    Some(HoverTarget::Vertex(index))
}

fn fill_target(feature: &RenderedFeature) -> Option<HoverTarget> {
    if feature.kind != GeometryKind::Polygon {
        debug!(kind = ?feature.kind, "skipping non-polygon feature in fill layer");
        return None;
    }
    Some(HoverTarget::Polygon)
}
