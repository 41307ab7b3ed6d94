//! Render-ready frame derived from the editor state.
//!
//! Derivation is pure: the same draft, hover, and preview always produce the
//! same frame. The editor publishes a fresh frame after every mutation and the
//! host draws it into the fill, edge, and vertex layers.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;
use serde_json::json;

use crate::consts::{PROP_HOVER, PROP_INDEX, PROP_PREVIEW};
use crate::draft::Draft;
use crate::geom::LngLat;
use crate::hit::HoverTarget;

/// A vertex marker, or the cursor preview point when `index` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointMarker {
    pub position: LngLat,
    pub index: Option<usize>,
    pub hover: bool,
}

impl PointMarker {
    #[must_use]
    pub fn is_preview(&self) -> bool {
        self.index.is_none()
    }

    /// Metadata the host attaches to the rendered feature so hit-testing can
    /// map it back to a vertex.
    #[must_use]
    pub fn properties(&self) -> serde_json::Value {
        match self.index {
            Some(index) => json!({ PROP_INDEX: index, PROP_HOVER: self.hover }),
            None => json!({ PROP_PREVIEW: true, PROP_HOVER: false }),
        }
    }
}

/// A straight edge between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeLine {
    pub from: LngLat,
    pub to: LngLat,
}

/// The polygon body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillPolygon {
    /// Closed ring, snapped to commit precision.
    pub ring: Vec<LngLat>,
    pub hover: bool,
}

impl FillPolygon {
    #[must_use]
    pub fn properties(&self) -> serde_json::Value {
        json!({ PROP_HOVER: self.hover })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderFrame {
    pub points: Vec<PointMarker>,
    pub edges: Vec<EdgeLine>,
    pub fill: Option<FillPolygon>,
}

impl RenderFrame {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.edges.is_empty() && self.fill.is_none()
    }

    /// The cursor preview point, if one is shown.
    #[must_use]
    pub fn preview(&self) -> Option<&PointMarker> {
        self.points.iter().find(|p| p.is_preview())
    }
}

/// Build the frame for the given state.
#[must_use]
pub fn derive(draft: &Draft, hover: HoverTarget, preview: Option<LngLat>, precision: u32) -> RenderFrame {
    let mut points: Vec<PointMarker> = draft
        .vertices()
        .iter()
        .enumerate()
        .map(|(i, &position)| PointMarker { position, index: Some(i), hover: hover == HoverTarget::Vertex(i) })
        .collect();
    if let Some(position) = preview {
        points.push(PointMarker { position, index: None, hover: false });
    }

    let edges = draft.edges().map(|(_, from, to)| EdgeLine { from, to }).collect();

    let fill = draft
        .finalize(precision)
        .map(|polygon| FillPolygon { ring: polygon.ring, hover: hover == HoverTarget::Polygon });

    RenderFrame { points, edges, fill }
}
