//! The narrow slice of the map rendering surface the editor talks to.

use crate::geom::Point;
use crate::hit::RenderedFeature;

/// Cursor styles the editor requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    /// Surface default, restored when the tool stops.
    #[default]
    Default,
    /// Over empty map while drawing.
    Crosshair,
    /// Over a vertex or the polygon body.
    Pointer,
    /// While dragging.
    Grabbing,
}

impl CursorStyle {
    /// CSS `cursor` value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Crosshair => "crosshair",
            Self::Pointer => "pointer",
            Self::Grabbing => "grabbing",
        }
    }
}

/// Map surface operations used by the editor.
///
/// Queries are read-only. The editor does not own the surface; it only
/// toggles double-click zoom while active and sets the cursor.
pub trait MapSurface {
    /// Features rendered at `at` in any of `layers`.
    fn query_rendered_features(&self, at: Point, layers: &[&str]) -> Vec<RenderedFeature>;

    fn set_double_click_zoom(&mut self, enabled: bool);

    fn set_cursor(&mut self, cursor: CursorStyle);
}
