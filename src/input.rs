//! Input model: pointer and key events, modifier keys, and the tool state machine.
//!
//! The host translates surface events into these types. `ToolState` is the
//! editor's gesture state: whether the tool is active and, while a drag is in
//! progress, what is being dragged and where the pointer last was.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::{LngLat, Point};
use crate::hit::HoverTarget;

/// A pointer event in both screen and map space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Position in CSS pixels, used for feature queries.
    pub screen: Point,
    /// Projected map position, used for geometry.
    pub map: LngLat,
}

impl PointerEvent {
    #[must_use]
    pub fn new(screen: Point, map: LngLat) -> Self {
        Self { screen, map }
    }
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    /// Meta / Command key.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl on most platforms, Command on macOS.
    #[must_use]
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A keyboard key name as reported by the browser (e.g. `"Enter"`, `"Escape"`, `"z"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }
}

/// Kind of UI element holding keyboard focus when a key event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusKind {
    /// The map or a non-editable element.
    #[default]
    Other,
    /// A text field; editor shortcuts are suppressed.
    TextInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
    pub focus: FocusKind,
}

impl KeyEvent {
    #[must_use]
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self { key: Key::new(key), modifiers, focus: FocusKind::Other }
    }

    #[must_use]
    pub fn in_text_input(mut self) -> Self {
        self.focus = FocusKind::TextInput;
        self
    }
}

/// Whether the host should suppress the surface's default handling of an event
/// (map drag-pan, double-click zoom).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Response {
    /// The editor did not act; let the surface handle it.
    Ignored,
    /// The editor consumed the event.
    Handled,
}

/// Gesture state of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToolState {
    /// Tool not running; all input is ignored.
    #[default]
    Inactive,
    /// Active with no drag in progress.
    Editing,
    /// Dragging a single vertex.
    DraggingVertex {
        index: usize,
        /// Map position of the previous drag event.
        origin: LngLat,
    },
    /// Dragging the whole polygon.
    DraggingPolygon {
        /// Map position of the previous drag event; each move translates by the offset from here.
        origin: LngLat,
    },
}

impl ToolState {
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Inactive)
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self, Self::DraggingVertex { .. } | Self::DraggingPolygon { .. })
    }

    #[must_use]
    pub fn drag_origin(self) -> Option<LngLat> {
        match self {
            Self::DraggingVertex { origin, .. } | Self::DraggingPolygon { origin } => Some(origin),
            Self::Inactive | Self::Editing => None,
        }
    }

    /// Drag state for a press on `hover`, or `None` when there is nothing to drag.
    #[must_use]
    pub fn drag_for(hover: HoverTarget, origin: LngLat) -> Option<Self> {
        match hover {
            HoverTarget::None => None,
            HoverTarget::Polygon => Some(Self::DraggingPolygon { origin }),
            HoverTarget::Vertex(index) => Some(Self::DraggingVertex { index, origin }),
        }
    }
}
