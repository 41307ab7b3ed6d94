//! Interactive polygon drawing and editing for map-based editors.
//!
//! The crate owns the interaction state machine only: the host wires its map
//! surface's pointer and key events into an [`editor::Editor`], implements
//! [`surface::MapSurface`] for feature queries and cursor changes, and draws
//! the [`render::RenderFrame`] the editor publishes. Committed polygons reach
//! the host through the success/updated/failure listeners.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | The editor: lifecycle, input handlers, output ports |
//! | [`draft`] | Open vertex list, nearest-edge insertion, commit to a closed ring |
//! | [`hit`] | Hover resolution from rendered-feature queries |
//! | [`input`] | Pointer/key event types and the tool state machine |
//! | [`undo`] | Bounded snapshot history |
//! | [`events`] | Success/updated/failure listener registries |
//! | [`port`] | Subscribable output values |
//! | [`render`] | Pure derivation of the render frame |
//! | [`surface`] | The map surface trait the editor consumes |
//! | [`geom`] | Coordinates, segment distance, rounding |
//! | [`config`] | Undo depth, precision, hit priority, layer ids |
//! | [`error`] | Setup and configuration errors |
//! | [`consts`] | Shared constants (limits, layer ids, property keys) |

pub mod config;
pub mod consts;
pub mod draft;
pub mod editor;
pub mod error;
pub mod events;
pub mod geom;
pub mod hit;
pub mod input;
pub mod port;
pub mod render;
pub mod surface;
pub mod undo;

pub use config::{EditorConfig, HitPriority};
pub use draft::Polygon;
pub use editor::Editor;
pub use error::EditorError;
pub use geom::{LngLat, Point};
pub use surface::{CursorStyle, MapSurface};
