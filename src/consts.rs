//! Shared constants for the polygon editor.

// ── Geometry ────────────────────────────────────────────────────

/// Minimum vertex count for a draft to form a valid polygon.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Decimal places kept when a polygon is committed (~10 cm at the equator).
pub const DEFAULT_PRECISION: u32 = 6;

/// Upper bound on configurable precision; beyond this `f64` has no digits left.
pub const MAX_PRECISION: u32 = 15;

// ── Undo ────────────────────────────────────────────────────────

/// Maximum number of snapshots retained in the undo history.
pub const DEFAULT_UNDO_LIMIT: usize = 100;

// ── Layers ──────────────────────────────────────────────────────

/// Layer id of the filled polygon body.
pub const FILL_LAYER_ID: &str = "polygon-editor-fill";

/// Layer id of the edge line strings.
pub const EDGE_LAYER_ID: &str = "polygon-editor-edges";

/// Layer id of the vertex markers, including the cursor preview point.
pub const VERTEX_LAYER_ID: &str = "polygon-editor-vertices";

// ── Feature properties ──────────────────────────────────────────

/// Property carrying a vertex marker's index into the draft.
pub const PROP_INDEX: &str = "index";

/// Property flagging the hovered marker or fill.
pub const PROP_HOVER: &str = "hover";

/// Property flagging the transient cursor preview point.
pub const PROP_PREVIEW: &str = "preview";
