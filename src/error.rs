//! Editor errors.
//!
//! Only caller mistakes surface here. A finish with too few vertices or an
//! explicit cancel are domain outcomes delivered on the failure channel.

/// Errors produced by editor setup and configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    /// A polygon handed to `edit_existing` has fewer than three distinct vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    /// A polygon handed to `edit_existing` contains NaN or infinite coordinates.
    #[error("non-finite coordinate at vertex {index}")]
    NonFiniteCoordinate { index: usize },

    /// A configuration value could not be parsed or is out of range.
    #[error("config parse failed: {0}")]
    ConfigParse(String),
}

impl EditorError {
    /// Stable machine-readable code for hosts that forward errors to a UI.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TooFewVertices { .. } => "E_TOO_FEW_VERTICES",
            Self::NonFiniteCoordinate { .. } => "E_NON_FINITE_COORDINATE",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
        }
    }
}
