//! Error types for the desktop
//!
//! Runtime commands fail on a lookup miss or an unusable argument, and the
//! controller turns those into no-ops. Configuration loading has the richer failure set.

use crate::catalog::ContentId;
use crate::window::WindowId;

/// A command that could not be applied to the window set.
///
/// The presentation layer only references state it was handed, so lookup
/// misses are stale-reference races (e.g. a double click on a close button)
/// rather than bugs. The controller logs them and keeps the previous state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DesktopError {
    /// No open window has this id.
    #[error("window not found: {0}")]
    WindowNotFound(WindowId),

    /// The catalog has no entry with this id.
    #[error("unknown content: {0}")]
    UnknownContent(ContentId),

    /// A drag ended at a NaN or infinite offset.
    #[error("non-finite position for window {0}")]
    NonFinitePosition(WindowId),

    /// The z-order counter has no values left to hand out.
    #[error("z-order counter exhausted at {0}")]
    ZOrderExhausted(u32),
}

/// Errors raised while loading or validating static configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input is not valid JSON for the expected shape.
    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The catalog has no entries.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// Two catalog entries share an id.
    #[error("duplicate content id: {0}")]
    DuplicateContent(ContentId),

    /// A required text field is blank.
    #[error("empty {field} for content {id}")]
    EmptyField { id: ContentId, field: &'static str },

    /// A numeric setting is out of range.
    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
