//! Commands forwarded by the presentation layer

use serde::{Deserialize, Serialize};
use crate::catalog::ContentId;
use super::WindowId;

/// A discrete user command
///
/// Serialized with a `type` tag, e.g. `{"type": "focus", "window": 3}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Command {
    /// Desktop icon clicked
    Open { content: ContentId },
    /// Window body clicked
    Focus { window: WindowId },
    /// Red traffic light
    Close { window: WindowId },
    /// Yellow traffic light
    Minimize { window: WindowId },
    Restore { window: WindowId },
    /// Green traffic light (toggles)
    Maximize { window: WindowId },
    /// Drag ended at offset `(x, y)`
    Move { window: WindowId, x: f32, y: f32 },
}
