//! Window record

use serde::{Deserialize, Serialize};
use crate::catalog::ContentId;
use crate::math::{Rect, Size, Vec2};
use super::WindowId;

/// One open window instance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    /// Unique identifier, fixed at creation
    pub id: WindowId,
    /// Catalog entry shown in the window, fixed at creation
    pub content: ContentId,
    /// Offset from the work-area centre
    pub position: Vec2,
    /// Size when not maximized
    pub size: Size,
    /// Stacking rank (higher = on top)
    pub z_order: u32,
    /// Whether this is the focused window
    pub is_active: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
}

impl WindowRecord {
    /// Whether the window is drawn at all
    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.is_minimized
    }

    /// Rectangle the window occupies inside `work_area`
    ///
    /// Normal windows are centred and then shifted by `position`; maximized
    /// windows fill the whole work area.
    pub fn frame(&self, work_area: Rect) -> Rect {
        if self.is_maximized {
            work_area
        } else {
            Rect::from_center_size(work_area.center() + self.position, self.size)
        }
    }
}
