//! Copy-on-write window set
//!
//! Every operation borrows the current set and returns the next one; the
//! receiver is never mutated. A command that names a missing window leaves
//! the set unchanged. The `try_*` variants report the miss, the plain
//! variants swallow it.

use crate::catalog::{Catalog, ContentId};
use crate::config::{DesktopConfig, OffsetRange};
use crate::error::DesktopError;
use crate::math::{Rect, Vec2};
use crate::source::{IdSource, Placement};
use super::{Command, WindowId, WindowRecord};

/// Everything `open` needs beyond the set itself
pub struct Spawner<'a> {
    pub catalog: &'a Catalog,
    pub config: &'a DesktopConfig,
    pub ids: &'a mut dyn IdSource,
    pub placement: &'a mut dyn Placement,
}

/// The collection of open windows plus the z-order counter
#[derive(Clone, Debug, PartialEq)]
pub struct WindowSet {
    /// Records in creation order
    windows: Vec<WindowRecord>,
    /// Highest z-order handed out so far; never decreases
    top_z: u32,
}

impl Default for WindowSet {
    fn default() -> Self {
        Self::new(DesktopConfig::default().initial_z)
    }
}

impl WindowSet {
    /// Empty set whose first window will get `initial_z + 1`
    pub fn new(initial_z: u32) -> Self {
        Self {
            windows: Vec::new(),
            top_z: initial_z,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All records in creation order
    #[inline]
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Window showing a given catalog entry
    pub fn find_by_content(&self, content: &ContentId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.content == content)
    }

    /// The focused window, if any
    pub fn active(&self) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.is_active)
    }

    /// Highest z-order handed out so far
    #[inline]
    pub fn top_z(&self) -> u32 {
        self.top_z
    }

    /// Number of open windows
    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Visible windows, bottom-most first
    pub fn paint_order(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<_> = self.windows.iter().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| w.z_order);
        visible
    }

    /// Top-most visible window whose frame contains `point`
    pub fn window_at(&self, point: Vec2, work_area: Rect) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| w.is_visible() && w.frame(work_area).contains(point))
            .max_by_key(|w| w.z_order)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Open a catalog entry, or bring its existing window back
    pub fn try_open(&self, content: &ContentId, spawner: &mut Spawner<'_>) -> Result<Self, DesktopError> {
        if let Some(existing) = self.find_by_content(content) {
            let id = existing.id;
            return self.try_restore(id)?.try_focus(id);
        }

        if !spawner.catalog.contains(content) {
            return Err(DesktopError::UnknownContent(content.clone()));
        }

        let z_order = self.next_z()?;
        let record = WindowRecord {
            id: spawner.ids.next_id(),
            content: content.clone(),
            position: spawner.placement.place(&spawner.config.spawn_range),
            size: spawner.config.default_size,
            z_order,
            is_active: true,
            is_minimized: false,
            is_maximized: false,
        };

        let mut windows: Vec<_> = self
            .windows
            .iter()
            .map(|w| WindowRecord { is_active: false, ..w.clone() })
            .collect();
        windows.push(record);

        Ok(Self { windows, top_z: z_order })
    }

    /// Raise a window to the top and make it the only active one
    pub fn try_focus(&self, id: WindowId) -> Result<Self, DesktopError> {
        self.ensure(id)?;
        let z_order = self.next_z()?;
        let windows = self
            .windows
            .iter()
            .map(|w| {
                if w.id == id {
                    WindowRecord { is_active: true, z_order, ..w.clone() }
                } else {
                    WindowRecord { is_active: false, ..w.clone() }
                }
            })
            .collect();
        Ok(Self { windows, top_z: z_order })
    }

    /// Remove a window; no other window takes over focus
    pub fn try_close(&self, id: WindowId) -> Result<Self, DesktopError> {
        self.ensure(id)?;
        Ok(Self {
            windows: self.windows.iter().filter(|w| w.id != id).cloned().collect(),
            top_z: self.top_z,
        })
    }

    /// Hide a window without touching focus or stacking
    pub fn try_minimize(&self, id: WindowId) -> Result<Self, DesktopError> {
        self.with_window(id, |w| w.is_minimized = true)
    }

    /// Un-hide a minimized window
    pub fn try_restore(&self, id: WindowId) -> Result<Self, DesktopError> {
        self.with_window(id, |w| w.is_minimized = false)
    }

    /// Toggle the maximized flag
    pub fn try_maximize(&self, id: WindowId) -> Result<Self, DesktopError> {
        self.with_window(id, |w| w.is_maximized = !w.is_maximized)
    }

    /// Move a window to a new offset, clamped to `range`
    ///
    /// Maximized windows are pinned to the work area and ignore moves. A NaN
    /// or infinite offset is rejected and leaves the set unchanged.
    pub fn try_move_to(&self, id: WindowId, position: Vec2, range: &OffsetRange) -> Result<Self, DesktopError> {
        self.ensure(id)?;
        if !(position.x.is_finite() && position.y.is_finite()) {
            return Err(DesktopError::NonFinitePosition(id));
        }
        self.with_window(id, |w| {
            if !w.is_maximized {
                w.position = range.clamp(position);
            }
        })
    }

    /// Apply a command, reporting a lookup miss
    pub fn apply(&self, command: &Command, spawner: &mut Spawner<'_>) -> Result<Self, DesktopError> {
        match command {
            Command::Open { content } => self.try_open(content, spawner),
            Command::Focus { window } => self.try_focus(*window),
            Command::Close { window } => self.try_close(*window),
            Command::Minimize { window } => self.try_minimize(*window),
            Command::Restore { window } => self.try_restore(*window),
            Command::Maximize { window } => self.try_maximize(*window),
            Command::Move { window, x, y } => {
                self.try_move_to(*window, Vec2::new(*x, *y), &spawner.config.drag_range)
            }
        }
    }

    // Infallible forms: a miss returns an unchanged copy.

    pub fn open(&self, content: &ContentId, spawner: &mut Spawner<'_>) -> Self {
        self.try_open(content, spawner).unwrap_or_else(|_| self.clone())
    }

    pub fn focus(&self, id: WindowId) -> Self {
        self.try_focus(id).unwrap_or_else(|_| self.clone())
    }

    pub fn close(&self, id: WindowId) -> Self {
        self.try_close(id).unwrap_or_else(|_| self.clone())
    }

    pub fn minimize(&self, id: WindowId) -> Self {
        self.try_minimize(id).unwrap_or_else(|_| self.clone())
    }

    pub fn restore(&self, id: WindowId) -> Self {
        self.try_restore(id).unwrap_or_else(|_| self.clone())
    }

    pub fn maximize(&self, id: WindowId) -> Self {
        self.try_maximize(id).unwrap_or_else(|_| self.clone())
    }

    pub fn move_to(&self, id: WindowId, position: Vec2, range: &OffsetRange) -> Self {
        self.try_move_to(id, position, range).unwrap_or_else(|_| self.clone())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(windows: Vec<WindowRecord>, top_z: u32) -> Self {
        Self { windows, top_z }
    }

    /// Z-order for the next raise
    fn next_z(&self) -> Result<u32, DesktopError> {
        self.top_z
            .checked_add(1)
            .ok_or(DesktopError::ZOrderExhausted(self.top_z))
    }

    fn ensure(&self, id: WindowId) -> Result<(), DesktopError> {
        if self.get(id).is_some() {
            Ok(())
        } else {
            Err(DesktopError::WindowNotFound(id))
        }
    }

    /// Copy the set with one record edited in place
    fn with_window(&self, id: WindowId, edit: impl FnOnce(&mut WindowRecord)) -> Result<Self, DesktopError> {
        let mut next = self.clone();
        let record = next
            .windows
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or(DesktopError::WindowNotFound(id))?;
        edit(record);
        Ok(next)
    }
}
