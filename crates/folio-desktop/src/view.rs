//! Read-only snapshot handed to the presentation layer

use serde::Serialize;
use crate::catalog::{Catalog, ContentId};
use crate::math::{Rect, Size, Vec2};
use crate::shell::{DockItem, Shell, StatusItem};
use crate::window::{WindowId, WindowSet};

/// Menu bar as drawn
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuBarView {
    pub app_name: String,
    pub menus: Vec<String>,
    pub status: Vec<StatusItem>,
    /// Formatted time, present when the clock status item is enabled
    pub clock: Option<String>,
}

/// A desktop icon
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconView {
    pub content_id: ContentId,
    pub name: String,
    pub icon: String,
}

/// A window as drawn
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    pub content_id: ContentId,
    /// Title bar text
    pub title: String,
    pub heading: String,
    pub body: String,
    pub position: Vec2,
    pub size: Size,
    /// Screen rectangle after maximize is applied
    pub frame: Rect,
    pub z_order: u32,
    pub is_active: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
}

/// Everything the presentation layer needs for one frame
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopView {
    pub menu_bar: MenuBarView,
    pub icons: Vec<IconView>,
    /// Windows in creation order; stacking comes from `z_order`
    pub windows: Vec<WindowView>,
    pub dock: Vec<DockItem>,
    pub work_area: Rect,
}

impl DesktopView {
    pub(crate) fn build(
        state: &WindowSet,
        catalog: &Catalog,
        shell: &Shell,
        clock_text: String,
        work_area: Rect,
    ) -> Self {
        let menu_bar = MenuBarView {
            app_name: shell.menu_bar.app_name.clone(),
            menus: shell.menu_bar.menus.clone(),
            status: shell.menu_bar.status.clone(),
            clock: shell.menu_bar.has_clock().then_some(clock_text),
        };

        let icons = catalog
            .entries()
            .iter()
            .map(|e| IconView {
                content_id: e.id.clone(),
                name: e.name.clone(),
                icon: e.icon.clone(),
            })
            .collect();

        // records whose catalog entry is gone are skipped
        let windows = state
            .windows()
            .iter()
            .filter_map(|w| {
                let entry = catalog.get(&w.content)?;
                Some(WindowView {
                    id: w.id,
                    content_id: w.content.clone(),
                    title: entry.name.clone(),
                    heading: entry.heading.clone(),
                    body: entry.body.clone(),
                    position: w.position,
                    size: w.size,
                    frame: w.frame(work_area),
                    z_order: w.z_order,
                    is_active: w.is_active,
                    is_minimized: w.is_minimized,
                    is_maximized: w.is_maximized,
                })
            })
            .collect();

        Self {
            menu_bar,
            icons,
            windows,
            dock: shell.dock.items().to_vec(),
            work_area,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
