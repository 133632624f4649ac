//! Bottom dock

use serde::{Deserialize, Serialize};

/// A decorative dock tile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DockItem {
    pub name: String,
    /// Icon reference understood by the presentation layer
    pub icon: String,
}

impl DockItem {
    fn new(name: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// Ordered dock tiles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dock {
    items: Vec<DockItem>,
}

impl Default for Dock {
    fn default() -> Self {
        Self {
            items: vec![
                DockItem::new("Finder", "globe"),
                DockItem::new("Terminal", "terminal"),
                DockItem::new("Settings", "settings"),
                DockItem::new("Trash", "trash-2"),
            ],
        }
    }
}

impl Dock {
    /// Dock with custom tiles
    pub fn new(items: Vec<DockItem>) -> Self {
        Self { items }
    }

    #[inline]
    pub fn items(&self) -> &[DockItem] {
        &self.items
    }
}
