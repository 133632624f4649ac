//! Top menu bar

use serde::{Deserialize, Serialize};

/// Right-hand status area entries, drawn left to right
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusItem {
    Battery,
    Wifi,
    Clock,
}

/// Menu bar contents
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuBar {
    /// Bold name of the frontmost application
    pub app_name: String,
    /// Menu titles after the application name
    pub menus: Vec<String>,
    pub status: Vec<StatusItem>,
}

impl Default for MenuBar {
    fn default() -> Self {
        Self {
            app_name: "Finder".to_string(),
            menus: ["Archivo", "Editar", "Ver", "Ir", "Ventana", "Ayuda"]
                .into_iter()
                .map(String::from)
                .collect(),
            status: vec![StatusItem::Battery, StatusItem::Wifi, StatusItem::Clock],
        }
    }
}

impl MenuBar {
    /// Whether the clock is shown
    pub fn has_clock(&self) -> bool {
        self.status.contains(&StatusItem::Clock)
    }
}
