//! Catalog entry definition

use serde::{Deserialize, Serialize};
use super::ContentId;

/// Icon used by every stock folder
pub const FOLDER_ICON: &str = "/icons8-carpeta-mac-96.png";

/// One openable folder: desktop icon label plus the window payload
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Stable identifier
    pub id: ContentId,
    /// Label under the desktop icon and in the window title bar
    pub name: String,
    /// Icon reference (URL or asset path)
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Heading rendered inside the window
    pub heading: String,
    /// Body text rendered inside the window
    #[serde(default)]
    pub body: String,
}

fn default_icon() -> String {
    FOLDER_ICON.to_string()
}

impl CatalogEntry {
    /// Create a folder entry with the stock icon
    pub fn folder(id: &str, name: &str, heading: &str, body: &str) -> Self {
        Self {
            id: ContentId::new(id),
            name: name.to_string(),
            icon: default_icon(),
            heading: heading.to_string(),
            body: body.to_string(),
        }
    }
}
