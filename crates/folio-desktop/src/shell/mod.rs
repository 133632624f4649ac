//! Shell chrome models: menu bar, clock and dock
//!
//! Static data the presentation layer draws around the windows.

mod menu_bar;
mod clock;
mod dock;

pub use menu_bar::{MenuBar, StatusItem};
pub use clock::{ClockFace, CLOCK_TICK_MS};
pub use dock::{Dock, DockItem};

use serde::{Deserialize, Serialize};

/// Menu bar and dock together
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Shell {
    pub menu_bar: MenuBar,
    pub dock: Dock,
}
