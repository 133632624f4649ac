//! Folio desktop
//!
//! Window manager state for a single-page faux desktop: a menu bar, folder
//! icons, stackable windows and a dock. The browser draws; this crate decides
//! which windows exist, which one is focused and how they stack.
//!
//! ## Architecture
//!
//! - [`math`]: geometry values (`Vec2`, `Size`, `Rect`)
//! - [`catalog`]: the static folder catalog
//! - [`config`]: window defaults and drag bounds
//! - [`source`]: injectable id and placement sources
//! - [`window`]: window records, the copy-on-write [`WindowSet`], commands
//! - [`shell`]: menu bar, clock and dock models
//! - [`Desktop`]: the controller owning the current state
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{Catalog, ContentId, Desktop, DesktopConfig};
//!
//! let mut desktop = Desktop::new(Catalog::default(), DesktopConfig::default());
//! let id = desktop.open(&ContentId::from("1")).unwrap();
//! desktop.minimize(id);
//!
//! // opening again restores and focuses instead of duplicating
//! assert_eq!(desktop.open(&ContentId::from("1")), Some(id));
//! assert_eq!(desktop.state().len(), 1);
//! ```

pub mod math;
pub mod catalog;
pub mod config;
pub mod source;
pub mod window;
pub mod shell;

mod error;
mod controller;
mod view;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2};
pub use catalog::{Catalog, CatalogEntry, ContentId};
pub use config::{DesktopConfig, OffsetRange};
pub use source::{FixedPlacement, IdSource, Placement, RandomPlacement, ScriptedPlacement, SequentialIds};
pub use window::{check_invariants, Command, InvariantViolation, Spawner, WindowId, WindowRecord, WindowSet};
pub use shell::{ClockFace, Dock, DockItem, MenuBar, Shell, StatusItem, CLOCK_TICK_MS};
pub use error::{ConfigError, DesktopError};
pub use controller::Desktop;
pub use view::{DesktopView, IconView, MenuBarView, WindowView};
