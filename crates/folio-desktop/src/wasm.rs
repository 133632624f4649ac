//! WASM exports for the desktop
//!
//! This module provides wasm-bindgen exports for [`Desktop`], so the browser
//! shell can drive window state directly and read back a JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::catalog::{Catalog, ContentId};
use crate::config::DesktopConfig;
use crate::controller::Desktop;
use crate::math::Vec2;
use crate::shell::ClockFace;
use crate::window::Command;

/// Forwards `log` records to the browser console
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("{}", record.args()));
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&line),
            log::Level::Warn => web_sys::console::warn_1(&line),
            log::Level::Info => web_sys::console::info_1(&line),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; `level` is one of `error`..`trace`
#[wasm_bindgen]
pub fn init_logging(level: &str) {
    let filter = level.parse().unwrap_or(log::LevelFilter::Info);
    // a second call only changes the level
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(filter);
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Desktop controller for WASM - wraps Desktop with a JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    desktop: Desktop,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller from optional catalog and config JSON
    #[wasm_bindgen(constructor)]
    pub fn new(
        catalog_json: Option<String>,
        config_json: Option<String>,
    ) -> Result<DesktopController, JsValue> {
        let catalog = match catalog_json {
            Some(json) => Catalog::from_json(&json).map_err(js_error)?,
            None => Catalog::default(),
        };
        let config = match config_json {
            Some(json) => DesktopConfig::from_json(&json).map_err(js_error)?,
            None => DesktopConfig::default(),
        };
        Ok(Self {
            desktop: Desktop::new(catalog, config),
        })
    }

    /// Set the clock offset in minutes east of UTC
    ///
    /// JS `Date#getTimezoneOffset` is minutes west, so pass its negation.
    #[wasm_bindgen]
    pub fn set_utc_offset(&mut self, minutes: i32) {
        self.desktop.set_clock(ClockFace::with_offset(minutes));
    }

    /// Report the viewport size
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.desktop.resize(width, height);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open a catalog entry; returns the window id
    #[wasm_bindgen]
    pub fn open_content(&mut self, content_id: &str) -> Option<u64> {
        self.desktop.open(&ContentId::from(content_id))
    }

    #[wasm_bindgen]
    pub fn focus_window(&mut self, id: u64) -> bool {
        self.desktop.focus(id)
    }

    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) -> bool {
        self.desktop.close(id)
    }

    #[wasm_bindgen]
    pub fn minimize_window(&mut self, id: u64) -> bool {
        self.desktop.minimize(id)
    }

    #[wasm_bindgen]
    pub fn restore_window(&mut self, id: u64) -> bool {
        self.desktop.restore(id)
    }

    #[wasm_bindgen]
    pub fn maximize_window(&mut self, id: u64) -> bool {
        self.desktop.maximize(id)
    }

    /// Drag ended at offset `(x, y)` from the work-area centre
    #[wasm_bindgen]
    pub fn move_window(&mut self, id: u64, x: f32, y: f32) -> bool {
        self.desktop.move_window(id, Vec2::new(x, y))
    }

    /// Focus whatever window is under a screen point
    #[wasm_bindgen]
    pub fn click_at(&mut self, x: f32, y: f32) -> Option<u64> {
        self.desktop.click_at(Vec2::new(x, y))
    }

    /// Apply a JSON command such as `{"type":"focus","window":3}`
    #[wasm_bindgen]
    pub fn dispatch_json(&mut self, json: &str) -> Result<bool, JsValue> {
        let command: Command = serde_json::from_str(json).map_err(js_error)?;
        Ok(self.desktop.dispatch(&command))
    }

    /// Get the focused window ID
    #[wasm_bindgen]
    pub fn get_active_window(&self) -> Option<u64> {
        self.desktop.state().active().map(|w| w.id)
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Full desktop snapshot as JSON
    #[wasm_bindgen]
    pub fn get_view_json(&self) -> String {
        self.desktop.view(now_ms()).to_json()
    }

    /// Menu bar clock text
    #[wasm_bindgen]
    pub fn get_clock_text(&self) -> String {
        self.desktop.clock().format(now_ms())
    }

    /// Milliseconds until the clock text next changes
    #[wasm_bindgen]
    pub fn get_next_tick_ms(&self) -> u32 {
        self.desktop.clock().next_tick_in(now_ms()) as u32
    }
}
