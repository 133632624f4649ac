//! Desktop controller
//!
//! Single owner of the current [`WindowSet`]. Each command is applied to the
//! current set and the result replaces it wholesale; a failed command keeps
//! the previous set.

use crate::catalog::{Catalog, ContentId};
use crate::config::DesktopConfig;
use crate::error::DesktopError;
use crate::math::{Rect, Size, Vec2};
use crate::shell::{ClockFace, Shell};
use crate::source::{IdSource, Placement, RandomPlacement, SequentialIds};
use crate::view::DesktopView;
use crate::window::{check_invariants, Command, Spawner, WindowId, WindowSet};

/// Screen size assumed until the presentation layer reports one
const DEFAULT_SCREEN: Size = Size::new(1920.0, 1080.0);

/// Desktop controller coordinating state, catalog and shell
///
/// Generic over its id and placement sources so tests can pin both.
pub struct Desktop<I = SequentialIds, P = RandomPlacement> {
    state: WindowSet,
    catalog: Catalog,
    config: DesktopConfig,
    shell: Shell,
    clock: ClockFace,
    screen: Size,
    ids: I,
    placement: P,
}

impl Default for Desktop {
    fn default() -> Self {
        Self::new(Catalog::default(), DesktopConfig::default())
    }
}

impl Desktop {
    /// Controller with sequential ids and random placement
    pub fn new(catalog: Catalog, config: DesktopConfig) -> Self {
        Self::with_sources(catalog, config, SequentialIds::default(), RandomPlacement)
    }
}

impl<I: IdSource, P: Placement> Desktop<I, P> {
    /// Controller with explicit id and placement sources
    ///
    /// An out-of-range config is still accepted: offsets are clamped with
    /// inverted ranges swapped, and an exhausted z counter turns raises into
    /// no-ops.
    pub fn with_sources(catalog: Catalog, config: DesktopConfig, ids: I, placement: P) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("[desktop] running with invalid config: {}", e);
        }
        log::info!(
            "[desktop] starting with {} catalog entries, z counter at {}",
            catalog.len(),
            config.initial_z
        );
        Self {
            state: WindowSet::new(config.initial_z),
            catalog,
            config,
            shell: Shell::default(),
            clock: ClockFace::default(),
            screen: DEFAULT_SCREEN,
            ids,
            placement,
        }
    }

    /// Replace the menu bar and dock
    pub fn with_shell(mut self, shell: Shell) -> Self {
        self.shell = shell;
        self
    }

    /// Set the clock's UTC offset
    pub fn set_clock(&mut self, clock: ClockFace) {
        self.clock = clock;
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// Current window set
    #[inline]
    pub fn state(&self) -> &WindowSet {
        &self.state
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    #[inline]
    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    #[inline]
    pub fn clock(&self) -> ClockFace {
        self.clock
    }

    /// Screen minus the menu bar
    pub fn work_area(&self) -> Rect {
        let top = self.config.menu_bar_height.min(self.screen.height);
        Rect::new(0.0, top, self.screen.width, self.screen.height - top)
    }

    /// Update the screen size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen = Size::new(width.max(0.0), height.max(0.0));
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Apply a command; returns whether the state changed
    ///
    /// Stale references are logged and ignored.
    pub fn dispatch(&mut self, command: &Command) -> bool {
        match self.try_dispatch(command) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("[desktop] ignoring {:?}: {}", command, e);
                false
            }
        }
    }

    /// Apply a command, reporting a stale reference to the caller
    pub fn try_dispatch(&mut self, command: &Command) -> Result<(), DesktopError> {
        let mut spawner = Spawner {
            catalog: &self.catalog,
            config: &self.config,
            ids: &mut self.ids,
            placement: &mut self.placement,
        };
        let next = self.state.apply(command, &mut spawner)?;

        if cfg!(debug_assertions) {
            for v in check_invariants(&next) {
                log::error!("[desktop] invariant {} violated: {}", v.invariant, v.description);
            }
        }

        log::debug!(
            "[desktop] {:?} -> {} windows, active {:?}",
            command,
            next.len(),
            next.active().map(|w| w.id)
        );
        self.state = next;
        Ok(())
    }

    /// Open (or bring back) a catalog entry; returns its window id
    pub fn open(&mut self, content: &ContentId) -> Option<WindowId> {
        self.dispatch(&Command::Open { content: content.clone() });
        self.state.find_by_content(content).map(|w| w.id)
    }

    pub fn focus(&mut self, window: WindowId) -> bool {
        self.dispatch(&Command::Focus { window })
    }

    pub fn close(&mut self, window: WindowId) -> bool {
        self.dispatch(&Command::Close { window })
    }

    pub fn minimize(&mut self, window: WindowId) -> bool {
        self.dispatch(&Command::Minimize { window })
    }

    pub fn restore(&mut self, window: WindowId) -> bool {
        self.dispatch(&Command::Restore { window })
    }

    pub fn maximize(&mut self, window: WindowId) -> bool {
        self.dispatch(&Command::Maximize { window })
    }

    /// Finish a drag at `offset`
    pub fn move_window(&mut self, window: WindowId, offset: Vec2) -> bool {
        self.dispatch(&Command::Move {
            window,
            x: offset.x,
            y: offset.y,
        })
    }

    /// Route a click at a screen point: focus the window under it
    pub fn click_at(&mut self, point: Vec2) -> Option<WindowId> {
        let id = self.state.window_at(point, self.work_area())?.id;
        self.focus(id);
        Some(id)
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Snapshot for the presentation layer at wall-clock time `unix_ms`
    pub fn view(&self, unix_ms: u64) -> DesktopView {
        DesktopView::build(
            &self.state,
            &self.catalog,
            &self.shell,
            self.clock.format(unix_ms),
            self.work_area(),
        )
    }
}
