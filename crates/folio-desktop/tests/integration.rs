//! Integration tests for the Desktop controller
//!
//! These tests verify the full desktop workflow including:
//! - The open / focus / minimize / reopen / close walkthrough
//! - Duplicate suppression for catalog entries
//! - Stale command handling
//! - JSON commands and the presentation snapshot
//! - Custom catalogs and config overrides

use folio_desktop::{
    Catalog, CatalogEntry, Command, ConfigError, ContentId, Desktop, DesktopConfig, Dock,
    DockItem, FixedPlacement, Rect, ScriptedPlacement, SequentialIds, Shell, Vec2,
    check_invariants,
};

fn desktop() -> Desktop<SequentialIds, FixedPlacement> {
    Desktop::with_sources(
        Catalog::default(),
        DesktopConfig::default(),
        SequentialIds::default(),
        FixedPlacement(Vec2::ZERO),
    )
}

fn a() -> ContentId {
    ContentId::from("1")
}

fn b() -> ContentId {
    ContentId::from("2")
}

// =============================================================================
// Window Lifecycle Tests
// =============================================================================

#[test]
fn test_open_focus_minimize_close_walkthrough() {
    let mut d = desktop();

    // Open A
    let id_a = d.open(&a()).unwrap();
    assert_eq!(d.state().len(), 1);
    let wa = d.state().get(id_a).unwrap();
    assert!(wa.is_active);
    assert_eq!(wa.z_order, 2);

    // Open B
    let id_b = d.open(&b()).unwrap();
    assert_eq!(d.state().len(), 2);
    let wb = d.state().get(id_b).unwrap();
    assert!(wb.is_active);
    assert_eq!(wb.z_order, 3);
    let wa = d.state().get(id_a).unwrap();
    assert!(!wa.is_active);
    assert_eq!(wa.z_order, 2);

    // Re-open A: focused, no third window
    assert_eq!(d.open(&a()), Some(id_a));
    assert_eq!(d.state().len(), 2);
    let wa = d.state().get(id_a).unwrap();
    assert!(wa.is_active);
    assert_eq!(wa.z_order, 4);
    assert!(!d.state().get(id_b).unwrap().is_active);

    // Minimize A: z-order and focus untouched
    assert!(d.minimize(id_a));
    let wa = d.state().get(id_a).unwrap();
    assert!(wa.is_minimized);
    assert!(wa.is_active);
    assert_eq!(wa.z_order, 4);

    // Re-open A: restored and raised
    d.open(&a());
    let wa = d.state().get(id_a).unwrap();
    assert!(!wa.is_minimized);
    assert!(wa.is_active);
    assert_eq!(wa.z_order, 5);

    // Close B
    assert!(d.close(id_b));
    assert_eq!(d.state().len(), 1);
    assert_eq!(d.state().windows()[0].id, id_a);
}

#[test]
fn test_maximize_round_trip_keeps_size() {
    let mut d = desktop();
    d.resize(1440.0, 900.0);
    let id = d.open(&a()).unwrap();
    let normal = d.state().get(id).unwrap().frame(d.work_area());

    d.maximize(id);
    let w = d.state().get(id).unwrap();
    assert!(w.is_maximized);
    assert_eq!(w.frame(d.work_area()), Rect::new(0.0, 24.0, 1440.0, 876.0));

    d.maximize(id);
    let w = d.state().get(id).unwrap();
    assert!(!w.is_maximized);
    assert_eq!(w.frame(d.work_area()), normal);
}

#[test]
fn test_close_active_leaves_nothing_focused() {
    let mut d = desktop();
    let id_a = d.open(&a()).unwrap();
    let id_b = d.open(&b()).unwrap();

    d.close(id_b);
    assert!(d.state().active().is_none());

    // next focus picks up normally
    d.focus(id_a);
    assert_eq!(d.state().active().map(|w| w.id), Some(id_a));
}

// =============================================================================
// Stale Reference Tests
// =============================================================================

#[test]
fn test_commands_on_closed_window_are_ignored() {
    let mut d = desktop();
    let id = d.open(&a()).unwrap();
    d.close(id);
    let snapshot = d.state().clone();

    assert!(!d.close(id));
    assert!(!d.focus(id));
    assert!(!d.minimize(id));
    assert!(!d.restore(id));
    assert!(!d.maximize(id));
    assert!(!d.move_window(id, Vec2::new(1.0, 1.0)));
    assert_eq!(d.state(), &snapshot);
}

#[test]
fn test_counter_is_never_reused() {
    let mut d = desktop();
    let id_a = d.open(&a()).unwrap();
    let id_b = d.open(&b()).unwrap();
    for _ in 0..5 {
        d.focus(id_a);
        d.focus(id_b);
    }
    let top = d.state().top_z();
    d.close(id_b);
    let id_b = d.open(&b()).unwrap();

    assert_eq!(d.state().get(id_b).unwrap().z_order, top + 1);
    assert!(check_invariants(d.state()).is_empty());
}

// =============================================================================
// Command & View Tests
// =============================================================================

#[test]
fn test_json_command_stream() {
    let mut d = Desktop::with_sources(
        Catalog::default(),
        DesktopConfig::default(),
        SequentialIds::default(),
        ScriptedPlacement::new(vec![Vec2::new(-40.0, 10.0), Vec2::new(25.0, 25.0)]),
    );

    let script = r#"[
        {"type": "open", "content": "1"},
        {"type": "open", "content": "3"},
        {"type": "move", "window": 1, "x": 900, "y": 120},
        {"type": "focus", "window": 1},
        {"type": "maximize", "window": 2},
        {"type": "close", "window": 42}
    ]"#;
    let commands: Vec<Command> = serde_json::from_str(script).unwrap();
    let applied: Vec<bool> = commands.iter().map(|c| d.dispatch(c)).collect();
    assert_eq!(applied, [true, true, true, true, true, false]);

    let w1 = d.state().get(1).unwrap();
    assert_eq!(w1.position, Vec2::new(500.0, 120.0));
    assert!(w1.is_active);
    assert_eq!(w1.z_order, 4);

    let w2 = d.state().get(2).unwrap();
    assert_eq!(w2.position, Vec2::new(25.0, 25.0));
    assert!(w2.is_maximized);
}

#[test]
fn test_view_reflects_custom_shell() {
    let shell = Shell {
        dock: Dock::new(vec![DockItem {
            name: "Mail".to_string(),
            icon: "mail".to_string(),
        }]),
        ..Default::default()
    };
    let mut d = desktop().with_shell(shell);
    d.open(&b());

    let view = d.view(45_296_000); // 12:34:56 UTC
    assert_eq!(view.menu_bar.clock.as_deref(), Some("12:34:56"));
    assert_eq!(view.dock.len(), 1);
    assert_eq!(view.dock[0].name, "Mail");
    assert_eq!(view.icons.len(), 3);
    assert_eq!(view.windows.len(), 1);
    assert_eq!(view.windows[0].title, "Proyectos");
    assert!(view.windows[0].is_active);
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn test_custom_catalog_and_config() {
    let catalog = Catalog::from_json(
        r#"[
            {"id": "cv", "name": "CV", "heading": "Curriculum", "body": "..."},
            {"id": "reel", "name": "Reel", "icon": "/reel.png", "heading": "Showreel"}
        ]"#,
    )
    .unwrap();
    let config = DesktopConfig::from_json(
        r#"{"defaultSize": {"width": 800, "height": 500}, "initialZ": 10}"#,
    )
    .unwrap();

    let mut d = Desktop::with_sources(catalog, config, SequentialIds::starting_at(100), FixedPlacement(Vec2::ZERO));
    let id = d.open(&ContentId::from("reel")).unwrap();
    assert_eq!(id, 100);

    let w = d.state().get(id).unwrap();
    assert_eq!(w.z_order, 11);
    assert!((w.size.width - 800.0).abs() < 0.001);

    // stock ids are not in this catalog
    assert!(d.open(&a()).is_none());
    assert_eq!(d.state().len(), 1);
}

#[test]
fn test_bad_catalog_is_rejected() {
    let err = Catalog::new(vec![
        CatalogEntry::folder("x", "One", "One", ""),
        CatalogEntry::folder("x", "Two", "Two", ""),
    ])
    .unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateContent(_)));
    assert_eq!(err.to_string(), "duplicate content id: x");
}
