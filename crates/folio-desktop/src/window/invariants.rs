//! Window set invariant checks
//!
//! Used by tests and, in debug builds, by the controller after every
//! transition.
//!
//! # Invariants
//!
//! 1. **Unique Ids**: no two records share a window id
//! 2. **One Window Per Content**: no two records show the same catalog entry
//! 3. **Unique Z-Order**: stacking ranks are pairwise distinct
//! 4. **Counter Bound**: every rank is at most the set's top counter
//! 5. **Single Focus**: at most one record is active
//! 6. **Focus Is Top**: an active record holds the highest rank

use std::collections::HashSet;

use super::WindowSet;

/// An invariant violation with details
#[derive(Clone, Debug)]
pub struct InvariantViolation {
    /// Name of the violated invariant
    pub invariant: &'static str,
    /// Description of what went wrong
    pub description: String,
}

impl InvariantViolation {
    fn new(invariant: &'static str, description: String) -> Self {
        Self { invariant, description }
    }
}

/// Check all window set invariants.
///
/// Returns a list of violations (empty if all invariants hold).
pub fn check_invariants(set: &WindowSet) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    violations.extend(check_unique_ids(set));
    violations.extend(check_one_window_per_content(set));
    violations.extend(check_unique_z_order(set));
    violations.extend(check_counter_bound(set));
    violations.extend(check_focus(set));

    violations
}

fn check_unique_ids(set: &WindowSet) -> Vec<InvariantViolation> {
    let mut seen = HashSet::new();
    set.windows()
        .iter()
        .filter(|w| !seen.insert(w.id))
        .map(|w| InvariantViolation::new("unique_ids", format!("window id {} appears twice", w.id)))
        .collect()
}

fn check_one_window_per_content(set: &WindowSet) -> Vec<InvariantViolation> {
    let mut seen = HashSet::new();
    set.windows()
        .iter()
        .filter(|w| !seen.insert(&w.content))
        .map(|w| {
            InvariantViolation::new(
                "one_window_per_content",
                format!("content {} is open in more than one window", w.content),
            )
        })
        .collect()
}

fn check_unique_z_order(set: &WindowSet) -> Vec<InvariantViolation> {
    let mut seen = HashSet::new();
    set.windows()
        .iter()
        .filter(|w| !seen.insert(w.z_order))
        .map(|w| {
            InvariantViolation::new(
                "unique_z_order",
                format!("window {} reuses z-order {}", w.id, w.z_order),
            )
        })
        .collect()
}

fn check_counter_bound(set: &WindowSet) -> Vec<InvariantViolation> {
    set.windows()
        .iter()
        .filter(|w| w.z_order > set.top_z())
        .map(|w| {
            InvariantViolation::new(
                "counter_bound",
                format!("window {} has z-order {} above counter {}", w.id, w.z_order, set.top_z()),
            )
        })
        .collect()
}

fn check_focus(set: &WindowSet) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let active: Vec<_> = set.windows().iter().filter(|w| w.is_active).collect();

    if active.len() > 1 {
        violations.push(InvariantViolation::new(
            "single_focus",
            format!("{} windows are active", active.len()),
        ));
    }

    let top = set.windows().iter().map(|w| w.z_order).max();
    for w in active {
        if Some(w.z_order) != top {
            violations.push(InvariantViolation::new(
                "focus_is_top",
                format!("active window {} is not top-most (z {} vs {:?})", w.id, w.z_order, top),
            ));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ContentId};
    use crate::config::DesktopConfig;
    use crate::math::Vec2;
    use crate::source::{FixedPlacement, SequentialIds};
    use crate::window::Spawner;

    fn two_windows() -> WindowSet {
        let catalog = Catalog::default();
        let config = DesktopConfig::default();
        let mut ids = SequentialIds::default();
        let mut placement = FixedPlacement(Vec2::ZERO);
        let mut spawner = Spawner {
            catalog: &catalog,
            config: &config,
            ids: &mut ids,
            placement: &mut placement,
        };
        WindowSet::default()
            .open(&ContentId::from("1"), &mut spawner)
            .open(&ContentId::from("2"), &mut spawner)
    }

    #[test]
    fn test_clean_set_has_no_violations() {
        assert!(check_invariants(&WindowSet::default()).is_empty());
        assert!(check_invariants(&two_windows()).is_empty());
    }

    #[test]
    fn test_detects_focus_not_on_top() {
        // focus the lower window, then forge its rank back down
        let set = two_windows();
        let lower = set.windows()[0].id;
        let focused = set.focus(lower);

        let mut records = focused.windows().to_vec();
        records[0].z_order = 1;
        records[1].is_active = true;

        let forged = WindowSet::from_parts(records, focused.top_z());
        let names: Vec<_> = check_invariants(&forged).iter().map(|v| v.invariant).collect();
        assert!(names.contains(&"single_focus"));
        assert!(names.contains(&"focus_is_top"));
    }
}
