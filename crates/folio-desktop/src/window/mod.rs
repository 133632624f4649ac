//! Window management module
//!
//! Window records, the copy-on-write window set, and the commands that
//! drive it.

mod record;
mod set;
mod command;
mod invariants;

pub use record::WindowRecord;
pub use set::{Spawner, WindowSet};
pub use command::Command;
pub use invariants::{check_invariants, InvariantViolation};

/// Unique window identifier
pub type WindowId = u64;
