//! # Timetable Core
//!
//! Domain types for weekly school timetables and the conflict checker that
//! guards them. A teacher's schedule lists the classes they teach; a class's
//! schedule lists the teachers who teach it. Both are the same [`Schedule`]
//! type, told apart by their [`Owner`].
//!
//! The crate performs no I/O. Callers parse input into [`ScheduleSlot`]s at the
//! boundary and ask [`find_conflicts`] (or [`Schedule::find_conflicts`]) which
//! existing slots a candidate would collide with.

pub mod conflict;
pub mod errors;
pub mod models;

pub use conflict::find_conflicts;
pub use errors::{SlotError, TimetableError, TimetableResult};
pub use models::schedule::{ConflictPolicy, InsertOutcome, Schedule};
pub use models::slot::{Occupant, Owner, OwnerKind, ScheduleSlot, SlotTiming};
pub use models::time::{TimeOfDay, TimeRange, Weekday};
