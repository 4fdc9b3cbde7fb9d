//! Detection of timetable collisions.

use crate::models::slot::{ScheduleSlot, SlotTiming};

/// Returns the slots of `existing` that `candidate` would collide with, in
/// their original order. An empty result means the candidate fits.
///
/// Only slots on the candidate's day are considered; back-to-back slots
/// (one ending exactly when the other starts) do not collide.
pub fn find_conflicts<'a>(
    existing: &'a [ScheduleSlot],
    candidate: &SlotTiming,
) -> Vec<&'a ScheduleSlot> {
    let conflicts: Vec<&ScheduleSlot> = existing
        .iter()
        .filter(|slot| candidate.conflicts_with(slot.timing()))
        .collect();

    tracing::debug!(
        "Checked {} against {} slots: {} conflicts",
        candidate,
        existing.len(),
        conflicts.len()
    );

    conflicts
}
