use serde::Serialize;

use crate::conflict::find_conflicts;
use crate::errors::SlotError;
use crate::models::slot::{Owner, ScheduleSlot};
use crate::models::time::Weekday;

/// What to do when a new slot collides with existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Leave the schedule untouched and report the collisions.
    #[default]
    Reject,
    /// Insert anyway; the collisions are reported as overridden.
    Override,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { overridden: Vec<ScheduleSlot> },
    Rejected { conflicts: Vec<ScheduleSlot> },
}

/// A weekly timetable belonging to one teacher or one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    owner: Owner,
    slots: Vec<ScheduleSlot>,
}

impl Schedule {
    pub fn new(owner: Owner) -> Self {
        Self {
            owner,
            slots: Vec::new(),
        }
    }

    /// Builds a schedule from seed data, rejecting slots of the wrong
    /// occupant kind and any pair of slots that collide.
    pub fn from_slots(owner: Owner, slots: Vec<ScheduleSlot>) -> Result<Self, SlotError> {
        let mut schedule = Schedule::new(owner);
        for slot in slots {
            schedule.owner.accepts(slot.occupant())?;
            if let Some(existing) = schedule.find_conflicts(&slot).first() {
                return Err(SlotError::Overlap {
                    day: slot.day(),
                    first: existing.to_string(),
                    second: slot.to_string(),
                });
            }
            schedule.slots.push(slot);
        }
        Ok(schedule)
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn slots(&self) -> &[ScheduleSlot] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleSlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Existing slots that `candidate` would collide with.
    pub fn find_conflicts(&self, candidate: &ScheduleSlot) -> Vec<&ScheduleSlot> {
        find_conflicts(&self.slots, candidate.timing())
    }

    /// Adds `slot` unless it collides and `policy` says to reject.
    pub fn insert(
        &mut self,
        slot: ScheduleSlot,
        policy: ConflictPolicy,
    ) -> Result<InsertOutcome, SlotError> {
        self.owner.accepts(slot.occupant())?;

        let conflicts: Vec<ScheduleSlot> =
            self.find_conflicts(&slot).into_iter().cloned().collect();

        if !conflicts.is_empty() && policy == ConflictPolicy::Reject {
            return Ok(InsertOutcome::Rejected { conflicts });
        }

        self.slots.push(slot);
        Ok(InsertOutcome::Inserted {
            overridden: conflicts,
        })
    }

    /// The slots on `day`, earliest first.
    pub fn day(&self, day: Weekday) -> Vec<&ScheduleSlot> {
        let mut slots: Vec<&ScheduleSlot> =
            self.slots.iter().filter(|slot| slot.day() == day).collect();
        slots.sort_by_key(|slot| slot.range().start());
        slots
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a ScheduleSlot;
    type IntoIter = std::slice::Iter<'a, ScheduleSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
