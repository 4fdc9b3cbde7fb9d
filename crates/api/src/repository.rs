//! # Schedule Repository
//!
//! Source of the weekly schedules the handlers check candidates against.
//! [`InMemoryScheduleRepository`] keeps teacher and class schedules in memory;
//! a slot accepted into one owner's schedule is mirrored into the schedule of
//! the slot's occupant, so a teacher's lesson with class "Two" also shows up
//! in class "Two"'s timetable. Conflicts are checked on both sides: a lesson
//! free for the teacher but colliding for the class is still a conflict.

use std::collections::HashMap;

use async_trait::async_trait;
use timetable_core::{
    ConflictPolicy, InsertOutcome, Owner, OwnerKind, Schedule, ScheduleSlot, TimetableResult,
};
use tokio::sync::RwLock;
use tracing::{debug, warn};

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Identifiers of every owner of `kind`, sorted.
    async fn list_owners(&self, kind: OwnerKind) -> TimetableResult<Vec<String>>;

    async fn get_schedule(&self, owner: &Owner) -> TimetableResult<Option<Schedule>>;

    /// Inserts `slot` into `owner`'s schedule and its mirror into the
    /// occupant's. Conflicts on either side are reported together. Returns
    /// `None` when the owner is unknown.
    async fn add_slot(
        &self,
        owner: &Owner,
        slot: ScheduleSlot,
        policy: ConflictPolicy,
    ) -> TimetableResult<Option<InsertOutcome>>;
}

#[derive(Debug, Default)]
pub struct InMemoryScheduleRepository {
    schedules: RwLock<HashMap<Owner, Schedule>>,
}

impl InMemoryScheduleRepository {
    pub fn new(schedules: impl IntoIterator<Item = Schedule>) -> Self {
        let schedules = schedules
            .into_iter()
            .map(|schedule| (schedule.owner().clone(), schedule))
            .collect();
        Self {
            schedules: RwLock::new(schedules),
        }
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryScheduleRepository {
    async fn list_owners(&self, kind: OwnerKind) -> TimetableResult<Vec<String>> {
        let schedules = self.schedules.read().await;
        let mut owners: Vec<String> = schedules
            .keys()
            .filter(|owner| owner.kind() == kind)
            .map(|owner| owner.id().to_string())
            .collect();
        owners.sort();
        Ok(owners)
    }

    async fn get_schedule(&self, owner: &Owner) -> TimetableResult<Option<Schedule>> {
        debug!("Getting schedule for {}", owner);
        let schedules = self.schedules.read().await;
        Ok(schedules.get(owner).cloned())
    }

    async fn add_slot(
        &self,
        owner: &Owner,
        slot: ScheduleSlot,
        policy: ConflictPolicy,
    ) -> TimetableResult<Option<InsertOutcome>> {
        let mut schedules = self.schedules.write().await;

        let Some(schedule) = schedules.get(owner) else {
            debug!("Schedule not found: {}", owner);
            return Ok(None);
        };
        owner.accepts(slot.occupant())?;

        let mirrored = slot.mirrored_for(owner);
        let counterpart = Owner::counterpart(slot.occupant());

        // both sides are checked before either is touched
        let mut conflicts: Vec<ScheduleSlot> =
            schedule.find_conflicts(&slot).into_iter().cloned().collect();
        if let Some(other) = schedules.get(&counterpart) {
            conflicts.extend(other.find_conflicts(&mirrored).into_iter().cloned());
        }

        if !conflicts.is_empty() && policy == ConflictPolicy::Reject {
            debug!(
                "Rejected {} for {}: {} conflicting slots",
                slot,
                owner,
                conflicts.len()
            );
            return Ok(Some(InsertOutcome::Rejected { conflicts }));
        }

        if let Some(schedule) = schedules.get_mut(owner) {
            schedule.insert(slot, ConflictPolicy::Override)?;
        }
        schedules
            .entry(counterpart.clone())
            .or_insert_with(|| Schedule::new(counterpart.clone()))
            .insert(mirrored, ConflictPolicy::Override)?;

        if !conflicts.is_empty() {
            warn!(
                "Slot added to {} and {} over {} conflicting slots",
                owner,
                counterpart,
                conflicts.len()
            );
        }

        Ok(Some(InsertOutcome::Inserted {
            overridden: conflicts,
        }))
    }
}
