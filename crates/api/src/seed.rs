//! Static timetable data the repository starts from.
//!
//! Seed data lists teacher schedules only. Class schedules are derived from
//! them, so the two sides always agree.

use std::collections::BTreeMap;
use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use timetable_core::{Owner, Schedule, ScheduleSlot, SlotError, SlotTiming};

/// Per-teacher lookup table keyed by teacher id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    pub teachers: BTreeMap<String, Vec<ScheduleSlot>>,
}

// (teacher, day, start, end, subject, class)
const BUILTIN: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("T001", "monday", "08:00", "09:00", "Mathematics", "Two"),
    ("T001", "monday", "09:00", "10:00", "Mathematics", "Three"),
    ("T001", "tuesday", "10:00", "11:00", "Mathematics", "One"),
    ("T001", "thursday", "08:00", "09:00", "Mathematics", "Two"),
    ("T002", "monday", "08:00", "09:00", "English", "One"),
    ("T002", "wednesday", "11:00", "12:00", "English", "Two"),
    ("T002", "friday", "09:00", "10:30", "Literature", "Three"),
    ("T003", "tuesday", "08:00", "09:00", "Science", "Two"),
    ("T003", "tuesday", "13:00", "14:00", "Science", "One"),
    ("T003", "saturday", "09:00", "11:00", "Laboratory", "Three"),
];

impl SeedData {
    /// The timetable shipped with the server.
    pub fn builtin() -> Result<Self, SlotError> {
        let mut teachers: BTreeMap<String, Vec<ScheduleSlot>> = BTreeMap::new();
        for &(teacher, day, start, end, subject, class) in BUILTIN {
            let slot = ScheduleSlot::new(
                SlotTiming::parse(day, start, end)?,
                subject,
                Owner::Teacher(teacher.to_string()).occupant(class),
            );
            teachers.entry(teacher.to_string()).or_default().push(slot);
        }
        Ok(Self { teachers })
    }

    /// Reads seed data from a JSON file shaped like
    /// `{"teachers": {"T001": [slot, ...]}}`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read seed file {}", path.display()))?;
        serde_json::from_str(&raw)
            .wrap_err_with(|| format!("Failed to parse seed file {}", path.display()))
    }

    /// Builds validated teacher schedules and the class schedules mirrored
    /// from them.
    pub fn into_schedules(self) -> Result<Vec<Schedule>, SlotError> {
        let mut class_slots: BTreeMap<Owner, Vec<ScheduleSlot>> = BTreeMap::new();
        let mut schedules = Vec::with_capacity(self.teachers.len());

        for (id, slots) in self.teachers {
            let owner = Owner::Teacher(id);
            let schedule = Schedule::from_slots(owner.clone(), slots)?;
            for slot in &schedule {
                class_slots
                    .entry(Owner::counterpart(slot.occupant()))
                    .or_default()
                    .push(slot.mirrored_for(&owner));
            }
            schedules.push(schedule);
        }

        for (owner, slots) in class_slots {
            schedules.push(Schedule::from_slots(owner, slots)?);
        }

        tracing::debug!("Seeded {} schedules", schedules.len());
        Ok(schedules)
    }
}
