use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SlotError;
use crate::models::time::{TimeRange, Weekday};

/// When a slot takes place: one day and a time range on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotTiming {
    pub day: Weekday,
    #[serde(flatten)]
    pub range: TimeRange,
}

impl SlotTiming {
    pub fn new(day: Weekday, range: TimeRange) -> Self {
        Self { day, range }
    }

    /// Parses form input: a day name and two `HH:MM` strings.
    pub fn parse(day: &str, start: &str, end: &str) -> Result<Self, SlotError> {
        Ok(Self {
            day: day.parse()?,
            range: TimeRange::parse(start, end)?,
        })
    }

    /// Whether `self`, as the candidate, collides with `existing`.
    pub fn conflicts_with(&self, existing: &SlotTiming) -> bool {
        self.day == existing.day && self.range.overlaps(&existing.range)
    }
}

impl fmt::Display for SlotTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.range)
    }
}

/// The counterpart filling a slot. A teacher's slot is occupied by a class,
/// a class's slot by a teacher.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occupant {
    Class(String),
    Teacher(String),
}

impl Occupant {
    pub fn id(&self) -> &str {
        match self {
            Occupant::Class(id) | Occupant::Teacher(id) => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Occupant::Class(_) => "class",
            Occupant::Teacher(_) => "teacher",
        }
    }
}

/// The two kinds of schedule owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerKind {
    Teacher,
    Class,
}

impl OwnerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OwnerKind::Teacher => "teacher",
            OwnerKind::Class => "class",
        }
    }
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whose weekly schedule a slot belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Owner {
    Teacher(String),
    Class(String),
}

impl Owner {
    pub fn new(kind: OwnerKind, id: impl Into<String>) -> Self {
        match kind {
            OwnerKind::Teacher => Owner::Teacher(id.into()),
            OwnerKind::Class => Owner::Class(id.into()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Owner::Teacher(id) | Owner::Class(id) => id,
        }
    }

    pub fn kind(&self) -> OwnerKind {
        match self {
            Owner::Teacher(_) => OwnerKind::Teacher,
            Owner::Class(_) => OwnerKind::Class,
        }
    }

    /// Wraps a counterpart id in the occupant variant this owner accepts.
    pub fn occupant(&self, id: impl Into<String>) -> Occupant {
        match self {
            Owner::Teacher(_) => Occupant::Class(id.into()),
            Owner::Class(_) => Occupant::Teacher(id.into()),
        }
    }

    /// Checks that `occupant` is the opposite kind to this owner.
    pub fn accepts(&self, occupant: &Occupant) -> Result<(), SlotError> {
        match (self, occupant) {
            (Owner::Teacher(_), Occupant::Class(_)) | (Owner::Class(_), Occupant::Teacher(_)) => {
                Ok(())
            }
            _ => Err(SlotError::OccupantMismatch {
                owner: self.kind().as_str(),
                occupant: occupant.kind(),
            }),
        }
    }

    /// The owner on the other side of a slot held by this owner.
    pub fn counterpart(occupant: &Occupant) -> Owner {
        match occupant {
            Occupant::Class(id) => Owner::Class(id.clone()),
            Occupant::Teacher(id) => Owner::Teacher(id.clone()),
        }
    }

    /// This owner as it appears inside the counterpart's slots.
    pub fn as_occupant(&self) -> Occupant {
        match self {
            Owner::Teacher(id) => Occupant::Teacher(id.clone()),
            Owner::Class(id) => Occupant::Class(id.clone()),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.id())
    }
}

/// One scheduled lesson in an owner's week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleSlot {
    #[serde(flatten)]
    timing: SlotTiming,
    subject: String,
    #[serde(flatten)]
    occupant: Occupant,
}

impl ScheduleSlot {
    pub fn new(timing: SlotTiming, subject: impl Into<String>, occupant: Occupant) -> Self {
        Self {
            timing,
            subject: subject.into(),
            occupant,
        }
    }

    pub fn timing(&self) -> &SlotTiming {
        &self.timing
    }

    pub fn day(&self) -> Weekday {
        self.timing.day
    }

    pub fn range(&self) -> TimeRange {
        self.timing.range
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn occupant(&self) -> &Occupant {
        &self.occupant
    }

    /// The same lesson as seen from the occupant's schedule, where `owner`
    /// becomes the occupant.
    pub fn mirrored_for(&self, owner: &Owner) -> ScheduleSlot {
        ScheduleSlot {
            timing: self.timing,
            subject: self.subject.clone(),
            occupant: owner.as_occupant(),
        }
    }
}

impl fmt::Display for ScheduleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({} {})",
            self.timing,
            self.subject,
            self.occupant.kind(),
            self.occupant.id()
        )
    }
}
