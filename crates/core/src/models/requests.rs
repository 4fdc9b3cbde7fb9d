use serde::{Deserialize, Serialize};

use crate::models::slot::{OwnerKind, ScheduleSlot};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnersResponse {
    pub kind: OwnerKind,
    pub owners: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleQuery {
    pub day: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    pub id: String,
    pub kind: OwnerKind,
    pub slots: Vec<ScheduleSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConflictsRequest {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConflictsResponse {
    pub has_conflict: bool,
    pub conflicts: Vec<ScheduleSlot>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSlotRequest {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub subject: String,
    /// Class id when adding to a teacher, teacher id when adding to a class.
    pub occupant: String,
    #[serde(rename = "override", default)]
    pub allow_conflicts: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddSlotResponse {
    pub slot: ScheduleSlot,
    pub overridden: Vec<ScheduleSlot>,
}
