mod test_utils;

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use mockall::{mock, predicate};
use pretty_assertions::assert_eq;
use serde_json::json;
use timetable_api::repository::{InMemoryScheduleRepository, ScheduleRepository};
use timetable_api::seed::SeedData;
use timetable_core::{
    ConflictPolicy, InsertOutcome, Occupant, Owner, OwnerKind, Schedule, ScheduleSlot,
    SlotTiming, TimetableError, TimetableResult,
};

use test_utils::server_with;

mock! {
    pub Repository {}

    #[async_trait]
    impl ScheduleRepository for Repository {
        async fn list_owners(&self, kind: OwnerKind) -> TimetableResult<Vec<String>>;
        async fn get_schedule(&self, owner: &Owner) -> TimetableResult<Option<Schedule>>;
        async fn add_slot(
            &self,
            owner: &Owner,
            slot: ScheduleSlot,
            policy: ConflictPolicy,
        ) -> TimetableResult<Option<InsertOutcome>>;
    }
}

fn lesson(day: &str, start: &str, end: &str, class: &str) -> ScheduleSlot {
    ScheduleSlot::new(
        SlotTiming::parse(day, start, end).unwrap(),
        "History",
        Occupant::Class(class.to_string()),
    )
}

fn repository() -> InMemoryScheduleRepository {
    let teacher = Schedule::from_slots(
        Owner::Teacher("T010".to_string()),
        vec![lesson("monday", "08:00", "09:00", "Five")],
    )
    .unwrap();
    InMemoryScheduleRepository::new(vec![teacher])
}

/// T010 teaches class Five on monday at 08:00, T020 teaches class Six on
/// tuesday at 10:00; both sides are populated.
fn two_sided_repository() -> InMemoryScheduleRepository {
    let mut teachers = BTreeMap::new();
    teachers.insert(
        "T010".to_string(),
        vec![lesson("monday", "08:00", "09:00", "Five")],
    );
    teachers.insert(
        "T020".to_string(),
        vec![lesson("tuesday", "10:00", "11:00", "Six")],
    );
    InMemoryScheduleRepository::new(SeedData { teachers }.into_schedules().unwrap())
}

async fn slot_count(repo: &InMemoryScheduleRepository, owner: Owner) -> usize {
    repo.get_schedule(&owner)
        .await
        .unwrap()
        .map(|schedule| schedule.len())
        .unwrap_or(0)
}

#[tokio::test]
async fn test_get_schedule_unknown_owner() {
    let repo = repository();

    let schedule = repo
        .get_schedule(&Owner::Teacher("T404".to_string()))
        .await
        .unwrap();

    assert!(schedule.is_none());
}

#[tokio::test]
async fn test_add_slot_mirrors_into_class() {
    let repo = repository();
    let owner = Owner::Teacher("T010".to_string());

    let outcome = repo
        .add_slot(&owner, lesson("monday", "09:00", "10:00", "Six"), ConflictPolicy::Reject)
        .await
        .unwrap();

    assert_eq!(outcome, Some(InsertOutcome::Inserted { overridden: vec![] }));
    let class = repo
        .get_schedule(&Owner::Class("Six".to_string()))
        .await
        .unwrap()
        .expect("class schedule created");
    assert_eq!(class.len(), 1);
    assert_eq!(class.slots()[0].occupant(), &Occupant::Teacher("T010".to_string()));
    assert_eq!(
        repo.list_owners(OwnerKind::Class).await.unwrap(),
        vec!["Six".to_string()]
    );
}

#[tokio::test]
async fn test_rejected_slot_is_not_mirrored() {
    let repo = repository();
    let owner = Owner::Teacher("T010".to_string());

    let outcome = repo
        .add_slot(&owner, lesson("monday", "08:30", "09:30", "Six"), ConflictPolicy::Reject)
        .await
        .unwrap();

    assert!(matches!(&outcome, Some(InsertOutcome::Rejected { conflicts }) if conflicts.len() == 1));
    assert!(
        repo.get_schedule(&Owner::Class("Six".to_string()))
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_add_slot_unknown_owner() {
    let repo = repository();

    let outcome = repo
        .add_slot(
            &Owner::Teacher("T404".to_string()),
            lesson("monday", "08:00", "09:00", "Five"),
            ConflictPolicy::Override,
        )
        .await
        .unwrap();

    assert_eq!(outcome, None);
}

#[tokio::test]
async fn test_add_slot_with_wrong_occupant_kind_fails() {
    let repo = repository();
    let slot = ScheduleSlot::new(
        SlotTiming::parse("friday", "08:00", "09:00").unwrap(),
        "History",
        Occupant::Teacher("T011".to_string()),
    );

    let result = repo
        .add_slot(&Owner::Teacher("T010".to_string()), slot, ConflictPolicy::Reject)
        .await;

    assert!(matches!(result, Err(TimetableError::Validation(_))));
}

#[tokio::test]
async fn test_storage_failure_is_server_error() {
    let mut repo = MockRepository::new();
    repo.expect_get_schedule()
        .withf(|owner| owner == &Owner::Teacher("T001".to_string()))
        .returning(|_| Err(TimetableError::Storage(eyre::eyre!("backend unavailable"))));

    let server = server_with(Arc::new(repo));

    server
        .get("/api/teachers/T001/schedule")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_rejected_insert_from_repository_is_conflict() {
    let mut repo = MockRepository::new();
    repo.expect_add_slot()
        .withf(|owner, _, policy| {
            owner == &Owner::Class("Two".to_string()) && *policy == ConflictPolicy::Reject
        })
        .times(1)
        .returning(|_, slot, _| {
            Ok(Some(InsertOutcome::Rejected {
                conflicts: vec![slot],
            }))
        });

    let server = server_with(Arc::new(repo));

    server
        .post("/api/classes/Two/schedule")
        .json(&json!({
            "day": "monday",
            "start_time": "08:00",
            "end_time": "09:00",
            "subject": "Art",
            "occupant": "T005"
        }))
        .await
        .assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_owners_is_forwarded() {
    let mut repo = MockRepository::new();
    repo.expect_list_owners()
        .with(predicate::eq(OwnerKind::Teacher))
        .returning(|_| Ok(vec!["T100".to_string()]));

    let server = server_with(Arc::new(repo));

    let body: serde_json::Value = server.get("/api/teachers").await.json();

    assert_eq!(body, json!({ "kind": "teacher", "owners": ["T100"] }));
}

#[tokio::test]
async fn test_class_side_conflict_rejects_insert() {
    let repo = two_sided_repository();
    let owner = Owner::Teacher("T020".to_string());

    let outcome = repo
        .add_slot(&owner, lesson("monday", "08:30", "09:30", "Five"), ConflictPolicy::Reject)
        .await
        .unwrap();

    let Some(InsertOutcome::Rejected { conflicts }) = outcome else {
        panic!("expected a rejection");
    };
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].occupant(), &Occupant::Teacher("T010".to_string()));
    assert_eq!(slot_count(&repo, Owner::Teacher("T020".to_string())).await, 1);
    assert_eq!(slot_count(&repo, Owner::Class("Five".to_string())).await, 1);
}

#[tokio::test]
async fn test_class_side_conflict_with_override() {
    let repo = two_sided_repository();
    let owner = Owner::Teacher("T020".to_string());

    let outcome = repo
        .add_slot(&owner, lesson("monday", "08:30", "09:30", "Five"), ConflictPolicy::Override)
        .await
        .unwrap();

    let Some(InsertOutcome::Inserted { overridden }) = outcome else {
        panic!("expected an insert");
    };
    assert_eq!(overridden.len(), 1);
    assert_eq!(slot_count(&repo, Owner::Teacher("T020".to_string())).await, 2);
    assert_eq!(slot_count(&repo, Owner::Class("Five".to_string())).await, 2);
}

#[tokio::test]
async fn test_teacher_side_conflict_rejects_class_insert() {
    let repo = two_sided_repository();
    let owner = Owner::Class("Six".to_string());
    let slot = ScheduleSlot::new(
        SlotTiming::parse("monday", "08:00", "09:00").unwrap(),
        "History",
        Occupant::Teacher("T010".to_string()),
    );

    let outcome = repo
        .add_slot(&owner, slot, ConflictPolicy::Reject)
        .await
        .unwrap();

    let Some(InsertOutcome::Rejected { conflicts }) = outcome else {
        panic!("expected a rejection");
    };
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].occupant(), &Occupant::Class("Five".to_string()));
    assert_eq!(slot_count(&repo, Owner::Class("Six".to_string())).await, 1);
    assert_eq!(slot_count(&repo, Owner::Teacher("T010".to_string())).await, 1);
}

#[tokio::test]
async fn test_teacher_side_conflict_with_override() {
    let repo = two_sided_repository();
    let owner = Owner::Class("Six".to_string());
    let slot = ScheduleSlot::new(
        SlotTiming::parse("monday", "08:00", "09:00").unwrap(),
        "History",
        Occupant::Teacher("T010".to_string()),
    );

    let outcome = repo
        .add_slot(&owner, slot, ConflictPolicy::Override)
        .await
        .unwrap();

    assert!(matches!(&outcome, Some(InsertOutcome::Inserted { overridden }) if overridden.len() == 1));
    assert_eq!(slot_count(&repo, Owner::Class("Six".to_string())).await, 2);
    assert_eq!(slot_count(&repo, Owner::Teacher("T010".to_string())).await, 2);
}

#[tokio::test]
async fn test_conflicts_on_both_sides_are_reported_together() {
    let repo = two_sided_repository();
    let owner = Owner::Teacher("T010".to_string());

    // T010 is busy at 08:00 and so is class Five
    let outcome = repo
        .add_slot(&owner, lesson("monday", "08:00", "08:45", "Five"), ConflictPolicy::Reject)
        .await
        .unwrap();

    let Some(InsertOutcome::Rejected { conflicts }) = outcome else {
        panic!("expected a rejection");
    };
    assert_eq!(conflicts.len(), 2);
}
