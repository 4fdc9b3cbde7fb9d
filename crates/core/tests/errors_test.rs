use std::error::Error;

use timetable_core::{SlotError, TimetableError, TimetableResult, Weekday};

#[test]
fn test_timetable_error_display() {
    let not_found = TimetableError::NotFound("teacher T404".to_string());
    let validation = TimetableError::Validation("Invalid input".to_string());
    let conflict = TimetableError::Conflict("2 overlapping slots".to_string());
    let storage = TimetableError::Storage(eyre::eyre!("seed file unreadable"));

    assert_eq!(not_found.to_string(), "Resource not found: teacher T404");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(conflict.to_string(), "Schedule conflict: 2 overlapping slots");
    assert!(storage.to_string().contains("Storage error:"));
}

#[test]
fn test_slot_error_becomes_validation_error() {
    let err: TimetableError = SlotError::InvalidTime("7pm".to_string()).into();

    assert!(matches!(err, TimetableError::Validation(_)));
    assert_eq!(
        err.to_string(),
        "Validation error: invalid time \"7pm\", expected zero-padded HH:MM"
    );
}

#[test]
fn test_overlap_error_message() {
    let err = SlotError::Overlap {
        day: Weekday::Tuesday,
        first: "a".to_string(),
        second: "b".to_string(),
    };
    assert_eq!(err.to_string(), "slots overlap on tuesday: a and b");
}

#[test]
fn test_internal_error_keeps_source() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let err = TimetableError::Internal(Box::new(io_error));

    assert!(err.source().is_some());
    assert!(err.to_string().contains("IO error"));
}

#[test]
fn test_timetable_result() {
    let result: TimetableResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: TimetableResult<i32> = Err(TimetableError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}
