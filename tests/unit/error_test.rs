//! Tests for error types

use lead_slot_planner::core::{SchedulerError, SlotErrorKind};

#[test]
fn test_config_error() {
    let err = SchedulerError::Config("working_days must not be empty".to_string());
    assert_eq!(format!("{}", err), "config error: working_days must not be empty");
    assert_eq!(err.slot_error_kind(), SlotErrorKind::Config);
}

#[test]
fn test_store_unavailable_error() {
    let err = SchedulerError::StoreUnavailable("timeout".to_string());
    assert_eq!(format!("{}", err), "task store unavailable: timeout");
}

#[test]
fn test_capacity_exhausted_error() {
    let err = SchedulerError::CapacityExhausted;
    assert_eq!(format!("{}", err), "capacity exhausted");
    assert_eq!(err.slot_error_kind(), SlotErrorKind::CapacityExhausted);
}

#[test]
fn test_slot_error_kind_wire_name() {
    let json = serde_json::to_string(&SlotErrorKind::CapacityExhausted).unwrap();
    assert_eq!(json, "\"capacity_exhausted\"");
}
