//! Tests for the request/response surface

use chrono::NaiveDate;
use lead_slot_planner::config::SchedulingConfig;
use lead_slot_planner::core::{CapacityManager, SchedulerError, SlotFinder};
use lead_slot_planner::infra::InMemoryTaskStore;
use lead_slot_planner::runtime::{capacity_overview, find_slot_for_request, SlotRequest};
use lead_slot_planner::util::{FixedClock, TaskType};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[tokio::test]
async fn test_unknown_priority_is_flagged() {
    let config = SchedulingConfig::default();
    let store = InMemoryTaskStore::new();
    let clock = FixedClock(monday());
    let finder = SlotFinder::new(&config, &store, &clock);

    let resp = find_slot_for_request(
        &finder,
        SlotRequest {
            priority: "scorching".into(),
            task_type: TaskType::Terminieren,
        },
    )
    .await;

    assert!(resp.result.success);
    assert!(resp.result.priority_coerced);
    // potential = 3 business days from Monday
    assert_eq!(resp.result.slot.as_ref().unwrap().date_key, "2026-10-22");
    assert_eq!(resp.formatted.as_deref(), Some("Donnerstag, 22.10.2026"));
}

#[tokio::test]
async fn test_known_priority_not_flagged() {
    let config = SchedulingConfig::default();
    let store = InMemoryTaskStore::new();
    let clock = FixedClock(monday());
    let finder = SlotFinder::new(&config, &store, &clock);

    let resp = find_slot_for_request(
        &finder,
        SlotRequest {
            priority: "Hot".into(),
            task_type: TaskType::Termin,
        },
    )
    .await;
    assert!(!resp.result.priority_coerced);
    assert_eq!(resp.formatted.as_deref(), Some("Heute"));
}

#[tokio::test]
async fn test_response_serializes() {
    let config = SchedulingConfig::default();
    let store = InMemoryTaskStore::new();
    let clock = FixedClock(monday());
    let finder = SlotFinder::new(&config, &store, &clock);

    let req: SlotRequest =
        serde_json::from_str(r#"{"priority":"warm","task_type":"TERMIN"}"#).unwrap();
    let resp = find_slot_for_request(&finder, req).await;
    let json = serde_json::to_value(&resp).unwrap();
    assert_eq!(json["result"]["success"], true);
    assert_eq!(json["result"]["slot"]["date_key"], "2026-10-20");
    assert_eq!(json["result"]["slot"]["is_tomorrow"], true);
}

#[tokio::test]
async fn test_capacity_overview_by_key() {
    let config = SchedulingConfig::default();
    let store = InMemoryTaskStore::new();
    store.insert_many(TaskType::Termin, monday(), 2);
    let manager = CapacityManager::new(&config, &store);

    let days = capacity_overview(&manager, "2026-10-19", "2026-10-23", TaskType::Termin)
        .await
        .unwrap();
    assert_eq!(days.len(), 5);
    assert_eq!(days[0].observed_count, 2);
    assert_eq!(days[0].remaining, config.max_termine_per_day - 2);

    let err = capacity_overview(&manager, "19.10.2026", "2026-10-23", TaskType::Termin).await;
    assert!(matches!(err, Err(SchedulerError::InvalidDateKey(_))));
}
