//! Tests for configuration validation and overrides

use std::io::Write;

use lead_slot_planner::config::{
    get_scheduling_config, ConfigOverrides, SchedulingConfig, ENV_MAX_APPOINTMENTS_PER_DAY,
    ENV_MAX_CALLS_PER_DAY,
};
use lead_slot_planner::core::SchedulerError;

#[test]
fn test_invalid_working_day_index() {
    let mut cfg = SchedulingConfig::default();
    cfg.working_days.insert(7);
    assert!(matches!(cfg.validate(), Err(SchedulerError::Config(_))));
}

#[test]
fn test_empty_working_days() {
    let mut cfg = SchedulingConfig::default();
    cfg.working_days.clear();
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "max_terminieren_per_day": 6,
        "max_termine_per_day": 3,
        "priority_deadlines": { "hot": 0, "warm": 1, "potential": 2, "nurture": 7 },
        "working_days": [1, 2, 3, 4, 5, 6],
        "default_appointment_duration_minutes": 60,
        "hot_leads_bypass_capacity": false,
        "overflow_horizon_days": 10
    }"#;

    let cfg = SchedulingConfig::from_json_str(json).unwrap();
    assert_eq!(cfg.max_termine_per_day, 3);
    assert_eq!(cfg.working_days.len(), 6);
    assert!(!cfg.hot_leads_bypass_capacity);
}

#[test]
fn test_config_from_json_rejects_negative_deadline() {
    let json = r#"{
        "max_terminieren_per_day": 6,
        "max_termine_per_day": 3,
        "priority_deadlines": { "hot": 0, "warm": -1, "potential": 2, "nurture": 7 },
        "working_days": [1, 2, 3, 4, 5],
        "default_appointment_duration_minutes": 60,
        "hot_leads_bypass_capacity": true,
        "overflow_horizon_days": 14
    }"#;
    assert!(matches!(
        SchedulingConfig::from_json_str(json),
        Err(SchedulerError::Config(_))
    ));
}

#[test]
fn test_config_from_json_rejects_hot_deadline() {
    let json = r#"{
        "max_terminieren_per_day": 6,
        "max_termine_per_day": 3,
        "priority_deadlines": { "hot": 1, "warm": 1, "potential": 2, "nurture": 7 },
        "working_days": [1, 2, 3, 4, 5],
        "default_appointment_duration_minutes": 60,
        "hot_leads_bypass_capacity": true,
        "overflow_horizon_days": 14
    }"#;
    assert!(SchedulingConfig::from_json_str(json).is_err());
}

#[test]
fn test_overrides_from_dotenv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{ENV_MAX_CALLS_PER_DAY}=9").unwrap();
    writeln!(file, "{ENV_MAX_APPOINTMENTS_PER_DAY}=zero").unwrap();
    writeln!(file, "UNRELATED_KEY=1").unwrap();

    let overrides = ConfigOverrides::from_dotenv_file(file.path()).unwrap();
    assert_eq!(overrides.max_calls_per_day.as_deref(), Some("9"));

    let cfg = get_scheduling_config(&overrides);
    assert_eq!(cfg.max_terminieren_per_day, 9);
    assert_eq!(
        cfg.max_termine_per_day,
        SchedulingConfig::default().max_termine_per_day
    );
}

#[test]
fn test_overrides_missing_file() {
    let res = ConfigOverrides::from_dotenv_file("/nonexistent/planner.env");
    assert!(res.is_err());
}

#[test]
fn test_config_from_json_rejects_huge_offsets() {
    let json = r#"{
        "max_terminieren_per_day": 6,
        "max_termine_per_day": 3,
        "priority_deadlines": { "hot": 0, "warm": 1, "potential": 2, "nurture": 4000000000 },
        "working_days": [1, 2, 3, 4, 5],
        "default_appointment_duration_minutes": 60,
        "hot_leads_bypass_capacity": true,
        "overflow_horizon_days": 14
    }"#;
    assert!(matches!(
        SchedulingConfig::from_json_str(json),
        Err(SchedulerError::Config(_))
    ));

    let json = json
        .replace("4000000000", "7")
        .replace("\"overflow_horizon_days\": 14", "\"overflow_horizon_days\": 5000000");
    assert!(matches!(
        SchedulingConfig::from_json_str(&json),
        Err(SchedulerError::Config(_))
    ));
}
