//! Tests for builder modules

use chrono::Weekday;
use lead_slot_planner::builders::SchedulingConfigBuilder;
use lead_slot_planner::config::{PriorityDeadlines, SchedulingConfig};
use lead_slot_planner::util::LeadPriority;

#[test]
fn test_builder_defaults() {
    let cfg = SchedulingConfigBuilder::new().build().unwrap();
    assert_eq!(cfg, SchedulingConfig::default());
}

#[test]
fn test_builder_overrides() {
    let cfg = SchedulingConfigBuilder::new()
        .with_max_terminieren_per_day(8)
        .with_max_termine_per_day(2)
        .with_deadlines(PriorityDeadlines {
            hot: 0,
            warm: 2,
            potential: 4,
            nurture: 10,
        })
        .with_working_days([Weekday::Mon, Weekday::Wed, Weekday::Fri])
        .with_appointment_duration_minutes(45)
        .with_overflow_horizon_days(21)
        .build()
        .unwrap();

    assert_eq!(cfg.max_terminieren_per_day, 8);
    assert_eq!(cfg.max_termine_per_day, 2);
    assert_eq!(cfg.deadline_for(LeadPriority::Nurture), 10);
    assert_eq!(cfg.working_days.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
    assert_eq!(cfg.default_appointment_duration_minutes, 45);
    assert_eq!(cfg.overflow_horizon_days, 21);
}

#[test]
fn test_builder_rejects_zero_capacity() {
    assert!(SchedulingConfigBuilder::new()
        .with_max_termine_per_day(0)
        .build()
        .is_err());
    assert!(SchedulingConfigBuilder::new()
        .with_appointment_duration_minutes(0)
        .build()
        .is_err());
    assert!(SchedulingConfigBuilder::new()
        .with_overflow_horizon_days(0)
        .build()
        .is_err());
}

#[test]
fn test_builder_rejects_unbounded_search() {
    use lead_slot_planner::config::{MAX_DEADLINE_OFFSET_DAYS, MAX_OVERFLOW_HORIZON_DAYS};

    assert!(SchedulingConfigBuilder::new()
        .with_overflow_horizon_days(5_000_000)
        .build()
        .is_err());
    assert!(SchedulingConfigBuilder::new()
        .with_deadline(LeadPriority::Nurture, MAX_DEADLINE_OFFSET_DAYS + 1)
        .build()
        .is_err());
    assert!(SchedulingConfigBuilder::new()
        .with_overflow_horizon_days(MAX_OVERFLOW_HORIZON_DAYS)
        .with_deadline(LeadPriority::Nurture, MAX_DEADLINE_OFFSET_DAYS)
        .build()
        .is_ok());
}
