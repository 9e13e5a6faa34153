//! Scheduling configuration and the recognized override surface.

pub mod scheduling;

pub use scheduling::{
    get_scheduling_config, normalize_lead_priority, ConfigOverrides, NormalizedPriority,
    PriorityDeadlines, SchedulingConfig, ENV_MAX_APPOINTMENTS_PER_DAY, ENV_MAX_CALLS_PER_DAY,
    MAX_DEADLINE_OFFSET_DAYS, MAX_OVERFLOW_HORIZON_DAYS,
};
