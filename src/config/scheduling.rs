//! Scheduling configuration, defaults, and override parsing.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::{AppResult, SchedulerError};
use crate::util::serde::{LeadPriority, TaskType};

/// Environment key overriding [`SchedulingConfig::max_terminieren_per_day`].
pub const ENV_MAX_CALLS_PER_DAY: &str = "MAX_CALLS_PER_DAY";
/// Environment key overriding [`SchedulingConfig::max_termine_per_day`].
pub const ENV_MAX_APPOINTMENTS_PER_DAY: &str = "MAX_APPOINTMENTS_PER_DAY";

/// Largest accepted `overflow_horizon_days`.
pub const MAX_OVERFLOW_HORIZON_DAYS: u32 = 366;
/// Largest accepted business-day offset in [`PriorityDeadlines`].
pub const MAX_DEADLINE_OFFSET_DAYS: u32 = 366;

/// Business-day offset from today within which each priority should be actioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityDeadlines {
    /// Offset for hot leads; must be 0.
    pub hot: u32,
    /// Offset for warm leads.
    pub warm: u32,
    /// Offset for potential leads.
    pub potential: u32,
    /// Offset for nurture leads.
    pub nurture: u32,
}

impl PriorityDeadlines {
    /// Offset for `priority`.
    pub const fn get(&self, priority: LeadPriority) -> u32 {
        match priority {
            LeadPriority::Hot => self.hot,
            LeadPriority::Warm => self.warm,
            LeadPriority::Potential => self.potential,
            LeadPriority::Nurture => self.nurture,
        }
    }
}

impl Default for PriorityDeadlines {
    fn default() -> Self {
        Self {
            hot: 0,
            warm: 1,
            potential: 3,
            nurture: 5,
        }
    }
}

/// Immutable scheduling configuration.
///
/// Weekday indices follow the CRM convention: 0 = Sunday through 6 = Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// Ceiling for TERMINIEREN tasks per calendar date.
    pub max_terminieren_per_day: u32,
    /// Ceiling for TERMIN tasks per calendar date.
    pub max_termine_per_day: u32,
    /// Deadline offsets per priority.
    pub priority_deadlines: PriorityDeadlines,
    /// Weekday indices (0 = Sunday) that count as working days.
    pub working_days: BTreeSet<u8>,
    /// Default appointment length in minutes.
    pub default_appointment_duration_minutes: u32,
    /// Hot leads land on the nearest working day regardless of load.
    pub hot_leads_bypass_capacity: bool,
    /// Calendar days past the deadline searched once the deadline is saturated.
    pub overflow_horizon_days: u32,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            max_terminieren_per_day: 6,
            max_termine_per_day: 4,
            priority_deadlines: PriorityDeadlines::default(),
            working_days: (1..=5).collect(),
            default_appointment_duration_minutes: 30,
            hot_leads_bypass_capacity: true,
            overflow_horizon_days: 14,
        }
    }
}

impl SchedulingConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), SchedulerError> {
        if self.working_days.is_empty() {
            return Err(SchedulerError::Config("working_days must not be empty".into()));
        }
        if let Some(day) = self.working_days.iter().find(|d| **d > 6) {
            return Err(SchedulerError::Config(format!(
                "working day index {day} outside 0..=6"
            )));
        }
        if self.priority_deadlines.hot != 0 {
            return Err(SchedulerError::Config(
                "priority_deadlines.hot must be 0".into(),
            ));
        }
        if let Some(priority) = LeadPriority::ALL
            .into_iter()
            .find(|p| self.priority_deadlines.get(*p) > MAX_DEADLINE_OFFSET_DAYS)
        {
            return Err(SchedulerError::Config(format!(
                "priority_deadlines.{} must be at most {MAX_DEADLINE_OFFSET_DAYS}",
                priority.as_str()
            )));
        }
        if self.max_terminieren_per_day == 0 {
            return Err(SchedulerError::Config(
                "max_terminieren_per_day must be greater than 0".into(),
            ));
        }
        if self.max_termine_per_day == 0 {
            return Err(SchedulerError::Config(
                "max_termine_per_day must be greater than 0".into(),
            ));
        }
        if self.default_appointment_duration_minutes == 0 {
            return Err(SchedulerError::Config(
                "default_appointment_duration_minutes must be greater than 0".into(),
            ));
        }
        if self.overflow_horizon_days == 0 {
            return Err(SchedulerError::Config(
                "overflow_horizon_days must be greater than 0".into(),
            ));
        }
        if self.overflow_horizon_days > MAX_OVERFLOW_HORIZON_DAYS {
            return Err(SchedulerError::Config(format!(
                "overflow_horizon_days must be at most {MAX_OVERFLOW_HORIZON_DAYS}"
            )));
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, SchedulerError> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| SchedulerError::Config(format!("parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Per-day ceiling for `task_type`; `None` for types that are not limited.
    pub const fn max_per_day(&self, task_type: TaskType) -> Option<u32> {
        if !task_type.is_capacity_limited() {
            return None;
        }
        match task_type {
            TaskType::Terminieren => Some(self.max_terminieren_per_day),
            TaskType::Termin => Some(self.max_termine_per_day),
            TaskType::FollowUp | TaskType::Sonstiges => None,
        }
    }

    /// Deadline offset for `priority`.
    pub const fn deadline_for(&self, priority: LeadPriority) -> u32 {
        self.priority_deadlines.get(priority)
    }
}

/// Raw values for the recognized overrides. Anything else requires
/// constructing a [`SchedulingConfig`] directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Replaces `max_terminieren_per_day` when it parses as a positive integer.
    pub max_calls_per_day: Option<String>,
    /// Replaces `max_termine_per_day` when it parses as a positive integer.
    pub max_appointments_per_day: Option<String>,
}

impl ConfigOverrides {
    /// Read overrides from the process environment, loading `.env` first if present.
    ///
    /// Call once at process start and pass the resulting config down.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("failed to load .env: {}", e);
            }
        }
        Self {
            max_calls_per_day: std::env::var(ENV_MAX_CALLS_PER_DAY).ok(),
            max_appointments_per_day: std::env::var(ENV_MAX_APPOINTMENTS_PER_DAY).ok(),
        }
    }

    /// Read overrides from a dotenv-formatted file without touching the environment.
    pub fn from_dotenv_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path)
            .with_context(|| format!("opening overrides file {}", path.display()))?;
        let mut overrides = Self::default();
        for item in iter {
            let (key, value) =
                item.with_context(|| format!("parsing overrides file {}", path.display()))?;
            match key.as_str() {
                ENV_MAX_CALLS_PER_DAY => overrides.max_calls_per_day = Some(value),
                ENV_MAX_APPOINTMENTS_PER_DAY => overrides.max_appointments_per_day = Some(value),
                _ => {}
            }
        }
        Ok(overrides)
    }
}

fn parse_positive(name: &str, raw: Option<&str>) -> Option<u32> {
    let raw = raw?;
    match raw.trim().parse::<u32>() {
        Ok(v) if v > 0 => Some(v),
        _ => {
            tracing::warn!("ignoring override {}={:?}: not a positive integer", name, raw);
            None
        }
    }
}

/// Built-in defaults merged with the recognized overrides.
///
/// Overrides that are not positive integers are ignored and the default kept.
pub fn get_scheduling_config(overrides: &ConfigOverrides) -> SchedulingConfig {
    let mut cfg = SchedulingConfig::default();
    if let Some(v) = parse_positive(
        ENV_MAX_CALLS_PER_DAY,
        overrides.max_calls_per_day.as_deref(),
    ) {
        cfg.max_terminieren_per_day = v;
    }
    if let Some(v) = parse_positive(
        ENV_MAX_APPOINTMENTS_PER_DAY,
        overrides.max_appointments_per_day.as_deref(),
    ) {
        cfg.max_termine_per_day = v;
    }
    cfg
}

/// Outcome of mapping an upstream priority string onto [`LeadPriority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedPriority {
    /// Resolved priority.
    pub priority: LeadPriority,
    /// True when the input was unrecognized and fell back to `potential`.
    pub was_coerced: bool,
}

/// Case-insensitive priority lookup. Unknown input maps to
/// [`LeadPriority::Potential`] with `was_coerced` set; it is never an error.
pub fn normalize_lead_priority(raw: &str) -> NormalizedPriority {
    let known = LeadPriority::ALL
        .into_iter()
        .find(|p| p.as_str().eq_ignore_ascii_case(raw.trim()));
    match known {
        Some(priority) => NormalizedPriority {
            priority,
            was_coerced: false,
        },
        None => {
            tracing::debug!("unrecognized lead priority {:?}, using potential", raw);
            NormalizedPriority {
                priority: LeadPriority::Potential,
                was_coerced: true,
            }
        }
    }
}
