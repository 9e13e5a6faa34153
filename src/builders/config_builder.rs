//! Fluent construction of a validated [`SchedulingConfig`].

use chrono::Weekday;

use crate::config::{PriorityDeadlines, SchedulingConfig};
use crate::core::SchedulerError;
use crate::util::serde::LeadPriority;

/// Builder starting from the built-in defaults.
///
/// ```rust
/// use chrono::Weekday;
/// use lead_slot_planner::builders::SchedulingConfigBuilder;
/// use lead_slot_planner::util::LeadPriority;
///
/// let cfg = SchedulingConfigBuilder::new()
///     .with_max_terminieren_per_day(6)
///     .with_deadline(LeadPriority::Warm, 1)
///     .with_working_days([Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu])
///     .build()
///     .unwrap();
/// assert_eq!(cfg.working_days.len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchedulingConfigBuilder {
    config: SchedulingConfig,
}

impl SchedulingConfigBuilder {
    /// Start from [`SchedulingConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the TERMINIEREN ceiling.
    #[must_use]
    pub fn with_max_terminieren_per_day(mut self, max: u32) -> Self {
        self.config.max_terminieren_per_day = max;
        self
    }

    /// Set the TERMIN ceiling.
    #[must_use]
    pub fn with_max_termine_per_day(mut self, max: u32) -> Self {
        self.config.max_termine_per_day = max;
        self
    }

    /// Set the deadline offset for one priority.
    #[must_use]
    pub fn with_deadline(mut self, priority: LeadPriority, business_days: u32) -> Self {
        let d = &mut self.config.priority_deadlines;
        match priority {
            LeadPriority::Hot => d.hot = business_days,
            LeadPriority::Warm => d.warm = business_days,
            LeadPriority::Potential => d.potential = business_days,
            LeadPriority::Nurture => d.nurture = business_days,
        }
        self
    }

    /// Replace all deadline offsets.
    #[must_use]
    pub fn with_deadlines(mut self, deadlines: PriorityDeadlines) -> Self {
        self.config.priority_deadlines = deadlines;
        self
    }

    /// Replace the working-day set.
    #[must_use]
    pub fn with_working_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.config.working_days = days
            .into_iter()
            .filter_map(|d| u8::try_from(d.num_days_from_sunday()).ok())
            .collect();
        self
    }

    /// Set the default appointment length.
    #[must_use]
    pub fn with_appointment_duration_minutes(mut self, minutes: u32) -> Self {
        self.config.default_appointment_duration_minutes = minutes;
        self
    }

    /// Enable or disable the hot-lead capacity bypass.
    #[must_use]
    pub fn with_hot_bypass(mut self, enabled: bool) -> Self {
        self.config.hot_leads_bypass_capacity = enabled;
        self
    }

    /// Set how many calendar days past the deadline overflow may search.
    #[must_use]
    pub fn with_overflow_horizon_days(mut self, days: u32) -> Self {
        self.config.overflow_horizon_days = days;
        self
    }

    /// Validate and return the configuration.
    pub fn build(self) -> Result<SchedulingConfig, SchedulerError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
