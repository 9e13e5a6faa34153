//! Slot selection for callbacks (TERMINIEREN) and appointments (TERMIN).
//!
//! The finder is a pure function of `(today, task-store snapshot, config)`.
//! It plans; it does not reserve. Two callers planning against the same
//! store state can both see room on a date and both book it, overshooting
//! the ceiling by up to `callers - 1`. That is accepted for an advisory
//! plan a human reviews daily. Hard admission control would need a
//! test-and-set per date and type inside the task store itself.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::SchedulingConfig;
use crate::core::calendar::{
    add_business_days, dates_inclusive, format_date_key, is_working_day, next_working_day,
};
use crate::core::capacity::{count_tasks_by_date, CapacityManager};
use crate::core::{SchedulerError, SlotErrorKind, TaskQuery};
use crate::util::clock::Clock;
use crate::util::format::{DayRelation, GermanSlotFormatter, SlotFormatter};
use crate::util::serde::{LeadPriority, TaskType};

/// A concrete planned date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSlot {
    /// Chosen date.
    pub date: NaiveDate,
    /// Canonical `YYYY-MM-DD` key of `date`.
    pub date_key: String,
    /// `date` is today.
    pub is_today: bool,
    /// `date` is the calendar day after today.
    pub is_tomorrow: bool,
    /// Label rendered by the configured formatter.
    pub display_label: String,
}

impl ScheduledSlot {
    /// Relation of the slot to the day it was planned on.
    pub const fn relation(&self) -> DayRelation {
        if self.is_today {
            DayRelation::Today
        } else if self.is_tomorrow {
            DayRelation::Tomorrow
        } else {
            DayRelation::Later
        }
    }
}

/// Load on the chosen date, counting the booking being planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Short operator-facing summary.
    pub message: String,
    /// Existing tasks plus this one.
    pub total_count: u32,
    /// Ceiling for the task type.
    pub configured_max: u32,
    /// `total_count` exceeds the ceiling.
    pub over_capacity: bool,
}

/// Outcome of a slot search. Always returned, never raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotFindingResult {
    /// A slot was chosen.
    pub success: bool,
    /// The chosen slot.
    pub slot: Option<ScheduledSlot>,
    /// Load on the chosen date.
    pub daily_summary: Option<DailySummary>,
    /// Failure kind when `success` is false.
    pub error: Option<SlotErrorKind>,
    /// Failure detail when `success` is false.
    pub error_message: Option<String>,
    /// The store could not be read; counts were treated as zero.
    pub degraded: bool,
    /// The caller's priority string was unrecognized and coerced to `potential`.
    pub priority_coerced: bool,
}

impl SlotFindingResult {
    fn found(slot: ScheduledSlot, summary: DailySummary, degraded: bool) -> Self {
        Self {
            success: true,
            slot: Some(slot),
            daily_summary: Some(summary),
            error: None,
            error_message: None,
            degraded,
            priority_coerced: false,
        }
    }

    fn failed(err: &SchedulerError, degraded: bool) -> Self {
        Self {
            success: false,
            slot: None,
            daily_summary: None,
            error: Some(err.slot_error_kind()),
            error_message: Some(err.to_string()),
            degraded,
            priority_coerced: false,
        }
    }

    /// Mark the result as planned for a coerced priority.
    #[must_use]
    pub fn with_priority_coerced(mut self, coerced: bool) -> Self {
        self.priority_coerced = coerced;
        self
    }
}

/// Render a slot with the default German formatter.
pub fn format_slot_for_display(slot: &ScheduledSlot) -> String {
    format_slot_with(&GermanSlotFormatter, slot)
}

/// Render a slot with `formatter`.
pub fn format_slot_with(formatter: &dyn SlotFormatter, slot: &ScheduledSlot) -> String {
    formatter.format(slot.date, slot.relation())
}

/// Chooses dates for new tasks.
pub struct SlotFinder<'a> {
    capacity: CapacityManager<'a>,
    clock: &'a dyn Clock,
    formatter: &'a dyn SlotFormatter,
}

impl<'a> SlotFinder<'a> {
    /// Create a finder over `store`, planning relative to `clock`.
    pub fn new(config: &'a SchedulingConfig, store: &'a dyn TaskQuery, clock: &'a dyn Clock) -> Self {
        Self {
            capacity: CapacityManager::new(config, store),
            clock,
            formatter: &GermanSlotFormatter,
        }
    }

    /// Use `formatter` for `display_label`.
    #[must_use]
    pub fn with_formatter(mut self, formatter: &'a dyn SlotFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Capacity manager sharing this finder's config and store.
    pub const fn capacity(&self) -> &CapacityManager<'a> {
        &self.capacity
    }

    /// Plan a callback to arrange an appointment.
    pub async fn find_terminieren_slot(&self, priority: LeadPriority) -> SlotFindingResult {
        self.find_slot(priority, TaskType::Terminieren).await
    }

    /// Plan an appointment.
    pub async fn find_termin_slot(&self, priority: LeadPriority) -> SlotFindingResult {
        self.find_slot(priority, TaskType::Termin).await
    }

    /// Plan a task of `task_type` for a lead of `priority`.
    pub async fn find_slot(&self, priority: LeadPriority, task_type: TaskType) -> SlotFindingResult {
        let today = self.clock.today();
        let mut degraded = false;
        match self.plan(today, priority, task_type, &mut degraded).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("slot search for {} {} failed: {}", priority, task_type, e);
                SlotFindingResult::failed(&e, degraded)
            }
        }
    }

    /// `degraded` is set as soon as a store read comes back degraded, so an
    /// error after the read still reports it.
    async fn plan(
        &self,
        today: NaiveDate,
        priority: LeadPriority,
        task_type: TaskType,
        degraded: &mut bool,
    ) -> Result<SlotFindingResult, SchedulerError> {
        let config = self.capacity.config();
        let deadline = add_business_days(config, today, config.deadline_for(priority))?;
        let configured_max = self.capacity.configured_max(task_type);

        if priority == LeadPriority::Hot && config.hot_leads_bypass_capacity {
            let date = next_working_day(config, today)?;
            let fetch = self
                .capacity
                .get_tasks_in_date_range(date, date, task_type)
                .await;
            *degraded = fetch.degraded;
            let counts = count_tasks_by_date(&fetch.tasks);
            let observed = observed_on(&counts, date);
            let summary = summarize(task_type, date, observed, configured_max);
            if summary.over_capacity {
                tracing::warn!(
                    "hot lead booked on {} above {} ceiling: {}",
                    format_date_key(date),
                    task_type,
                    summary.message
                );
            }
            tracing::info!("hot lead bypass: {} on {}", task_type, format_date_key(date));
            return Ok(SlotFindingResult::found(
                self.slot(today, date),
                summary,
                *degraded,
            ));
        }

        let horizon_end = deadline
            .checked_add_days(Days::new(u64::from(config.overflow_horizon_days)))
            .ok_or_else(|| SchedulerError::Config("overflow horizon out of range".into()))?;
        let fetch = self
            .capacity
            .get_tasks_in_date_range(deadline, horizon_end, task_type)
            .await;
        *degraded = fetch.degraded;
        let counts = count_tasks_by_date(&fetch.tasks);

        // first fit: stop at the first working day with room
        let chosen = dates_inclusive(deadline, horizon_end)
            .filter(|d| is_working_day(config, *d))
            .map(|d| (d, observed_on(&counts, d)))
            .inspect(|(d, observed)| {
                tracing::debug!(
                    "{} {}: {}/{}",
                    task_type,
                    format_date_key(*d),
                    observed,
                    configured_max
                );
            })
            .find(|(_, observed)| *observed < configured_max);

        let Some((date, observed)) = chosen else {
            tracing::warn!(
                "no {} capacity for {} lead between {} and {}",
                task_type,
                priority,
                format_date_key(deadline),
                format_date_key(horizon_end)
            );
            return Ok(SlotFindingResult::failed(
                &SchedulerError::CapacityExhausted,
                *degraded,
            ));
        };

        if date > deadline {
            tracing::info!(
                "{} lead deadline {} saturated, overflowing to {}",
                priority,
                format_date_key(deadline),
                format_date_key(date)
            );
        } else {
            tracing::info!("{} lead: {} on {}", priority, task_type, format_date_key(date));
        }

        let summary = summarize(task_type, date, observed, configured_max);
        Ok(SlotFindingResult::found(
            self.slot(today, date),
            summary,
            *degraded,
        ))
    }

    fn slot(&self, today: NaiveDate, date: NaiveDate) -> ScheduledSlot {
        let relation = DayRelation::between(today, date);
        ScheduledSlot {
            date,
            date_key: format_date_key(date),
            is_today: relation == DayRelation::Today,
            is_tomorrow: relation == DayRelation::Tomorrow,
            display_label: self.formatter.format(date, relation),
        }
    }
}

fn observed_on(counts: &BTreeMap<String, u32>, date: NaiveDate) -> u32 {
    counts.get(&format_date_key(date)).copied().unwrap_or(0)
}

fn summarize(
    task_type: TaskType,
    date: NaiveDate,
    observed: u32,
    configured_max: u32,
) -> DailySummary {
    let total_count = observed.saturating_add(1);
    let over_capacity = total_count > configured_max;
    let message = if over_capacity {
        format!(
            "{total_count} {task_type} on {} exceeds the limit of {configured_max}",
            format_date_key(date)
        )
    } else {
        format!(
            "{total_count}/{configured_max} {task_type} on {}",
            format_date_key(date)
        )
    };
    DailySummary {
        message,
        total_count,
        configured_max,
        over_capacity,
    }
}
