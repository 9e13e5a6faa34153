//! Per-date capacity accounting against the external task store.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::SchedulingConfig;
use crate::core::calendar::{dates_inclusive, format_date_key, is_working_day};
use crate::core::{ScheduledTask, TaskQuery};
use crate::util::serde::TaskType;

/// Remaining room for one task type on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCapacity {
    /// Calendar date.
    pub date: NaiveDate,
    /// Canonical `YYYY-MM-DD` key.
    pub date_key: String,
    /// Task type the figures refer to.
    pub task_type: TaskType,
    /// Configured ceiling; `u32::MAX` for types without one.
    pub configured_max: u32,
    /// Tasks already due on this date.
    pub observed_count: u32,
    /// `configured_max - observed_count`, floored at zero.
    pub remaining: u32,
    /// `observed_count >= configured_max`.
    pub is_over_capacity: bool,
    /// Whether the date is a configured working day.
    pub is_working_day: bool,
}

/// Result of a store read that may have been degraded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFetch {
    /// Tasks returned by the store.
    pub tasks: Vec<ScheduledTask>,
    /// The store failed and `tasks` is empty in its place.
    pub degraded: bool,
}

/// Capacity for a contiguous date range from a single store snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityWindow {
    /// One entry per calendar date, in order.
    pub days: Vec<DayCapacity>,
    /// Counts are zero because the store could not be read.
    pub degraded: bool,
}

impl CapacityWindow {
    /// Entry for `date`, if it lies inside the window.
    pub fn day(&self, date: NaiveDate) -> Option<&DayCapacity> {
        self.days.iter().find(|d| d.date == date)
    }
}

/// Group tasks by canonical due-date key. Cancelled tasks are skipped.
pub fn count_tasks_by_date(tasks: &[ScheduledTask]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for task in tasks.iter().filter(|t| t.status.occupies_capacity()) {
        *counts.entry(format_date_key(task.due_date)).or_insert(0) += 1;
    }
    counts
}

/// Reads commitments from a [`TaskQuery`] and derives remaining capacity.
///
/// Holds only borrowed, immutable inputs; every call reflects the store as
/// it is at that moment.
#[derive(Clone, Copy)]
pub struct CapacityManager<'a> {
    config: &'a SchedulingConfig,
    store: &'a dyn TaskQuery,
}

impl<'a> CapacityManager<'a> {
    /// Create a manager over `store` using `config` ceilings.
    pub fn new(config: &'a SchedulingConfig, store: &'a dyn TaskQuery) -> Self {
        Self { config, store }
    }

    /// Configuration in use.
    pub const fn config(&self) -> &'a SchedulingConfig {
        self.config
    }

    /// Ceiling applied to `task_type`.
    pub fn configured_max(&self, task_type: TaskType) -> u32 {
        self.config.max_per_day(task_type).unwrap_or(u32::MAX)
    }

    /// Tasks of `task_type` due in `[start, end]`.
    ///
    /// A store failure is absorbed: the result is empty with `degraded` set.
    /// Rows of another type or outside the range are dropped, so a loose
    /// store cannot inflate the counts.
    pub async fn get_tasks_in_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        task_type: TaskType,
    ) -> TaskFetch {
        match self.store.query(task_type, start, end).await {
            Ok(mut tasks) => {
                let returned = tasks.len();
                tasks.retain(|t| t.task_type == task_type && (start..=end).contains(&t.due_date));
                if tasks.len() < returned {
                    tracing::warn!(
                        "task store returned {} rows outside {} {}..{}, ignoring them",
                        returned - tasks.len(),
                        task_type,
                        format_date_key(start),
                        format_date_key(end)
                    );
                }
                TaskFetch {
                    tasks,
                    degraded: false,
                }
            }
            Err(e) => {
                tracing::warn!(
                    "task store query for {} {}..{} failed, assuming no existing tasks: {}",
                    task_type,
                    format_date_key(start),
                    format_date_key(end),
                    e
                );
                TaskFetch {
                    tasks: Vec::new(),
                    degraded: true,
                }
            }
        }
    }

    /// Capacity per calendar date in `[start, end]`, with the degraded flag.
    pub async fn capacity_window(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        task_type: TaskType,
    ) -> CapacityWindow {
        if start > end {
            return CapacityWindow::default();
        }
        let fetch = self.get_tasks_in_date_range(start, end, task_type).await;
        let counts = count_tasks_by_date(&fetch.tasks);
        let configured_max = self.configured_max(task_type);

        let days = dates_inclusive(start, end)
            .map(|date| {
                let date_key = format_date_key(date);
                let observed_count = counts.get(&date_key).copied().unwrap_or(0);
                DayCapacity {
                    date,
                    task_type,
                    configured_max,
                    observed_count,
                    remaining: configured_max.saturating_sub(observed_count),
                    is_over_capacity: observed_count >= configured_max,
                    is_working_day: is_working_day(self.config, date),
                    date_key,
                }
            })
            .collect();

        CapacityWindow {
            days,
            degraded: fetch.degraded,
        }
    }

    /// Capacity per calendar date in `[start, end]`, non-working days included.
    pub async fn get_capacity_for_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        task_type: TaskType,
    ) -> Vec<DayCapacity> {
        self.capacity_window(start, end, task_type).await.days
    }

    /// Strictly fewer tasks than the ceiling are due on `date`.
    pub async fn has_capacity_on_date(&self, date: NaiveDate, task_type: TaskType) -> bool {
        self.capacity_window(date, date, task_type)
            .await
            .days
            .first()
            .is_some_and(|d| d.observed_count < d.configured_max)
    }
}
