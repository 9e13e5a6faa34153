//! Task records read from the external CRM store, and the query port.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::SchedulerError;
use crate::util::serde::TaskType;

/// Lifecycle state of a CRM task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not yet done.
    Open,
    /// Completed; still occupied its day's capacity.
    Done,
    /// Cancelled; frees its slot.
    Cancelled,
}

impl TaskStatus {
    /// Whether a task in this state counts against a day's ceiling.
    pub const fn occupies_capacity(self) -> bool {
        !matches!(self, Self::Cancelled)
    }
}

/// An existing commitment in the task store. Read-only to the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// Store identifier.
    pub id: String,
    /// Calendar date the task is due.
    pub due_date: NaiveDate,
    /// Optional time of day; ignored by capacity accounting.
    pub due_time: Option<NaiveTime>,
    /// Task kind.
    pub task_type: TaskType,
    /// Lifecycle state.
    pub status: TaskStatus,
}

/// Query capability over the external task store.
///
/// Implementations return tasks of `task_type` due within `[start, end]`
/// inclusive, or [`SchedulerError::StoreUnavailable`] on transport/auth failure.
/// Callers in this crate discard any row of another type or date, so an
/// adapter over a store that cannot filter server-side may over-return.
#[async_trait]
pub trait TaskQuery: Send + Sync {
    /// Fetch tasks of one type due in a date range.
    async fn query(
        &self,
        task_type: TaskType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ScheduledTask>, SchedulerError>;
}
