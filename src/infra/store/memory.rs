//! In-memory task store for development and testing.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use parking_lot::RwLock;

use crate::core::{ScheduledTask, SchedulerError, TaskQuery, TaskStatus};
use crate::util::serde::TaskType;

/// Thread-safe task list implementing [`TaskQuery`].
///
/// Can be flipped into an unavailable state to simulate transport failures.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: RwLock<Vec<ScheduledTask>>,
    unavailable: AtomicBool,
}

impl InMemoryTaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an open task due on `due_date` and return its generated id.
    pub fn insert(&self, task_type: TaskType, due_date: NaiveDate) -> String {
        self.insert_at(task_type, due_date, None)
    }

    /// Add an open task with a time of day.
    pub fn insert_at(
        &self,
        task_type: TaskType,
        due_date: NaiveDate,
        due_time: Option<NaiveTime>,
    ) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.push(ScheduledTask {
            id: id.clone(),
            due_date,
            due_time,
            task_type,
            status: TaskStatus::Open,
        });
        id
    }

    /// Add `count` open tasks of one type on one date.
    pub fn insert_many(&self, task_type: TaskType, due_date: NaiveDate, count: u32) {
        for _ in 0..count {
            self.insert(task_type, due_date);
        }
    }

    /// Add a fully specified task.
    pub fn push(&self, task: ScheduledTask) {
        self.tasks.write().push(task);
    }

    /// Update a task's status. Returns false when the id is unknown.
    pub fn set_status(&self, id: &str, status: TaskStatus) -> bool {
        let mut tasks = self.tasks.write();
        match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    /// Make subsequent queries fail with [`SchedulerError::StoreUnavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Release);
    }

    /// Number of stored tasks.
    pub fn len(&self) -> usize {
        self.tasks.read().len()
    }

    /// True when no tasks are stored.
    pub fn is_empty(&self) -> bool {
        self.tasks.read().is_empty()
    }
}

#[async_trait]
impl TaskQuery for InMemoryTaskStore {
    async fn query(
        &self,
        task_type: TaskType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<ScheduledTask>, SchedulerError> {
        if self.unavailable.load(Ordering::Acquire) {
            return Err(SchedulerError::StoreUnavailable(
                "in-memory store marked unavailable".into(),
            ));
        }
        let tasks = self.tasks.read();
        Ok(tasks
            .iter()
            .filter(|t| t.task_type == task_type && t.due_date >= start && t.due_date <= end)
            .cloned()
            .collect())
    }
}
