//! Core scheduling abstractions: calendar walking, capacity accounting, slot selection.

pub mod calendar;
pub mod capacity;
pub mod error;
pub mod slot_finder;
pub mod task;

pub use calendar::{
    add_business_days, format_date_key, is_working_day, next_working_day, parse_date_key,
};
pub use capacity::{count_tasks_by_date, CapacityManager, CapacityWindow, DayCapacity, TaskFetch};
pub use error::{AppResult, SchedulerError, SlotErrorKind};
pub use slot_finder::{
    format_slot_for_display, format_slot_with, DailySummary, ScheduledSlot, SlotFinder,
    SlotFindingResult,
};
pub use task::{ScheduledTask, TaskQuery, TaskStatus};
