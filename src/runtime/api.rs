//! API-facing request/response models.
//!
//! Callers hand in raw CRM strings; this layer normalizes them and flags
//! anything it had to coerce.

use serde::{Deserialize, Serialize};

use crate::config::normalize_lead_priority;
use crate::core::{
    format_slot_for_display, parse_date_key, CapacityManager, DayCapacity, SchedulerError,
    SlotFinder, SlotFindingResult,
};
use crate::util::serde::TaskType;

/// Slot request as received from the lead-intake surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotRequest {
    /// Raw lead classification, e.g. `"Hot"`.
    pub priority: String,
    /// Kind of task to plan.
    pub task_type: TaskType,
}

/// Slot response returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    /// Search outcome, including the coercion and degraded flags.
    pub result: SlotFindingResult,
    /// Display text for the chosen slot, if any.
    pub formatted: Option<String>,
}

/// Normalize the request's priority and plan a slot.
pub async fn find_slot_for_request(finder: &SlotFinder<'_>, req: SlotRequest) -> SlotResponse {
    let normalized = normalize_lead_priority(&req.priority);
    if normalized.was_coerced {
        tracing::warn!(
            "lead priority {:?} not recognized, planning as {}",
            req.priority,
            normalized.priority
        );
    }
    let result = finder
        .find_slot(normalized.priority, req.task_type)
        .await
        .with_priority_coerced(normalized.was_coerced);
    let formatted = result.slot.as_ref().map(format_slot_for_display);
    SlotResponse { result, formatted }
}

/// Capacity for a range given as `YYYY-MM-DD` keys.
pub async fn capacity_overview(
    manager: &CapacityManager<'_>,
    start_key: &str,
    end_key: &str,
    task_type: TaskType,
) -> Result<Vec<DayCapacity>, SchedulerError> {
    let start = parse_date_key(start_key)?;
    let end = parse_date_key(end_key)?;
    Ok(manager.get_capacity_for_date_range(start, end, task_type).await)
}
