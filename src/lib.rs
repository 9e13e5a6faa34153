//! # Lead Slot Planner
//!
//! Date-granular planning of sales-lead callbacks and appointments.
//!
//! Given a lead's priority and the kind of task to create, the planner picks
//! the calendar date the task should be due on. It respects:
//!
//! - **Working days**: a configurable set of weekdays; everything else is skipped.
//! - **Per-day ceilings**: at most N callbacks (TERMINIEREN) and M appointments
//!   (TERMIN) per date, counted from the live task store.
//! - **Priority deadlines**: each priority maps to a business-day offset from today.
//!
//! Hot leads may bypass the ceilings and land on the nearest working day.
//! When the deadline date is full the search overflows forward, bounded by a
//! configurable horizon; past that the result reports `CapacityExhausted`
//! for a human to resolve.
//!
//! Capacity is advisory. The planner reads, decides, and returns; creating
//! the task is the caller's job, and concurrent callers may overshoot a
//! ceiling. See [`core::slot_finder`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lead_slot_planner::config::{get_scheduling_config, ConfigOverrides};
//! use lead_slot_planner::core::SlotFinder;
//! use lead_slot_planner::infra::InMemoryTaskStore;
//! use lead_slot_planner::util::{LeadPriority, SystemClock};
//!
//! let config = get_scheduling_config(&ConfigOverrides::from_env());
//! let store = InMemoryTaskStore::new();
//! let finder = SlotFinder::new(&config, &store, &SystemClock);
//!
//! let result = finder.find_terminieren_slot(LeadPriority::Warm).await;
//! if let Some(slot) = result.slot {
//!     println!("call back: {}", slot.display_label);
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Calendar arithmetic, capacity accounting, and slot selection.
pub mod core;
/// Scheduling configuration and recognized overrides.
pub mod config;
/// Builders for configuration values.
pub mod builders;
/// Task store adapters.
pub mod infra;
/// Request/response surface for callers.
pub mod runtime;
/// Shared utilities.
pub mod util;
