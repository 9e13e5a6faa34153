//! Boundary API: request/response models for callers outside the crate.

pub mod api;

pub use api::{capacity_overview, find_slot_for_request, SlotRequest, SlotResponse};
