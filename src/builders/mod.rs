//! Builders to construct scheduling configuration outside the override surface.

pub mod config_builder;

pub use config_builder::SchedulingConfigBuilder;
