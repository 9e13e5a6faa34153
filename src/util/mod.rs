//! Clock port, shared enums, display formatting, and telemetry.

pub mod clock;
pub mod format;
pub mod serde;
pub mod telemetry;

pub use self::clock::*;
pub use self::format::*;
pub use self::serde::*;
pub use self::telemetry::*;
