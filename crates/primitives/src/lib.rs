//! Core types shared by the image session crates: payload tokens and clocks.

/// Wall-clock capability and millisecond timestamps.
pub mod clock;
/// Opaque encoded-image payloads.
pub mod payload;

pub use clock::{Clock, ManualClock, SystemClock, TimestampMs};
pub use payload::ImagePayload;
