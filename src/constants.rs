//! This module contains all the constants used by the animator and its demo binary.

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default length of a fixed simulation step (60 steps per second).
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Number of frames the demo binary simulates.
pub const DEMO_FRAMES: u32 = 240;
