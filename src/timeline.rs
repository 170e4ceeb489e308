//! Cycle-phase preservation for animation switches.
//!
//! When one animation is swapped for another with `preserve_frame`, the new
//! animation starts at the same fraction of its cycle that the old one had reached,
//! so that e.g. a walk-to-run switch keeps the footstep phase.

/// What the outgoing animation looked like at the moment of the switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleSnapshot {
    /// Cycle duration of the outgoing animation, in seconds.
    pub duration: f32,
    /// Frame count of the outgoing animation.
    pub frame_count: usize,
    /// The outgoing performer's unbounded cycle elapsed time.
    pub elapsed: f32,
}

/// Computes the start offset for the incoming animation.
///
/// Returns zero when nothing can be preserved: `preserve_frame` is off, there is no
/// outgoing animation, either duration is degenerate, or the outgoing animation has a
/// single frame (and therefore no phase).
pub fn preserved_start_time(current: Option<CycleSnapshot>, next_duration: f32, preserve_frame: bool) -> f32 {
    let Some(current) = current else {
        return 0.0;
    };

    if !preserve_frame {
        return 0.0;
    }

    // `!(x > 0)` also rejects NaN
    if !(current.duration > 0.0) || !(next_duration > 0.0) {
        return 0.0;
    }

    if current.frame_count <= 1 {
        return 0.0;
    }

    if !current.elapsed.is_finite() || !current.duration.is_finite() || !next_duration.is_finite() {
        return 0.0;
    }

    let cycle_time = current.elapsed.rem_euclid(current.duration);
    let normalized = cycle_time / current.duration;
    normalized * next_duration
}
