use std::any::Any;
use std::sync::Arc;

use tracing::trace;

use crate::asset::{AnimationAsset, FrameId};
use crate::direction::Direction;
use crate::performer::{Oriented, Performer, PerformerKind, Playhead};
use crate::sink::SharedSink;

/// Performer for windrose animations, which show a different sequence per facing direction.
///
/// All directions share one clock, so turning mid-cycle keeps the current phase.
pub struct WindrosePerformer {
    playhead: Playhead,
    orientation: Direction,
}

impl WindrosePerformer {
    pub fn new(sink: SharedSink) -> Self {
        Self {
            playhead: Playhead::new(sink),
            orientation: Direction::default(),
        }
    }
}

impl Oriented for WindrosePerformer {
    fn orientation(&self) -> Direction {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Direction) {
        if self.orientation == orientation {
            return;
        }

        trace!(from = self.orientation.as_ref(), to = orientation.as_ref(), "Turning windrose performer");
        self.orientation = orientation;
        if self.playhead.is_started() {
            self.playhead.refresh(orientation, false);
        }
    }
}

impl Performer for WindrosePerformer {
    fn kind(&self) -> PerformerKind {
        PerformerKind::Windrose
    }

    fn start(&mut self, animation: Arc<AnimationAsset>, start_time: f32) {
        self.playhead.start(animation, start_time, self.orientation);
    }

    fn tick(&mut self, delta: f32) {
        self.playhead.advance(delta, self.orientation);
    }

    fn stop(&mut self) {
        self.playhead.stop();
    }

    fn is_started(&self) -> bool {
        self.playhead.is_started()
    }

    fn cycle_elapsed(&self) -> f32 {
        self.playhead.elapsed()
    }

    fn animation(&self) -> Option<&Arc<AnimationAsset>> {
        self.playhead.animation()
    }

    fn current_frame(&self) -> Option<FrameId> {
        self.playhead.frame()
    }

    fn as_oriented(&self) -> Option<&dyn Oriented> {
        Some(self)
    }

    fn as_oriented_mut(&mut self) -> Option<&mut dyn Oriented> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
