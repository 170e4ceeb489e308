use std::any::Any;
use std::sync::Arc;

use crate::asset::{AnimationAsset, FrameId};
use crate::direction::Direction;
use crate::performer::{Performer, PerformerKind, Playhead};
use crate::sink::SharedSink;

/// The default performer: cycles through a single frame sequence.
pub struct CyclePerformer {
    playhead: Playhead,
}

impl CyclePerformer {
    pub fn new(sink: SharedSink) -> Self {
        Self {
            playhead: Playhead::new(sink),
        }
    }
}

impl Performer for CyclePerformer {
    fn kind(&self) -> PerformerKind {
        PerformerKind::Cycle
    }

    fn start(&mut self, animation: Arc<AnimationAsset>, start_time: f32) {
        self.playhead.start(animation, start_time, Direction::default());
    }

    fn tick(&mut self, delta: f32) {
        self.playhead.advance(delta, Direction::default());
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

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
