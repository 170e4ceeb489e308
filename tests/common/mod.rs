#![allow(dead_code)]

use std::sync::Arc;

use parking_lot::Mutex;
use sprite_animator::{
    animator::SpriteAnimator,
    asset::{AnimationAsset, DirectionalFrames, FrameId},
    config::AnimatorConfig,
    direction::Direction,
    events::AnimatorEvent,
    sink::FrameRecorder,
};

pub const EPSILON: f32 = 1e-4;

pub fn frames(ids: std::ops::Range<u32>) -> Vec<FrameId> {
    ids.map(FrameId).collect()
}

/// The animations every test animator is configured with.
#[derive(Clone)]
pub struct TestAssets {
    /// 1.0s, 4 frames (0..4)
    pub idle: Arc<AnimationAsset>,
    /// 0.5s, 8 frames (10..18)
    pub run: Arc<AnimationAsset>,
    /// 0.5s windrose, 4 frames per cardinal direction
    pub walk: Arc<AnimationAsset>,
    /// 0.1s, a single frame
    pub still: Arc<AnimationAsset>,
}

impl TestAssets {
    pub fn new() -> Self {
        Self {
            idle: Arc::new(AnimationAsset::new("idle", 4.0, frames(0..4))),
            run: Arc::new(AnimationAsset::new("run", 16.0, frames(10..18))),
            walk: Arc::new(AnimationAsset::windrose(
                "walk",
                8.0,
                DirectionalFrames::new()
                    .with(Direction::North, frames(100..104))
                    .with(Direction::East, frames(110..114))
                    .with(Direction::South, frames(120..124))
                    .with(Direction::West, frames(130..134)),
            )),
            still: Arc::new(AnimationAsset::new("still", 10.0, frames(50..51))),
        }
    }

    pub fn all(&self) -> Vec<Arc<AnimationAsset>> {
        vec![
            Arc::clone(&self.idle),
            Arc::clone(&self.run),
            Arc::clone(&self.walk),
            Arc::clone(&self.still),
        ]
    }

    pub fn config(&self) -> AnimatorConfig {
        AnimatorConfig::new().with_animations(self.all())
    }
}

/// An animator wired to a frame recorder and an event log.
pub struct TestAnimator {
    pub animator: SpriteAnimator,
    pub assets: TestAssets,
    pub recorder: Arc<Mutex<FrameRecorder>>,
    pub events: Arc<Mutex<Vec<AnimatorEvent>>>,
}

impl TestAnimator {
    pub fn elapsed(&self) -> f32 {
        self.animator
            .current_performer()
            .expect("Animator should have a performer")
            .cycle_elapsed()
    }

    pub fn current_name(&self) -> Option<String> {
        self.animator.current_animation().map(|animation| animation.name().to_string())
    }

    pub fn take_events(&self) -> Vec<AnimatorEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn last_frame(&self) -> Option<FrameId> {
        self.recorder.lock().last()
    }
}

pub fn create_test_animator_with(config: impl FnOnce(&TestAssets) -> AnimatorConfig) -> TestAnimator {
    let assets = TestAssets::new();
    let recorder = FrameRecorder::shared();
    let events = Arc::new(Mutex::new(Vec::new()));

    let mut animator = SpriteAnimator::new(config(&assets)).with_sink(recorder.clone());
    let log = Arc::clone(&events);
    animator.subscribe(move |event| log.lock().push(event.clone()));

    TestAnimator {
        animator,
        assets,
        recorder,
        events,
    }
}

pub fn create_test_animator() -> TestAnimator {
    create_test_animator_with(TestAssets::config)
}

/// A shared recorder plus the handle performers write through.
pub fn create_sink() -> (Arc<Mutex<FrameRecorder>>, sprite_animator::sink::SharedSink) {
    let recorder = FrameRecorder::shared();
    let sink: sprite_animator::sink::SharedSink = recorder.clone();
    (recorder, sink)
}
