use std::sync::Arc;

use anyhow::{Context, Result};
use bevy_ecs::world::World;
use sprite_animator::animator::SpriteAnimator;
use sprite_animator::asset::{AnimationAsset, DirectionalFrames, FrameId, LoopMode};
use sprite_animator::config::{AnimatorConfig, UpdateMode};
use sprite_animator::constants::DEMO_FRAMES;
use sprite_animator::direction::Direction;
use sprite_animator::events::AnimatorEvent;
use sprite_animator::logging::setup_logging;
use sprite_animator::performer::{Oriented, WindrosePerformer};
use sprite_animator::sink::FrameRecorder;
use sprite_animator::systems::{animator_schedule, DeltaTime};
use tracing::{info, info_span};

fn frames(ids: std::ops::Range<u32>) -> impl Iterator<Item = FrameId> {
    ids.map(FrameId)
}

fn demo_config() -> AnimatorConfig {
    let idle = Arc::new(AnimationAsset::new("idle", 4.0, frames(0..4)).with_loop_mode(LoopMode::PingPong));
    let run = Arc::new(AnimationAsset::new("run", 16.0, frames(10..18)));
    let walk = Arc::new(AnimationAsset::windrose(
        "walk",
        8.0,
        DirectionalFrames::new()
            .with(Direction::North, frames(100..104))
            .with(Direction::East, frames(110..114))
            .with(Direction::South, frames(120..124))
            .with(Direction::West, frames(130..134)),
    ));

    AnimatorConfig::new()
        .with_update_mode(UpdateMode::Update)
        .with_default_animation(Arc::clone(&idle))
        .with_animations([idle, run, walk])
}

pub fn main() -> Result<()> {
    setup_logging().context("Could not set global default subscriber")?;

    let recorder = FrameRecorder::shared();
    let mut animator = SpriteAnimator::new(demo_config()).with_sink(recorder.clone());
    animator.subscribe(|event| match event {
        AnimatorEvent::AnimationChanged(animation) => info!(animation = animation.name(), "Animation changed"),
        AnimatorEvent::StateChanged(state) => info!(state = state.as_ref(), "State changed"),
    });

    let mut world = World::new();
    world.insert_resource(DeltaTime { seconds: 1.0 / 60.0 });
    let entity = world.spawn(animator).id();
    let mut schedule = animator_schedule(UpdateMode::Update);

    let _span = info_span!("demo").entered();
    for frame in 0..DEMO_FRAMES {
        schedule.run(&mut world);

        let mut animator = world
            .get_mut::<SpriteAnimator>(entity)
            .context("Animator entity vanished")?;

        match frame {
            45 => {
                let performer = animator.play_named("run", true)?;
                info!(start = performer.cycle_elapsed(), "Switched to run, keeping phase");
            }
            90 => {
                animator.play_named("walk", true)?;
            }
            120 => {
                if let Some(walk) = animator.current_performer_as_mut::<WindrosePerformer>() {
                    walk.set_orientation(Direction::East);
                }
            }
            150 => {
                animator.pause();
            }
            170 => {
                animator.resume();
            }
            200 => {
                animator.reset(true, false)?;
            }
            _ => {}
        }
    }

    let recorder = recorder.lock();
    info!(
        frames_shown = recorder.frames().len(),
        last = ?recorder.last(),
        "Demo finished"
    );
    Ok(())
}
