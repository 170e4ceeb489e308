//! Host scheduling through `bevy_ecs`.
//!
//! Animators are plain [`Component`](bevy_ecs::component::Component)s. The systems
//! here start them (autoplay) and tick them, each tick system only touching the
//! animators whose [`UpdateMode`] matches its cadence.

use bevy_ecs::prelude::*;
use tracing::debug;

use crate::animator::SpriteAnimator;
use crate::config::UpdateMode;
use crate::formatter::increment_tick;

/// Seconds elapsed since the previous rendered frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct DeltaTime {
    pub seconds: f32,
}

/// Length of one fixed simulation step, in seconds.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FixedDeltaTime {
    pub seconds: f32,
}

impl Default for FixedDeltaTime {
    fn default() -> Self {
        Self {
            seconds: crate::constants::FIXED_TIMESTEP,
        }
    }
}

/// Runs the host start hook of every animator (it only acts once per animator).
pub fn autoplay_animators_system(mut query: Query<&mut SpriteAnimator>) {
    for mut animator in query.iter_mut() {
        if let Err(error) = animator.on_start() {
            debug!(%error, "Animator did not start");
        }
    }
}

fn tick_animators(mode: UpdateMode, delta: f32, query: &mut Query<&mut SpriteAnimator>) {
    increment_tick();
    for mut animator in query.iter_mut() {
        if animator.update_mode() == mode {
            animator.tick(delta);
        }
    }
}

/// Ticks `Update` animators with the frame delta.
pub fn update_animators_system(dt: Res<DeltaTime>, mut query: Query<&mut SpriteAnimator>) {
    tick_animators(UpdateMode::Update, dt.seconds, &mut query);
}

/// Ticks `LateUpdate` animators with the frame delta.
pub fn late_update_animators_system(dt: Res<DeltaTime>, mut query: Query<&mut SpriteAnimator>) {
    tick_animators(UpdateMode::LateUpdate, dt.seconds, &mut query);
}

/// Ticks `FixedUpdate` animators with the fixed step.
pub fn fixed_update_animators_system(dt: Res<FixedDeltaTime>, mut query: Query<&mut SpriteAnimator>) {
    tick_animators(UpdateMode::FixedUpdate, dt.seconds, &mut query);
}

/// Builds a schedule that starts pending animators, then ticks those using `mode`.
pub fn animator_schedule(mode: UpdateMode) -> Schedule {
    let mut schedule = Schedule::default();
    match mode {
        UpdateMode::Update => schedule.add_systems((autoplay_animators_system, update_animators_system).chain()),
        UpdateMode::LateUpdate => schedule.add_systems((autoplay_animators_system, late_update_animators_system).chain()),
        UpdateMode::FixedUpdate => {
            schedule.add_systems((autoplay_animators_system, fixed_update_animators_system).chain())
        }
    };
    schedule
}
