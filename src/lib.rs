//! Frame-driven sprite animation playback.
//!
//! A [`SpriteAnimator`](animator::SpriteAnimator) plays [`AnimationAsset`](asset::AnimationAsset)s
//! from its catalog through kind-specific [`Performer`](performer::Performer)s, ticked by the
//! host once per frame (directly, or through the `bevy_ecs` systems in [`systems`]).
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[cfg_attr(coverage_nightly, coverage(off))]
pub mod formatter;
#[cfg_attr(coverage_nightly, coverage(off))]
pub mod logging;

pub mod animator;
pub mod asset;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod events;
pub mod factory;
pub mod performer;
pub mod sink;
pub mod systems;
pub mod timeline;
