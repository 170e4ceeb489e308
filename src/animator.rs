//! The playback controller.
//!
//! A [`SpriteAnimator`] owns a catalog of animations, the performer factory, and the
//! playback state machine:
//!
//! ```text
//!            play / resume              pause
//!  Stopped ───────────────▶ Playing ◀──────────▶ Paused
//!     ▲                        │       resume       │
//!     └──────── stop ──────────┴────────────────────┘
//! ```
//!
//! Every transition completes within a single call. Failures (unknown animation
//! names, missing targets, missing render sink) are logged through `tracing` and
//! returned as [`AnimatorError`]s; the state is left exactly as it was.

use std::sync::Arc;

use bevy_ecs::component::Component;
use strum_macros::{AsRefStr, Display};
use tracing::{debug, error, trace, warn};

use crate::asset::AnimationAsset;
use crate::catalog::Catalog;
use crate::config::{AnimatorConfig, UpdateMode};
use crate::direction::Direction;
use crate::error::{AnimatorError, AnimatorResult};
use crate::events::{AnimatorEvent, SubscriptionId, Subscribers};
use crate::factory::PerformerFactory;
use crate::performer::{Performer, PerformerKind};
use crate::sink::SharedSink;
use crate::timeline::{preserved_start_time, CycleSnapshot};

/// Playback state of an animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// What survives a `reset(keep_state = true, ..)`.
#[derive(Debug)]
struct ResetSnapshot {
    animation: Option<String>,
    state: PlaybackState,
    orientation: Option<Direction>,
    start_time: f32,
}

/// Plays animations from a catalog through kind-specific performers.
#[derive(Component)]
pub struct SpriteAnimator {
    config: AnimatorConfig,
    sink: Option<SharedSink>,
    catalog: Catalog,
    factory: Option<PerformerFactory>,
    current_animation: Option<Arc<AnimationAsset>>,
    current_kind: Option<PerformerKind>,
    state: PlaybackState,
    loaded: bool,
    host_started: bool,
    subscribers: Subscribers,
}

impl SpriteAnimator {
    /// Creates an unloaded animator. A render sink must be attached before anything can play.
    pub fn new(config: AnimatorConfig) -> Self {
        Self {
            config,
            sink: None,
            catalog: Catalog::new(),
            factory: None,
            current_animation: None,
            current_kind: None,
            state: PlaybackState::Stopped,
            loaded: false,
            host_started: false,
            subscribers: Subscribers::new(),
        }
    }

    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Attaches the render sink used from the next load onwards.
    pub fn set_sink(&mut self, sink: SharedSink) {
        self.sink = Some(sink);
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.config.update_mode
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_animation(&self) -> Option<&Arc<AnimationAsset>> {
        self.current_animation.as_ref()
    }

    pub fn current_performer(&self) -> Option<&dyn Performer> {
        self.factory.as_ref()?.get_by_kind(self.current_kind?)
    }

    pub fn current_performer_mut(&mut self) -> Option<&mut dyn Performer> {
        let kind = self.current_kind?;
        self.factory.as_mut()?.get_by_kind_mut(kind)
    }

    /// Returns the current performer as a `T`, or `None` if nothing is playing or it is another kind.
    pub fn current_performer_as<T: Performer>(&self) -> Option<&T> {
        self.current_performer()?.downcast_ref::<T>()
    }

    pub fn current_performer_as_mut<T: Performer>(&mut self) -> Option<&mut T> {
        self.current_performer_mut()?.downcast_mut::<T>()
    }

    /// Looks up a live performer by kind, whether or not it is the current one.
    pub fn performer_for_kind(&self, kind: PerformerKind) -> Option<&dyn Performer> {
        self.factory.as_ref()?.get_by_kind(kind)
    }

    /// The factory of the current load, if loaded.
    pub fn factory(&self) -> Option<&PerformerFactory> {
        self.factory.as_ref()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&AnimatorEvent) + Send + Sync + 'static) -> SubscriptionId {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Builds the catalog and performer factory. Does nothing if already loaded.
    pub fn load(&mut self) -> AnimatorResult<()> {
        if self.loaded {
            return Ok(());
        }

        let Some(sink) = self.sink.clone() else {
            error!("No render sink attached, cannot load animations");
            return Err(AnimatorError::MissingDependency("render sink"));
        };

        self.catalog = Catalog::from_animations(&self.config.animations);
        self.factory = Some(PerformerFactory::new(sink));
        self.loaded = true;

        debug!(animations = self.catalog.len(), "Loaded animator");
        Ok(())
    }

    /// Host lifecycle hook: loads, then plays the default animation if autoplay is set.
    ///
    /// Only the first call has any effect, even if it fails.
    pub fn on_start(&mut self) -> AnimatorResult<()> {
        if self.host_started {
            return Ok(());
        }
        self.host_started = true;

        self.load()?;
        if self.config.autoplay {
            self.play_default()?;
        }
        Ok(())
    }

    /// Plays the current animation, else the configured default, else the first configured animation.
    pub fn play_default(&mut self) -> AnimatorResult<&mut dyn Performer> {
        let target = self
            .current_animation
            .clone()
            .or_else(|| self.config.default_animation.clone())
            .or_else(|| self.config.animations.first().cloned());

        self.play(target.as_ref(), false)
    }

    /// Plays the catalog animation called `name`.
    pub fn play_named(&mut self, name: &str, preserve_frame: bool) -> AnimatorResult<&mut dyn Performer> {
        self.load()?;

        let Some(animation) = self.catalog.get(name).cloned() else {
            warn!(name, "Animation not found in catalog");
            return Err(AnimatorError::NotFound(name.to_string()));
        };

        self.play(Some(&animation), preserve_frame)
    }

    /// Plays `animation`, optionally carrying the current cycle phase over to it.
    ///
    /// Playing the animation that is already current changes nothing and returns its performer.
    pub fn play(
        &mut self,
        animation: Option<&Arc<AnimationAsset>>,
        preserve_frame: bool,
    ) -> AnimatorResult<&mut dyn Performer> {
        let Some(animation) = animation else {
            warn!("Play requested without an animation");
            return Err(AnimatorError::NullTarget);
        };

        self.load()?;

        let is_current = self
            .current_animation
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, animation));
        if is_current && self.current_performer().is_some() {
            trace!(animation = animation.name(), "Animation already current");
            return self.current_performer_mut().ok_or(AnimatorError::NullTarget);
        }

        let start_time = preserved_start_time(self.cycle_snapshot(), animation.duration(), preserve_frame);
        self.start_performer(Arc::clone(animation), start_time)
    }

    fn cycle_snapshot(&self) -> Option<CycleSnapshot> {
        let animation = self.current_animation.as_ref()?;
        let performer = self.current_performer()?;
        Some(CycleSnapshot {
            duration: animation.duration(),
            frame_count: animation.frame_count(),
            elapsed: performer.cycle_elapsed(),
        })
    }

    fn start_performer(&mut self, animation: Arc<AnimationAsset>, start_time: f32) -> AnimatorResult<&mut dyn Performer> {
        if let Some(previous) = self.current_performer_mut() {
            previous.stop();
        }

        let kind = animation.performer_kind();
        let Some(factory) = self.factory.as_mut() else {
            error!("Performer factory missing while loaded");
            return Err(AnimatorError::MissingDependency("performer factory"));
        };
        factory.get_or_create(kind).start(Arc::clone(&animation), start_time);

        debug!(animation = animation.name(), kind = kind.as_ref(), start_time, "Playing animation");

        self.current_animation = Some(Arc::clone(&animation));
        self.current_kind = Some(kind);
        self.state = PlaybackState::Playing;
        self.subscribers.emit(&AnimatorEvent::AnimationChanged(animation));

        self.current_performer_mut()
            .ok_or(AnimatorError::MissingDependency("performer factory"))
    }

    fn set_state(&mut self, state: PlaybackState) {
        trace!(from = self.state.as_ref(), to = state.as_ref(), "Setting playback state");
        self.state = state;
        self.subscribers.emit(&AnimatorEvent::StateChanged(state));
    }

    /// Suspends ticking. The performer keeps its clock untouched.
    pub fn pause(&mut self) -> Option<&mut dyn Performer> {
        self.set_state(PlaybackState::Paused);
        self.current_performer_mut()
    }

    /// Resumes ticking.
    ///
    /// Resuming a stopped animator yields `Playing` with no performer; ticks then do nothing.
    pub fn resume(&mut self) -> Option<&mut dyn Performer> {
        self.set_state(PlaybackState::Playing);
        self.current_performer_mut()
    }

    /// Stops playback and forgets the current animation.
    pub fn stop(&mut self) {
        if let Some(performer) = self.current_performer_mut() {
            performer.stop();
        }
        self.set_state(PlaybackState::Stopped);
        self.current_animation = None;
        self.current_kind = None;
    }

    /// Tears down and rebuilds the catalog and performers.
    ///
    /// With `keep_state`, the current animation is replayed by name on the rebuilt
    /// performers along with its orientation and playback state. With `preserve_time`
    /// as well, it restarts at an offset equal to its pre-reset duration.
    pub fn reset(&mut self, keep_state: bool, preserve_time: bool) -> AnimatorResult<()> {
        let snapshot = keep_state.then(|| ResetSnapshot {
            animation: self.current_animation.as_ref().map(|animation| animation.name().to_string()),
            state: self.state,
            orientation: self
                .current_performer()
                .and_then(|performer| performer.as_oriented())
                .map(|oriented| oriented.orientation()),
            start_time: match (&self.current_animation, preserve_time) {
                (Some(animation), true) => animation.duration(),
                _ => 0.0,
            },
        });

        debug!(keep_state, preserve_time, "Resetting animator");

        if let Some(performer) = self.current_performer_mut() {
            performer.stop();
        }
        self.catalog.clear();
        self.factory = None;
        self.loaded = false;
        self.current_animation = None;
        self.current_kind = None;
        if !keep_state {
            self.state = PlaybackState::Stopped;
        }

        self.load()?;

        let Some(ResetSnapshot {
            animation: Some(name),
            state,
            orientation,
            start_time,
        }) = snapshot
        else {
            return Ok(());
        };

        let Some(animation) = self.catalog.get(&name).cloned() else {
            warn!(name = name.as_str(), "Animation disappeared during reset");
            self.stop();
            return Ok(());
        };

        if let Some(orientation) = orientation {
            let performer = self
                .factory
                .as_mut()
                .map(|factory| factory.get_or_create(animation.performer_kind()));
            if let Some(oriented) = performer.and_then(|performer| performer.as_oriented_mut()) {
                oriented.set_orientation(orientation);
            }
        }

        self.start_performer(animation, start_time)?;

        if state == PlaybackState::Paused {
            self.set_state(state);
        } else {
            self.state = state;
        }
        Ok(())
    }

    /// Advances the current performer by `delta` seconds while playing.
    pub fn tick(&mut self, delta: f32) {
        if self.state != PlaybackState::Playing {
            return;
        }

        if let Some(performer) = self.current_performer_mut() {
            performer.tick(delta);
        }
    }
}
