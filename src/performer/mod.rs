//! Performers drive the playback cursor of a single animation.
//!
//! A performer is the stateful half of playback: it is bound to an
//! [`AnimationAsset`] by [`Performer::start`], accumulates cycle time on every
//! [`Performer::tick`], and pushes the resolved frame to the render sink.
//!
//! Performers come in kinds ([`PerformerKind`]). Kind-specific abilities are exposed
//! as optional capability facets (see [`Oriented`]) instead of being part of the base
//! contract, so callers that only need playback never have to care which kind they hold.

use std::any::Any;
use std::sync::Arc;

use strum_macros::{AsRefStr, Display, EnumIter};
use tracing::trace;

use crate::asset::{AnimationAsset, FrameId};
use crate::direction::Direction;
use crate::sink::SharedSink;

pub mod cycle;
pub mod windrose;

pub use cycle::CyclePerformer;
pub use windrose::WindrosePerformer;

/// The kinds of performer an animation can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PerformerKind {
    /// Plays a single frame sequence.
    Cycle,
    /// Plays per-direction frame sequences and tracks an orientation.
    Windrose,
}

impl PerformerKind {
    /// Constructs a fresh, unstarted performer of this kind.
    pub fn build(self, sink: SharedSink) -> Box<dyn Performer> {
        match self {
            PerformerKind::Cycle => Box::new(CyclePerformer::new(sink)),
            PerformerKind::Windrose => Box::new(WindrosePerformer::new(sink)),
        }
    }
}

/// Base playback contract shared by every performer kind.
pub trait Performer: Any + Send + Sync {
    fn kind(&self) -> PerformerKind;

    /// Binds `animation` and begins playback `start_time` seconds into its cycle.
    ///
    /// The frame at `start_time` is sent to the render sink immediately.
    fn start(&mut self, animation: Arc<AnimationAsset>, start_time: f32);

    /// Advances the cycle by `delta` seconds. Ignored unless started.
    fn tick(&mut self, delta: f32);

    /// Halts playback. The elapsed cycle time is kept until the next `start`.
    fn stop(&mut self);

    fn is_started(&self) -> bool;

    /// Time since the current cycle began. Unbounded; normalize against the duration.
    fn cycle_elapsed(&self) -> f32;

    /// The animation most recently bound by `start`.
    fn animation(&self) -> Option<&Arc<AnimationAsset>>;

    /// The frame most recently sent to the render sink.
    fn current_frame(&self) -> Option<FrameId>;

    fn as_oriented(&self) -> Option<&dyn Oriented> {
        None
    }

    fn as_oriented_mut(&mut self) -> Option<&mut dyn Oriented> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn Performer {
    /// Returns this performer as a `T`, or `None` if it is some other kind.
    pub fn downcast_ref<T: Performer>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Returns this performer as a mutable `T`, or `None` if it is some other kind.
    pub fn downcast_mut<T: Performer>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// Capability facet for performers that face a compass direction.
pub trait Oriented {
    fn orientation(&self) -> Direction;

    /// Turns the performer. A started performer re-resolves and shows its frame at once.
    fn set_orientation(&mut self, orientation: Direction);
}

/// Playback cursor shared by the performer implementations.
pub(crate) struct Playhead {
    sink: SharedSink,
    animation: Option<Arc<AnimationAsset>>,
    // f64: in f32 a 1/60 s delta rounds away entirely past about 2^20 s
    elapsed: f64,
    started: bool,
    frame: Option<FrameId>,
}

impl Playhead {
    pub(crate) fn new(sink: SharedSink) -> Self {
        Self {
            sink,
            animation: None,
            elapsed: 0.0,
            started: false,
            frame: None,
        }
    }

    pub(crate) fn start(&mut self, animation: Arc<AnimationAsset>, start_time: f32, direction: Direction) {
        trace!(animation = animation.name(), start_time, "Starting playhead");

        self.animation = Some(animation);
        self.elapsed = if start_time.is_finite() { f64::from(start_time.max(0.0)) } else { 0.0 };
        self.started = true;
        self.refresh(direction, true);
    }

    pub(crate) fn advance(&mut self, delta: f32, direction: Direction) {
        if !self.started {
            return;
        }

        // Negative or non-finite deltas never rewind the clock
        if delta.is_finite() && delta > 0.0 {
            self.elapsed += f64::from(delta);
        }
        self.refresh(direction, false);
    }

    pub(crate) fn stop(&mut self) {
        self.started = false;
    }

    /// Resolves the visible frame and sends it to the sink if it changed (or if forced).
    pub(crate) fn refresh(&mut self, direction: Direction, force: bool) {
        let Some(animation) = &self.animation else {
            return;
        };

        let frame = animation.frame_at(self.elapsed as f32, direction);
        if !force && frame == self.frame {
            return;
        }

        self.frame = frame;
        if let Some(frame) = frame {
            self.sink.lock().show_frame(frame);
        }
    }

    pub(crate) fn is_started(&self) -> bool {
        self.started
    }

    pub(crate) fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub(crate) fn animation(&self) -> Option<&Arc<AnimationAsset>> {
        self.animation.as_ref()
    }

    pub(crate) fn frame(&self) -> Option<FrameId> {
        self.frame
    }
}
