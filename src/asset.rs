//! Immutable animation assets.
//!
//! An [`AnimationAsset`] is a pure description of one animation: its frames, its
//! frame rate, and how it loops. The playback engine never mutates an asset; assets
//! are shared between animators as `Arc<AnimationAsset>`, and every query here is a
//! deterministic function of the asset's own parameters.

use smallvec::SmallVec;
use strum_macros::{AsRefStr, EnumString};

use crate::direction::Direction;
use crate::performer::PerformerKind;

/// Identifier of a single sprite frame, as understood by the render sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u32);

/// Inline storage for a frame list; most sprite animations have eight frames or fewer.
pub type FrameSequence = SmallVec<[FrameId; 8]>;

/// How playback continues once the last frame has been reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum LoopMode {
    /// Wrap back to the first frame.
    #[default]
    Loop,
    /// Run forward, then backward, without repeating the end frames.
    PingPong,
    /// Hold the last frame forever.
    Once,
}

impl LoopMode {
    /// Number of frame steps in one cycle of a sequence with `len` frames.
    pub const fn cycle_len(self, len: usize) -> usize {
        match self {
            LoopMode::PingPong if len > 1 => 2 * len - 2,
            _ => len,
        }
    }

    /// Maps an absolute frame step onto an index into a sequence with `len` frames.
    pub fn resolve(self, step: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }

        let index = match self {
            LoopMode::Loop => step % len,
            LoopMode::Once => step.min(len - 1),
            LoopMode::PingPong => {
                let cycle = self.cycle_len(len);
                let position = step % cycle;
                if position < len {
                    position
                } else {
                    cycle - position
                }
            }
        };
        Some(index)
    }
}

/// Per-direction frame lists for a windrose animation.
///
/// Directions without frames are allowed; they fall back to the nearest populated direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionalFrames {
    frames: [FrameSequence; 8],
}

impl DirectionalFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the frames used when facing `direction`.
    pub fn with(mut self, direction: Direction, frames: impl IntoIterator<Item = FrameId>) -> Self {
        self.frames[direction.as_usize()] = frames.into_iter().collect();
        self
    }

    /// Returns the frames registered for exactly this direction (possibly empty).
    pub fn get(&self, direction: Direction) -> &[FrameId] {
        &self.frames[direction.as_usize()]
    }

    pub fn has_direction(&self, direction: Direction) -> bool {
        !self.frames[direction.as_usize()].is_empty()
    }

    /// Number of directions with at least one frame.
    pub fn direction_count(&self) -> usize {
        self.frames.iter().filter(|frames| !frames.is_empty()).count()
    }

    /// Length of the longest per-direction frame list.
    pub fn longest(&self) -> usize {
        self.frames.iter().map(|frames| frames.len()).max().unwrap_or(0)
    }

    /// Resolves the direction actually used when facing `direction`.
    ///
    /// The exact direction wins; otherwise the populated direction with the fewest
    /// eighth-turns away is used, preferring the clockwise-first one on ties.
    pub fn resolve_direction(&self, direction: Direction) -> Option<Direction> {
        if self.has_direction(direction) {
            return Some(direction);
        }

        Direction::DIRECTIONS
            .iter()
            .copied()
            .filter(|&candidate| self.has_direction(candidate))
            .min_by_key(|&candidate| Direction::steps_between(direction, candidate))
    }
}

/// The frames of an animation, shaped by animation kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frames {
    /// A single ordered list of frames.
    Sequence(FrameSequence),
    /// One ordered list per compass direction.
    Windrose(DirectionalFrames),
}

/// Immutable description of one animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationAsset {
    name: String,
    frame_rate: f32,
    frames: Frames,
    loop_mode: LoopMode,
}

impl AnimationAsset {
    /// Creates a looping sequence animation.
    pub fn new(name: impl Into<String>, frame_rate: f32, frames: impl IntoIterator<Item = FrameId>) -> Self {
        Self {
            name: name.into(),
            frame_rate,
            frames: Frames::Sequence(frames.into_iter().collect()),
            loop_mode: LoopMode::default(),
        }
    }

    /// Creates a looping windrose animation.
    pub fn windrose(name: impl Into<String>, frame_rate: f32, frames: DirectionalFrames) -> Self {
        Self {
            name: name.into(),
            frame_rate,
            frames: Frames::Windrose(frames),
            loop_mode: LoopMode::default(),
        }
    }

    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn frames(&self) -> &Frames {
        &self.frames
    }

    /// The performer kind able to play this animation.
    pub fn performer_kind(&self) -> PerformerKind {
        match self.frames {
            Frames::Sequence(_) => PerformerKind::Cycle,
            Frames::Windrose(_) => PerformerKind::Windrose,
        }
    }

    /// Length of the underlying frame list (the longest one, for windrose animations).
    pub fn sequence_len(&self) -> usize {
        match &self.frames {
            Frames::Sequence(frames) => frames.len(),
            Frames::Windrose(frames) => frames.longest(),
        }
    }

    /// Number of frame steps in one playback cycle, accounting for the loop mode.
    pub fn frame_count(&self) -> usize {
        self.loop_mode.cycle_len(self.sequence_len())
    }

    /// Length of one playback cycle in seconds.
    ///
    /// Zero when the frame rate is not a finite positive number.
    pub fn duration(&self) -> f32 {
        if !self.has_valid_frame_rate() {
            return 0.0;
        }
        self.frame_count() as f32 / self.frame_rate
    }

    fn has_valid_frame_rate(&self) -> bool {
        self.frame_rate.is_finite() && self.frame_rate > 0.0
    }

    /// The absolute frame step reached after `time` seconds of playback.
    pub fn step_at(&self, time: f32) -> usize {
        if !self.has_valid_frame_rate() || !time.is_finite() || time <= 0.0 {
            return 0;
        }
        // The float-to-int cast saturates, so enormous times clamp instead of wrapping
        (time * self.frame_rate).floor() as usize
    }

    /// Resolves the visible frame after `time` seconds of playback while facing `direction`.
    ///
    /// Sequence animations ignore the direction. Windrose directions with fewer frames than
    /// the longest one hold each frame for proportionally longer, so the cycle period always
    /// matches [`duration`](Self::duration). Returns `None` when there is nothing to show.
    pub fn frame_at(&self, time: f32, direction: Direction) -> Option<FrameId> {
        let (frames, span): (&[FrameId], usize) = match &self.frames {
            Frames::Sequence(frames) => (frames.as_slice(), frames.len()),
            Frames::Windrose(frames) => (frames.get(frames.resolve_direction(direction)?), frames.longest()),
        };

        // Windrose steps run over the longest list so every direction shares one period;
        // shorter lists are stretched across it.
        let index = self.loop_mode.resolve(self.step_at(time), span)?;
        frames.get(index * frames.len() / span).copied()
    }
}
