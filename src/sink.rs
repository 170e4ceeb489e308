//! The rendering surface performers draw into.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::asset::FrameId;

/// Receives the resolved sprite frame whenever a performer's visible frame changes.
pub trait RenderSink {
    fn show_frame(&mut self, frame: FrameId);
}

/// A render sink shared between an animator and the performers it owns.
pub type SharedSink = Arc<Mutex<dyn RenderSink + Send>>;

/// A render sink that remembers every frame it was asked to show.
#[derive(Debug, Default, Clone)]
pub struct FrameRecorder {
    frames: Vec<FrameId>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder already wrapped for sharing.
    ///
    /// Keep the returned handle to inspect the recording; pass a clone of it to the animator.
    pub fn shared() -> Arc<Mutex<FrameRecorder>> {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn frames(&self) -> &[FrameId] {
        &self.frames
    }

    /// The most recently shown frame.
    pub fn last(&self) -> Option<FrameId> {
        self.frames.last().copied()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl RenderSink for FrameRecorder {
    fn show_frame(&mut self, frame: FrameId) {
        self.frames.push(frame);
    }
}
