use std::fmt;
use std::sync::Arc;

use crate::animator::PlaybackState;
use crate::asset::AnimationAsset;

/// Notifications emitted by an animator.
#[derive(Debug, Clone)]
pub enum AnimatorEvent {
    /// A different animation started playing.
    AnimationChanged(Arc<AnimationAsset>),
    /// The playback state was set (possibly to the value it already had).
    StateChanged(PlaybackState),
}

impl AnimatorEvent {
    /// Name of the animation carried by an `AnimationChanged` event.
    pub fn animation_name(&self) -> Option<&str> {
        match self {
            AnimatorEvent::AnimationChanged(animation) => Some(animation.name()),
            AnimatorEvent::StateChanged(_) => None,
        }
    }
}

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Listener = Box<dyn FnMut(&AnimatorEvent) + Send + Sync>;

/// Ordered list of event listeners.
///
/// Delivery is synchronous and follows subscription order.
#[derive(Default)]
pub struct Subscribers {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&AnimatorEvent) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &AnimatorEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers").field("len", &self.listeners.len()).finish()
    }
}
