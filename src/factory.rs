//! Per-animator performer cache.

use smallvec::SmallVec;
use tracing::debug;

use crate::asset::AnimationAsset;
use crate::performer::{Performer, PerformerKind};
use crate::sink::SharedSink;

/// Resolves the performer for an animation, creating at most one performer per kind.
///
/// Switching between animations of the same kind always hands back the same
/// performer instance, rebound by the caller through [`Performer::start`]. A factory
/// belongs to exactly one animator and is rebuilt from scratch when that animator resets.
pub struct PerformerFactory {
    sink: SharedSink,
    performers: SmallVec<[(PerformerKind, Box<dyn Performer>); 2]>,
    instances_created: usize,
}

impl PerformerFactory {
    pub fn new(sink: SharedSink) -> Self {
        Self {
            sink,
            performers: SmallVec::new(),
            instances_created: 0,
        }
    }

    fn position(&self, kind: PerformerKind) -> Option<usize> {
        self.performers.iter().position(|(k, _)| *k == kind)
    }

    /// Returns the live performer of the given kind, building it on first request.
    pub fn get_or_create(&mut self, kind: PerformerKind) -> &mut dyn Performer {
        let index = match self.position(kind) {
            Some(index) => index,
            None => {
                debug!(kind = kind.as_ref(), "Creating performer");
                self.performers.push((kind, kind.build(self.sink.clone())));
                self.instances_created += 1;
                self.performers.len() - 1
            }
        };
        self.performers[index].1.as_mut()
    }

    /// Returns the performer able to play `animation`.
    pub fn get(&mut self, animation: &AnimationAsset) -> &mut dyn Performer {
        self.get_or_create(animation.performer_kind())
    }

    /// Returns the performer for `animation` as a `T`, or `None` if that performer is another type.
    pub fn get_as<T: Performer>(&mut self, animation: &AnimationAsset) -> Option<&mut T> {
        self.get(animation).downcast_mut::<T>()
    }

    /// Looks up an existing performer without creating one.
    pub fn get_by_kind(&self, kind: PerformerKind) -> Option<&dyn Performer> {
        self.position(kind).map(|index| self.performers[index].1.as_ref())
    }

    pub fn get_by_kind_mut(&mut self, kind: PerformerKind) -> Option<&mut dyn Performer> {
        let index = self.position(kind)?;
        Some(self.performers[index].1.as_mut())
    }

    /// Number of live performers.
    pub fn performer_count(&self) -> usize {
        self.performers.len()
    }

    /// Total number of performers this factory has ever built.
    pub fn instances_created(&self) -> usize {
        self.instances_created
    }

    /// Stops every live performer.
    pub fn stop_all(&mut self) {
        for (_, performer) in self.performers.iter_mut() {
            performer.stop();
        }
    }
}
