use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

use crate::asset::AnimationAsset;

/// Name-keyed collection of the animations available to one animator.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    animations: HashMap<String, Arc<AnimationAsset>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from an ordered list. Later entries replace earlier ones with the same name.
    pub fn from_animations<'a>(animations: impl IntoIterator<Item = &'a Arc<AnimationAsset>>) -> Self {
        let mut catalog = Self::new();
        for animation in animations {
            catalog.insert(Arc::clone(animation));
        }
        catalog
    }

    /// Registers an animation, returning whatever it replaced.
    pub fn insert(&mut self, animation: Arc<AnimationAsset>) -> Option<Arc<AnimationAsset>> {
        let replaced = self.animations.insert(animation.name().to_string(), animation);
        if let Some(previous) = &replaced {
            trace!(name = previous.name(), "Animation name registered twice, keeping the later one");
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&Arc<AnimationAsset>> {
        self.animations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.animations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    pub fn clear(&mut self) {
        self.animations.clear();
    }

    /// Names of all registered animations, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.animations.keys().map(String::as_str)
    }
}
