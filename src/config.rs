//! Animator configuration, as supplied by the host.

use std::sync::Arc;

use strum_macros::{AsRefStr, EnumString};

use crate::asset::AnimationAsset;

/// When the host scheduler advances an animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum UpdateMode {
    /// Once per rendered frame, with the other per-frame systems.
    #[default]
    Update,
    /// Once per rendered frame, after the regular update pass.
    LateUpdate,
    /// On the fixed simulation step.
    FixedUpdate,
}

/// Plain configuration for a [`SpriteAnimator`](crate::animator::SpriteAnimator).
#[derive(Debug, Clone)]
pub struct AnimatorConfig {
    pub update_mode: UpdateMode,
    /// Play the default animation when the host first starts the animator.
    pub autoplay: bool,
    /// Animation played by [`play_default`](crate::animator::SpriteAnimator::play_default) before anything else has played.
    pub default_animation: Option<Arc<AnimationAsset>>,
    /// Ordered list the catalog is built from.
    pub animations: Vec<Arc<AnimationAsset>>,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            update_mode: UpdateMode::default(),
            autoplay: true,
            default_animation: None,
            animations: Vec::new(),
        }
    }
}

impl AnimatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_update_mode(mut self, update_mode: UpdateMode) -> Self {
        self.update_mode = update_mode;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_default_animation(mut self, animation: Arc<AnimationAsset>) -> Self {
        self.default_animation = Some(animation);
        self
    }

    pub fn with_animation(mut self, animation: Arc<AnimationAsset>) -> Self {
        self.animations.push(animation);
        self
    }

    pub fn with_animations(mut self, animations: impl IntoIterator<Item = Arc<AnimationAsset>>) -> Self {
        self.animations.extend(animations);
        self
    }
}
