//! Centralized error types for the sprite animator.
//!
//! Playback failures are non-fatal: they are logged where they occur and handed
//! back to the caller as an `Err`, leaving the animator's prior state untouched.

/// Main error type for animator operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimatorError {
    /// A named animation is not present in the catalog.
    #[error("Animation not found: {0}")]
    NotFound(String),

    /// Play was requested without any animation to play.
    #[error("No animation given to play")]
    NullTarget,

    /// A collaborator required for loading (such as the render sink) is missing.
    #[error("Missing dependency: {0}")]
    MissingDependency(&'static str),
}

impl AnimatorError {
    /// Whether this error was caused by a lookup miss rather than a setup problem.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, AnimatorError::NotFound(_) | AnimatorError::NullTarget)
    }
}

/// Result type for animator operations.
pub type AnimatorResult<T> = Result<T, AnimatorError>;
