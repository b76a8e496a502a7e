//! Factory selecting the animation strategy once at startup.
//!
//! The rotator treats animation as a feature-detected capability: if a tokio
//! runtime is present, transitions run on it; if not, they complete
//! immediately. The detection happens exactly once, when the rotator is
//! mounted, never per transition.

use crate::animate::animator::Animator;
use crate::animate::immediate::ImmediateAnimator;
use crate::animate::timeline::TimelineAnimator;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Factory for the process-appropriate [`Animator`].
pub struct AnimatorFactory;

impl AnimatorFactory {
    /// Detect the environment and return the matching animator.
    ///
    /// Returns a [`TimelineAnimator`] bound to the current tokio runtime when
    /// one exists, otherwise an [`ImmediateAnimator`]. The degraded path is
    /// expected and handled, not an error.
    pub fn create() -> Arc<dyn Animator> {
        match Handle::try_current() {
            Ok(handle) => Arc::new(TimelineAnimator::new(handle)),
            Err(_) => {
                log::debug!("no async runtime detected; transitions will complete immediately");
                Arc::new(ImmediateAnimator::new())
            }
        }
    }
}
