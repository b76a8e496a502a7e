//! Animation capability consumed by the rotator.
//!
//! The rotator never animates anything itself; it hands a node, a keyframe
//! list, and a completion callback to an [`Animator`]. Two implementations
//! exist: [`TimelineAnimator`] drives interpolated frames on a tokio runtime,
//! and [`ImmediateAnimator`] applies the final state and calls back at once,
//! the degradation path for environments with no runtime. The choice is made
//! once at startup by [`AnimatorFactory`], never re-checked per call.

pub mod animator;
pub mod factory;
pub mod immediate;
pub mod timeline;

// Re-export public API
pub use animator::{AnimationOptions, Animator, CompletionCallback, FillMode, Keyframe};
pub use factory::AnimatorFactory;
pub use immediate::ImmediateAnimator;
pub use timeline::TimelineAnimator;
