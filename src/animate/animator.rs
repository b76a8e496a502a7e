//! Core animation trait and transition descriptions.
//!
//! A transition is an ordered list of [`Keyframe`]s plus [`AnimationOptions`]
//! controlling duration and fill behavior, mirroring the shape of native
//! element-animation APIs so the rotator's two slide transitions translate
//! directly.

use crate::host::{NodeHandle, VisualState};
use std::time::Duration;

/// One keyframe of a transition: target opacity and vertical pixel offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: f32,
    pub offset: f32,
}

impl From<Keyframe> for VisualState {
    fn from(frame: Keyframe) -> Self {
        VisualState {
            opacity: frame.opacity,
            offset: frame.offset,
        }
    }
}

/// How a transition holds its endpoints outside its active interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillMode {
    /// Revert to the pre-animation state when finished
    None,
    /// Hold the final keyframe after finishing
    Forwards,
    /// Apply the first keyframe immediately, revert when finished
    Backwards,
    /// Apply the first keyframe immediately and hold the final one
    #[default]
    Both,
}

impl FillMode {
    /// Whether the first keyframe is applied before the transition starts
    pub fn fills_backwards(self) -> bool {
        matches!(self, FillMode::Backwards | FillMode::Both)
    }

    /// Whether the final keyframe is held after the transition ends
    pub fn fills_forwards(self) -> bool {
        matches!(self, FillMode::Forwards | FillMode::Both)
    }
}

/// Options for a single transition.
#[derive(Debug, Clone)]
pub struct AnimationOptions {
    pub duration: Duration,
    pub fill: FillMode,
}

impl AnimationOptions {
    pub fn new(duration: Duration, fill: FillMode) -> Self {
        Self { duration, fill }
    }
}

/// Invoked exactly once when a transition ends (or immediately, when the
/// environment cannot animate).
pub type CompletionCallback = Box<dyn FnOnce() + Send + 'static>;

/// Capability boundary for visual transitions.
///
/// Implementations must invoke `on_finish` exactly once. Callers may not
/// assume anything about *when*: the timeline implementation calls it from a
/// spawned task after `options.duration`, the immediate implementation calls
/// it before `animate` returns.
pub trait Animator: Send + Sync {
    /// Transition `node` through `frames` over `options.duration`.
    ///
    /// An empty frame list performs no visual change; `on_finish` still runs.
    fn animate(
        &self,
        node: NodeHandle,
        frames: Vec<Keyframe>,
        options: AnimationOptions,
        on_finish: CompletionCallback,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_mode_endpoints() {
        assert!(FillMode::Both.fills_backwards());
        assert!(FillMode::Both.fills_forwards());
        assert!(FillMode::Backwards.fills_backwards());
        assert!(!FillMode::Backwards.fills_forwards());
        assert!(FillMode::Forwards.fills_forwards());
        assert!(!FillMode::Forwards.fills_backwards());
        assert!(!FillMode::None.fills_backwards());
        assert!(!FillMode::None.fills_forwards());
    }

    #[test]
    fn test_keyframe_to_visual_state() {
        let frame = Keyframe {
            opacity: 0.5,
            offset: -20.0,
        };
        let visual: VisualState = frame.into();
        assert_eq!(visual.opacity, 0.5);
        assert_eq!(visual.offset, -20.0);
    }

    #[test]
    fn test_default_fill_is_both() {
        assert_eq!(FillMode::default(), FillMode::Both);
    }
}
