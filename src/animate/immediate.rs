//! Fallback animator for environments without a runtime.
//!
//! Mirrors the degraded path of native animation APIs: when the capability is
//! unavailable, jump straight to the end state and invoke the completion
//! callback synchronously. The rotator keeps working, just without motion.

use crate::animate::animator::{AnimationOptions, Animator, CompletionCallback, Keyframe};
use crate::host::NodeHandle;

/// Animator that completes every transition instantly.
#[derive(Debug, Clone, Copy)]
pub struct ImmediateAnimator;

impl ImmediateAnimator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImmediateAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator for ImmediateAnimator {
    fn animate(
        &self,
        node: NodeHandle,
        frames: Vec<Keyframe>,
        options: AnimationOptions,
        on_finish: CompletionCallback,
    ) {
        if options.fill.fills_forwards() {
            if let Some(last) = frames.last() {
                node.set_visual((*last).into());
            }
        }
        on_finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animate::animator::FillMode;
    use crate::host::Container;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    fn frames() -> Vec<Keyframe> {
        vec![
            Keyframe {
                opacity: 0.0,
                offset: 20.0,
            },
            Keyframe {
                opacity: 1.0,
                offset: 0.0,
            },
        ]
    }

    #[test]
    fn test_applies_final_frame_and_calls_back_synchronously() {
        let container = Container::new();
        container.clear();
        let node = container.append_text_node("hello", false);

        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);

        ImmediateAnimator::new().animate(
            node.clone(),
            frames(),
            AnimationOptions::new(Duration::from_millis(200), FillMode::Both),
            Box::new(move || flag.store(true, Ordering::SeqCst)),
        );

        // Callback and end state land before animate returns.
        assert!(finished.load(Ordering::SeqCst));
        assert_eq!(node.visual().opacity, 1.0);
        assert_eq!(node.visual().offset, 0.0);
    }

    #[test]
    fn test_non_forward_fill_leaves_node_untouched() {
        let container = Container::new();
        container.clear();
        let node = container.append_text_node("hello", false);
        let before = node.visual();

        ImmediateAnimator::new().animate(
            node.clone(),
            frames(),
            AnimationOptions::new(Duration::from_millis(200), FillMode::None),
            Box::new(|| {}),
        );

        assert_eq!(node.visual(), before);
    }

    #[test]
    fn test_empty_frames_still_invokes_callback() {
        let container = Container::new();
        container.clear();
        let node = container.append_text_node("hello", false);

        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);

        ImmediateAnimator::new().animate(
            node,
            Vec::new(),
            AnimationOptions::new(Duration::from_millis(200), FillMode::Both),
            Box::new(move || flag.store(true, Ordering::SeqCst)),
        );

        assert!(finished.load(Ordering::SeqCst));
    }
}
