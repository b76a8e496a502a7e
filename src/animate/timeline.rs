//! Frame-stepped animator running on a tokio runtime.
//!
//! Each `animate` call spawns one task that walks the keyframe path at a fixed
//! frame interval, writes interpolated visual state into the node, and invokes
//! the completion callback after the final frame. The task owns clones of the
//! node handle and callback only; it never touches rotator state, so a
//! transition can outlive the rotator that started it without harm.

use crate::animate::animator::{AnimationOptions, Animator, CompletionCallback, Keyframe};
use crate::host::{NodeHandle, VisualState};
use std::time::Duration;
use tokio::runtime::Handle;

/// Interval between interpolated frames. 16ms approximates a 60Hz refresh.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Animator that interpolates keyframes over real (tokio) time.
#[derive(Debug, Clone)]
pub struct TimelineAnimator {
    handle: Handle,
    frame_interval: Duration,
}

impl TimelineAnimator {
    /// Create an animator that spawns its timelines on `handle`
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            frame_interval: FRAME_INTERVAL,
        }
    }

    /// Override the frame interval (coarser frames for tests or slow terminals)
    pub fn with_frame_interval(handle: Handle, frame_interval: Duration) -> Self {
        Self {
            handle,
            frame_interval,
        }
    }
}

/// Sample the keyframe path at normalized progress `t` in `[0, 1]`.
fn sample(frames: &[Keyframe], t: f32) -> VisualState {
    debug_assert!(!frames.is_empty());
    if frames.len() == 1 {
        return frames[0].into();
    }

    let clamped = t.clamp(0.0, 1.0);
    let segments = (frames.len() - 1) as f32;
    let position = clamped * segments;
    let index = (position.floor() as usize).min(frames.len() - 2);
    let local = position - index as f32;

    let from = frames[index];
    let to = frames[index + 1];
    VisualState {
        opacity: from.opacity + (to.opacity - from.opacity) * local,
        offset: from.offset + (to.offset - from.offset) * local,
    }
}

impl Animator for TimelineAnimator {
    fn animate(
        &self,
        node: NodeHandle,
        frames: Vec<Keyframe>,
        options: AnimationOptions,
        on_finish: CompletionCallback,
    ) {
        if frames.is_empty() {
            on_finish();
            return;
        }

        let initial = node.visual();
        if options.fill.fills_backwards() {
            node.set_visual(frames[0].into());
        }

        let frame_interval = self.frame_interval;
        self.handle.spawn(async move {
            let steps = (options.duration.as_millis() / frame_interval.as_millis()).max(1) as u32;
            for step in 1..=steps {
                tokio::time::sleep(frame_interval).await;
                let t = step as f32 / steps as f32;
                node.set_visual(sample(&frames, t));
            }

            if options.fill.fills_forwards() {
                // The loop already landed on the last keyframe; make it exact.
                if let Some(last) = frames.last() {
                    node.set_visual((*last).into());
                }
            } else {
                node.set_visual(initial);
            }

            on_finish();
        });
    }
}
