//! The rotation state machine.
//!
//! A [`Rotator`] owns an ordered entry list, the child node rendered for each
//! entry, the index of the entry currently shown, and the repeating timer that
//! drives rotation. The actual visual transition is delegated to the
//! [`Animator`] capability; the rotator only decides *what* transitions and
//! *when* the visibility marker moves.
//!
//! ## State split
//!
//! Logical state (index, current node) is updated synchronously inside the
//! rotation step. The visible marker moves only in the outgoing animation's
//! completion callback, so the swap never precedes the animation finishing.
//! Each callback closes over the exact node pair it animated plus the
//! generation current at transition start, so overlapping transitions cannot
//! cross-talk, and callbacks that outlive a teardown observe a stale
//! generation and do nothing.

use crate::animate::{AnimationOptions, Animator, AnimatorFactory, FillMode, Keyframe};
use crate::config::RotatorConfig;
use crate::error::{Result, RotatextError};
use crate::host::{Container, LayoutMode, NodeHandle};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Duration of one slide transition. Outgoing and incoming share it, which is
/// what lets the marker swap ride the outgoing callback alone.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// Index plus the node logically current. `current` is `None` only after
/// teardown.
struct Slot {
    index: usize,
    current: Option<NodeHandle>,
}

/// State shared between the public handle, the timer task, and nothing else.
struct RotatorShared {
    container: Container,
    entries: Vec<String>,
    children: Vec<NodeHandle>,
    animator: Arc<dyn Animator>,
    scroll_distance: f32,
    generation: AtomicU64,
    slot: Mutex<Slot>,
}

/// Cycles container entries on a timer, animating each transition.
pub struct Rotator {
    shared: Arc<RotatorShared>,
    timer: Option<JoinHandle<()>>,
}

impl Rotator {
    /// Mount a rotator into `container`.
    ///
    /// Resolves the entry list (explicit `config.entries`, else the container's
    /// source attribute split on the delimiter), clears the container, renders
    /// one child node per entry with the first marked current, selects the
    /// animation capability, and starts the rotation timer.
    ///
    /// # Errors
    /// [`RotatextError::MissingSource`] when no explicit entries were given and
    /// the source attribute is absent, or when the resolved list is empty.
    pub fn mount(container: Container, config: RotatorConfig) -> Result<Self> {
        let animator = AnimatorFactory::create();
        Self::mount_with_animator(container, config, animator)
    }

    /// Mount with an explicit animator instead of the feature-detected one.
    pub fn mount_with_animator(
        container: Container,
        config: RotatorConfig,
        animator: Arc<dyn Animator>,
    ) -> Result<Self> {
        let entries = resolve_entries(&container, &config)?;

        container.clear();
        let children: Vec<NodeHandle> = entries
            .iter()
            .enumerate()
            .map(|(i, text)| container.append_text_node(text, i == 0))
            .collect();
        let current = children.first().cloned();

        let shared = Arc::new(RotatorShared {
            container,
            entries,
            children,
            animator,
            scroll_distance: config.scroll_distance.pixels(),
            generation: AtomicU64::new(0),
            slot: Mutex::new(Slot { index: 0, current }),
        });

        let timer = spawn_timer(&shared, config.interval);

        Ok(Self { shared, timer })
    }

    /// Rotate to the next entry, wrapping past the last one.
    ///
    /// Called by the timer each tick; also safe to call manually at any time.
    pub fn advance(&self) {
        Self::advance_shared(&self.shared);
    }

    /// Transition directly to the entry at `index`.
    ///
    /// An index with no child, or a rotator with no current entry (torn down),
    /// logs a warning and leaves all state untouched.
    pub fn transition_to(&self, index: usize) {
        Self::transition_shared(&self.shared, index);
    }

    /// Index of the logically current entry
    pub fn current_index(&self) -> usize {
        self.shared.slot.lock().index
    }

    /// Text of the logically current entry, `None` after teardown
    pub fn current_text(&self) -> Option<String> {
        self.shared
            .slot
            .lock()
            .current
            .as_ref()
            .map(NodeHandle::text)
    }

    /// Number of entries in rotation
    pub fn entry_count(&self) -> usize {
        self.shared.entries.len()
    }

    /// Stop rotating and restore the container to a static state.
    ///
    /// Cancels the timer synchronously, invalidates in-flight animation
    /// callbacks, and collapses the container to the first entry's plain
    /// text. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.shared.generation.fetch_add(1, Ordering::SeqCst);

        let mut slot = self.shared.slot.lock();
        slot.index = 0;
        slot.current = None;

        let first = self.shared.entries.first().cloned().unwrap_or_default();
        self.shared.container.set_text(first);
    }

    fn advance_shared(shared: &Arc<RotatorShared>) {
        let next = {
            let mut slot = shared.slot.lock();
            slot.index = (slot.index + 1) % shared.entries.len();
            slot.index
        };
        Self::transition_shared(shared, next);
    }

    fn transition_shared(shared: &Arc<RotatorShared>, index: usize) {
        let (outgoing, incoming) = {
            let mut slot = shared.slot.lock();
            let Some(incoming) = shared.children.get(index).cloned() else {
                log::warn!(
                    "invalid rotation target {index}: container has {} entries",
                    shared.children.len()
                );
                return;
            };
            let Some(outgoing) = slot.current.clone() else {
                log::warn!("rotation requested with no current entry; ignoring");
                return;
            };
            // Logical state moves now; the visible marker follows the animation.
            slot.current = Some(incoming.clone());
            (outgoing, incoming)
        };

        if outgoing.same_node(&incoming) {
            // Single-entry rotation: settle in place rather than animating a
            // node against itself.
            incoming.set_layout(LayoutMode::Flow);
            return;
        }

        // Outgoing leaves layout flow so both entries can overlap mid-slide.
        outgoing.set_layout(LayoutMode::Absolute);
        incoming.set_layout(LayoutMode::Flow);

        let distance = shared.scroll_distance;
        let options = AnimationOptions::new(TRANSITION_DURATION, FillMode::Both);

        shared.animator.animate(
            incoming.clone(),
            vec![
                Keyframe {
                    opacity: 0.0,
                    offset: distance,
                },
                Keyframe {
                    opacity: 1.0,
                    offset: 0.0,
                },
            ],
            options.clone(),
            Box::new(|| {}),
        );

        let generation = shared.generation.load(Ordering::SeqCst);
        let on_finish = {
            let shared = Arc::clone(shared);
            let outgoing = outgoing.clone();
            let incoming = incoming.clone();
            move || {
                // Stale generation means the rotator was torn down after this
                // transition started.
                if shared.generation.load(Ordering::SeqCst) != generation {
                    return;
                }
                outgoing.set_current(false);
                incoming.set_current(true);
            }
        };
        shared.animator.animate(
            outgoing,
            vec![
                Keyframe {
                    opacity: 1.0,
                    offset: 0.0,
                },
                Keyframe {
                    opacity: 0.0,
                    offset: -distance,
                },
            ],
            options,
            Box::new(on_finish),
        );
    }
}

impl Drop for Rotator {
    fn drop(&mut self) {
        // The container belongs to the caller; only the timer is ours to stop.
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Resolve the entry list from config or the container's source attribute.
fn resolve_entries(container: &Container, config: &RotatorConfig) -> Result<Vec<String>> {
    let entries: Vec<String> = match &config.entries {
        Some(entries) => entries.clone(),
        None => match container.attribute(&config.source_attribute) {
            Some(raw) => raw.split(config.delimiter).map(str::to_owned).collect(),
            None => return Err(RotatextError::missing_source(&config.source_attribute)),
        },
    };
    if entries.is_empty() {
        return Err(RotatextError::missing_source(&config.source_attribute));
    }
    Ok(entries)
}

/// Spawn the repeating rotation timer onto the ambient tokio runtime.
///
/// The recurring timer is a consumed collaborator like the animator: with no
/// runtime available rotation degrades to manual `advance()` calls.
fn spawn_timer(shared: &Arc<RotatorShared>, interval: Duration) -> Option<JoinHandle<()>> {
    let handle = match tokio::runtime::Handle::try_current() {
        Ok(handle) => handle,
        Err(_) => {
            log::warn!("no async runtime available; automatic rotation disabled, call advance() manually");
            return None;
        }
    };

    let weak: Weak<RotatorShared> = Arc::downgrade(shared);
    Some(handle.spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // tokio intervals fire once immediately; the first rotation should
        // wait a full period.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let Some(shared) = weak.upgrade() else {
                break;
            };
            Rotator::advance_shared(&shared);
        }
    }))
}
