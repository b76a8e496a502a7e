//! # rotatext - Animated Terminal Text Rotator
//!
//! A small presentation widget that cycles through a list of text entries
//! inside a container, sliding and cross-fading between them on a timer.
//! Entries come from a delimited container attribute or an explicit list.
//!
//! ## Features
//!
//! - **Timed rotation**: a tokio interval advances entries, wrapping at the end
//! - **Animated transitions**: outgoing and incoming entries cross-fade and
//!   slide concurrently, 200ms per swap
//! - **Graceful degradation**: with no async runtime, transitions complete
//!   immediately and rotation becomes manual, never an error
//! - **Clean teardown**: cancels the timer and collapses the container back to
//!   the first entry's plain text
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`config`] - Rotator configuration and length parsing
//! - [`host`] - Container/node tree the widget mounts into
//! - [`animate`] - Animation capability with runtime detection
//! - [`rotator`] - The rotation state machine and timer
//! - [`ui`] - Terminal rendering for the demo binary

// Core modules
pub mod config;
pub mod error;
pub mod host;

// Capability boundaries
pub mod animate;

// Core components
pub mod rotator;
pub mod ui;

// Re-export commonly used types for convenience
pub use error::{Result, RotatextError};

// Public API surface for external usage
pub use animate::{Animator, AnimatorFactory, ImmediateAnimator, TimelineAnimator};
pub use config::{Distance, RotatorConfig};
pub use host::{Container, NodeHandle};
pub use rotator::Rotator;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
