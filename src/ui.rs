//! Terminal UI module with ratatui
//!
//! This module provides the demo-facing terminal interface for rotatext. It
//! follows a trait-based architecture so the render loop can be driven by a
//! mock in tests.

pub mod renderer;
pub mod terminal;
pub mod theme;

// Re-export public API
pub use renderer::{InputAction, UIRenderer};
pub use terminal::TerminalUI;
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
