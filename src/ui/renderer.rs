//! UI renderer trait and input actions
//!
//! This module defines the UIRenderer trait for rendering a container snapshot
//! to a terminal and handling the demo's input in an event-driven loop.

use crate::error::Result;
use crate::host::ContainerView;
use std::time::Duration;

/// Input actions the demo loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Manually force a rotation
    Advance,
    /// Tear down and exit
    Quit,
}

/// Core trait for UI rendering and input handling
pub trait UIRenderer {
    /// Initialize the terminal UI
    ///
    /// Sets up raw mode, enters the alternate screen, and prepares the
    /// drawing surface.
    fn initialize(&mut self) -> Result<()>;

    /// Render a container snapshot to the terminal
    fn render(&mut self, view: &ContainerView) -> Result<()>;

    /// Handle user input and return the next action
    ///
    /// Blocks until input or timeout; returns `None` on timeout so the loop
    /// can keep redrawing animation frames.
    fn handle_input(&mut self, timeout: Option<Duration>) -> Result<Option<InputAction>>;

    /// Clean up and restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Mock UI renderer for testing
    ///
    /// Allows tests to verify render calls were made and to simulate user
    /// input sequences without a terminal.
    pub struct MockUIRenderer {
        pub render_count: usize,
        pub terminal_size: (u16, u16),
        pub input_sequence: VecDeque<InputAction>,
        pub is_initialized: bool,
    }

    impl Default for MockUIRenderer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUIRenderer {
        /// Create a new mock renderer with default settings
        pub fn new() -> Self {
            Self {
                render_count: 0,
                terminal_size: (80, 24),
                input_sequence: VecDeque::new(),
                is_initialized: false,
            }
        }

        /// Add an action to the input sequence for testing
        pub fn add_input(&mut self, action: InputAction) {
            self.input_sequence.push_back(action);
        }
    }

    impl UIRenderer for MockUIRenderer {
        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn render(&mut self, _view: &ContainerView) -> Result<()> {
            self.render_count += 1;
            Ok(())
        }

        fn handle_input(&mut self, _timeout: Option<Duration>) -> Result<Option<InputAction>> {
            Ok(self.input_sequence.pop_front())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }

        fn get_terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }
    }

    #[test]
    fn test_mock_renderer_basic() {
        use crate::host::Container;

        let mut renderer = MockUIRenderer::new();
        let container = Container::with_attribute("data-scroll-text", "a|b");

        assert!(!renderer.is_initialized);
        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        assert_eq!(renderer.render_count, 0);
        renderer.render(&container.view()).unwrap();
        assert_eq!(renderer.render_count, 1);

        renderer.add_input(InputAction::Advance);
        let action = renderer.handle_input(None).unwrap();
        assert_eq!(action, Some(InputAction::Advance));

        let size = renderer.get_terminal_size().unwrap();
        assert_eq!(size, (80, 24));

        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }

    #[test]
    fn test_mock_renderer_input_sequence() {
        let mut renderer = MockUIRenderer::new();

        renderer.add_input(InputAction::Advance);
        renderer.add_input(InputAction::Advance);
        renderer.add_input(InputAction::Quit);

        assert_eq!(
            renderer.handle_input(None).unwrap(),
            Some(InputAction::Advance)
        );
        assert_eq!(
            renderer.handle_input(None).unwrap(),
            Some(InputAction::Advance)
        );
        assert_eq!(renderer.handle_input(None).unwrap(), Some(InputAction::Quit));
        assert_eq!(renderer.handle_input(None).unwrap(), None);
    }
}
