//! Terminal UI implementation using ratatui
//!
//! Renders the rotator's container in the middle of the terminal. Node
//! opacity becomes a color fade, the pixel offset becomes a row displacement,
//! and absolutely-positioned nodes overlap the flow node the way they would in
//! a real layout engine.

use crate::error::Result;
use crate::host::{ContainerView, ContentView, NodeView};
use crate::ui::renderer::{InputAction, UIRenderer};
use crate::ui::theme::ColorTheme;
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// How many layout pixels one terminal row stands in for.
const PIXELS_PER_ROW: f32 = 10.0;

/// Nodes fainter than this are skipped entirely.
const MIN_VISIBLE_OPACITY: f32 = 0.01;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme: ColorTheme::default(),
        })
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    /// Convert key events to demo input actions
    fn key_to_action(&self, key: KeyCode, modifiers: KeyModifiers) -> Option<InputAction> {
        match (key, modifiers) {
            (KeyCode::Char('n'), KeyModifiers::NONE)
            | (KeyCode::Char(' '), KeyModifiers::NONE)
            | (KeyCode::Right, _) => Some(InputAction::Advance),

            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Esc, _)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(InputAction::Quit),

            _ => None,
        }
    }

    /// Row displacement for a pixel offset (positive = downward)
    fn offset_rows(offset: f32) -> i32 {
        (offset / PIXELS_PER_ROW).round() as i32
    }

    /// Render the container content centered in `area` (helper for closure)
    fn render_content(frame: &mut Frame, area: Rect, view: &ContainerView, theme: &ColorTheme) {
        match &view.content {
            ContentView::Text(text) => {
                let center = area.y + area.height / 2;
                let line = Rect::new(area.x, center, area.width, 1);
                let paragraph = Paragraph::new(text.clone()).alignment(Alignment::Center);
                frame.render_widget(paragraph, line);
            }
            ContentView::Nodes(nodes) => {
                for node in nodes {
                    Self::render_node(frame, area, node, theme);
                }
            }
        }
    }

    /// Render one node at its offset row with its opacity fade
    fn render_node(frame: &mut Frame, area: Rect, node: &NodeView, theme: &ColorTheme) {
        if node.visual.opacity < MIN_VISIBLE_OPACITY {
            return;
        }

        let center = (area.y + area.height / 2) as i32;
        let row = center + Self::offset_rows(node.visual.offset);
        if row < area.y as i32 || row >= (area.y + area.height) as i32 {
            return;
        }

        let style = Style::default().fg(theme.fade(node.visual.opacity));
        let paragraph = Paragraph::new(node.text.clone())
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(paragraph, Rect::new(area.x, row as u16, area.width, 1));
    }

    /// Render the keybinding hint line (helper for closure)
    fn render_status(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
        let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        let status = Paragraph::new(" space/n: next | q: quit").style(status_style);
        frame.render_widget(status, area);
    }
}

impl UIRenderer for TerminalUI {
    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn render(&mut self, view: &ContainerView) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;

            terminal.draw(move |frame| {
                let size = frame.size();

                // Split screen: content area and status line
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
                    .split(size);

                Self::render_content(frame, chunks[0], view, theme);
                Self::render_status(frame, chunks[1], theme);
            })?;
        }
        Ok(())
    }

    fn handle_input(&mut self, timeout: Option<Duration>) -> Result<Option<InputAction>> {
        let timeout_duration = timeout.unwrap_or(Duration::from_millis(100));

        if event::poll(timeout_duration)? {
            if let Event::Key(key_event) = event::read()? {
                return Ok(self.key_to_action(key_event.code, key_event.modifiers));
            }
        }

        Ok(None)
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
