//! Color theme and styling definitions using ratatui colors
//!
//! Node opacity has no direct terminal equivalent, so the theme renders it as
//! a blend between the text color and the background color.

use ratatui::style::Color;

/// Color theme for terminal rendering of the rotator.
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Rotating text at full opacity (RGB)
    pub text: (u8, u8, u8),

    /// Background the text fades into (RGB)
    pub background: (u8, u8, u8),

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            text: (220, 220, 220),
            background: (0, 0, 0),
            status_bg: Color::Blue,
            status_fg: Color::White,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            text: (255, 255, 255),
            background: (0, 0, 0),
            status_bg: Color::Black,
            status_fg: Color::White,
        }
    }

    /// Blend the text color toward the background by `opacity` in `[0, 1]`.
    pub fn fade(&self, opacity: f32) -> Color {
        let t = opacity.clamp(0.0, 1.0);
        let blend = |from: u8, to: u8| -> u8 {
            (from as f32 + (to as f32 - from as f32) * t).round() as u8
        };
        Color::Rgb(
            blend(self.background.0, self.text.0),
            blend(self.background.1, self.text.1),
            blend(self.background.2, self.text.2),
        )
    }
}
