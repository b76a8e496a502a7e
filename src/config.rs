//! Rotator configuration.
//!
//! Configuration is immutable after construction: the rotator copies what it
//! needs at mount time and never re-reads it. Defaults match the widget's
//! conventional setup (`data-scroll-text` attribute, 2 second interval,
//! 20px slide, `|` delimiter).

use crate::error::{Result, RotatextError};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Configuration for mounting a [`Rotator`](crate::Rotator).
#[derive(Debug, Clone)]
pub struct RotatorConfig {
    /// Container attribute holding the delimited entry list
    pub source_attribute: String,

    /// How often the rotation timer fires
    pub interval: Duration,

    /// Vertical distance an entry travels during a transition
    pub scroll_distance: Distance,

    /// Split character applied to the source attribute value
    pub delimiter: char,

    /// Explicit entry list; when set, the source attribute is ignored entirely
    pub entries: Option<Vec<String>>,
}

impl Default for RotatorConfig {
    fn default() -> Self {
        Self {
            source_attribute: "data-scroll-text".to_string(),
            interval: Duration::from_millis(2000),
            scroll_distance: Distance::default(),
            delimiter: '|',
            entries: None,
        }
    }
}

impl RotatorConfig {
    /// Create a configuration with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the attribute the entry list is parsed from
    pub fn with_source_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.source_attribute = attribute.into();
        self
    }

    /// Override the rotation interval
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Override the transition slide distance
    pub fn with_scroll_distance(mut self, distance: Distance) -> Self {
        self.scroll_distance = distance;
        self
    }

    /// Override the split character for the source attribute
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Provide entries directly, bypassing attribute parsing
    pub fn with_entries(mut self, entries: Vec<String>) -> Self {
        self.entries = Some(entries);
        self
    }
}

/// A CSS-length style distance, e.g. `"20px"`.
///
/// Only pixel lengths are meaningful here; a bare number is accepted and
/// treated as pixels. Negative values are allowed and reverse the slide
/// direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distance {
    pixels: f32,
}

impl Distance {
    /// Create a distance from a pixel count
    pub fn from_pixels(pixels: f32) -> Self {
        Self { pixels }
    }

    /// The distance in pixels
    pub fn pixels(self) -> f32 {
        self.pixels
    }

    /// Parse a length string such as `"20px"` or `"12.5"`.
    ///
    /// # Errors
    /// Returns [`RotatextError::InvalidDistance`] for anything that is not a
    /// finite number with an optional `px` suffix.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        number
            .parse::<f32>()
            .ok()
            .filter(|pixels| pixels.is_finite())
            .map(Self::from_pixels)
            .ok_or_else(|| RotatextError::invalid_distance(value))
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::from_pixels(20.0)
    }
}

impl FromStr for Distance {
    type Err = RotatextError;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RotatorConfig::default();
        assert_eq!(config.source_attribute, "data-scroll-text");
        assert_eq!(config.interval, Duration::from_millis(2000));
        assert_eq!(config.scroll_distance, Distance::from_pixels(20.0));
        assert_eq!(config.delimiter, '|');
        assert!(config.entries.is_none());
    }

    #[test]
    fn test_config_builders() {
        let config = RotatorConfig::new()
            .with_source_attribute("data-headline")
            .with_interval(Duration::from_millis(500))
            .with_scroll_distance(Distance::from_pixels(8.0))
            .with_delimiter(';')
            .with_entries(vec!["a".to_string(), "b".to_string()]);

        assert_eq!(config.source_attribute, "data-headline");
        assert_eq!(config.interval, Duration::from_millis(500));
        assert_eq!(config.scroll_distance.pixels(), 8.0);
        assert_eq!(config.delimiter, ';');
        assert_eq!(config.entries.as_deref(), Some(&["a".to_string(), "b".to_string()][..]));
    }

    #[test]
    fn test_distance_parsing() {
        assert_eq!(Distance::parse("20px").unwrap().pixels(), 20.0);
        assert_eq!(Distance::parse("  12.5px ").unwrap().pixels(), 12.5);
        assert_eq!(Distance::parse("7").unwrap().pixels(), 7.0);
        assert_eq!(Distance::parse("-20px").unwrap().pixels(), -20.0);

        assert!(matches!(
            Distance::parse("20em"),
            Err(RotatextError::InvalidDistance { .. })
        ));
        assert!(matches!(
            Distance::parse(""),
            Err(RotatextError::InvalidDistance { .. })
        ));
        assert!(matches!(
            Distance::parse("px"),
            Err(RotatextError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_distance_display_round_trip() {
        let distance = Distance::from_pixels(20.0);
        assert_eq!(distance.to_string(), "20px");
        assert_eq!(distance.to_string().parse::<Distance>().unwrap(), distance);
    }
}
