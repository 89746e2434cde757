use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The eight terminal colors a task can be drawn in by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardColor {
    White,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl StandardColor {
    pub const ALL: [StandardColor; 8] = [
        StandardColor::White,
        StandardColor::Red,
        StandardColor::Green,
        StandardColor::Yellow,
        StandardColor::Blue,
        StandardColor::Magenta,
        StandardColor::Cyan,
        StandardColor::Gray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StandardColor::White => "white",
            StandardColor::Red => "red",
            StandardColor::Green => "green",
            StandardColor::Yellow => "yellow",
            StandardColor::Blue => "blue",
            StandardColor::Magenta => "magenta",
            StandardColor::Cyan => "cyan",
            StandardColor::Gray => "gray",
        }
    }
}

/// Display color of a task: a named terminal color or a custom RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskColor {
    Standard(StandardColor),
    Rgb(u8, u8, u8),
}

impl Default for TaskColor {
    fn default() -> Self {
        TaskColor::Standard(StandardColor::White)
    }
}

impl TaskColor {
    /// Names offered as completions for the `color` command.
    pub fn names() -> impl Iterator<Item = &'static str> {
        StandardColor::ALL.into_iter().map(StandardColor::name)
    }
}

impl fmt::Display for TaskColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskColor::Standard(color) => f.write_str(color.name()),
            TaskColor::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("unknown color name: {0}")]
    UnknownName(String),
    #[error("invalid hex color: {0} (expected #rrggbb)")]
    InvalidHex(String),
}

impl FromStr for TaskColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ParseColorError::InvalidHex(s.to_string()));
        }
        StandardColor::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .map(TaskColor::Standard)
            .ok_or_else(|| ParseColorError::UnknownName(s.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<TaskColor> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(TaskColor::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
