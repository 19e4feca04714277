use std::fs;
use std::path::{Path, PathBuf};

use crossterm::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ui::BorderStyle;

/// The sixteen console colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleColor {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
    Gray,
    BrightBlue,
    BrightGreen,
    BrightCyan,
    BrightRed,
    BrightMagenta,
    BrightYellow,
    BrightWhite,
}

impl From<ConsoleColor> for Color {
    fn from(color: ConsoleColor) -> Self {
        match color {
            ConsoleColor::Black => Color::Black,
            ConsoleColor::Blue => Color::DarkBlue,
            ConsoleColor::Green => Color::DarkGreen,
            ConsoleColor::Cyan => Color::DarkCyan,
            ConsoleColor::Red => Color::DarkRed,
            ConsoleColor::Magenta => Color::DarkMagenta,
            ConsoleColor::Yellow => Color::DarkYellow,
            ConsoleColor::White => Color::Grey,
            ConsoleColor::Gray => Color::DarkGrey,
            ConsoleColor::BrightBlue => Color::Blue,
            ConsoleColor::BrightGreen => Color::Green,
            ConsoleColor::BrightCyan => Color::Cyan,
            ConsoleColor::BrightRed => Color::Red,
            ConsoleColor::BrightMagenta => Color::Magenta,
            ConsoleColor::BrightYellow => Color::Yellow,
            ConsoleColor::BrightWhite => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub foreground: ConsoleColor,
    pub background: ConsoleColor,
    pub field_foreground: ConsoleColor,
    pub field_background: ConsoleColor,
    pub error_foreground: ConsoleColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: ConsoleColor::White,
            background: ConsoleColor::Blue,
            field_foreground: ConsoleColor::BrightWhite,
            field_background: ConsoleColor::Black,
            error_foreground: ConsoleColor::BrightRed,
        }
    }
}

impl Palette {
    pub fn base(&self) -> (Color, Color) {
        (self.foreground.into(), self.background.into())
    }

    pub fn field(&self) -> (Color, Color) {
        (self.field_foreground.into(), self.field_background.into())
    }

    pub fn error(&self) -> (Color, Color) {
        (self.error_foreground.into(), self.background.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    /// Ring the bell on rejected input
    pub beep: bool,
    pub border: BorderStyle,
    pub palette: Palette,
}

impl EntryConfig {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("screen-entry")
            .join("config.json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load from the default path, falling back to defaults when absent
    pub fn load_or_default() -> Result<Self> {
        let path = Self::default_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}
