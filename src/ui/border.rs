//! Box-drawing glyphs for bordered screens

use ratatui::symbols::line;
use serde::{Deserialize, Serialize};

const BLANK: line::Set = line::Set {
    vertical: " ",
    horizontal: " ",
    top_right: " ",
    top_left: " ",
    bottom_right: " ",
    bottom_left: " ",
    vertical_left: " ",
    vertical_right: " ",
    horizontal_down: " ",
    horizontal_up: " ",
    cross: " ",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    None,
    #[default]
    Single,
    Double,
}

impl BorderStyle {
    pub fn glyphs(self) -> line::Set {
        match self {
            Self::None => BLANK,
            Self::Single => line::NORMAL,
            Self::Double => line::DOUBLE,
        }
    }
}

/// `left`, `fill` repeated `width` times, `right`
pub fn rule(left: &str, fill: &str, width: usize, right: &str) -> String {
    format!("{left}{}{right}", fill.repeat(width))
}
