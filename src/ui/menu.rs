//! Numbered Menu
//!
//! A bordered list of numbered choices with a prompt underneath. More than
//! seven items are split over two columns.

use chrono::{Local, NaiveDate};

use super::border::rule;
use super::{center, centered_col, draw_header};
use crate::app::EntryConfig;
use crate::error::Result;
use crate::input::text_buffer::char_len;
use crate::input::{read_line, KeyDecoder, KeyEventSource, LineInput};
use crate::screen::ScreenSurface;

const SINGLE_COLUMN_MAX: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// One-based item number
    Selected(usize),
    Interrupted,
}

#[derive(Debug, Clone)]
pub struct Menu {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<String>,
    pub date: NaiveDate,
}

impl Menu {
    pub fn new(title: impl Into<String>, items: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            items: items.into_iter().map(Into::into).collect(),
            date: Local::now().date_naive(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    fn prompt(&self) -> String {
        format!("Choice? (1-{})", self.items.len())
    }

    /// Box lines from the top border through the bottom border. The prompt
    /// is on the second-to-last line.
    pub fn lines(&self, border: super::BorderStyle) -> Vec<String> {
        let g = border.glyphs();
        let prompt = self.prompt();
        let item_width = self
            .items
            .iter()
            .map(|i| char_len(i))
            .max()
            .unwrap_or(0)
            .max(char_len(&prompt) + 1);
        // " nn. " + item + " "
        let cell = item_width + 6;
        let cell_text = |n: usize, item: &str| format!(" {n:>2}. {item:<item_width$} ");

        let count = self.items.len();
        let mut lines = Vec::with_capacity(count + 4);
        let inner = if count > SINGLE_COLUMN_MAX {
            let half = count.div_ceil(2);
            lines.push(format!(
                "{}{}{}",
                rule(g.top_left, g.horizontal, cell, g.horizontal_down),
                g.horizontal.repeat(cell),
                g.top_right
            ));
            for i in 0..half {
                let right = match self.items.get(i + half) {
                    Some(item) => cell_text(i + half + 1, item),
                    None => " ".repeat(cell),
                };
                let left = cell_text(i + 1, &self.items[i]);
                lines.push(format!("{v}{left}{v}{right}{v}", v = g.vertical));
            }
            lines.push(format!(
                "{}{}{}",
                rule(g.vertical_right, g.horizontal, cell, g.horizontal_up),
                g.horizontal.repeat(cell),
                g.vertical_left
            ));
            cell * 2 + 1
        } else {
            lines.push(rule(g.top_left, g.horizontal, cell, g.top_right));
            for (i, item) in self.items.iter().enumerate() {
                lines.push(format!("{v}{}{v}", cell_text(i + 1, item), v = g.vertical));
            }
            lines.push(rule(g.vertical_right, g.horizontal, cell, g.vertical_left));
            cell
        };
        lines.push(format!("{v} {prompt:<w$} {v}", v = g.vertical, w = inner - 2));
        lines.push(rule(g.bottom_left, g.horizontal, inner, g.bottom_right));
        lines
    }
}

/// Draw `menu` and read a choice until a valid item number is entered
pub fn choose<S: KeyEventSource, W: ScreenSurface>(
    screen: &mut W,
    decoder: &mut KeyDecoder<S>,
    menu: &Menu,
    config: &EntryConfig,
) -> Result<MenuChoice> {
    let (_, cols) = screen.size()?;
    let (fg, bg) = config.palette.base();
    screen.set_colors(fg, bg)?;
    screen.clear()?;

    let top = draw_header(screen, cols, &menu.title, &menu.subtitle, menu.date)?;
    let lines = menu.lines(config.border);
    for (i, line) in lines.iter().enumerate() {
        center(screen, top + i as u16, cols, line)?;
    }

    let prompt_row = top + lines.len() as u16 - 2;
    let left = centered_col(cols, &lines[0]);
    let input_col = left + 2 + char_len(&menu.prompt()) as u16 + 1;
    let message_row = prompt_row + 2;
    let width = char_len(&lines[0]);
    let count = menu.items.len();

    loop {
        let (fg, bg) = config.palette.field();
        screen.set_colors(fg, bg)?;
        screen.locate(prompt_row, input_col)?;
        screen.write("  ")?;
        screen.locate(prompt_row, input_col)?;

        let input = match read_line(decoder, screen, Some(2), config.beep)? {
            LineInput::Interrupted => return Ok(MenuChoice::Interrupted),
            line => line.text().to_string(),
        };

        let (fg, bg) = config.palette.base();
        match input.trim().parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => {
                screen.set_colors(fg, bg)?;
                screen.locate(message_row, left)?;
                screen.write(&" ".repeat(width))?;
                screen.locate(message_row, left)?;
                screen.flush()?;
                return Ok(MenuChoice::Selected(n));
            }
            _ => {
                let (efg, ebg) = config.palette.error();
                screen.set_colors(efg, ebg)?;
                screen.locate(message_row, left)?;
                screen.write(&format!("{:<width$}", format!("'{input}' is not valid.")))?;
            }
        }
    }
}
