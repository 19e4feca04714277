//! UI Module
//!
//! Bordered full-screen layouts built on the field editor.

pub mod border;
pub mod layout;
pub mod menu;

use chrono::NaiveDate;

use crate::error::Result;
use crate::input::text_buffer::char_len;
use crate::screen::ScreenSurface;

// Re-exports
pub use border::BorderStyle;
pub use layout::{entry, paint_fields, EntryForm, FormLayout};
pub use menu::{choose, Menu, MenuChoice};

/// Long form such as "Friday October 16, 2026"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A %B %-d, %Y").to_string()
}

/// Column at which `text` sits centred on a `cols`-wide screen
pub fn centered_col(cols: u16, text: &str) -> u16 {
    (cols as usize).saturating_sub(char_len(text)) as u16 / 2
}

pub(crate) fn center<W: ScreenSurface>(screen: &mut W, row: u16, cols: u16, text: &str) -> Result<()> {
    screen.locate(row, centered_col(cols, text))?;
    screen.write(text)
}

/// Title, subtitle and date lines followed by a blank line. Returns the
/// first free row.
pub(crate) fn draw_header<W: ScreenSurface>(
    screen: &mut W,
    cols: u16,
    title: &str,
    subtitle: &str,
    date: NaiveDate,
) -> Result<u16> {
    let mut row = 0;
    for line in [title, subtitle] {
        if !line.is_empty() {
            center(screen, row, cols, line)?;
            row += 1;
        }
    }
    center(screen, row, cols, &long_date(date))?;
    Ok(row + 2)
}
