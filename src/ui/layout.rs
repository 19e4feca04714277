//! Entry Layout
//!
//! Positions a field set inside a centred, bordered prompt box, paints it,
//! and hands control to the field editor.

use chrono::{Local, NaiveDate};

use super::border::rule;
use super::{center, draw_header};
use crate::app::EntryConfig;
use crate::error::Result;
use crate::form::{EditOutcome, Field, FieldEditor};
use crate::input::text_buffer::char_len;
use crate::input::{KeyDecoder, KeyEventSource};
use crate::screen::ScreenSurface;
use crate::ui::BorderStyle;

/// Heading shown above an entry box
#[derive(Debug, Clone)]
pub struct EntryForm {
    pub title: String,
    pub subtitle: String,
    pub date: NaiveDate,
}

impl EntryForm {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
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
}

/// Geometry of the prompt box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    /// Row of the top border
    pub top: u16,
    /// Column of the left border
    pub left: u16,
    pub width: usize,
    pub prompt_width: usize,
    pub value_width: usize,
    pub rows: usize,
}

impl FormLayout {
    /// Clamp capacities to the screen and assign every field its position
    pub fn compute(fields: &mut [Field], cols: u16, top: u16) -> Self {
        let prompt_width = fields.iter().map(|f| char_len(f.label())).max().unwrap_or(0);
        let max_capacity = (cols as usize).saturating_sub(prompt_width + 2);
        for field in fields.iter_mut() {
            field.clamp_capacity(max_capacity);
        }
        let value_width = fields.iter().map(Field::capacity).max().unwrap_or(0);

        let width = 2 + prompt_width + 2 + value_width + 2;
        let left = (cols as usize).saturating_sub(width) as u16 / 2;
        let layout = Self { top, left, width, prompt_width, value_width, rows: fields.len() };

        let col = left + (prompt_width + 4) as u16;
        for (i, field) in fields.iter_mut().enumerate() {
            field.set_position(layout.field_row(i), col);
        }
        layout
    }

    pub fn field_row(&self, index: usize) -> u16 {
        self.top + 1 + index as u16
    }

    /// Row of the bottom border
    pub fn bottom(&self) -> u16 {
        self.field_row(self.rows)
    }

    /// `Label:.... ` padded out to the inner width of the box
    pub fn prompt_line(&self, label: &str, vertical: &str) -> String {
        let mut prompt = format!("{label}:");
        let dots = (self.prompt_width + 1).saturating_sub(char_len(&prompt));
        prompt.push_str(&".".repeat(dots));
        format!("{vertical} {prompt:<inner$}{vertical}", inner = self.prompt_width + self.value_width + 3)
    }

    pub fn draw<W: ScreenSurface>(&self, screen: &mut W, cols: u16, fields: &[Field], border: BorderStyle) -> Result<()> {
        let g = border.glyphs();
        let span = self.width - 2;
        center(screen, self.top, cols, &rule(g.top_left, g.horizontal, span, g.top_right))?;
        for (i, field) in fields.iter().enumerate() {
            center(screen, self.field_row(i), cols, &self.prompt_line(field.label(), g.vertical))?;
        }
        center(screen, self.bottom(), cols, &rule(g.bottom_left, g.horizontal, span, g.bottom_right))
    }
}

/// Paint every field's value, blank-padded to its capacity
pub fn paint_fields<W: ScreenSurface>(screen: &mut W, fields: &[Field]) -> Result<()> {
    for field in fields {
        screen.locate(field.row(), field.col())?;
        screen.write(&field.padded())?;
    }
    Ok(())
}

/// Lay out, paint and edit `fields` as one full-screen form
pub fn entry<S: KeyEventSource, W: ScreenSurface>(
    screen: &mut W,
    decoder: &mut KeyDecoder<S>,
    form: &EntryForm,
    fields: &mut [Field],
    config: &EntryConfig,
) -> Result<EditOutcome> {
    if fields.is_empty() {
        return Ok(EditOutcome::Aborted);
    }

    let (_, cols) = screen.size()?;
    let (fg, bg) = config.palette.base();
    screen.set_colors(fg, bg)?;
    screen.clear()?;

    let top = draw_header(screen, cols, &form.title, &form.subtitle, form.date)?;
    let layout = FormLayout::compute(fields, cols, top);
    layout.draw(screen, cols, fields, config.border)?;

    let (fg, bg) = config.palette.field();
    screen.set_colors(fg, bg)?;
    paint_fields(screen, fields)?;

    let outcome = FieldEditor::new(decoder, screen).beep(config.beep).run(fields)?;

    let (fg, bg) = config.palette.base();
    screen.set_colors(fg, bg)?;
    screen.locate(layout.bottom() + 1, 0)?;
    screen.flush()?;
    Ok(outcome)
}
