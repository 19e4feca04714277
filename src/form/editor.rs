//! Field Editor
//!
//! Full-screen entry over an ordered set of fields. Enter, Down and Tab move
//! to the next field; on the last field Enter commits while Down and Tab wrap
//! to the first. Up and Shift+Tab move to the prior field, wrapping to the
//! last. Home/End move within the value, Control+Home/End jump to the first
//! or last field. Control+Left/Right skip by word. Insert opens a blank at the
//! cursor, Delete removes the character under it, Control+Delete clears to the
//! end of the value and Backspace removes the character to the left.
//! F10 or Control+Enter commits from anywhere, Escape aborts.
//!
//! Typing overwrites the character under the cursor and advances it: fields
//! behave as fixed-width buffers, not as insert-mode text boxes.

use tracing::{debug, info};

use super::Field;
use crate::error::Result;
use crate::input::text_buffer::{
    char_len, find_word_boundary_back, find_word_boundary_forward, insert_char, overwrite_char,
    remove_char, tail, truncate_chars,
};
use crate::input::{KeyCode, KeyDecoder, KeyEvent, KeyEventSource};
use crate::screen::ScreenSurface;

/// How an edit session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Every field value has been trimmed of trailing whitespace and is ready
    Committed,
    /// Escape, or an empty field set. Field values must be discarded.
    Aborted,
    /// Control+C. The caller is expected to stop the process.
    Interrupted,
}

impl EditOutcome {
    pub fn is_committed(self) -> bool {
        self == Self::Committed
    }
}

/// Focused field and the cursor offset inside its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Focus {
    field: usize,
    offset: usize,
}

impl Focus {
    /// Focus `index` with the cursor after its value
    fn on(fields: &[Field], index: usize) -> Self {
        Self { field: index, offset: fields[index].len() }
    }
}

enum Direction {
    Forward,
    Backward,
}

pub struct FieldEditor<'a, S, W> {
    decoder: &'a mut KeyDecoder<S>,
    screen: &'a mut W,
    beep: bool,
}

impl<'a, S: KeyEventSource, W: ScreenSurface> FieldEditor<'a, S, W> {
    pub fn new(decoder: &'a mut KeyDecoder<S>, screen: &'a mut W) -> Self {
        Self { decoder, screen, beep: false }
    }

    /// Sound the bell on rejected input. Off by default.
    pub fn beep(mut self, enabled: bool) -> Self {
        self.beep = enabled;
        self
    }

    /// Edit `fields` until a commit, abort or interrupt key. The screen is
    /// expected to already show every field's initial value.
    pub fn run(&mut self, fields: &mut [Field]) -> Result<EditOutcome> {
        if fields.is_empty() {
            return Ok(EditOutcome::Aborted);
        }

        let mut focus = Focus::on(fields, 0);
        loop {
            let field = &fields[focus.field];
            self.screen.locate(field.row(), field.col() + focus.offset as u16)?;
            self.screen.flush()?;

            let key = self.decoder.next()?;
            if let Some(outcome) = self.apply(fields, &mut focus, key)? {
                info!(?outcome, field = focus.field, "edit session finished");
                return Ok(outcome);
            }
        }
    }

    fn apply(&mut self, fields: &mut [Field], focus: &mut Focus, key: KeyEvent) -> Result<Option<EditOutcome>> {
        match key.code {
            KeyCode::INTERRUPT => return Ok(Some(EditOutcome::Interrupted)),
            KeyCode::ESCAPE => return Ok(Some(EditOutcome::Aborted)),
            KeyCode::F10 | KeyCode::CONTROL_ENTER => return Ok(Some(commit(fields))),
            KeyCode::ENTER if key.control() => return Ok(Some(commit(fields))),
            KeyCode::ENTER | KeyCode::DOWN => {
                if !self.may_leave(&fields[focus.field])? {
                    return Ok(None);
                }
                let next = focus.field + 1;
                if next < fields.len() {
                    *focus = Focus::on(fields, next);
                } else if key.code == KeyCode::ENTER {
                    return Ok(Some(commit(fields)));
                } else {
                    *focus = Focus::on(fields, 0);
                }
            }
            KeyCode::TAB => {
                let direction = if key.shift() { Direction::Backward } else { Direction::Forward };
                self.cycle(fields, focus, direction)?;
            }
            KeyCode::UP => self.cycle(fields, focus, Direction::Backward)?,
            KeyCode::LEFT => {
                let value = fields[focus.field].value();
                focus.offset = if key.control() {
                    find_word_boundary_back(value, focus.offset)
                } else {
                    focus.offset.saturating_sub(1)
                };
            }
            KeyCode::RIGHT => {
                let field = &fields[focus.field];
                let target = if key.control() {
                    find_word_boundary_forward(field.value(), focus.offset)
                } else {
                    focus.offset + 1
                };
                focus.offset = target.min(field.len());
            }
            KeyCode::BACKSPACE => self.backspace(&mut fields[focus.field], focus)?,
            KeyCode::INSERT => {
                let field = &mut fields[focus.field];
                let capacity = field.capacity();
                insert_char(&mut field.value, focus.offset, ' ', capacity);
                self.paint_from(field, 0)?;
            }
            KeyCode::DELETE => {
                let field = &mut fields[focus.field];
                if key.control() {
                    truncate_chars(&mut field.value, focus.offset);
                } else {
                    remove_char(&mut field.value, focus.offset);
                }
                self.paint_from(field, focus.offset)?;
            }
            KeyCode::HOME if key.control() => {
                if self.may_leave(&fields[focus.field])? {
                    *focus = Focus::on(fields, 0);
                }
            }
            KeyCode::HOME => focus.offset = 0,
            KeyCode::END => {
                if key.control() {
                    if !self.may_leave(&fields[focus.field])? {
                        return Ok(None);
                    }
                    focus.field = fields.len() - 1;
                }
                let field = &mut fields[focus.field];
                field.trim();
                focus.offset = field.len();
            }
            _ => self.type_key(&mut fields[focus.field], focus, key)?,
        }
        Ok(None)
    }

    /// Move focus one field forward or back, wrapping at both ends
    fn cycle(&mut self, fields: &[Field], focus: &mut Focus, direction: Direction) -> Result<()> {
        if !self.may_leave(&fields[focus.field])? {
            return Ok(());
        }
        let count = fields.len();
        let index = match direction {
            Direction::Forward => (focus.field + 1) % count,
            Direction::Backward => (focus.field + count - 1) % count,
        };
        *focus = Focus::on(fields, index);
        Ok(())
    }

    fn may_leave(&mut self, field: &Field) -> Result<bool> {
        if field.validate() {
            return Ok(true);
        }
        debug!(label = field.label(), value = field.value(), "field validation blocked navigation");
        self.reject()?;
        Ok(false)
    }

    fn backspace(&mut self, field: &mut Field, focus: &mut Focus) -> Result<()> {
        if focus.offset == 0 {
            return self.reject();
        }
        focus.offset -= 1;
        remove_char(&mut field.value, focus.offset);
        self.paint_from(field, focus.offset)
    }

    fn type_key(&mut self, field: &mut Field, focus: &mut Focus, key: KeyEvent) -> Result<()> {
        let Some(c) = key.code.as_char() else {
            debug!(%key, "unhandled key");
            return self.reject();
        };
        if focus.offset >= field.capacity() || !field.validate_key(key) {
            debug!(label = field.label(), %key, "keystroke rejected");
            return self.reject();
        }
        overwrite_char(&mut field.value, focus.offset, c);
        self.screen.write(c.encode_utf8(&mut [0; 4]))?;
        focus.offset += 1;
        Ok(())
    }

    /// Redraw `field` from char offset `from`, blanking cells past the value
    fn paint_from(&mut self, field: &Field, from: usize) -> Result<()> {
        let rest = tail(field.value(), from);
        let blanks = field.capacity().saturating_sub(from + char_len(rest));
        self.screen.locate(field.row(), field.col() + from as u16)?;
        self.screen.write(&format!("{rest}{:blanks$}", ""))
    }

    fn reject(&mut self) -> Result<()> {
        if self.beep {
            self.screen.alert()?;
        }
        Ok(())
    }
}

fn commit(fields: &mut [Field]) -> EditOutcome {
    for field in fields.iter_mut() {
        field.trim();
    }
    EditOutcome::Committed
}

/// Run one edit session over `fields`
pub fn run_edit_session<S: KeyEventSource, W: ScreenSurface>(
    decoder: &mut KeyDecoder<S>,
    screen: &mut W,
    fields: &mut [Field],
    beep: bool,
) -> Result<EditOutcome> {
    FieldEditor::new(decoder, screen).beep(beep).run(fields)
}
