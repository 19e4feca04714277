//! Line Input
//!
//! Free-form entry of a single line at the current cursor position.

use tracing::debug;

use super::{KeyCode, KeyDecoder, KeyEventSource};
use crate::error::Result;
use crate::screen::ScreenSurface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Entered(String),
    /// Escape
    Cancelled,
    /// Control+C
    Interrupted,
}

impl LineInput {
    /// The entered text, empty when cancelled or interrupted
    pub fn text(&self) -> &str {
        match self {
            Self::Entered(text) => text,
            Self::Cancelled | Self::Interrupted => "",
        }
    }
}

/// Read keys until Enter, echoing them. `max_len` caps the number of
/// characters accepted.
pub fn read_line<S: KeyEventSource, W: ScreenSurface>(
    decoder: &mut KeyDecoder<S>,
    screen: &mut W,
    max_len: Option<usize>,
    beep: bool,
) -> Result<LineInput> {
    let mut entry = String::new();
    let mut len = 0usize;

    loop {
        screen.flush()?;
        let key = decoder.next()?;
        match key.code {
            KeyCode::ENTER => return Ok(LineInput::Entered(entry)),
            KeyCode::ESCAPE => return Ok(LineInput::Cancelled),
            KeyCode::INTERRUPT => return Ok(LineInput::Interrupted),
            KeyCode::BACKSPACE => {
                if entry.pop().is_some() {
                    len -= 1;
                    screen.write("\u{8} \u{8}")?;
                } else if beep {
                    screen.alert()?;
                }
            }
            code => match code.as_char() {
                Some(c) if max_len.is_none_or(|max| len < max) => {
                    entry.push(c);
                    len += 1;
                    screen.write(c.encode_utf8(&mut [0; 4]))?;
                }
                _ => {
                    debug!(%key, len, "line input rejected key");
                    if beep {
                        screen.alert()?;
                    }
                }
            },
        }
    }
}
