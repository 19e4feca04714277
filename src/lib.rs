//! Screen Entry
//!
//! Console key decoding and a fixed-width, multi-field screen editor with
//! bordered entry forms and numbered menus on top.

pub mod app;
pub mod error;
pub mod form;
pub mod input;
pub mod screen;
pub mod ui;

#[cfg(test)]
mod testing;

pub use app::{App, EntryConfig, Session};
pub use error::{ConsoleError, Result};
pub use form::{run_edit_session, EditOutcome, Field, FieldEditor, FieldValidator};
pub use input::{KeyCode, KeyDecoder, KeyEvent, KeyEventSource, Modifiers};
pub use screen::{ScreenSurface, TerminalScreen};
