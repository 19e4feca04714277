//! Input Module
//!
//! Keyboard decoding and single-line entry.

pub mod decoder;
pub mod keys;
pub mod line;
pub mod terminal_source;
pub mod text_buffer;

// Re-exports
pub use decoder::{decode_record, KeyDecoder, KeyEventSource, RawInputRecord, RawKeyRecord};
pub use keys::{KeyCode, KeyEvent, Modifiers};
pub use line::{read_line, LineInput};
pub use terminal_source::TerminalKeySource;
