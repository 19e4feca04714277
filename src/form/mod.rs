//! Form Module
//!
//! Fields, their validators and the full-screen editor that drives them.

pub mod editor;
pub mod field;
pub mod validate;

// Re-exports
pub use editor::{run_edit_session, EditOutcome, FieldEditor};
pub use field::Field;
pub use validate::{AcceptAll, DateField, DigitsOnly, FieldValidator, FnValidator, Required};
