//! Input Field
//!
//! One bounded, labelled entry region on the screen.

use std::fmt;

use super::validate::{AcceptAll, FieldValidator};
use crate::input::text_buffer::{char_len, trim_trailing, truncate_chars};

pub struct Field {
    row: u16,
    col: u16,
    capacity: usize,
    label: String,
    pub(crate) value: String,
    validator: Box<dyn FieldValidator>,
}

impl Field {
    /// A field accepting any input. The initial value is cut to `capacity`.
    pub fn new(label: impl Into<String>, value: impl Into<String>, capacity: usize) -> Self {
        let mut value = value.into();
        truncate_chars(&mut value, capacity);
        Self {
            row: 0,
            col: 0,
            capacity,
            label: label.into(),
            value,
            validator: Box::new(AcceptAll),
        }
    }

    pub fn with_validator(mut self, validator: impl FieldValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// Place the first value cell at (`row`, `col`)
    pub fn at(mut self, row: u16, col: u16) -> Self {
        self.set_position(row, col);
        self
    }

    pub fn set_position(&mut self, row: u16, col: u16) {
        self.row = row;
        self.col = col;
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn col(&self) -> u16 {
        self.col
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Shrink the capacity, cutting the value to fit
    pub(crate) fn clamp_capacity(&mut self, max: usize) {
        self.capacity = self.capacity.min(max);
        truncate_chars(&mut self.value, self.capacity);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Length of the value in characters
    pub fn len(&self) -> usize {
        char_len(&self.value)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn into_value(self) -> String {
        self.value
    }

    pub fn validate_key(&self, key: crate::input::KeyEvent) -> bool {
        self.validator.validate_key(self, key)
    }

    pub fn validate(&self) -> bool {
        self.validator.validate_field(self)
    }

    pub(crate) fn trim(&mut self) {
        trim_trailing(&mut self.value);
    }

    /// The value padded with blanks to the full field width
    pub fn padded(&self) -> String {
        format!("{:<width$}", self.value, width = self.capacity)
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("row", &self.row)
            .field("col", &self.col)
            .field("capacity", &self.capacity)
            .field("label", &self.label)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}
