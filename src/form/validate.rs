//! Field Validation
//!
//! Validators gate two things: whether a typed character is accepted into a
//! field, and whether focus may leave the field.

use chrono::NaiveDate;

use super::Field;
use crate::input::KeyEvent;

/// Per-field validation capability
pub trait FieldValidator {
    /// Consulted before a printable key is written into `field`
    fn validate_key(&self, _field: &Field, _key: KeyEvent) -> bool {
        true
    }

    /// Consulted before focus leaves `field`
    fn validate_field(&self, _field: &Field) -> bool {
        true
    }
}

/// Accepts every key and every value
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl FieldValidator for AcceptAll {}

/// Only the digits 0-9 may be typed
#[derive(Debug, Clone, Copy, Default)]
pub struct DigitsOnly;

impl FieldValidator for DigitsOnly {
    fn validate_key(&self, _field: &Field, key: KeyEvent) -> bool {
        key.code.as_char().is_some_and(|c| c.is_ascii_digit())
    }
}

/// Wraps another validator and refuses to leave a blank field
#[derive(Debug, Clone, Copy, Default)]
pub struct Required<V>(pub V);

impl<V: FieldValidator> FieldValidator for Required<V> {
    fn validate_key(&self, field: &Field, key: KeyEvent) -> bool {
        self.0.validate_key(field, key)
    }

    fn validate_field(&self, field: &Field) -> bool {
        !field.value().trim().is_empty() && self.0.validate_field(field)
    }
}

/// Date entry in a `chrono` format such as `%m/%d/%Y`. A blank field is
/// allowed to be left; anything else must parse.
#[derive(Debug, Clone)]
pub struct DateField {
    format: String,
}

impl DateField {
    pub fn new(format: impl Into<String>) -> Self {
        Self { format: format.into() }
    }

    /// Literal separator characters of the format
    fn is_separator(&self, c: char) -> bool {
        let mut chars = self.format.chars();
        while let Some(f) = chars.next() {
            if f == '%' {
                chars.next();
            } else if f == c {
                return true;
            }
        }
        false
    }

    pub fn parse(&self, value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), &self.format).ok()
    }
}

impl Default for DateField {
    fn default() -> Self {
        Self::new("%m/%d/%Y")
    }
}

impl FieldValidator for DateField {
    fn validate_key(&self, _field: &Field, key: KeyEvent) -> bool {
        key.code
            .as_char()
            .is_some_and(|c| c.is_ascii_digit() || self.is_separator(c))
    }

    fn validate_field(&self, field: &Field) -> bool {
        field.value().trim().is_empty() || self.parse(field.value()).is_some()
    }
}

/// Adapter for ad-hoc closures
pub struct FnValidator<K, F> {
    key: K,
    field: F,
}

impl<K, F> FnValidator<K, F>
where
    K: Fn(&Field, KeyEvent) -> bool,
    F: Fn(&Field) -> bool,
{
    pub fn new(key: K, field: F) -> Self {
        Self { key, field }
    }
}

impl<K, F> FieldValidator for FnValidator<K, F>
where
    K: Fn(&Field, KeyEvent) -> bool,
    F: Fn(&Field) -> bool,
{
    fn validate_key(&self, field: &Field, key: KeyEvent) -> bool {
        (self.key)(field, key)
    }

    fn validate_field(&self, field: &Field) -> bool {
        (self.field)(field)
    }
}
