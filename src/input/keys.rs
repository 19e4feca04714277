//! Normalized Keys
//!
//! A decoded key is a single byte code plus a modifier bitmask. Codes below
//! 128 follow terminal character conventions; navigation keys live in
//! 129..=142 and function keys F1..F24 in 143..=166.

use std::fmt;

/// Normalized key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct KeyCode(pub u8);

impl KeyCode {
    pub const NONE: Self = Self(0);
    pub const INTERRUPT: Self = Self(3);
    pub const BACKSPACE: Self = Self(8);
    pub const TAB: Self = Self(9);
    pub const CONTROL_ENTER: Self = Self(10);
    pub const ENTER: Self = Self(13);
    pub const ESCAPE: Self = Self(27);

    pub const PAGE_UP: Self = Self(129);
    pub const PAGE_DOWN: Self = Self(130);
    pub const END: Self = Self(131);
    pub const HOME: Self = Self(132);
    pub const LEFT: Self = Self(133);
    pub const UP: Self = Self(134);
    pub const RIGHT: Self = Self(135);
    pub const DOWN: Self = Self(136);
    pub const INSERT: Self = Self(141);
    pub const DELETE: Self = Self(142);

    pub const F1: Self = Self(143);
    pub const F10: Self = Self(152);
    pub const F24: Self = Self(166);

    /// First code of the navigation band
    pub const NAVIGATION_BASE: u8 = 129;
    /// First code of the function-key band
    pub const FUNCTION_BASE: u8 = 143;

    /// Function key `F<n>` for `n` in 1..=24
    pub fn function(n: u8) -> Option<Self> {
        (1..=24)
            .contains(&n)
            .then(|| Self(Self::FUNCTION_BASE + n - 1))
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    pub fn is_printable(self) -> bool {
        (0x20..0x7f).contains(&self.0)
    }

    pub fn is_navigation(self) -> bool {
        (Self::PAGE_UP.0..=Self::DELETE.0).contains(&self.0)
    }

    pub fn is_function(self) -> bool {
        (Self::F1.0..=Self::F24.0).contains(&self.0)
    }

    /// The character this key types, if it types one
    pub fn as_char(self) -> Option<char> {
        self.is_printable().then_some(self.0 as char)
    }
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        if c.is_ascii() { Self(c as u8) } else { Self::NONE }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NONE => f.write_str("<none>"),
            Self::INTERRUPT => f.write_str("Ctrl+C"),
            Self::BACKSPACE => f.write_str("Backspace"),
            Self::TAB => f.write_str("Tab"),
            Self::CONTROL_ENTER => f.write_str("Ctrl+Enter"),
            Self::ENTER => f.write_str("Enter"),
            Self::ESCAPE => f.write_str("Esc"),
            Self::PAGE_UP => f.write_str("PageUp"),
            Self::PAGE_DOWN => f.write_str("PageDown"),
            Self::END => f.write_str("End"),
            Self::HOME => f.write_str("Home"),
            Self::LEFT => f.write_str("Left"),
            Self::UP => f.write_str("Up"),
            Self::RIGHT => f.write_str("Right"),
            Self::DOWN => f.write_str("Down"),
            Self::INSERT => f.write_str("Insert"),
            Self::DELETE => f.write_str("Delete"),
            key if key.is_function() => write!(f, "F{}", key.0 - Self::FUNCTION_BASE + 1),
            key => match key.as_char() {
                Some(c) => write!(f, "'{c}'"),
                None => write!(f, "#{}", key.0),
            },
        }
    }
}

bitflags::bitflags! {
    /// Modifier state captured with a key. Caps lock is the toggle state,
    /// the others are momentary presses.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const CAPS_LOCK = 1 << 0;
        const ALT       = 1 << 1;
        const CONTROL   = 1 << 2;
        const SHIFT     = 1 << 3;
    }
}

/// A decoded key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, Modifiers::empty())
    }

    pub fn is_none(&self) -> bool {
        self.code.is_none()
    }

    pub fn control(&self) -> bool {
        self.modifiers.contains(Modifiers::CONTROL)
    }

    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(Modifiers::CONTROL) {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.contains(Modifiers::ALT) {
            f.write_str("Alt+")?;
        }
        if self.modifiers.contains(Modifiers::SHIFT) {
            f.write_str("Shift+")?;
        }
        write!(f, "{}", self.code)
    }
}
