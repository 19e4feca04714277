//! Terminal Key Source
//!
//! Reads crossterm events and re-expresses them as raw console records so
//! they flow through the same decoder as hardware input.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode as TermKey, KeyEvent as TermKeyEvent, KeyEventKind, KeyEventState,
    KeyModifiers, ModifierKeyCode,
};

use super::decoder::{ControlKeyState, KeyEventSource, RawInputRecord, RawKeyRecord, VirtualKey};
use crate::error::Result;

/// `KeyEventSource` over the process terminal. Raw mode is the caller's job.
#[derive(Debug, Default)]
pub struct TerminalKeySource {
    pending: Option<RawInputRecord>,
}

impl TerminalKeySource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyEventSource for TerminalKeySource {
    fn read(&mut self) -> Result<RawInputRecord> {
        if let Some(record) = self.pending.take() {
            return Ok(record);
        }
        Ok(translate_event(&event::read()?))
    }

    fn peek(&mut self) -> Result<Option<RawInputRecord>> {
        if self.pending.is_none() && event::poll(Duration::ZERO)? {
            self.pending = Some(translate_event(&event::read()?));
        }
        Ok(self.pending)
    }
}

pub fn translate_event(event: &Event) -> RawInputRecord {
    match event {
        Event::Key(key) => RawInputRecord::Key(translate_key(key)),
        _ => RawInputRecord::Other,
    }
}

pub fn translate_key(key: &TermKeyEvent) -> RawKeyRecord {
    let control_state = control_state(key.modifiers, key.state);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let (virtual_key, char_code) = match key.code {
        TermKey::Backspace => (VirtualKey::BACK, 8),
        TermKey::Tab | TermKey::BackTab => (VirtualKey::TAB, 9),
        TermKey::Enter if ctrl => (VirtualKey::RETURN, 10),
        TermKey::Enter => (VirtualKey::RETURN, 13),
        TermKey::Esc => (VirtualKey::ESCAPE, 27),
        TermKey::PageUp => (VirtualKey::PRIOR, 0),
        TermKey::PageDown => (VirtualKey::NEXT, 0),
        TermKey::End => (VirtualKey::END, 0),
        TermKey::Home => (VirtualKey::HOME, 0),
        TermKey::Left => (VirtualKey::LEFT, 0),
        TermKey::Up => (VirtualKey::UP, 0),
        TermKey::Right => (VirtualKey::RIGHT, 0),
        TermKey::Down => (VirtualKey::DOWN, 0),
        TermKey::Insert => (VirtualKey::INSERT, 0),
        TermKey::Delete => (VirtualKey::DELETE, 0),
        TermKey::F(n @ 1..=24) => (VirtualKey::F1 + u16::from(n) - 1, 0),
        TermKey::Char(c) => (char_virtual_key(c), char_payload(c, ctrl)),
        TermKey::CapsLock => (VirtualKey::CAPITAL, 0),
        TermKey::Modifier(m) => (modifier_virtual_key(m), 0),
        _ => (0, 0),
    };
    RawKeyRecord {
        key_down: key.kind != KeyEventKind::Release,
        virtual_key,
        char_code,
        control_state,
    }
}

fn control_state(mods: KeyModifiers, state: KeyEventState) -> ControlKeyState {
    let mut out = ControlKeyState::empty();
    if mods.contains(KeyModifiers::SHIFT) {
        out |= ControlKeyState::SHIFT_PRESSED;
    }
    if mods.contains(KeyModifiers::CONTROL) {
        out |= ControlKeyState::LEFT_CTRL_PRESSED;
    }
    if mods.contains(KeyModifiers::ALT) {
        out |= ControlKeyState::LEFT_ALT_PRESSED;
    }
    if state.contains(KeyEventState::CAPS_LOCK) {
        out |= ControlKeyState::CAPSLOCK_ON;
    }
    if state.contains(KeyEventState::NUM_LOCK) {
        out |= ControlKeyState::NUMLOCK_ON;
    }
    out
}

/// Letters and digits share their virtual-key code with the upper-case
/// character; punctuation reports an OEM key outside the extended clusters.
fn char_virtual_key(c: char) -> u16 {
    match c {
        c if c.is_ascii_alphanumeric() => c.to_ascii_uppercase() as u16,
        ' ' => VirtualKey::SPACE,
        _ => VirtualKey::OEM_1,
    }
}

/// Single-byte payload; Control+letter folds to its control code
fn char_payload(c: char, ctrl: bool) -> u8 {
    if !c.is_ascii() {
        return 0;
    }
    let byte = c as u8;
    if ctrl && byte.is_ascii_alphabetic() {
        byte.to_ascii_uppercase() & 0x1f
    } else {
        byte
    }
}

fn modifier_virtual_key(m: ModifierKeyCode) -> u16 {
    match m {
        ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift => VirtualKey::SHIFT,
        ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl => VirtualKey::CONTROL,
        ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt => VirtualKey::MENU,
        ModifierKeyCode::LeftSuper | ModifierKeyCode::LeftMeta | ModifierKeyCode::LeftHyper => VirtualKey::LWIN,
        ModifierKeyCode::RightSuper | ModifierKeyCode::RightMeta | ModifierKeyCode::RightHyper => VirtualKey::RWIN,
        _ => VirtualKey::SHIFT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{decode_record, KeyCode, KeyEvent, Modifiers};

    fn decode(code: TermKey, mods: KeyModifiers) -> Option<KeyEvent> {
        decode_record(&translate_key(&TermKeyEvent::new(code, mods)))
    }

    #[test]
    fn test_plain_character() {
        assert_eq!(
            decode(TermKey::Char('a'), KeyModifiers::NONE),
            Some(KeyEvent::plain(KeyCode::from('a')))
        );
    }

    #[test]
    fn test_punctuation_is_not_navigation() {
        // '.' shares its byte with the Delete virtual key
        assert_eq!(decode(TermKey::Char('.'), KeyModifiers::NONE).map(|k| k.code), Some(KeyCode::from('.')));
        assert_eq!(decode(TermKey::Char('!'), KeyModifiers::SHIFT).map(|k| k.code), Some(KeyCode::from('!')));
    }

    #[test]
    fn test_control_c_is_interrupt() {
        let key = decode(TermKey::Char('c'), KeyModifiers::CONTROL).unwrap();
        assert_eq!(key.code, KeyCode::INTERRUPT);
        assert_eq!(key.modifiers, Modifiers::CONTROL);
    }

    #[test]
    fn test_arrows_and_function_keys() {
        assert_eq!(
            decode(TermKey::Left, KeyModifiers::CONTROL),
            Some(KeyEvent::new(KeyCode::LEFT, Modifiers::CONTROL))
        );
        assert_eq!(decode(TermKey::F(10), KeyModifiers::NONE).map(|k| k.code), Some(KeyCode::F10));
        assert_eq!(decode(TermKey::F(24), KeyModifiers::NONE).map(|k| k.code), Some(KeyCode::F24));
    }

    #[test]
    fn test_back_tab_carries_shift() {
        let key = decode(TermKey::BackTab, KeyModifiers::SHIFT).unwrap();
        assert_eq!(key.code, KeyCode::TAB);
        assert!(key.shift());
    }

    #[test]
    fn test_control_enter() {
        let key = decode(TermKey::Enter, KeyModifiers::CONTROL).unwrap();
        assert_eq!(key.code, KeyCode::CONTROL_ENTER);
    }

    #[test]
    fn test_release_and_modifiers_are_dropped() {
        let mut release = TermKeyEvent::new(TermKey::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(decode_record(&translate_key(&release)), None);

        let shift = TermKey::Modifier(ModifierKeyCode::LeftShift);
        assert_eq!(decode(shift, KeyModifiers::SHIFT), None);
        assert_eq!(decode(TermKey::CapsLock, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_non_key_events() {
        assert_eq!(translate_event(&Event::Resize(80, 25)), RawInputRecord::Other);
        assert_eq!(translate_event(&Event::FocusGained), RawInputRecord::Other);
    }
}
