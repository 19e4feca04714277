//! Key Decoder
//!
//! Turns raw keyboard records (virtual-key code, character payload and a
//! control-key state snapshot) into normalized [`KeyEvent`]s. Pure modifier
//! presses and key releases are swallowed; the navigation and function-key
//! clusters are folded into the extended code bands.

use tracing::trace;

use super::keys::{KeyCode, KeyEvent, Modifiers};
use crate::error::Result;

/// Hardware virtual-key codes the decoder cares about
pub struct VirtualKey;

impl VirtualKey {
    pub const BACK: u16 = 0x08;
    pub const TAB: u16 = 0x09;
    pub const RETURN: u16 = 0x0d;
    pub const SHIFT: u16 = 0x10;
    pub const CONTROL: u16 = 0x11;
    pub const MENU: u16 = 0x12;
    pub const CAPITAL: u16 = 0x14;
    pub const ESCAPE: u16 = 0x1b;
    pub const SPACE: u16 = 0x20;
    pub const PRIOR: u16 = 0x21;
    pub const NEXT: u16 = 0x22;
    pub const END: u16 = 0x23;
    pub const HOME: u16 = 0x24;
    pub const LEFT: u16 = 0x25;
    pub const UP: u16 = 0x26;
    pub const RIGHT: u16 = 0x27;
    pub const DOWN: u16 = 0x28;
    pub const INSERT: u16 = 0x2d;
    pub const DELETE: u16 = 0x2e;
    pub const LWIN: u16 = 0x5b;
    pub const RWIN: u16 = 0x5c;
    pub const F1: u16 = 0x70;
    pub const F24: u16 = 0x87;
    pub const OEM_1: u16 = 0xba;

    pub fn is_modifier(vk: u16) -> bool {
        matches!(
            vk,
            Self::SHIFT | Self::CONTROL | Self::MENU | Self::CAPITAL | Self::LWIN | Self::RWIN
        )
    }

    /// Extended code for the navigation and function-key clusters
    pub fn extended_code(vk: u16) -> Option<KeyCode> {
        match vk {
            Self::PRIOR..=Self::DELETE => Some(KeyCode((vk - Self::PRIOR) as u8 + KeyCode::NAVIGATION_BASE)),
            Self::F1..=Self::F24 => Some(KeyCode((vk - Self::F1) as u8 + KeyCode::FUNCTION_BASE)),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Control-key state snapshot delivered with each raw key record
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ControlKeyState: u32 {
        const RIGHT_ALT_PRESSED  = 0x0001;
        const LEFT_ALT_PRESSED   = 0x0002;
        const RIGHT_CTRL_PRESSED = 0x0004;
        const LEFT_CTRL_PRESSED  = 0x0008;
        const SHIFT_PRESSED      = 0x0010;
        const NUMLOCK_ON         = 0x0020;
        const SCROLLLOCK_ON      = 0x0040;
        const CAPSLOCK_ON        = 0x0080;
        const ENHANCED_KEY       = 0x0100;
    }
}

impl ControlKeyState {
    pub fn modifiers(self) -> Modifiers {
        let mut mods = Modifiers::empty();
        if self.contains(Self::CAPSLOCK_ON) {
            mods |= Modifiers::CAPS_LOCK;
        }
        if self.intersects(Self::LEFT_ALT_PRESSED | Self::RIGHT_ALT_PRESSED) {
            mods |= Modifiers::ALT;
        }
        if self.intersects(Self::LEFT_CTRL_PRESSED | Self::RIGHT_CTRL_PRESSED) {
            mods |= Modifiers::CONTROL;
        }
        if self.contains(Self::SHIFT_PRESSED) {
            mods |= Modifiers::SHIFT;
        }
        mods
    }
}

/// One hardware keyboard record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawKeyRecord {
    pub key_down: bool,
    pub virtual_key: u16,
    /// Single-byte character payload, 0 when the key types nothing
    pub char_code: u8,
    pub control_state: ControlKeyState,
}

impl RawKeyRecord {
    pub fn down(virtual_key: u16, char_code: u8, control_state: ControlKeyState) -> Self {
        Self { key_down: true, virtual_key, char_code, control_state }
    }

    pub fn up(virtual_key: u16, char_code: u8, control_state: ControlKeyState) -> Self {
        Self { key_down: false, virtual_key, char_code, control_state }
    }
}

/// One record from the console input queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInputRecord {
    Key(RawKeyRecord),
    /// Mouse, resize, focus and other non-keyboard records
    Other,
}

/// Supplier of raw console input
pub trait KeyEventSource {
    /// Blocks until the next record is available and consumes it
    fn read(&mut self) -> Result<RawInputRecord>;

    /// Returns the next record without consuming it, or `None` if the queue
    /// is empty. Never blocks.
    fn peek(&mut self) -> Result<Option<RawInputRecord>>;
}

impl<S: KeyEventSource + ?Sized> KeyEventSource for &mut S {
    fn read(&mut self) -> Result<RawInputRecord> {
        (**self).read()
    }

    fn peek(&mut self) -> Result<Option<RawInputRecord>> {
        (**self).peek()
    }
}

/// Decode one raw record. Returns `None` for records that are not an
/// actionable key press.
pub fn decode_record(record: &RawKeyRecord) -> Option<KeyEvent> {
    if !record.key_down || VirtualKey::is_modifier(record.virtual_key) {
        return None;
    }
    let code = VirtualKey::extended_code(record.virtual_key).unwrap_or(KeyCode(record.char_code));
    if code.is_none() {
        return None;
    }
    Some(KeyEvent::new(code, record.control_state.modifiers()))
}

pub struct KeyDecoder<S> {
    source: S,
}

impl<S: KeyEventSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Block until an actionable key press arrives
    pub fn next(&mut self) -> Result<KeyEvent> {
        loop {
            let RawInputRecord::Key(record) = self.source.read()? else {
                continue;
            };
            if let Some(key) = decode_record(&record) {
                trace!(%key, "decoded key");
                return Ok(key);
            }
        }
    }

    /// Return a queued key press if there is one, without waiting. Records
    /// that do not decode to a key are discarded along the way.
    pub fn poll(&mut self) -> Result<Option<KeyEvent>> {
        while let Some(record) = self.source.peek()? {
            self.source.read()?;
            let key = match record {
                RawInputRecord::Key(record) => decode_record(&record),
                RawInputRecord::Other => None,
            };
            if let Some(key) = key {
                trace!(%key, "polled key");
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedSource;

    fn press(vk: u16, ch: u8) -> RawInputRecord {
        RawInputRecord::Key(RawKeyRecord::down(vk, ch, ControlKeyState::empty()))
    }

    #[test]
    fn test_left_arrow_without_payload() {
        let mut decoder = KeyDecoder::new(ScriptedSource::new([press(VirtualKey::LEFT, 0)]));
        let key = decoder.next().unwrap();
        assert_eq!(key, KeyEvent::new(KeyCode::LEFT, Modifiers::empty()));
    }

    #[test]
    fn test_navigation_cluster_order() {
        let expected = [
            (VirtualKey::PRIOR, KeyCode::PAGE_UP),
            (VirtualKey::NEXT, KeyCode::PAGE_DOWN),
            (VirtualKey::END, KeyCode::END),
            (VirtualKey::HOME, KeyCode::HOME),
            (VirtualKey::LEFT, KeyCode::LEFT),
            (VirtualKey::UP, KeyCode::UP),
            (VirtualKey::RIGHT, KeyCode::RIGHT),
            (VirtualKey::DOWN, KeyCode::DOWN),
            (VirtualKey::INSERT, KeyCode::INSERT),
            (VirtualKey::DELETE, KeyCode::DELETE),
        ];
        for (vk, code) in expected {
            assert_eq!(VirtualKey::extended_code(vk), Some(code), "vk {vk:#x}");
        }
    }

    #[test]
    fn test_function_cluster() {
        assert_eq!(VirtualKey::extended_code(VirtualKey::F1), Some(KeyCode::F1));
        assert_eq!(VirtualKey::extended_code(0x79), Some(KeyCode::F10));
        assert_eq!(VirtualKey::extended_code(VirtualKey::F24), Some(KeyCode::F24));
        assert_eq!(VirtualKey::extended_code(0x41), None);
    }

    #[test]
    fn test_extended_code_wins_over_payload() {
        // Some consoles report '.' alongside the Delete key
        let record = RawKeyRecord::down(VirtualKey::DELETE, b'.', ControlKeyState::empty());
        assert_eq!(decode_record(&record).map(|k| k.code), Some(KeyCode::DELETE));
    }

    #[test]
    fn test_skips_modifiers_and_releases() {
        let shift = ControlKeyState::SHIFT_PRESSED;
        let mut decoder = KeyDecoder::new(ScriptedSource::new([
            RawInputRecord::Key(RawKeyRecord::down(VirtualKey::SHIFT, 0, shift)),
            RawInputRecord::Other,
            RawInputRecord::Key(RawKeyRecord::up(0x41, b'a', ControlKeyState::empty())),
            RawInputRecord::Key(RawKeyRecord::down(VirtualKey::CAPITAL, 0, ControlKeyState::CAPSLOCK_ON)),
            RawInputRecord::Key(RawKeyRecord::down(VirtualKey::LWIN, 0, ControlKeyState::empty())),
            RawInputRecord::Key(RawKeyRecord::down(0x41, b'A', shift)),
        ]));
        let key = decoder.next().unwrap();
        assert_eq!(key.code, KeyCode::from('A'));
        assert_eq!(key.modifiers, Modifiers::SHIFT);
    }

    #[test]
    fn test_zero_payload_is_skipped() {
        let mut decoder = KeyDecoder::new(ScriptedSource::new([press(0xff, 0), press(0x42, b'b')]));
        assert_eq!(decoder.next().unwrap().code, KeyCode::from('b'));
    }

    #[test]
    fn test_modifier_mapping() {
        let state = ControlKeyState::CAPSLOCK_ON
            | ControlKeyState::RIGHT_ALT_PRESSED
            | ControlKeyState::LEFT_CTRL_PRESSED
            | ControlKeyState::NUMLOCK_ON;
        assert_eq!(
            state.modifiers(),
            Modifiers::CAPS_LOCK | Modifiers::ALT | Modifiers::CONTROL
        );
        assert_eq!(ControlKeyState::RIGHT_CTRL_PRESSED.modifiers(), Modifiers::CONTROL);
        assert_eq!(ControlKeyState::SHIFT_PRESSED.modifiers(), Modifiers::SHIFT);
        assert_eq!(ControlKeyState::ENHANCED_KEY.modifiers(), Modifiers::empty());
    }

    #[test]
    fn test_next_propagates_exhausted_source() {
        let mut decoder = KeyDecoder::new(ScriptedSource::new([RawInputRecord::Other]));
        assert!(decoder.next().is_err());
    }

    #[test]
    fn test_poll_empty_returns_none() {
        let mut decoder = KeyDecoder::new(ScriptedSource::new([]));
        assert_eq!(decoder.poll().unwrap(), None);
    }

    #[test]
    fn test_poll_discards_non_keys() {
        let mut decoder = KeyDecoder::new(ScriptedSource::new([
            RawInputRecord::Other,
            RawInputRecord::Key(RawKeyRecord::down(VirtualKey::CONTROL, 0, ControlKeyState::LEFT_CTRL_PRESSED)),
            press(VirtualKey::RETURN, 13),
            press(0x41, b'a'),
        ]));
        assert_eq!(decoder.poll().unwrap(), Some(KeyEvent::plain(KeyCode::ENTER)));
        assert_eq!(decoder.source().remaining(), 1);
    }

    #[test]
    fn test_poll_only_noise_drains_queue() {
        let mut decoder = KeyDecoder::new(ScriptedSource::new([
            RawInputRecord::Other,
            RawInputRecord::Key(RawKeyRecord::up(0x41, b'a', ControlKeyState::empty())),
        ]));
        assert_eq!(decoder.poll().unwrap(), None);
        assert_eq!(decoder.source().remaining(), 0);
    }
}
