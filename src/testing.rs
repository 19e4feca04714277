//! Test doubles for the key source and the screen.

use std::collections::VecDeque;

use crate::error::{ConsoleError, Result};
use crate::input::decoder::{ControlKeyState, KeyEventSource, RawInputRecord, RawKeyRecord, VirtualKey};
use crate::screen::ScreenSurface;

/// Replays a fixed queue of raw records
#[derive(Debug, Default)]
pub struct ScriptedSource {
    records: VecDeque<RawInputRecord>,
}

impl ScriptedSource {
    pub fn new(records: impl IntoIterator<Item = RawInputRecord>) -> Self {
        Self { records: records.into_iter().collect() }
    }

    /// Build a script from key descriptions
    pub fn keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self::new(keys.into_iter().map(Key::record))
    }

    pub fn remaining(&self) -> usize {
        self.records.len()
    }
}

impl KeyEventSource for ScriptedSource {
    fn read(&mut self) -> Result<RawInputRecord> {
        self.records.pop_front().ok_or(ConsoleError::ExhaustedInput)
    }

    fn peek(&mut self) -> Result<Option<RawInputRecord>> {
        Ok(self.records.front().copied())
    }
}

/// Shorthand for scripting key presses
#[derive(Debug, Clone, Copy)]
pub enum Key {
    Char(char),
    Vk(u16),
    Ctrl(u16),
    CtrlChar(char),
    ShiftTab,
}

impl Key {
    pub fn record(self) -> RawInputRecord {
        let ctrl = ControlKeyState::LEFT_CTRL_PRESSED;
        let none = ControlKeyState::empty();
        let rec = match self {
            Self::Char(c) => RawKeyRecord::down(char_vk(c), c as u8, none),
            Self::Vk(vk) => RawKeyRecord::down(vk, vk_char(vk), none),
            Self::Ctrl(vk) => RawKeyRecord::down(vk, ctrl_char(vk), ctrl),
            Self::CtrlChar(c) => RawKeyRecord::down(char_vk(c), (c as u8) & 0x1f, ctrl),
            Self::ShiftTab => RawKeyRecord::down(VirtualKey::TAB, 9, ControlKeyState::SHIFT_PRESSED),
        };
        RawInputRecord::Key(rec)
    }
}

fn char_vk(c: char) -> u16 {
    match c {
        c if c.is_ascii_alphanumeric() => c.to_ascii_uppercase() as u16,
        ' ' => VirtualKey::SPACE,
        _ => VirtualKey::OEM_1,
    }
}

fn vk_char(vk: u16) -> u8 {
    match vk {
        VirtualKey::BACK => 8,
        VirtualKey::TAB => 9,
        VirtualKey::RETURN => 13,
        VirtualKey::ESCAPE => 27,
        _ => 0,
    }
}

fn ctrl_char(vk: u16) -> u8 {
    match vk {
        VirtualKey::RETURN => 10,
        _ => vk_char(vk),
    }
}

/// Records what the editor does to the screen
#[derive(Debug)]
pub struct RecordingScreen {
    pub row: u16,
    pub col: u16,
    pub alerts: usize,
    pub writes: Vec<String>,
    pub clears: usize,
    grid: Vec<Vec<char>>,
}

impl RecordingScreen {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            row: 0,
            col: 0,
            alerts: 0,
            writes: Vec::new(),
            clears: 0,
            grid: vec![vec![' '; cols as usize]; rows as usize],
        }
    }

    pub fn cursor(&self) -> (u16, u16) {
        (self.row, self.col)
    }

    /// Text on `row` from `col`, `len` cells wide
    pub fn text_at(&self, row: u16, col: u16, len: usize) -> String {
        self.grid[row as usize].iter().skip(col as usize).take(len).collect()
    }

    pub fn line(&self, row: u16) -> String {
        self.grid[row as usize].iter().collect::<String>().trim_end().to_string()
    }
}

impl Default for RecordingScreen {
    fn default() -> Self {
        Self::new(25, 80)
    }
}

impl ScreenSurface for RecordingScreen {
    fn locate(&mut self, row: u16, col: u16) -> Result<()> {
        self.row = row;
        self.col = col;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.writes.push(text.to_string());
        for c in text.chars() {
            match c {
                '\u{8}' => self.col = self.col.saturating_sub(1),
                '\n' => {
                    self.row += 1;
                    self.col = 0;
                }
                c => {
                    let (r, col) = (self.row as usize, self.col as usize);
                    if let Some(cell) = self.grid.get_mut(r).and_then(|line| line.get_mut(col)) {
                        *cell = c;
                    }
                    self.col += 1;
                }
            }
        }
        Ok(())
    }

    fn alert(&mut self) -> Result<()> {
        self.alerts += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.clears += 1;
        for line in &mut self.grid {
            line.fill(' ');
        }
        self.row = 0;
        self.col = 0;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        let rows = self.grid.len() as u16;
        let cols = self.grid.first().map_or(0, |l| l.len()) as u16;
        Ok((rows, cols))
    }
}
