//! Application
//!
//! The demo session: a main menu in front of a three-field entry form,
//! run on the process terminal in raw mode.

mod config;

use crossterm::{cursor, execute, terminal};
use tracing::info;

use crate::error::Result;
use crate::form::{AcceptAll, DateField, DigitsOnly, EditOutcome, Field, Required};
use crate::input::{KeyDecoder, KeyEventSource, TerminalKeySource};
use crate::screen::{ScreenSurface, TerminalScreen};
use crate::ui::{choose, entry, EntryForm, Menu, MenuChoice};

pub use config::{ConsoleColor, EntryConfig, Palette};

const TITLE: &str = "Screen Entry";
const NEW_ENTRY: usize = 1;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Session {
    /// Label and value of every field
    Committed(Vec<(String, String)>),
    Cancelled,
    Interrupted,
}

/// Restores cooked mode when dropped
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(std::io::stdout(), terminal::EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(std::io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

pub struct App {
    pub config: EntryConfig,
}

impl App {
    pub fn new(config: EntryConfig) -> Self {
        Self { config }
    }

    pub fn fields() -> Vec<Field> {
        vec![
            Field::new("Name", "", 30).with_validator(Required(AcceptAll)),
            Field::new("Birth date", "", 10).with_validator(DateField::new("%m/%d/%Y")),
            Field::new("Postal code", "", 5).with_validator(DigitsOnly),
        ]
    }

    /// Run on the process terminal
    pub fn run(&self) -> Result<Session> {
        let _guard = RawModeGuard::enable()?;
        let mut screen = TerminalScreen::stdout();
        let mut decoder = KeyDecoder::new(TerminalKeySource::new());
        self.run_with(&mut screen, &mut decoder)
    }

    pub fn run_with<S: KeyEventSource, W: ScreenSurface>(
        &self,
        screen: &mut W,
        decoder: &mut KeyDecoder<S>,
    ) -> Result<Session> {
        let menu = Menu::new(TITLE, ["New entry", "Quit"]);
        loop {
            match choose(screen, decoder, &menu, &self.config)? {
                MenuChoice::Interrupted => return Ok(Session::Interrupted),
                MenuChoice::Selected(NEW_ENTRY) => {}
                MenuChoice::Selected(_) => return Ok(Session::Cancelled),
            }

            let form = EntryForm::new(TITLE).subtitle("New entry");
            let mut fields = Self::fields();
            match entry(screen, decoder, &form, &mut fields, &self.config)? {
                EditOutcome::Committed => {
                    let values = fields
                        .into_iter()
                        .map(|f| (f.label().to_string(), f.into_value()))
                        .collect();
                    return Ok(Session::Committed(values));
                }
                EditOutcome::Interrupted => return Ok(Session::Interrupted),
                EditOutcome::Aborted => info!("entry abandoned, back to menu"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::decoder::VirtualKey;
    use crate::testing::{Key, RecordingScreen, ScriptedSource};

    fn run(keys: Vec<Key>) -> Session {
        let mut decoder = KeyDecoder::new(ScriptedSource::keys(keys));
        let mut screen = RecordingScreen::default();
        App::new(EntryConfig::default()).run_with(&mut screen, &mut decoder).unwrap()
    }

    #[test]
    fn test_commit_returns_values() {
        let session = run(vec![
            Key::Char('1'),
            Key::Vk(VirtualKey::RETURN),
            Key::Char('A'),
            Key::Char('d'),
            Key::Char('a'),
            Key::Vk(VirtualKey::F1 + 9),
        ]);
        assert_eq!(
            session,
            Session::Committed(vec![
                ("Name".into(), "Ada".into()),
                ("Birth date".into(), String::new()),
                ("Postal code".into(), String::new()),
            ])
        );
    }

    #[test]
    fn test_quit_from_menu() {
        assert_eq!(run(vec![Key::Char('2'), Key::Vk(VirtualKey::RETURN)]), Session::Cancelled);
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let session = run(vec![
            Key::Char('1'),
            Key::Vk(VirtualKey::RETURN),
            Key::Vk(VirtualKey::ESCAPE),
            Key::Char('2'),
            Key::Vk(VirtualKey::RETURN),
        ]);
        assert_eq!(session, Session::Cancelled);
    }

    #[test]
    fn test_interrupt_in_form() {
        let session = run(vec![Key::Char('1'), Key::Vk(VirtualKey::RETURN), Key::CtrlChar('c')]);
        assert_eq!(session, Session::Interrupted);
    }

    #[test]
    fn test_blank_name_cannot_leave() {
        // Enter on a blank required name is refused; the script then runs dry
        let mut decoder = KeyDecoder::new(ScriptedSource::keys(vec![
            Key::Char('1'),
            Key::Vk(VirtualKey::RETURN),
            Key::Vk(VirtualKey::RETURN),
        ]));
        let mut screen = RecordingScreen::default();
        let result = App::new(EntryConfig::default()).run_with(&mut screen, &mut decoder);
        assert!(matches!(result, Err(crate::error::ConsoleError::ExhaustedInput)));
    }
}
