//! Screen Surface
//!
//! The character-cell screen the editor paints on: cursor placement, text
//! output at the cursor and an audible alert.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::error::Result;

/// Mutable screen the editor drives but does not own
pub trait ScreenSurface {
    /// Move the visible cursor to (`row`, `col`), both zero-based
    fn locate(&mut self, row: u16, col: u16) -> Result<()>;

    /// Write `text` at the cursor, advancing it
    fn write(&mut self, text: &str) -> Result<()>;

    /// Sound the terminal bell
    fn alert(&mut self) -> Result<()>;

    /// Push pending output to the terminal
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_colors(&mut self, _foreground: Color, _background: Color) -> Result<()> {
        Ok(())
    }

    /// Blank the screen and home the cursor
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }

    /// (rows, cols)
    fn size(&self) -> Result<(u16, u16)> {
        Ok((25, 80))
    }
}

impl<S: ScreenSurface + ?Sized> ScreenSurface for &mut S {
    fn locate(&mut self, row: u16, col: u16) -> Result<()> {
        (**self).locate(row, col)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }

    fn alert(&mut self) -> Result<()> {
        (**self).alert()
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn set_colors(&mut self, foreground: Color, background: Color) -> Result<()> {
        (**self).set_colors(foreground, background)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn size(&self) -> Result<(u16, u16)> {
        (**self).size()
    }
}

/// Crossterm-backed screen writing to any `Write` sink
pub struct TerminalScreen<W: Write> {
    out: W,
}

impl TerminalScreen<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ScreenSurface for TerminalScreen<W> {
    fn locate(&mut self, row: u16, col: u16) -> Result<()> {
        queue!(self.out, MoveTo(col, row))?;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text))?;
        Ok(())
    }

    fn alert(&mut self) -> Result<()> {
        queue!(self.out, Print('\u{7}'))?;
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn set_colors(&mut self, foreground: Color, background: Color) -> Result<()> {
        queue!(self.out, SetForegroundColor(foreground), SetBackgroundColor(background))?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }
}
