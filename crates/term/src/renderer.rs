//! TerminalRenderer: puts framebuffers on a real terminal.
//!
//! The glyphs on screen are remembered, and each new frame only rewrites the
//! spans of a row that differ from them. A frame of a different size, or the
//! first one after [`TerminalRenderer::invalidate`], is drawn in full.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, Clear, ClearType},
};

use crate::fb::{FrameBuffer, Glyph, Ink};

const SCREEN_BG: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const BOARD_BG: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 40,
};

/// Foreground, background and optional attribute of an ink.
fn palette(ink: Ink) -> (Color, Color, Option<Attribute>) {
    let rgb = |r, g, b| Color::Rgb { r, g, b };
    match ink {
        Ink::Blank => (rgb(220, 220, 220), SCREEN_BG, None),
        Ink::Frame => (rgb(200, 200, 200), SCREEN_BG, None),
        Ink::Label => (rgb(220, 220, 220), SCREEN_BG, Some(Attribute::Bold)),
        Ink::Value => (rgb(200, 200, 200), SCREEN_BG, None),
        Ink::Hint => (rgb(200, 200, 200), SCREEN_BG, Some(Attribute::Dim)),
        Ink::Banner => (rgb(255, 255, 255), SCREEN_BG, Some(Attribute::Bold)),
        Ink::Wall => (rgb(120, 120, 130), BOARD_BG, None),
        Ink::Floor => (rgb(90, 90, 100), BOARD_BG, Some(Attribute::Dim)),
        Ink::Head => (rgb(120, 255, 120), BOARD_BG, Some(Attribute::Bold)),
        Ink::Body => (rgb(60, 180, 80), BOARD_BG, None),
        Ink::Food => (rgb(230, 70, 70), BOARD_BG, Some(Attribute::Bold)),
        Ink::Teleport => (rgb(210, 90, 220), BOARD_BG, Some(Attribute::Bold)),
    }
}

pub struct TerminalRenderer {
    stdout: Stdout,
    /// What the terminal currently shows; `None` forces a full redraw.
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        execute!(
            self.stdout,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen (resize, startup redraw).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Draw `fb`, then swap it with the previously shown frame so the caller
    /// can render the next frame into the old buffer.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        encode_frame(self.shown.as_ref(), fb, &mut self.bytes)?;
        self.stdout.write_all(&self.bytes)?;
        self.stdout.flush()?;

        let shown = self.shown.get_or_insert_with(|| FrameBuffer::new(0, 0));
        std::mem::swap(shown, fb);
        Ok(())
    }

    pub fn bell(&mut self) -> Result<()> {
        execute!(self.stdout, Print('\x07'))?;
        Ok(())
    }
}

/// Encode the commands that turn `shown` into `next`.
///
/// Without a previous frame of the same size the screen is cleared and every
/// row is written.
pub fn encode_frame(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> io::Result<()> {
    let shown = shown.filter(|s| s.width() == next.width() && s.height() == next.height());
    let mut pen = Pen { out, ink: None };

    if shown.is_none() {
        queue!(pen.out, Clear(ClearType::All))?;
    }
    for y in 0..next.height() {
        let row = next.row(y);
        match shown.map(|s| s.row(y)) {
            None => pen.span(0, y, row)?,
            Some(old) if old == row => {}
            Some(old) => {
                for (start, end) in ChangedSpans::new(old, row) {
                    pen.span(start as u16, y, &row[start..end])?;
                }
            }
        }
    }
    pen.finish()
}

/// Tracks the active ink so color commands are only sent when it changes.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    ink: Option<Ink>,
}

impl Pen<'_> {
    fn span(&mut self, x: u16, y: u16, glyphs: &[Glyph]) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y))?;
        for glyph in glyphs {
            if self.ink != Some(glyph.ink) {
                self.switch(glyph.ink)?;
            }
            queue!(self.out, Print(glyph.ch))?;
        }
        Ok(())
    }

    fn switch(&mut self, ink: Ink) -> io::Result<()> {
        let (fg, bg, attr) = palette(ink);
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(fg),
            SetBackgroundColor(bg)
        )?;
        if let Some(attr) = attr {
            queue!(self.out, SetAttribute(attr))?;
        }
        self.ink = Some(ink);
        Ok(())
    }

    fn finish(self) -> io::Result<()> {
        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))
    }
}

/// Half-open column ranges where two equally long rows differ.
struct ChangedSpans<'a> {
    old: &'a [Glyph],
    new: &'a [Glyph],
    col: usize,
}

impl<'a> ChangedSpans<'a> {
    fn new(old: &'a [Glyph], new: &'a [Glyph]) -> Self {
        Self { old, new, col: 0 }
    }

    fn same(&self, col: usize) -> bool {
        self.old.get(col) == self.new.get(col)
    }
}

impl Iterator for ChangedSpans<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.new.len();
        while self.col < len && self.same(self.col) {
            self.col += 1;
        }
        if self.col >= len {
            return None;
        }
        let start = self.col;
        while self.col < len && !self.same(self.col) {
            self.col += 1;
        }
        Some((start, self.col))
    }
}
