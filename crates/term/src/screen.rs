//! Screen: owns the terminal while a game is running and pushes frames to it.
//!
//! Frames are compared row by row. A row that differs from what is on screen
//! is rewritten from its first to its last changed column, so a moving snake
//! costs one short span per touched row. The first frame, and any frame of a
//! different size, clears the screen and writes everything.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Rgb, Style};

pub struct Screen {
    out: io::Stdout,
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            shown: None,
            bytes: Vec::new(),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        self.bytes
            .queue(terminal::EnterAlternateScreen)?
            .queue(terminal::DisableLineWrap)?
            .queue(cursor::Hide)?;
        self.flush()
    }

    /// Give the terminal back in the state we found it.
    pub fn leave(&mut self) -> Result<()> {
        self.bytes.clear();
        self.bytes
            .queue(SetAttribute(Attribute::Reset))?
            .queue(cursor::Show)?
            .queue(terminal::EnableLineWrap)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen so the next frame is written in full.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `frame`, then hand back the previously shown buffer in its place.
    ///
    /// The returned buffer holds stale content; render over it.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        encode_frame(self.shown.as_ref(), frame, &mut self.bytes)?;
        self.flush()?;

        let mut spare = self.shown.take().unwrap_or_else(|| FrameBuffer::new(0, 0));
        std::mem::swap(&mut spare, frame);
        self.shown = Some(spare);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.bytes)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the escape sequences that turn `shown` into `next`.
///
/// With no usable `shown` frame the whole screen is cleared and redrawn.
/// Writes nothing when the frames are identical.
pub fn encode_frame(shown: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let shown = shown.filter(|s| s.width() == next.width() && s.height() == next.height());
    if shown.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let width = next.width() as usize;
    if width == 0 {
        return Ok(());
    }

    let mut pen = Pen::default();
    for (y, row) in next.glyphs().chunks_exact(width).enumerate() {
        let old = shown.map(|s| &s.glyphs()[y * width..(y + 1) * width]);
        let Some((start, end)) = dirty_span(old, row) else {
            continue;
        };
        out.queue(cursor::MoveTo(start as u16, y as u16))?;
        for glyph in &row[start..=end] {
            pen.ink(out, glyph.style)?;
            out.queue(Print(glyph.ch))?;
        }
    }

    if pen.style.is_some() {
        out.queue(ResetColor)?.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// First and last column where `row` differs from `old`, inclusive.
fn dirty_span(old: Option<&[Glyph]>, row: &[Glyph]) -> Option<(usize, usize)> {
    let Some(old) = old else {
        return row.len().checked_sub(1).map(|last| (0, last));
    };
    let differs = |(a, b): (&Glyph, &Glyph)| a != b;
    let start = old.iter().zip(row).position(differs)?;
    let end = old.iter().zip(row).rposition(differs)?;
    Some((start, end))
}

/// Tracks the terminal's current style so only changes are emitted.
#[derive(Debug, Default)]
struct Pen {
    style: Option<Style>,
}

impl Pen {
    fn ink(&mut self, out: &mut Vec<u8>, style: Style) -> Result<()> {
        match self.style {
            Some(cur) if cur == style => return Ok(()),
            Some(cur) if cur.bold == style.bold && cur.dim == style.dim => {
                if cur.fg != style.fg {
                    out.queue(SetForegroundColor(color(style.fg)))?;
                }
                if cur.bg != style.bg {
                    out.queue(SetBackgroundColor(color(style.bg)))?;
                }
            }
            // Attributes can only be switched off by a full reset.
            _ => {
                out.queue(SetAttribute(Attribute::Reset))?
                    .queue(SetForegroundColor(color(style.fg)))?
                    .queue(SetBackgroundColor(color(style.bg)))?;
                if style.bold {
                    out.queue(SetAttribute(Attribute::Bold))?;
                }
                if style.dim {
                    out.queue(SetAttribute(Attribute::Dim))?;
                }
            }
        }
        self.style = Some(style);
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(rows: &[&str]) -> FrameBuffer {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut fb = FrameBuffer::new(width as u16, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            fb.put_str(0, y as u16, row, Style::default());
        }
        fb
    }

    fn encode(shown: Option<&FrameBuffer>, next: &FrameBuffer) -> String {
        let mut out = Vec::new();
        encode_frame(shown, next, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_first_frame_clears_and_writes_everything() {
        let text = encode(None, &lines(&["CAT", "DOG"]));
        assert!(text.contains("\x1b[2J"));
        assert!(text.contains("CAT"));
        assert!(text.contains("DOG"));
    }

    #[test]
    fn test_identical_frame_writes_nothing() {
        let fb = lines(&["CAT", "DOG"]);
        assert!(encode(Some(&fb), &fb).is_empty());
    }

    #[test]
    fn test_changed_row_is_rewritten_between_first_and_last_change() {
        let text = encode(Some(&lines(&["ABCDE"])), &lines(&["AXCYE"]));
        assert!(text.contains("\x1b[1;2H"));
        assert!(text.contains("XCY"));
        assert!(!text.contains('A'));
        assert!(!text.contains('E'));
        assert!(!text.contains("\x1b[2J"));
    }

    #[test]
    fn test_untouched_rows_are_skipped() {
        let text = encode(Some(&lines(&["CAT", "DOG"])), &lines(&["CAT", "DIG"]));
        assert!(text.contains("\x1b[2;2H"));
        assert!(!text.contains("CAT"));
    }

    #[test]
    fn test_size_change_forces_full_redraw() {
        let text = encode(Some(&lines(&["CAT"])), &lines(&["CATS"]));
        assert!(text.contains("\x1b[2J"));
        assert!(text.contains("CATS"));
    }

    #[test]
    fn test_pen_only_switches_changed_colour() {
        let base = Style::default();
        let mut out = Vec::new();
        let mut pen = Pen::default();
        pen.ink(&mut out, base).unwrap();

        out.clear();
        pen.ink(&mut out, Style::new(Rgb::new(1, 2, 3), base.bg)).unwrap();
        let text = String::from_utf8(out.clone()).unwrap();
        assert_eq!(text, "\x1b[38;2;1;2;3m");

        out.clear();
        pen.ink(&mut out, Style::new(Rgb::new(1, 2, 3), base.bg)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_pen_resets_when_bold_turns_off() {
        let mut out = Vec::new();
        let mut pen = Pen::default();
        pen.ink(&mut out, Style::default().bold()).unwrap();

        out.clear();
        pen.ink(&mut out, Style::default()).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("\x1b[0m"));
    }
}
