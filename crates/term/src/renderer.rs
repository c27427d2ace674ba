//! TerminalRenderer: double-buffered output to a real terminal.
//!
//! The first frame (and any frame after a resize or [`invalidate`]) is written
//! in full. After that only runs of cells that differ from the previous frame
//! are sent.
//!
//! [`invalidate`]: TerminalRenderer::invalidate

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    front: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            front: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Switch to the alternate screen in raw mode with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`enter`](Self::enter).
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next frame to be a full redraw.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Show `back`, then keep a copy as the new front buffer.
    pub fn present(&mut self, back: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        let same_size = self
            .front
            .as_ref()
            .is_some_and(|f| f.width() == back.width() && f.height() == back.height());
        match self.front.as_mut() {
            Some(front) if same_size => {
                encode_diff_into(front, back, &mut self.buf)?;
                front.clone_from(back);
            }
            _ => {
                encode_full_into(back, &mut self.buf)?;
                self.front = Some(back.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen: Option<Style> = None;
    for y in 0..fb.height() {
        write_run(fb, 0, y, fb.width(), &mut pen, out)?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the cells of `next` that differ from `prev` into `out`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen: Option<Style> = None;
    for (y, start, len) in changed_runs(prev, next) {
        write_run(next, start, y, len, &mut pen, out)?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Move to `(x, y)` and print `len` glyphs, switching colors only when needed.
fn write_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    pen: &mut Option<Style>,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(cursor::MoveTo(x, y))?;
    for gx in x..x + len {
        let glyph = fb.get(gx, y).unwrap_or_default();
        if *pen != Some(glyph.style) {
            out.queue(SetForegroundColor(to_color(glyph.style.fg)))?;
            out.queue(SetBackgroundColor(to_color(glyph.style.bg)))?;
            *pen = Some(glyph.style);
        }
        out.queue(Print(glyph.ch))?;
    }
    Ok(())
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(y, x, len)` where the two buffers differ.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut run_start: Option<u16> = None;
        for x in 0..next.width() {
            let differs = prev.get(x, y) != next.get(x, y);
            match (differs, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    runs.push((y, start, x - start));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            runs.push((y, start, next.width() - start));
        }
    }
    runs
}
