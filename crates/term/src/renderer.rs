//! TerminalRenderer: flushes a framebuffer to the real terminal.
//!
//! Only runs of cells that differ from the previously presented frame are
//! written. A size change (or [`TerminalRenderer::invalidate`]) forces a full
//! redraw.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last presented frame; `None` forces a full redraw
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse capture
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo everything `enter` did
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }

    /// Force the next present to redraw every cell (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present `fb`, then swap it with the previous frame.
    ///
    /// The caller gets the old buffer back and redraws into it next frame, so
    /// no frame is ever cloned.
    pub fn present_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
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

/// Encode a full redraw of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut style = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        encode_run(fb, 0, y, fb.width(), &mut style, out)?;
    }
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Both buffers must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut style = None;
    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        encode_run(next, x, y, len, &mut style, out)
    })?;
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn encode_run(
    fb: &FrameBuffer,
    x: u16,
    y: u16,
    len: u16,
    current: &mut Option<CellStyle>,
    out: &mut Vec<u8>,
) -> Result<()> {
    for dx in 0..len {
        let cell = fb.get(x + dx, y).unwrap_or_default();
        if *current != Some(cell.style) {
            apply_style_into(out, cell.style)?;
            *current = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(to_color(style.fg)))?;
    out.queue(SetBackgroundColor(to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
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

/// Call `f(x, y, len)` for each maximal horizontal run of changed cells, row by row.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    for y in 0..next.height() {
        let mut start = None;
        for x in 0..=next.width() {
            let changed = x < next.width() && prev.get(x, y) != next.get(x, y);
            match (changed, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    f(s, y, x - s)?;
                    start = None;
                }
                _ => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
        let mut runs = Vec::new();
        for_each_changed_run(prev, next, |x, y, len| {
            runs.push((x, y, len));
            Ok(())
        })
        .unwrap();
        runs
    }

    fn with_text(width: u16, text: &str) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, 1);
        fb.put_str(0, 0, text, CellStyle::default());
        fb
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = with_text(8, "........");
        let b = with_text(8, ".XXX..X.");
        assert_eq!(runs(&a, &b), vec![(1, 0, 3), (6, 0, 1)]);
    }

    #[test]
    fn run_reaching_right_edge_is_closed() {
        let a = with_text(4, "....");
        let b = with_text(4, "..XX");
        assert_eq!(runs(&a, &b), vec![(2, 0, 2)]);
    }

    #[test]
    fn diff_writes_only_changed_glyphs() {
        let a = with_text(6, "......");
        let b = with_text(6, "..X...");
        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('X'));
        assert!(!text.contains('.'));
    }

    #[test]
    fn identical_frames_encode_no_text() {
        let a = with_text(4, "ABCD");
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains('A'));
    }

    #[test]
    fn full_redraw_contains_every_glyph() {
        let fb = with_text(4, "ABCD");
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        assert!(String::from_utf8_lossy(&out).contains("ABCD"));
    }
}
