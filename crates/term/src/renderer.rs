//! TerminalRenderer: flushes a pixel framebuffer to a real terminal.
//!
//! Each terminal cell shows two vertically stacked pixels using the upper
//! half block glyph: foreground is the top pixel, background the bottom one.
//! The surface is drawn at the top-left corner, with a one-line status
//! message directly below it.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{PixelBuffer, Rgb};
use crate::types::BoundingBox;

const HALF_BLOCK: char = '▀';

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<PixelBuffer>,
    last_status: Option<String>,
    buf: Vec<u8>,
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
            last: None,
            last_status: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(EnableMouseCapture)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }

    /// Where `fb` lands on screen, in terminal cells.
    ///
    /// The surface is drawn from the top-left corner, one column per pixel
    /// and one row per two pixel rows.
    pub fn surface_bounds(fb: &PixelBuffer) -> BoundingBox {
        let (cols, rows) = screen_extent(fb);
        BoundingBox::new(0.0, 0.0, f64::from(cols), f64::from(rows))
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
        self.last_status = None;
    }

    /// Draw a framebuffer and status line, emitting only what changed.
    pub fn draw(&mut self, fb: &PixelBuffer, status: &str) -> Result<()> {
        self.buf.clear();

        let same_size = self
            .last
            .as_ref()
            .is_some_and(|prev| prev.width() == fb.width() && prev.height() == fb.height());

        match self.last.as_mut() {
            Some(prev) if same_size => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last_status = None;
            }
        }
        if !same_size {
            self.last = Some(fb.clone());
        }

        if self.last_status.as_deref() != Some(status) {
            let (_, rows) = screen_extent(fb);
            encode_status_into(rows, status, &mut self.buf)?;
            self.last_status = Some(status.to_string());
        }

        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Size of a framebuffer on screen, in terminal `(columns, rows)`.
pub fn screen_extent(fb: &PixelBuffer) -> (u16, u16) {
    (to_u16(fb.width()), to_u16(fb.height().div_ceil(2)))
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &PixelBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (cols, rows) = screen_extent(fb);
    let mut current: Option<(Rgb, Rgb)> = None;
    for ty in 0..rows {
        out.queue(cursor::MoveTo(0, ty))?;
        for x in 0..cols {
            print_half_block(fb, x, ty, &mut current, out)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &PixelBuffer, next: &PixelBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<(Rgb, Rgb)> = None;

    for_each_changed_run(prev, next, |x, ty, len| {
        out.queue(cursor::MoveTo(x, ty))?;
        for dx in 0..len {
            print_half_block(next, x + dx, ty, &mut current, out)?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode the status line on terminal row `row`.
pub fn encode_status_into(row: u16, text: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    out.queue(Print(text))?;
    Ok(())
}

/// Top and bottom pixel shown by terminal cell `(x, ty)`.
fn half_block(fb: &PixelBuffer, x: u16, ty: u16) -> (Rgb, Rgb) {
    let y = u32::from(ty) * 2;
    let top = fb.get(u32::from(x), y).unwrap_or_default();
    let bottom = fb.get(u32::from(x), y + 1).unwrap_or_default();
    (top, bottom)
}

fn print_half_block(
    fb: &PixelBuffer,
    x: u16,
    ty: u16,
    current: &mut Option<(Rgb, Rgb)>,
    out: &mut Vec<u8>,
) -> Result<()> {
    let colors = half_block(fb, x, ty);
    if *current != Some(colors) {
        out.queue(SetForegroundColor(rgb_to_color(colors.0)))?;
        out.queue(SetBackgroundColor(rgb_to_color(colors.1)))?;
        *current = Some(colors);
    }
    out.queue(Print(HALF_BLOCK))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn to_u16(v: u32) -> u16 {
    v.min(u32::from(u16::MAX)) as u16
}

fn for_each_changed_run(
    prev: &PixelBuffer,
    next: &PixelBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let (w, h) = screen_extent(next);

    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: treat everything as dirty in a single pass (row runs).
        for ty in 0..h {
            f(0, ty, w)?;
        }
        return Ok(());
    }

    for ty in 0..h {
        let mut x = 0;
        while x < w {
            if half_block(prev, x, ty) == half_block(next, x, ty) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && half_block(prev, x, ty) != half_block(next, x, ty) {
                x += 1;
            }
            f(start, ty, x - start)?;
        }
    }

    Ok(())
}
