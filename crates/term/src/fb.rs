//! Drawing surfaces and the in-memory pixel framebuffer.

use anyhow::{bail, Result};

use crate::types::PixelRect;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` color string.
    ///
    /// ```
    /// use life_view_term::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#543DE5").unwrap(), Rgb::new(0x54, 0x3d, 0xe5));
    /// assert!(Rgb::from_hex("543DE5").is_err());
    /// ```
    pub fn from_hex(s: &str) -> Result<Self> {
        let Some(hex) = s.strip_prefix('#') else {
            bail!("color {s:?} must start with '#'");
        };
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("color {s:?} must have six hex digits");
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            _ => bail!("color {s:?} contains non-hex digits"),
        }
    }
}

/// Something rectangles can be filled on.
pub trait Surface {
    /// Size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Fill `rect` with an opaque color. Parts outside the surface are clipped.
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        (**self).fill_rect(rect, color)
    }
}

/// 2D framebuffer of RGB pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); len],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline(always)]
    fn idx(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }
}

impl Surface for PixelBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        let x0 = rect.x.min(self.width) as usize;
        let x1 = rect.x.saturating_add(rect.w).min(self.width) as usize;
        let y0 = rect.y.min(self.height);
        let y1 = rect.y.saturating_add(rect.h).min(self.height);
        let stride = self.width as usize;

        for y in y0..y1 {
            let row = (y as usize) * stride;
            self.pixels[row + x0..row + x1].fill(color);
        }
    }
}
