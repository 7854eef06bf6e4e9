//! Read-only view over engine-owned cell bytes.

use crate::types::{Cell, Dimensions};

/// A non-owning window onto an engine's cell buffer.
///
/// The view borrows the engine, so it has to be re-fetched after every
/// mutating call. Renderers take one per frame and drop it.
#[derive(Debug, Clone, Copy)]
pub struct CellView<'a> {
    dims: Dimensions,
    bytes: &'a [u8],
}

impl<'a> CellView<'a> {
    /// Wrap `bytes` as a `dims`-shaped row-major grid.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len() != dims.width * dims.height`.
    pub fn new(dims: Dimensions, bytes: &'a [u8]) -> Self {
        assert_eq!(
            bytes.len(),
            dims.len(),
            "cell buffer length does not match {}x{} grid",
            dims.width,
            dims.height
        );
        Self { dims, bytes }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, row: u32, col: u32) -> Cell {
        let idx = (row as usize) * (self.dims.width as usize) + (col as usize);
        Cell::from_byte(self.bytes[idx])
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Rows top to bottom, each `width` bytes long.
    pub fn iter_rows(&self) -> impl Iterator<Item = &'a [u8]> {
        self.bytes.chunks(self.dims.width.max(1) as usize)
    }

    pub fn alive_count(&self) -> usize {
        self.bytes.iter().filter(|&&b| b != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_decodes_row_major_bytes() {
        let bytes = [0u8, 1, 0, 0, 0, 9];
        let view = CellView::new(Dimensions::new(3, 2), &bytes);
        assert_eq!(view.get(0, 1), Cell::Alive);
        assert_eq!(view.get(1, 2), Cell::Alive);
        assert_eq!(view.get(1, 0), Cell::Dead);
        assert_eq!(view.alive_count(), 2);
        assert_eq!(view.iter_rows().count(), 2);
    }

    #[test]
    #[should_panic(expected = "cell buffer length")]
    fn rejects_short_buffer() {
        let bytes = [0u8; 5];
        let _ = CellView::new(Dimensions::new(3, 2), &bytes);
    }
}
