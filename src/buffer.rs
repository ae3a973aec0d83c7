//! Packed bit buffer

use std::convert::TryFrom;

use crate::error::{CanvasError, Result};

/// Packed 1-bit-per-pixel rendering buffer
///
/// Data is stored in row-major order, top to bottom. Each byte holds 8
/// horizontally adjacent pixels with the most significant bit being the
/// leftmost pixel. A set bit is a black pixel.
#[derive(Debug, PartialEq, Eq)]
pub struct BitBuffer {
    /// Packed pixel data, `row_bytes * height` bytes
    data: Vec<u8>,
    /// Image width in pixels
    width: usize,
    /// Image height in pixels
    height: usize,
    /// Bytes per scanline
    row_bytes: usize,
}

impl BitBuffer {
    /// Create a new cleared buffer of `width` x `height` pixels
    ///
    /// `width` must be a positive multiple of 8 and `height` positive.
    /// The storage is reserved up front, so an allocation the system
    /// cannot satisfy is reported instead of aborting.
    ///
    ///     use monoraster::{BitBuffer, CanvasError};
    ///
    ///     let buf = BitBuffer::new(16, 4).unwrap();
    ///     assert_eq!(buf.row_bytes(), 2);
    ///     assert_eq!(buf.len(), 8);
    ///
    ///     assert_eq!(BitBuffer::new(10, 4),
    ///                Err(CanvasError::InvalidDimensions { width: 10, height: 4 }));
    ///
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 || width % 8 != 0 {
            return Err(CanvasError::InvalidDimensions { width, height });
        }
        let row_bytes = width / 8;
        let len = row_bytes
            .checked_mul(height)
            .ok_or(CanvasError::AllocationFailure { bytes: usize::MAX })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| CanvasError::AllocationFailure { bytes: len })?;
        data.resize(len, 0u8);
        Ok(BitBuffer { data, width, height, row_bytes })
    }
    /// Size of underlying buffer in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Always false for a live buffer
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Bytes per scanline, `width / 8`
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }
    /// Return the bytes of scanline `y`, None if `y` is outside the buffer
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.row_bytes;
        Some(&self.data[start .. start + self.row_bytes])
    }
    /// Iterate over scanlines, top to bottom
    pub fn rows(&self) -> std::slice::Chunks<'_, u8> {
        self.data.chunks(self.row_bytes)
    }
    /// Packed pixel data
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
    /// Consume the buffer and return the packed pixel data
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
    /// Clear all pixels
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0);
    }
    /// Byte index and bit mask of pixel (`x`,`y`), None if outside
    fn locate(&self, x: i64, y: i64) -> Option<(usize, u8)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x / 8 >= self.row_bytes || y >= self.height {
            return None;
        }
        Some((y * self.row_bytes + x / 8, 0x80u8 >> (x % 8)))
    }
    /// Set pixel (`x`,`y`)
    ///
    /// Locations outside of the buffer are ignored
    pub fn set(&mut self, x: i64, y: i64) {
        if let Some((i, mask)) = self.locate(x, y) {
            self.data[i] |= mask;
        }
    }
    /// Return true if pixel (`x`,`y`) is set
    ///
    /// Locations outside of the buffer read as clear
    pub fn get(&self, x: i64, y: i64) -> bool {
        match self.locate(x, y) {
            Some((i, mask)) => self.data[i] & mask != 0,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BitBuffer;
    use crate::CanvasError;

    #[test]
    fn buffer_layout() {
        let mut buf = BitBuffer::new(24, 3).unwrap();
        assert_eq!(buf.len(), 9);
        assert_eq!(buf.row_bytes(), 3);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));

        buf.set(0, 0);
        assert_eq!(buf.row(0), Some(&[0x80, 0, 0][..]));
        buf.set(7, 0);
        assert_eq!(buf.row(0), Some(&[0x81, 0, 0][..]));
        buf.set(8, 1);
        assert_eq!(buf.row(1), Some(&[0, 0x80, 0][..]));
        buf.set(23, 2);
        assert_eq!(buf.row(2), Some(&[0, 0, 0x01][..]));
        assert_eq!(buf.row(3), None);
        assert_eq!(buf.row(usize::MAX), None);
        assert_eq!(buf.as_bytes(), &[0x81, 0, 0, 0, 0x80, 0, 0, 0, 0x01]);
        assert_eq!(buf.rows().count(), 3);
    }

    #[test]
    fn buffer_bounds() {
        let mut buf = BitBuffer::new(8, 2).unwrap();
        buf.set(-1, 0);
        buf.set(0, -1);
        buf.set(8, 0);
        buf.set(0, 2);
        buf.set(i64::MAX, i64::MAX);
        buf.set(i64::MIN, 0);
        assert_eq!(buf.as_bytes(), &[0, 0]);
        assert!(!buf.get(8, 0));
        assert!(!buf.get(-3, -3));
    }

    #[test]
    fn buffer_clear() {
        let mut buf = BitBuffer::new(8, 2).unwrap();
        buf.set(3, 1);
        assert!(buf.get(3, 1));
        buf.clear();
        assert!(!buf.get(3, 1));
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn buffer_invalid() {
        for &(w, h) in &[(0, 8), (8, 0), (0, 0), (10, 8), (7, 1)] {
            assert_eq!(BitBuffer::new(w, h),
                       Err(CanvasError::InvalidDimensions { width: w, height: h }));
        }
    }

    #[test]
    fn buffer_overflow() {
        let w = usize::MAX - 7;
        assert_eq!(BitBuffer::new(w, usize::MAX),
                   Err(CanvasError::AllocationFailure { bytes: usize::MAX }));
    }
}
