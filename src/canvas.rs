//! Monochrome raster canvas

use std::convert::TryFrom;
use std::fmt;

use tracing::{debug, trace};

use crate::buffer::BitBuffer;
use crate::error::Result;
use crate::line::BresenhamLine;
use crate::PixelData;

/// Packed monochrome canvas with line drawing
///
/// Pixels are addressed with signed coordinates so that strokes may stray
/// outside of the canvas; writes outside of the canvas are dropped.
///
///     use monoraster::RasterCanvas;
///
///     let mut canvas = RasterCanvas::new(16, 4).unwrap();
///     canvas.draw_line(0, 1, 15, 1);
///     let rows = canvas.dump_text();
///     assert_eq!(rows[0], "1111111111111111");
///     assert_eq!(rows[2], "1111111111111111");
///     assert_eq!(rows[3], "0000000000000000");
///
#[derive(Debug, PartialEq, Eq)]
pub struct RasterCanvas {
    rbuf: BitBuffer,
    line_width: i64,
}

impl RasterCanvas {
    /// Stroke width used by [draw_line] unless changed
    ///
    /// [draw_line]: #method.draw_line
    pub const DEFAULT_LINE_WIDTH: i64 = 3;

    /// Create a new cleared canvas of `width` x `height` pixels
    ///
    /// `width` must be a positive multiple of 8 and `height` positive,
    /// otherwise [CanvasError::InvalidDimensions] is returned.
    ///
    /// [CanvasError::InvalidDimensions]: crate::CanvasError::InvalidDimensions
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_line_width(width, height, Self::DEFAULT_LINE_WIDTH)
    }
    /// Create a new cleared canvas with stroke width `line_width`
    pub fn with_line_width(width: usize, height: usize, line_width: i64) -> Result<Self> {
        let rbuf = BitBuffer::new(width, height).map_err(|err| {
            debug!(width, height, %err, "canvas rejected");
            err
        })?;
        debug!(width, height, row_bytes = rbuf.row_bytes(), bytes = rbuf.len(),
               "canvas created");
        Ok(Self { rbuf, line_width })
    }
    /// Width in pixels
    pub fn width(&self) -> usize {
        self.rbuf.width()
    }
    /// Height in pixels
    pub fn height(&self) -> usize {
        self.rbuf.height()
    }
    /// Bytes per scanline
    pub fn row_bytes(&self) -> usize {
        self.rbuf.row_bytes()
    }
    /// Underlying bit buffer
    pub fn buffer(&self) -> &BitBuffer {
        &self.rbuf
    }
    /// Current stroke width
    pub fn line_width(&self) -> i64 {
        self.line_width
    }
    /// Set the stroke width used by [draw_line]
    ///
    /// Widths of zero or less draw single pixel lines.
    ///
    /// [draw_line]: #method.draw_line
    pub fn set_line_width(&mut self, line_width: i64) {
        self.line_width = line_width;
    }
    /// Set pixel at (`x`,`y`)
    ///
    /// Locations outside of the canvas are ignored. Pixels are only ever
    /// set, never cleared, so setting a pixel twice has no further effect.
    ///
    ///     use monoraster::RasterCanvas;
    ///
    ///     let mut canvas = RasterCanvas::new(8, 2).unwrap();
    ///     canvas.set_pixel(1, 1);
    ///     canvas.set_pixel(8, 0); // Ignored, outside of range
    ///     assert!(canvas.get_pixel(1, 1));
    ///     assert_eq!(canvas.buffer().as_bytes(), &[0x00, 0x40]);
    ///
    pub fn set_pixel(&mut self, x: i64, y: i64) {
        self.rbuf.set(x, y);
    }
    /// Return true if the pixel at (`x`,`y`) is set
    ///
    /// Locations outside of the canvas read as clear
    pub fn get_pixel(&self, x: i64, y: i64) -> bool {
        self.rbuf.get(x, y)
    }
    /// Stamp a square of side `line_width` centered at (`x`,`y`)
    ///
    /// The stamp spans `line_width / 2` pixels on each side of the center,
    /// so even widths round up to the next odd side. Widths of zero or
    /// less are treated as 1.
    pub fn set_pixel_thick(&mut self, x: i64, y: i64, line_width: i64) {
        let half = i128::from(stamp_half(line_width));
        let (x, y) = (i128::from(x), i128::from(y));
        let xmax = self.width() as i128 - 1;
        let ymax = self.height() as i128 - 1;
        // Only the part of the square inside the canvas is visited
        let xs = (x - half).max(0) ..= (x + half).min(xmax);
        let ys = (y - half).max(0) ..= (y + half).min(ymax);
        for px in xs {
            for py in ys.clone() {
                self.rbuf.set(px as i64, py as i64);
            }
        }
    }
    /// Draw a line from (`x0`,`y0`) to (`x1`,`y1`) with the current stroke width
    ///
    /// Both endpoints are drawn. Portions of the line outside of the canvas
    /// are dropped.
    pub fn draw_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let lw = self.line_width;
        self.draw_line_width(x0, y0, x1, y1, lw);
    }
    /// Draw a line from (`x0`,`y0`) to (`x1`,`y1`) stamped with `line_width`
    pub fn draw_line_width(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, line_width: i64) {
        let line = BresenhamLine::new(x0, y0, x1, y1);
        trace!(x0, y0, x1, y1, line_width, steep = line.steep(), "draw line");
        // Centres further than half a stamp off the canvas draw nothing
        let half = stamp_half(line_width);
        let major = if line.steep() { self.height() } else { self.width() };
        let major = i64::try_from(major).unwrap_or(i64::MAX);
        let line = line.clip(-half, (major - 1).saturating_add(half));
        for (x, y) in line {
            self.set_pixel_thick(x, y, line_width);
        }
    }
    /// Clear all pixels
    pub fn clear(&mut self) {
        self.rbuf.clear();
    }
    /// Number of set pixels
    pub fn count_set(&self) -> usize {
        self.rbuf.as_bytes().iter().map(|b| b.count_ones() as usize).sum()
    }
    /// Render each scanline as a string of `'0'` and `'1'`
    ///
    /// One string per row, top to bottom, each `width` characters long
    pub fn dump_text(&self) -> Vec<String> {
        self.rbuf.rows().map(row_text).collect()
    }
    /// Consume the canvas and return the packed pixel data
    pub fn into_bytes(self) -> Vec<u8> {
        self.rbuf.into_vec()
    }
}

/// Pixels drawn on each side of a stamp centre
fn stamp_half(line_width: i64) -> i64 {
    line_width.max(1) >> 1
}

fn row_text(row: &[u8]) -> String {
    row.iter().map(|b| format!("{:08b}", b)).collect()
}

/// Rows of `'0'` and `'1'`, each terminated by a newline
impl fmt::Display for RasterCanvas {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rbuf.rows() {
            writeln!(f, "{}", row_text(row))?;
        }
        Ok(())
    }
}

impl<'a> PixelData<'a> for RasterCanvas {
    fn pixeldata(&'a self) -> &'a [u8] {
        self.rbuf.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::RasterCanvas;

    fn set_pixels(canvas: &RasterCanvas) -> Vec<(i64,i64)> {
        let mut v = vec![];
        for y in 0 .. canvas.height() as i64 {
            for x in 0 .. canvas.width() as i64 {
                if canvas.get_pixel(x, y) {
                    v.push((x, y));
                }
            }
        }
        v
    }

    #[test]
    fn canvas_stamp_widths() {
        let mut c = RasterCanvas::new(16, 16).unwrap();
        c.set_pixel_thick(5, 5, 0);
        assert_eq!(set_pixels(&c), vec![(5,5)]);
        c.clear();
        c.set_pixel_thick(5, 5, -4);
        assert_eq!(set_pixels(&c), vec![(5,5)]);
        c.clear();
        c.set_pixel_thick(5, 5, 1);
        assert_eq!(set_pixels(&c), vec![(5,5)]);
        c.clear();
        c.set_pixel_thick(5, 5, 2);
        assert_eq!(c.count_set(), 9);
        c.clear();
        c.set_pixel_thick(5, 5, 3);
        assert_eq!(c.count_set(), 9);
        assert!(c.get_pixel(4, 4) && c.get_pixel(6, 6));
        assert!(!c.get_pixel(7, 5) && !c.get_pixel(5, 3));
        c.clear();
        c.set_pixel_thick(5, 5, 5);
        assert_eq!(c.count_set(), 25);
    }

    #[test]
    fn canvas_stamp_clipped() {
        let mut c = RasterCanvas::new(8, 8).unwrap();
        c.set_pixel_thick(0, 0, 3);
        assert_eq!(set_pixels(&c), vec![(0,0),(1,0),(0,1),(1,1)]);
        c.clear();
        c.set_pixel_thick(7, 7, 3);
        assert_eq!(set_pixels(&c), vec![(6,6),(7,6),(6,7),(7,7)]);
    }

    #[test]
    fn canvas_line_width_setting() {
        let mut c = RasterCanvas::new(16, 8).unwrap();
        assert_eq!(c.line_width(), RasterCanvas::DEFAULT_LINE_WIDTH);
        c.set_line_width(1);
        c.draw_line(0, 3, 15, 3);
        assert_eq!(c.count_set(), 16);
        c.clear();
        c.set_line_width(5);
        c.draw_line(0, 3, 15, 3);
        assert_eq!(c.count_set(), 16 * 5);
    }

    #[test]
    fn canvas_display() {
        let mut c = RasterCanvas::new(8, 2).unwrap();
        c.set_pixel(0, 0);
        c.set_pixel(7, 1);
        assert_eq!(c.to_string(), "10000000\n00000001\n");
        assert_eq!(c.dump_text(), vec!["10000000", "00000001"]);
    }

    #[test]
    fn canvas_extreme_coordinates() {
        let mut c = RasterCanvas::new(8, 8).unwrap();
        c.set_pixel_thick(i64::MAX, 0, 3);
        c.set_pixel_thick(i64::MIN, i64::MIN, 3);
        c.set_pixel_thick(0, 0, i64::MAX);
        assert_eq!(c.count_set(), 64);

        c.clear();
        c.set_pixel_thick(i64::MAX, i64::MAX, i64::MAX);
        c.set_pixel_thick(i64::MIN, 3, i64::MAX);
        c.set_pixel_thick(i64::MIN, 4, 3);
        assert_eq!(c.count_set(), 0);
    }

    #[test]
    fn canvas_extreme_lines() {
        let mut c = RasterCanvas::new(8, 8).unwrap();
        c.draw_line(i64::MIN, 0, i64::MAX, 0);
        assert_eq!(set_pixels(&c).len(), 16);
        assert_eq!(c.dump_text()[1], "11111111");
        assert_eq!(c.dump_text()[2], "00000000");

        c.clear();
        c.draw_line(i64::MAX, i64::MAX, i64::MIN, i64::MIN);
        let mut d = RasterCanvas::new(8, 8).unwrap();
        d.draw_line(0, 0, 7, 7);
        assert_eq!(c, d);

        c.clear();
        c.draw_line(i64::MIN, i64::MIN, i64::MIN, i64::MAX);
        c.draw_line(i64::MAX, 9, i64::MAX, 9);
        assert_eq!(c.count_set(), 0);

        c.clear();
        c.draw_line_width(4, 4, 4, 4, i64::MAX);
        assert_eq!(c.count_set(), 64);
    }
}
