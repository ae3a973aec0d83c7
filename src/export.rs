//! Conversion to and from in-memory grayscale images
//!
//! Set pixels map to black (luma 0), clear pixels to white (luma 255).
//! Writing the resulting image anywhere is left to the caller.

use std::convert::TryFrom;

use image::{GrayImage, Luma};

use crate::canvas::RasterCanvas;
use crate::error::{CanvasError, Result};

/// Luma of a set pixel
pub const INK: u8 = 0;
/// Luma of a clear pixel
pub const PAPER: u8 = 255;

/// Convert a canvas into an 8-bit grayscale image
///
///     use monoraster::RasterCanvas;
///     use monoraster::export::{to_gray_image, INK, PAPER};
///
///     let mut canvas = RasterCanvas::new(8, 1).unwrap();
///     canvas.set_pixel(2, 0);
///     let img = to_gray_image(&canvas).unwrap();
///     assert_eq!(img.get_pixel(2, 0).0, [INK]);
///     assert_eq!(img.get_pixel(3, 0).0, [PAPER]);
///
pub fn to_gray_image(canvas: &RasterCanvas) -> Result<GrayImage> {
    let invalid = CanvasError::InvalidDimensions { width: canvas.width(),
                                                   height: canvas.height() };
    let w = u32::try_from(canvas.width()).map_err(|_| invalid)?;
    let h = u32::try_from(canvas.height()).map_err(|_| invalid)?;
    let img = GrayImage::from_fn(w, h, |x, y| {
        if canvas.get_pixel(i64::from(x), i64::from(y)) {
            Luma([INK])
        } else {
            Luma([PAPER])
        }
    });
    Ok(img)
}

/// Threshold a grayscale image into a new canvas
///
/// Pixels darker than `threshold` are set. The image width must be a
/// positive multiple of 8.
pub fn from_gray_image(img: &GrayImage, threshold: u8) -> Result<RasterCanvas> {
    let (w, h) = img.dimensions();
    let mut canvas = RasterCanvas::new(w as usize, h as usize)?;
    for (x, y, px) in img.enumerate_pixels() {
        if px.0[0] < threshold {
            canvas.set_pixel(i64::from(x), i64::from(y));
        }
    }
    Ok(canvas)
}
