//! Packed monochrome line rasterizer
//!
//! ```text
//! How does this work
//!    canvas = RasterCanvas( BitBuffer( width / 8 bytes * height ) )
//!  Drawing Operations
//!    outline.move_to, line_to, close
//!     canvas.draw_line()
//!       BresenhamLine         -- 1 pixel centre path
//!        set_pixel_thick()    -- square stamp of line_width
//!         set_pixel()         -- dropped outside of canvas
//!     Output: packed bits, MSB is the leftmost pixel
//!  Consume
//!    dump_text() / Display   -- rows of '0' and '1'
//!    pixeldata() / into_bytes()
//!    export::to_gray_image()
//! ```

pub mod error;
pub mod buffer;
pub mod line;
pub mod canvas;
pub mod outline;
pub mod export;

pub use error::CanvasError;
pub use buffer::*;
pub use line::*;
pub use canvas::*;
pub use outline::*;

/// Access to the packed pixel bytes of a drawing surface
pub trait PixelData<'a> {
    fn pixeldata(&'a self) -> &'a [u8];
}
