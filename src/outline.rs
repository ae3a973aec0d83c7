
use crate::canvas::RasterCanvas;

/// Rasterizer for Outlined Shapes
///
/// The canvas is directly attached and drawing is done immediately, each
/// segment stroked with the canvas line width.
///
///     use monoraster::{RasterCanvas, RasterizerOutline};
///
///     let mut canvas = RasterCanvas::new(24, 12).unwrap();
///     canvas.set_line_width(1);
///
///     let mut ras = RasterizerOutline::with_canvas(&mut canvas);
///     ras.move_to(0, 0);
///     ras.line_to(23, 0);
///     ras.line_to(23, 11);
///     ras.line_to(0, 11);
///     ras.close();
///
///     assert!(canvas.get_pixel(0, 5));
///     assert!(!canvas.get_pixel(5, 5));
///
pub struct RasterizerOutline<'a> {
    canvas: &'a mut RasterCanvas,
    start_x: i64,
    start_y: i64,
    cur_x: i64,
    cur_y: i64,
    vertices: usize,
}

impl<'a> RasterizerOutline<'a> {
    /// Create a new RasterizerOutline drawing into `canvas`
    pub fn with_canvas(canvas: &'a mut RasterCanvas) -> Self {
        Self { canvas,
               start_x: 0, start_y: 0,
               cur_x: 0, cur_y: 0,
               vertices: 0 }
    }
    /// Add a sequence of points and render
    ///
    /// The first point starts a new outline, the remaining points are
    /// joined with lines. The outline is left open.
    pub fn add_points(&mut self, points: &[(i64, i64)]) {
        let mut iter = points.iter();
        if let Some(&(x, y)) = iter.next() {
            self.move_to(x, y);
        }
        for &(x, y) in iter {
            self.line_to(x, y);
        }
    }
    /// Close the current outline
    ///
    /// A line back to the start is drawn only when more than two vertices
    /// were added
    pub fn close(&mut self) {
        if self.vertices > 2 {
            let (x, y) = (self.start_x, self.start_y);
            self.line_to(x, y);
        }
        self.vertices = 0;
    }
    /// Move the current position to (`x`,`y`), starting a new outline
    pub fn move_to(&mut self, x: i64, y: i64) {
        self.vertices = 1;
        self.start_x = x;
        self.start_y = y;
        self.cur_x = x;
        self.cur_y = y;
    }
    /// Draw a line from the current position to position (`x`,`y`)
    ///
    /// Without a preceding `move_to` the line starts at the origin
    pub fn line_to(&mut self, x: i64, y: i64) {
        self.vertices += 1;
        self.canvas.draw_line(self.cur_x, self.cur_y, x, y);
        self.cur_x = x;
        self.cur_y = y;
    }
    /// Number of vertices in the current outline
    pub fn vertices(&self) -> usize {
        self.vertices
    }
}
