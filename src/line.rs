//! Integer line scan conversion

/// Bresenham line stepper
///
/// Yields the 1-pixel wide centre path from (`x0`,`y0`) to (`x1`,`y1`),
/// both endpoints included, using integer arithmetic only.
///
/// Steep lines are transposed onto the x-major axis and the endpoints are
/// ordered left to right before stepping, so a line and its reverse visit
/// the same pixels. Points are returned in canvas coordinates.
///
///     use monoraster::BresenhamLine;
///
///     let pts : Vec<_> = BresenhamLine::new(0,0, 4,2).collect();
///     assert_eq!(pts, vec![(0,0),(1,0),(2,1),(3,1),(4,2)]);
///
///     let pts : Vec<_> = BresenhamLine::new(3,3, 3,3).collect();
///     assert_eq!(pts, vec![(3,3)]);
///
#[derive(Debug, Clone)]
pub struct BresenhamLine {
    // Stepping state lives on the transposed, left-to-right axis and is
    // wide enough that any pair of i64 endpoints steps without overflow
    x_start: i128,
    y_start: i128,
    x: i128,
    x_end: i128,
    y: i128,
    dx: i128,
    dy: i128,
    error: i128,
    ystep: i128,
    steep: bool,
    done: bool,
}

impl BresenhamLine {
    /// Create a new line from (`x0`,`y0`) to (`x1`,`y1`)
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        let (x0, y0, x1, y1) = (i128::from(x0), i128::from(y0), i128::from(x1), i128::from(y1));
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        let (x0, y0, x1, y1) = if steep   { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };
        let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };
        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let ystep = if y0 < y1 { 1 } else { -1 };
        Self { x_start: x0, y_start: y0,
               x: x0, x_end: x1, y: y0, dx, dy,
               error: dx / 2, ystep, steep, done: false }
    }
    /// Line was transposed, |dy| > |dx|
    pub fn steep(&self) -> bool {
        self.steep
    }
    /// Restrict the line to points whose major coordinate lies in [`lo`,`hi`]
    ///
    /// The major coordinate is `y` for steep lines and `x` otherwise. The
    /// remaining points are exactly those the unclipped line would yield,
    /// found without stepping through the skipped part.
    ///
    ///     use monoraster::BresenhamLine;
    ///
    ///     let pts : Vec<_> = BresenhamLine::new(0,0, 8,4).clip(3, 5).collect();
    ///     assert_eq!(pts, vec![(3,1),(4,2),(5,2)]);
    ///
    ///     let far = BresenhamLine::new(i64::MIN,0, i64::MAX,0).clip(-1, 1);
    ///     assert_eq!(far.count(), 3);
    ///
    pub fn clip(mut self, lo: i64, hi: i64) -> Self {
        let start = self.x_start.max(i128::from(lo));
        let end = self.x_end.min(i128::from(hi));
        if start > end {
            self.done = true;
            return self;
        }
        // Increments taken in the first k steps: the smallest n leaving the
        // error term e0 - k*dy + n*dx non-negative. Products can exceed i128.
        let k = (start - self.x_start) as u128;
        let (dx, dy) = (self.dx as u128, self.dy as u128);
        let e0 = (self.dx / 2) as u128;
        let kdy = k * dy;
        let n = if kdy <= e0 { 0 } else { (kdy - e0 + dx - 1) / dx };
        self.error = (e0 + n * dx - kdy) as i128;
        self.y = self.y_start + self.ystep * n as i128;
        self.x = start;
        self.x_end = end;
        self
    }
}

impl Iterator for BresenhamLine {
    type Item = (i64, i64);
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        // Every point lies between the i64 endpoints
        let (x, y) = (self.x as i64, self.y as i64);
        let p = if self.steep { (y, x) } else { (x, y) };
        self.error -= self.dy;
        if self.error < 0 {
            self.y += self.ystep;
            self.error += self.dx;
        }
        if self.x == self.x_end {
            self.done = true;
        } else {
            self.x += 1;
        }
        Some(p)
    }
}

impl std::iter::FusedIterator for BresenhamLine {}
