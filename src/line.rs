use crate::point::Point;

/// A segment between two raster points.
///
/// `color` of `None` means the rasterizer's default color is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    p1: Point,
    p2: Point,
    color: Option<u32>,
    dotted: bool,
}

impl Line {
    pub fn new(p1: Point, p2: Point, dotted: bool) -> Self {
        Self {
            p1,
            p2,
            color: None,
            dotted,
        }
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn p1(&self) -> Point {
        self.p1
    }

    pub fn p2(&self) -> Point {
        self.p2
    }

    pub fn color(&self) -> Option<u32> {
        self.color
    }

    pub fn is_dotted(&self) -> bool {
        self.dotted
    }
}
