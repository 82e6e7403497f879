use std::ops::RangeInclusive;

use super::LineStyle;
use crate::line::Line;
use crate::point::Point;
use crate::raster::RasterTarget;

pub const DEFAULT_DOT_INTERVAL: usize = 4;

/// Turns a single [`Line`] into pixel writes.
///
/// Vertical lines step along y. Otherwise the slope `k` and intercept `q` are
/// computed in floating point and the axis with the larger extent drives the
/// loop, the other coordinate being rounded to the nearest integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRasterizer {
    default_color: u32,
    dot_interval: usize,
}

impl LineRasterizer {
    pub fn new(default_color: u32) -> Self {
        Self {
            default_color,
            dot_interval: DEFAULT_DOT_INTERVAL,
        }
    }

    pub fn with_dot_interval(mut self, dot_interval: usize) -> Self {
        self.dot_interval = dot_interval.max(1);
        self
    }

    pub fn dot_interval(&self) -> usize {
        self.dot_interval
    }

    /// Rasterize using the style the line itself asks for.
    pub fn rasterize(&self, line: &Line, target: &mut dyn RasterTarget) {
        let style = LineStyle::for_line(line, self.dot_interval);
        self.rasterize_styled(line, style, target);
    }

    pub fn rasterize_styled(&self, line: &Line, style: LineStyle, target: &mut dyn RasterTarget) {
        let color = line.color().unwrap_or(self.default_color);

        // The dot counter runs over every candidate, including clipped ones.
        for (index, pixel) in candidate_pixels(line).enumerate() {
            if !style.keeps(index) {
                continue;
            }
            if target.contains(pixel.x, pixel.y) {
                target.set_pixel(pixel.x, pixel.y, color);
            }
        }
    }
}

/// Every pixel the line would cover, in stepping order, before any clipping
/// or dot filtering.
pub fn candidate_pixels(line: &Line) -> CandidatePixels {
    let (mut start, mut end) = (line.p1(), line.p2());

    // Also covers the degenerate single-point line.
    if start.x == end.x {
        let (low, high) = (start.y.min(end.y), start.y.max(end.y));
        return CandidatePixels {
            stepping: Stepping::Vertical { x: start.x },
            steps: low..=high,
        };
    }

    let (k, _) = slope_intercept(start, end);

    if k.abs() <= 1.0 {
        if start.x > end.x {
            std::mem::swap(&mut start, &mut end);
        }
        let (k, q) = slope_intercept(start, end);
        CandidatePixels {
            stepping: Stepping::AlongX { k, q },
            steps: start.x..=end.x,
        }
    } else {
        if start.y > end.y {
            std::mem::swap(&mut start, &mut end);
        }
        let (k, q) = slope_intercept(start, end);
        CandidatePixels {
            stepping: Stepping::AlongY { k, q },
            steps: start.y..=end.y,
        }
    }
}

/// Iterator returned by [`candidate_pixels`].
#[derive(Debug, Clone)]
pub struct CandidatePixels {
    stepping: Stepping,
    // Values of the independent coordinate
    steps: RangeInclusive<i32>,
}

#[derive(Debug, Clone, Copy)]
enum Stepping {
    Vertical { x: i32 },
    AlongX { k: f64, q: f64 },
    AlongY { k: f64, q: f64 },
}

impl Iterator for CandidatePixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let t = self.steps.next()?;
        let point = match self.stepping {
            Stepping::Vertical { x } => Point::new(x, t),
            Stepping::AlongX { k, q } => Point::new(t, round_to_i32(k * f64::from(t) + q)),
            Stepping::AlongY { k, q } => Point::new(round_to_i32((f64::from(t) - q) / k), t),
        };
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}

// Callers guarantee a.x != b.x.
fn slope_intercept(a: Point, b: Point) -> (f64, f64) {
    let dx = i64::from(b.x) - i64::from(a.x);
    let dy = i64::from(b.y) - i64::from(a.y);
    let k = dy as f64 / dx as f64;
    let q = f64::from(a.y) - k * f64::from(a.x);
    (k, q)
}

fn round_to_i32(value: f64) -> i32 {
    value.round() as i32
}
