mod canvas_rasterizer;
mod line_rasterizer;

pub use canvas_rasterizer::CanvasRasterizer;
pub use line_rasterizer::{candidate_pixels, CandidatePixels, LineRasterizer, DEFAULT_DOT_INTERVAL};

use crate::line::Line;

/// How the samples along a line are turned into pixel writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Every sample is written.
    Solid,
    /// Only every `interval`-th sample is written, starting with the first.
    Dotted { interval: usize },
}

impl LineStyle {
    /// Style a line asks for, given the dot spacing in use.
    pub fn for_line(line: &Line, interval: usize) -> Self {
        if line.is_dotted() {
            Self::Dotted { interval }
        } else {
            Self::Solid
        }
    }

    /// Whether the sample at `index` (zero-based, counted along the line
    /// before clipping) is drawn.
    pub fn keeps(self, index: usize) -> bool {
        match self {
            Self::Solid => true,
            Self::Dotted { interval } => index % interval.max(1) == 0,
        }
    }
}
