use super::{LineRasterizer, LineStyle};
use crate::canvas::Canvas;
use crate::raster::RasterTarget;

/// Draws every committed line, picking the solid or dotted rasterizer per line.
#[derive(Debug, Clone, Copy)]
pub struct CanvasRasterizer {
    solid: LineRasterizer,
    dotted: LineRasterizer,
}

impl CanvasRasterizer {
    pub fn new(solid: LineRasterizer, dotted: LineRasterizer) -> Self {
        Self { solid, dotted }
    }

    pub fn rasterize(&self, canvas: &Canvas, target: &mut dyn RasterTarget) {
        for line in canvas.lines() {
            match LineStyle::for_line(line, self.dotted.dot_interval()) {
                LineStyle::Solid => self.solid.rasterize_styled(line, LineStyle::Solid, target),
                style @ LineStyle::Dotted { .. } => {
                    self.dotted.rasterize_styled(line, style, target)
                }
            }
        }
    }
}

impl From<LineRasterizer> for CanvasRasterizer {
    /// Use one rasterizer for both styles.
    fn from(rasterizer: LineRasterizer) -> Self {
        Self::new(rasterizer, rasterizer)
    }
}
