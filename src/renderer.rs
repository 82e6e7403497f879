use crate::canvas::Canvas;
use crate::config::EditorConfig;
use crate::draw_op::DrawOp;
use crate::rasterizer::{CanvasRasterizer, LineRasterizer};
use crate::raster::RasterTarget;

/// Executes [`DrawOp`] lists against a raster target.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    background: u32,
    lines: LineRasterizer,
    canvas: CanvasRasterizer,
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        let lines = LineRasterizer::new(config.line_color).with_dot_interval(config.dot_interval);
        Self {
            background: config.background,
            lines,
            canvas: CanvasRasterizer::from(lines),
        }
    }

    pub fn background(&self) -> u32 {
        self.background
    }

    pub fn execute(&self, ops: &[DrawOp], canvas: &Canvas, target: &mut dyn RasterTarget) {
        for op in ops {
            match op {
                DrawOp::Clear => target.clear(self.background),
                DrawOp::RasterizeCanvas => self.canvas.rasterize(canvas, target),
                DrawOp::RasterizeLine(line) => self.lines.rasterize(line, target),
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}
