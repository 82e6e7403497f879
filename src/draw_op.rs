use crate::line::Line;

/// One step of a redraw, executed in order by the [`crate::Renderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// Fill the raster with the background color.
    Clear,
    /// Draw every committed line.
    RasterizeCanvas,
    /// Draw one transient line on top.
    RasterizeLine(Line),
}

impl DrawOp {
    /// A full frame: clear, committed canvas, then `overlay` on top.
    pub fn frame(overlay: impl IntoIterator<Item = Line>) -> Vec<DrawOp> {
        let mut ops = vec![DrawOp::Clear, DrawOp::RasterizeCanvas];
        ops.extend(overlay.into_iter().map(DrawOp::RasterizeLine));
        ops
    }
}
