use crate::geometry::{snap, DEFAULT_HIT_RADIUS};
use crate::line::Line;
use crate::point::Point;

mod line_tool;
pub use line_tool::LineTool;

mod polygon_tool;
pub use polygon_tool::{PolygonBuilder, PolygonState};

/// Modifier state the tools read on every pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSettings {
    pub dotted: bool,
    pub snap: bool,
    pub hit_radius: i32,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            dotted: false,
            snap: false,
            hit_radius: DEFAULT_HIT_RADIUS,
        }
    }
}

impl ToolSettings {
    /// Snap `pos` against `anchor` when snapping is on.
    pub fn constrain(&self, anchor: Point, pos: Point) -> Point {
        if self.snap { snap(anchor, pos) } else { pos }
    }
}

/// What a pointer event produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Lines to append to the canvas.
    pub commit: Vec<Line>,
    /// Transient lines drawn over the canvas for this frame only.
    pub preview: Vec<Line>,
}

impl ToolOutput {
    pub fn preview(preview: Vec<Line>) -> Self {
        Self {
            commit: Vec::new(),
            preview,
        }
    }

    pub fn commit(commit: Vec<Line>) -> Self {
        Self {
            commit,
            preview: Vec::new(),
        }
    }
}

/// Interface shared by the editing tools.
pub trait Tool {
    /// Display name of the tool.
    fn name(&self) -> &'static str;

    /// Called when the tool becomes the active one.
    fn activate(&mut self) {}

    /// Called when the tool stops being active. Returns any lines the tool
    /// finalizes on the way out.
    fn deactivate(&mut self, settings: &ToolSettings) -> Vec<Line>;

    /// Handle a press at `pos`. Nothing is drawn until the pointer moves or
    /// is released.
    fn on_pointer_down(&mut self, pos: Point, settings: &ToolSettings);

    /// Handle the pointer moving while pressed. Returns the preview to draw
    /// over the canvas.
    fn on_pointer_move(&mut self, pos: Point, settings: &ToolSettings) -> ToolOutput;

    /// Handle the release at `pos`. Lines in the returned `commit` belong on the
    /// canvas from now on.
    fn on_pointer_up(&mut self, pos: Point, settings: &ToolSettings) -> ToolOutput;

    /// In-progress geometry to show when nothing is moving.
    fn resting_preview(&self, settings: &ToolSettings) -> Vec<Line>;

    /// Drop all in-progress state without committing anything.
    fn reset(&mut self);

    /// Name of the tool's current state, shown in the status bar.
    fn current_state_name(&self) -> &'static str;
}

/// Tools available to the editor.
#[derive(Debug, Clone)]
pub enum ToolType {
    Line(LineTool),
    Polygon(PolygonBuilder),
}

impl Default for ToolType {
    fn default() -> Self {
        Self::Line(LineTool::new())
    }
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Line(tool) => tool.name(),
            Self::Polygon(tool) => tool.name(),
        }
    }

    fn activate(&mut self) {
        match self {
            Self::Line(tool) => tool.activate(),
            Self::Polygon(tool) => tool.activate(),
        }
    }

    fn deactivate(&mut self, settings: &ToolSettings) -> Vec<Line> {
        match self {
            Self::Line(tool) => tool.deactivate(settings),
            Self::Polygon(tool) => tool.deactivate(settings),
        }
    }

    fn on_pointer_down(&mut self, pos: Point, settings: &ToolSettings) {
        match self {
            Self::Line(tool) => tool.on_pointer_down(pos, settings),
            Self::Polygon(tool) => tool.on_pointer_down(pos, settings),
        }
    }

    fn on_pointer_move(&mut self, pos: Point, settings: &ToolSettings) -> ToolOutput {
        match self {
            Self::Line(tool) => tool.on_pointer_move(pos, settings),
            Self::Polygon(tool) => tool.on_pointer_move(pos, settings),
        }
    }

    fn on_pointer_up(&mut self, pos: Point, settings: &ToolSettings) -> ToolOutput {
        match self {
            Self::Line(tool) => tool.on_pointer_up(pos, settings),
            Self::Polygon(tool) => tool.on_pointer_up(pos, settings),
        }
    }

    fn resting_preview(&self, settings: &ToolSettings) -> Vec<Line> {
        match self {
            Self::Line(tool) => tool.resting_preview(settings),
            Self::Polygon(tool) => tool.resting_preview(settings),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Line(tool) => tool.reset(),
            Self::Polygon(tool) => tool.reset(),
        }
    }

    fn current_state_name(&self) -> &'static str {
        match self {
            Self::Line(tool) => tool.current_state_name(),
            Self::Polygon(tool) => tool.current_state_name(),
        }
    }
}

impl ToolType {
    pub fn as_polygon(&self) -> Option<&PolygonBuilder> {
        match self {
            Self::Polygon(tool) => Some(tool),
            _ => None,
        }
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, Self::Polygon(_))
    }
}
