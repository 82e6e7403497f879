use crate::line::Line;
use crate::point::Point;
use crate::tools::{Tool, ToolOutput, ToolSettings};

/// Press-drag-release straight line.
#[derive(Debug, Clone, Default)]
pub struct LineTool {
    // Press position of the stroke in progress
    anchor: Option<Point>,
}

impl LineTool {
    pub fn new() -> Self {
        Self { anchor: None }
    }
}

impl Tool for LineTool {
    fn name(&self) -> &'static str {
        "Line"
    }

    fn activate(&mut self) {
        self.anchor = None;
    }

    fn deactivate(&mut self, _settings: &ToolSettings) -> Vec<Line> {
        self.anchor = None;
        Vec::new()
    }

    fn on_pointer_down(&mut self, pos: Point, _settings: &ToolSettings) {
        self.anchor = Some(pos);
    }

    fn on_pointer_move(&mut self, pos: Point, settings: &ToolSettings) -> ToolOutput {
        match self.anchor {
            Some(anchor) => {
                let end = settings.constrain(anchor, pos);
                ToolOutput::preview(vec![Line::new(anchor, end, settings.dotted)])
            }
            None => ToolOutput::default(),
        }
    }

    fn on_pointer_up(&mut self, pos: Point, settings: &ToolSettings) -> ToolOutput {
        match self.anchor.take() {
            Some(anchor) => {
                let end = settings.constrain(anchor, pos);
                ToolOutput::commit(vec![Line::new(anchor, end, settings.dotted)])
            }
            None => ToolOutput::default(),
        }
    }

    fn resting_preview(&self, _settings: &ToolSettings) -> Vec<Line> {
        Vec::new()
    }

    fn reset(&mut self) {
        self.anchor = None;
    }

    fn current_state_name(&self) -> &'static str {
        if self.anchor.is_some() { "Drawing" } else { "Ready" }
    }
}
