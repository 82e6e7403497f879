use log::{debug, info};

use crate::canvas::Canvas;
use crate::command::Command;
use crate::config::EditorConfig;
use crate::draw_op::DrawOp;
use crate::tools::{LineTool, PolygonBuilder, Tool, ToolSettings, ToolType};

/// The editing session: committed geometry, the active tool and modifiers.
///
/// Every [`Command`] is applied through [`EditorState::apply`], which returns
/// the draw ops the host should execute to bring the raster up to date.
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    canvas: Canvas,
    tool: ToolType,
    settings: ToolSettings,
    // Set between BeginStroke and EndStroke
    stroke_active: bool,
}

impl EditorState {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            settings: ToolSettings {
                hit_radius: config.hit_radius,
                ..ToolSettings::default()
            },
            ..Self::default()
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn tool(&self) -> &ToolType {
        &self.tool
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn is_polygon_mode(&self) -> bool {
        self.tool.is_polygon()
    }

    /// By-value form of [`EditorState::apply`].
    pub fn transition(mut self, command: Command) -> (Self, Vec<DrawOp>) {
        let ops = self.apply(command);
        (self, ops)
    }

    pub fn apply(&mut self, command: Command) -> Vec<DrawOp> {
        match command {
            Command::BeginStroke(pos) => {
                self.stroke_active = true;
                self.tool.on_pointer_down(pos, &self.settings);
                Vec::new()
            }
            Command::UpdateStroke(pos) => {
                if !self.stroke_active {
                    return Vec::new();
                }
                let output = self.tool.on_pointer_move(pos, &self.settings);
                self.canvas.extend(output.commit);
                DrawOp::frame(output.preview)
            }
            Command::EndStroke(pos) => {
                if !std::mem::take(&mut self.stroke_active) {
                    return Vec::new();
                }
                let output = self.tool.on_pointer_up(pos, &self.settings);
                self.canvas.extend(output.commit);
                DrawOp::frame(output.preview)
            }
            Command::ToggleDotted(dotted) => {
                debug!("Dotted mode: {dotted}");
                self.settings.dotted = dotted;
                Vec::new()
            }
            Command::ToggleSnap(snap) => {
                debug!("Snap mode: {snap}");
                self.settings.snap = snap;
                Vec::new()
            }
            Command::TogglePolygonMode => {
                self.toggle_polygon_mode();
                self.redraw()
            }
            Command::ClearAll => {
                info!("Clearing {} lines", self.canvas.len());
                self.canvas.clear();
                self.tool.reset();
                self.stroke_active = false;
                vec![DrawOp::Clear]
            }
        }
    }

    /// Ops that repaint the current state from scratch.
    pub fn redraw(&self) -> Vec<DrawOp> {
        DrawOp::frame(self.tool.resting_preview(&self.settings))
    }

    fn toggle_polygon_mode(&mut self) {
        let finished = self.tool.deactivate(&self.settings);
        self.canvas.extend(finished);
        self.stroke_active = false;

        self.tool = if self.tool.is_polygon() {
            ToolType::Line(LineTool::new())
        } else {
            ToolType::Polygon(PolygonBuilder::new())
        };
        self.tool.activate();
        info!("Switched to {} tool", self.tool.name());
    }
}
