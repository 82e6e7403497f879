use crate::state::EditorState;
use crate::tools::Tool;

pub const STATUS_BAR_HEIGHT: f32 = 24.0;

/// Text shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub mode: &'static str,
    /// State name of the active tool.
    pub tool_state: &'static str,
    pub dotted: bool,
    pub snap: bool,
}

impl StatusLine {
    pub fn from_state(state: &EditorState) -> Self {
        Self {
            mode: if state.is_polygon_mode() { "Polygon" } else { "Line" },
            tool_state: state.tool().current_state_name(),
            dotted: state.settings().dotted,
            snap: state.settings().snap,
        }
    }

    pub fn mode_label(&self) -> String {
        format!("Mode: {} ({})", self.mode, self.tool_state)
    }

    pub fn flags_label(&self) -> String {
        format!("Dotted: {}   Snap: {}", on_off(self.dotted), on_off(self.snap))
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "ON" } else { "OFF" }
}

pub fn status_panel(ctx: &egui::Context, status: &StatusLine) {
    egui::TopBottomPanel::bottom("status_bar")
        .exact_height(STATUS_BAR_HEIGHT)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(status.mode_label());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(status.flags_label());
                });
            });
        });
}
