use egui::{Context, Event, Key, Modifiers, PointerButton, Pos2, Rect};

use crate::command::Command;
use crate::point::Point;

/// Translates egui input into editor [`Command`]s.
///
/// Ctrl held selects the dotted style, Shift held enables snapping, `P`
/// toggles polygon mode and `C` (or Ctrl+C, seen as a copy) clears everything. Strokes use the primary
/// button and must start inside the canvas rect.
#[derive(Debug, Default)]
pub struct InputHandler {
    dotted: bool,
    snap: bool,
    stroke_active: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect this frame's commands from the egui context.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<Command> {
        ctx.input(|input| self.process_events(&input.events, input.modifiers, canvas_rect))
    }

    pub fn process_events(
        &mut self,
        events: &[Event],
        modifiers: Modifiers,
        canvas_rect: Rect,
    ) -> Vec<Command> {
        let mut commands = Vec::new();

        // Modifiers first so they apply to this frame's pointer events.
        if modifiers.ctrl != self.dotted {
            self.dotted = modifiers.ctrl;
            commands.push(Command::ToggleDotted(self.dotted));
        }
        if modifiers.shift != self.snap {
            self.snap = modifiers.shift;
            commands.push(Command::ToggleSnap(self.snap));
        }

        let to_point = |pos: Pos2| raster_point(pos, canvas_rect.min);

        for event in events {
            match event {
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    ..
                } => {
                    if canvas_rect.contains(*pos) {
                        self.stroke_active = true;
                        commands.push(Command::BeginStroke(to_point(*pos)));
                    }
                }
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: false,
                    ..
                } => {
                    if std::mem::take(&mut self.stroke_active) {
                        commands.push(Command::EndStroke(to_point(*pos)));
                    }
                }
                Event::PointerMoved(pos) if self.stroke_active => {
                    commands.push(Command::UpdateStroke(to_point(*pos)));
                }
                // Ctrl is the dotted modifier, so Ctrl+C arrives as a copy.
                Event::Copy => {
                    self.stroke_active = false;
                    commands.push(Command::ClearAll);
                }
                Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => match key {
                    Key::P => commands.push(Command::TogglePolygonMode),
                    Key::C => {
                        self.stroke_active = false;
                        commands.push(Command::ClearAll);
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        commands
    }
}

/// Screen position to raster pixel, relative to the canvas origin.
pub fn raster_point(pos: Pos2, origin: Pos2) -> Point {
    let local = pos - origin;
    Point::new(local.x.floor() as i32, local.y.floor() as i32)
}
