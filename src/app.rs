use crate::config::EditorConfig;
use crate::input::InputHandler;
use crate::panels::{status_panel, StatusLine};
use crate::raster::PixelBuffer;
use crate::renderer::Renderer;
use crate::state::EditorState;
use crate::texture::RasterTexture;

/// eframe host: feeds input to the [`EditorState`] and shows the raster.
pub struct SketchApp {
    state: EditorState,
    renderer: Renderer,
    buffer: PixelBuffer,
    input: InputHandler,
    texture: RasterTexture,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        // One raster pixel per screen point.
        cc.egui_ctx.set_pixels_per_point(1.0);
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let state = EditorState::new(&config);
        let renderer = Renderer::new(&config);
        let mut buffer = PixelBuffer::new(config.width, config.height);
        renderer.execute(&state.redraw(), state.canvas(), &mut buffer);

        Self {
            state,
            renderer,
            buffer,
            input: InputHandler::new(),
            texture: RasterTexture::new(),
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }
}

impl eframe::App for SketchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        status_panel(ctx, &StatusLine::from_state(&self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let [width, height] = self.buffer.size();
                let (rect, _response) = ui.allocate_exact_size(
                    egui::vec2(width as f32, height as f32),
                    egui::Sense::click_and_drag(),
                );

                let commands = self.input.process_input(ctx, rect);
                if !commands.is_empty() {
                    for command in commands {
                        let ops = self.state.apply(command);
                        self.renderer.execute(&ops, self.state.canvas(), &mut self.buffer);
                    }
                    self.texture.mark_dirty();
                    // Status bar was laid out before these commands ran.
                    ctx.request_repaint();
                }

                let texture_id = self.texture.texture_id(ctx, &self.buffer);
                ui.painter().image(
                    texture_id,
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            });
    }
}
