use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::raster::PixelBuffer;

/// GPU copy of the raster, re-uploaded only after the raster changed.
pub struct RasterTexture {
    handle: Option<TextureHandle>,
    dirty: bool,
}

impl RasterTexture {
    pub fn new() -> Self {
        Self { handle: None, dirty: true }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn texture_id(&mut self, ctx: &Context, buffer: &PixelBuffer) -> TextureId {
        let image = || ColorImage::from_rgb(buffer.size(), &buffer.to_rgb_bytes());

        let handle = match self.handle.take() {
            Some(mut handle) => {
                if self.dirty {
                    handle.set(image(), TextureOptions::NEAREST);
                }
                handle
            }
            None => ctx.load_texture("raster", image(), TextureOptions::NEAREST),
        };
        self.dirty = false;

        let id = handle.id();
        self.handle = Some(handle);
        id
    }
}

impl Default for RasterTexture {
    fn default() -> Self {
        Self::new()
    }
}
