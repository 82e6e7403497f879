//! Pixel storage the rasterizers write into.

/// Opaque white, 0xRRGGBB.
pub const WHITE: u32 = 0x00FF_FFFF;
/// Opaque black, 0xRRGGBB.
pub const BLACK: u32 = 0x0000_0000;

/// Capability the rasterizers need from a pixel grid.
///
/// Writes outside `0..width` x `0..height` must be dropped silently.
pub trait RasterTarget {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn set_pixel(&mut self, x: i32, y: i32, color: u32);

    fn clear(&mut self, color: u32);

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height()
    }
}

/// Row-major grid of 0xRRGGBB colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width * height],
        }
    }

    /// Resize the buffer, discarding its contents.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels = vec![BLACK; width * height];
    }

    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    /// Pixels packed as RGB byte triples, ready for upload.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&color| {
                [
                    ((color >> 16) & 0xFF) as u8,
                    ((color >> 8) & 0xFF) as u8,
                    (color & 0xFF) as u8,
                ]
            })
            .collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

impl RasterTarget for PixelBuffer {
    fn width(&self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    fn height(&self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color;
        }
    }

    fn clear(&mut self, color: u32) {
        self.pixels.fill(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut buffer = PixelBuffer::new(4, 3);
        buffer.set_pixel(-1, 0, WHITE);
        buffer.set_pixel(4, 0, WHITE);
        buffer.set_pixel(0, 3, WHITE);
        buffer.set_pixel(0, -7, WHITE);
        assert!(buffer.pixels().iter().all(|&p| p == BLACK));

        buffer.set_pixel(3, 2, WHITE);
        assert_eq!(buffer.pixel(3, 2), Some(WHITE));
        assert_eq!(buffer.pixel(4, 2), None);
    }

    #[test]
    fn test_clear_and_bytes() {
        let mut buffer = PixelBuffer::new(2, 1);
        buffer.clear(0x00AA_BBCC);
        assert_eq!(buffer.to_rgb_bytes(), vec![0xAA, 0xBB, 0xCC, 0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.clear(WHITE);
        buffer.resize(3, 1);
        assert_eq!(buffer.size(), [3, 1]);
        assert_eq!(buffer.pixels(), &[BLACK, BLACK, BLACK]);
    }
}
