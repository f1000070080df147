use crate::aliases::{Vec2, Vec3};
use crate::bitmap::Bitmap;
use crate::interval::Interval;
use crate::texture::Texture;
use std::path::Path;

/// Returned when no image data is available; cyan is easy to spot in a render.
const MISSING_IMAGE_COLOR: [f32; 3] = [0.0, 1.0, 1.0];

/// Nearest-neighbor lookup of an image by (u, v). v = 0 is the bottom row.
pub struct ImageTexture {
    bitmap: Bitmap,
}

impl ImageTexture {
    /// Never fails; an unreadable file renders as cyan.
    pub fn new(path: &Path) -> Self {
        Self::from_bitmap(Bitmap::load(path))
    }
    pub fn from_bitmap(bitmap: Bitmap) -> Self {
        ImageTexture { bitmap: bitmap }
    }
    pub fn width(&self) -> usize {
        self.bitmap.width()
    }
    pub fn height(&self) -> usize {
        self.bitmap.height()
    }
}

impl Texture for ImageTexture {
    fn value(&self, uv: &Vec2, _p: &Vec3) -> Vec3 {
        let (width, height) = (self.bitmap.width(), self.bitmap.height());
        if width == 0 || height == 0 {
            return Vec3::from(MISSING_IMAGE_COLOR);
        }
        let u = Interval::UNIT.clamp(uv[0]);
        let v = 1.0 - Interval::UNIT.clamp(uv[1]); // image rows run top to bottom
        // u == 1 or v == 1 would land one past the last pixel
        let i = ((u * width as f32) as usize).min(width - 1);
        let j = ((v * height as f32) as usize).min(height - 1);
        let pixel = self.bitmap.pixel(i, j);
        let mut col = Vec3::zeros();
        for c in 0..3 {
            col[c] = pixel[c] as f32 / 255.0;
        }
        col
    }
}
