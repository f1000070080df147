use crate::aliases::{Vec2, Vec3};
use crate::texture::constant::SolidColor;
use crate::texture::Texture;
use std::sync::Arc;

/// 3d checkerboard of cubic cells with edge length `scale`, alternating between two textures.
pub struct CheckerTexture {
    inv_scale: f32,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
}

impl CheckerTexture {
    /// `scale` must be nonzero.
    pub fn new(scale: f32, even: Arc<dyn Texture>, odd: Arc<dyn Texture>) -> Self {
        CheckerTexture {
            inv_scale: 1.0 / scale,
            even: even,
            odd: odd,
        }
    }
    pub fn from_colors(scale: f32, even: &Vec3, odd: &Vec3) -> Self {
        Self::new(
            scale,
            Arc::new(SolidColor::new(even)),
            Arc::new(SolidColor::new(odd)),
        )
    }
    fn is_even(&self, p: &Vec3) -> bool {
        // parity of each cell index, so huge or infinite coordinates cannot overflow the sum
        let parity = |x: f32| ((self.inv_scale * x).floor() as i64).rem_euclid(2);
        (parity(p[0]) + parity(p[1]) + parity(p[2])) % 2 == 0
    }
}

impl Texture for CheckerTexture {
    fn value(&self, uv: &Vec2, p: &Vec3) -> Vec3 {
        if self.is_even(p) {
            self.even.value(uv, p)
        } else {
            self.odd.value(uv, p)
        }
    }
}
