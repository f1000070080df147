use crate::aliases::{Vec2, Vec3};
use crate::texture::Texture;

pub struct SolidColor(Vec3);

impl SolidColor {
    pub fn new(color: &Vec3) -> Self {
        SolidColor(*color)
    }
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        SolidColor(Vec3::new(r, g, b))
    }
}

impl Texture for SolidColor {
    fn value(&self, _uv: &Vec2, _p: &Vec3) -> Vec3 {
        self.0
    }
}
