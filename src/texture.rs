pub mod checker;
pub mod constant;
pub mod image;
pub mod noise;

use crate::aliases::{Vec2, Vec3};

/// Color as a function of a shading point.
/// Implementations are immutable after construction, so sharing them across threads needs no locking.
pub trait Texture: Send + Sync {
    // (u,v) for 2d texture, p (object space) for 3d texture
    fn value(&self, uv: &Vec2, p: &Vec3) -> Vec3;
}
