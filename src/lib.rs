pub mod aliases;
pub mod bitmap;
pub mod interval;
pub mod perlin;
pub mod texture;
