use clap::ValueEnum;
use rand::SeedableRng;
use raytex::aliases::{RandGen, Vec3};
use raytex::perlin::Perlin;
use raytex::texture::checker::CheckerTexture;
use raytex::texture::constant::SolidColor;
use raytex::texture::image::ImageTexture;
use raytex::texture::noise::{NoiseMode, NoiseTexture};
use raytex::texture::Texture;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SwatchType {
    Solid,
    Checker,
    Image,
    Noise,
    Turbulence,
    Marble,
    Wood,
}

pub struct SwatchParams<'a> {
    pub scale: f32,
    pub turb_depth: usize,
    pub image: Option<&'a Path>,
    pub seed: u64,
}

pub fn get(swatch_type: SwatchType, params: &SwatchParams) -> Arc<dyn Texture> {
    let mut rng = RandGen::seed_from_u64(params.seed);
    let noise = |mode: NoiseMode, rng: &mut RandGen| -> Arc<dyn Texture> {
        let perlin = Perlin::new(rng);
        Arc::new(NoiseTexture::from_noise(
            perlin,
            params.scale,
            mode,
            params.turb_depth,
        ))
    };
    match swatch_type {
        SwatchType::Solid => Arc::new(SolidColor::rgb(0.73, 0.73, 0.73)),
        SwatchType::Checker => Arc::new(CheckerTexture::new(
            params.scale,
            Arc::new(SolidColor::rgb(0.2, 0.3, 0.1)),
            Arc::new(SolidColor::rgb(0.9, 0.9, 0.9)),
        )),
        SwatchType::Image => match params.image {
            Some(path) => Arc::new(ImageTexture::new(path)),
            None => Arc::new(ImageTexture::new(Path::new("earthmap.jpg"))),
        },
        SwatchType::Noise => noise(NoiseMode::Plain, &mut rng),
        SwatchType::Turbulence => noise(NoiseMode::Turbulence, &mut rng),
        SwatchType::Marble => noise(NoiseMode::Marble, &mut rng),
        SwatchType::Wood => noise(NoiseMode::Wood, &mut rng),
    }
}

/// Shading point of swatch pixel (i, j) on the y = 0 plane; j = 0 is the top row.
pub fn shading_point(i: usize, j: usize, nx: usize, ny: usize, extent: f32) -> (f32, f32, Vec3) {
    let u = (i as f32 + 0.5) / nx as f32;
    let v = 1.0 - (j as f32 + 0.5) / ny as f32;
    let p = Vec3::new((u - 0.5) * extent, 0.0, (v - 0.5) * extent);
    (u, v, p)
}
