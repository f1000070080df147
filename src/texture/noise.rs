use crate::aliases::{Vec2, Vec3};
use crate::perlin::{Noise, Perlin};
use crate::texture::Texture;
use rand::Rng;

pub const DEFAULT_TURB_DEPTH: usize = 7;

/// Shading function applied to the noise field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoiseMode {
    /// noise remapped to [0,1], greyscale
    Plain,
    /// turbulence magnitude, greyscale
    Turbulence,
    /// sine veins along z, phase-shifted by turbulence
    Marble,
    /// rings around the y axis, phase-shifted by turbulence
    Wood,
}

const MARBLE_BASE: [f32; 3] = [0.5, 0.5, 0.5];
const WOOD_BASE: [f32; 3] = [0.4, 0.2, 0.1];
/// how strongly turbulence shifts the phase of marble veins and wood rings
const TURB_PHASE: f32 = 10.0;

pub struct NoiseTexture<N: Noise = Perlin> {
    noise: N,
    scale: f32,
    mode: NoiseMode,
    turb_depth: usize,
}

impl NoiseTexture<Perlin> {
    pub fn new<R: Rng + ?Sized>(scale: f32, rng: &mut R) -> Self {
        Self::with_mode(scale, NoiseMode::Plain, rng)
    }
    pub fn with_mode<R: Rng + ?Sized>(scale: f32, mode: NoiseMode, rng: &mut R) -> Self {
        Self::from_noise(Perlin::new(rng), scale, mode, DEFAULT_TURB_DEPTH)
    }
}

impl<N: Noise> NoiseTexture<N> {
    pub fn from_noise(noise: N, scale: f32, mode: NoiseMode, turb_depth: usize) -> Self {
        NoiseTexture {
            noise: noise,
            scale: scale,
            mode: mode,
            turb_depth: turb_depth,
        }
    }
    pub fn mode(&self) -> NoiseMode {
        self.mode
    }
    fn turb(&self, p: &Vec3) -> f32 {
        self.noise.turbulence(&(p * self.scale), self.turb_depth)
    }
}

/// [-1,1] -> [0,1]
fn remap(x: f32) -> f32 {
    0.5 * (1.0 + x)
}

impl<N: Noise> Texture for NoiseTexture<N> {
    fn value(&self, _uv: &Vec2, p: &Vec3) -> Vec3 {
        match self.mode {
            NoiseMode::Plain => Vec3::repeat(remap(self.noise.noise(&(p * self.scale)))),
            NoiseMode::Turbulence => Vec3::repeat(self.turb(p)),
            NoiseMode::Marble => {
                let phase = self.scale * p[2] + TURB_PHASE * self.turb(p);
                Vec3::from(MARBLE_BASE) * remap(phase.sin())
            }
            NoiseMode::Wood => {
                // distance from the trunk
                let r = (p[0] * p[0] + p[2] * p[2]).sqrt();
                let phase = self.scale * r + TURB_PHASE * self.turb(p);
                Vec3::from(WOOD_BASE) * remap(phase.sin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::aliases::{Vec2, Vec3};
    use crate::perlin::{Noise, Perlin};
    use crate::texture::noise::{NoiseMode, NoiseTexture, DEFAULT_TURB_DEPTH};
    use crate::texture::Texture;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// A flat noise field, so turbulence is exactly zero.
    struct Flat;

    impl Noise for Flat {
        fn noise(&self, _p: &Vec3) -> f32 {
            0.0
        }
    }

    /// Constant noise at the given level.
    struct Level(f32);

    impl Noise for Level {
        fn noise(&self, _p: &Vec3) -> f32 {
            self.0
        }
    }

    fn points() -> Vec<Vec3> {
        let mut pts = Vec::new();
        for i in -10..10 {
            for j in -3..3 {
                pts.push(Vec3::new(i as f32 * 0.71, j as f32 * 1.3, (i * j) as f32 * 0.17));
            }
        }
        pts
    }

    #[test]
    fn plain_stays_in_unit_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let tex = NoiseTexture::new(4.0, &mut rng);
        assert_eq!(tex.mode(), NoiseMode::Plain);
        for p in points() {
            let col = tex.value(&Vec2::zeros(), &p);
            for c in 0..3 {
                assert!(0.0 <= col[c] && col[c] <= 1.0, "{:?} -> {:?}", p, col);
            }
            assert!(col[0] == col[1] && col[1] == col[2]);
        }
    }

    #[test]
    fn with_mode_uses_default_depth() {
        let tex = NoiseTexture::with_mode(2.0, NoiseMode::Wood, &mut StdRng::seed_from_u64(3));
        let same = NoiseTexture::from_noise(
            Perlin::new(&mut StdRng::seed_from_u64(3)),
            2.0,
            NoiseMode::Wood,
            DEFAULT_TURB_DEPTH,
        );
        assert_eq!(tex.mode(), NoiseMode::Wood);
        for p in points() {
            assert_eq!(tex.value(&Vec2::zeros(), &p), same.value(&Vec2::zeros(), &p));
        }
    }

    #[test]
    fn plain_remaps_extremes() {
        let uv = Vec2::zeros();
        let p = Vec3::new(1.0, 2.0, 3.0);
        let lo = NoiseTexture::from_noise(Level(-1.0), 1.0, NoiseMode::Plain, 7);
        let hi = NoiseTexture::from_noise(Level(1.0), 1.0, NoiseMode::Plain, 7);
        assert_eq!(lo.value(&uv, &p), Vec3::zeros());
        assert_eq!(hi.value(&uv, &p), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn turbulence_is_greyscale_magnitude() {
        let uv = Vec2::zeros();
        // 0.5 * (1 + 1/2 + 1/4) with three octaves
        let tex = NoiseTexture::from_noise(Level(0.5), 3.0, NoiseMode::Turbulence, 3);
        assert_eq!(tex.value(&uv, &Vec3::new(0.3, 0.2, 0.1)), Vec3::repeat(0.875));
        let tex = NoiseTexture::from_noise(Level(-0.5), 3.0, NoiseMode::Turbulence, 1);
        assert_eq!(tex.value(&uv, &Vec3::zeros()), Vec3::repeat(0.5));
    }

    #[test]
    fn modes_are_deterministic() {
        for mode in [
            NoiseMode::Plain,
            NoiseMode::Turbulence,
            NoiseMode::Marble,
            NoiseMode::Wood,
        ]
        .iter()
        {
            let a = NoiseTexture::from_noise(Perlin::with_seed(11), 2.0, *mode, 7);
            let b = NoiseTexture::from_noise(Perlin::with_seed(11), 2.0, *mode, 7);
            for p in points() {
                let ca = a.value(&Vec2::zeros(), &p);
                let cb = b.value(&Vec2::new(0.9, 0.1), &p);
                let ca2 = a.value(&Vec2::zeros(), &p);
                for c in 0..3 {
                    assert_eq!(ca[c].to_bits(), cb[c].to_bits());
                    assert_eq!(ca[c].to_bits(), ca2[c].to_bits());
                }
            }
        }
    }

    #[test]
    fn marble_without_turbulence_is_sine_of_z() {
        let scale = 1.5;
        let tex = NoiseTexture::from_noise(Flat, scale, NoiseMode::Marble, 7);
        for p in points() {
            let expected = 0.5 * 0.5 * (1.0 + (scale * p[2]).sin());
            let col = tex.value(&Vec2::zeros(), &p);
            assert!((col[0] - expected).abs() < 1.0e-6);
            assert_eq!(col[0], col[1]);
            assert_eq!(col[1], col[2]);
        }
    }

    #[test]
    fn wood_rings_are_rotationally_symmetric() {
        let tex = NoiseTexture::from_noise(Flat, 3.0, NoiseMode::Wood, 7);
        let uv = Vec2::zeros();
        for k in 1..20 {
            let r = k as f32 * 0.37;
            let on_x = tex.value(&uv, &Vec3::new(r, 0.0, 0.0));
            let on_z = tex.value(&uv, &Vec3::new(0.0, 0.0, r));
            let on_neg_x = tex.value(&uv, &Vec3::new(-r, 5.0, 0.0));
            assert_eq!(on_x, on_z);
            assert_eq!(on_x, on_neg_x);
            let diagonal = tex.value(&uv, &Vec3::new(r * 0.6, -2.0, r * 0.8));
            assert!((diagonal - on_x).norm() < 1.0e-5);
        }
    }

    #[test]
    fn wood_is_brown() {
        let tex = NoiseTexture::from_noise(Flat, 1.0, NoiseMode::Wood, 7);
        // sin(pi/2) = 1 gives the full base color
        let p = Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0);
        let col = tex.value(&Vec2::zeros(), &p);
        assert!((col - Vec3::new(0.4, 0.2, 0.1)).norm() < 1.0e-6);
    }

    #[test]
    fn textures_share_across_threads() {
        use std::sync::Arc;
        let tex: Arc<dyn Texture> = Arc::new(NoiseTexture::from_noise(
            Perlin::with_seed(5),
            4.0,
            NoiseMode::Marble,
            7,
        ));
        let p = Vec3::new(0.3, 0.6, 0.9);
        let expected = tex.value(&Vec2::zeros(), &p);
        crossbeam::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let tex = tex.clone();
                    scope.spawn(move |_| tex.value(&Vec2::zeros(), &p))
                })
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        })
        .unwrap();
    }
}
