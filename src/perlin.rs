use crate::aliases::Vec3;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Scalar noise over 3d space.
pub trait Noise: Send + Sync {
    /// returns values in [-1,1]
    fn noise(&self, p: &Vec3) -> f32;
    /// Sum of `depth` octaves of noise with doubling frequency and halving amplitude.
    /// Non-negative; typically (but not necessarily) below 1.
    fn turbulence(&self, p: &Vec3, depth: usize) -> f32 {
        let mut accum = 0.0;
        let mut p_m = *p;
        let mut weight = 1.0;
        for _ in 0..depth {
            accum += weight * self.noise(&p_m);
            weight *= 0.5;
            p_m *= 2.0;
        }
        accum.abs()
    }
}

const POINT_COUNT: usize = 256;

/// Gradient noise on an integer lattice.
pub struct Perlin {
    perm_x: Box<[u8; POINT_COUNT]>,   // permutation of {0,1,...,255}
    perm_y: Box<[u8; POINT_COUNT]>,   // permutation of {0,1,...,255}
    perm_z: Box<[u8; POINT_COUNT]>,   // permutation of {0,1,...,255}
    ranvec: Box<[Vec3; POINT_COUNT]>, // random unit vectors
}

impl Perlin {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let perlin = Perlin {
            perm_x: Self::generate_perm(rng),
            perm_y: Self::generate_perm(rng),
            perm_z: Self::generate_perm(rng),
            ranvec: Self::generate_ranvec(rng),
        };
        debug!("perlin tables generated ({} points)", POINT_COUNT);
        perlin
    }
    pub fn with_seed(seed: u64) -> Self {
        Self::new(&mut StdRng::seed_from_u64(seed))
    }
    fn generate_perm<R: Rng + ?Sized>(rng: &mut R) -> Box<[u8; POINT_COUNT]> {
        let mut res = Box::new([0u8; POINT_COUNT]);
        for i in 0..POINT_COUNT {
            res[i] = i as u8;
        }
        res.shuffle(rng);
        res
    }
    fn generate_ranvec<R: Rng + ?Sized>(rng: &mut R) -> Box<[Vec3; POINT_COUNT]> {
        let mut res = Box::new([Vec3::zeros(); POINT_COUNT]);
        for i in 0..POINT_COUNT {
            res[i] = rnd_unit_vector(rng);
        }
        res
    }
    fn perlin_interpolate(c: &[[[Vec3; 2]; 2]; 2], point: &Vec3) -> f32 {
        let mut herm_cubic = Vec3::zeros();
        for i in 0..3 {
            herm_cubic[i] = point[i] * point[i] * (3.0 - 2.0 * point[i]);
        }
        let mut accum = 0.0;
        for i in 0..2 {
            for j in 0..2 {
                for k in 0..2 {
                    let ivec = Vec3::new(i as f32, j as f32, k as f32);
                    let weight = point - ivec;
                    accum += (i as f32 * herm_cubic[0] + (1 - i) as f32 * (1.0 - herm_cubic[0]))
                        * (j as f32 * herm_cubic[1] + (1 - j) as f32 * (1.0 - herm_cubic[1]))
                        * (k as f32 * herm_cubic[2] + (1 - k) as f32 * (1.0 - herm_cubic[2]))
                        * c[i][j][k].dot(&weight);
                }
            }
        }
        accum
    }
}

impl Noise for Perlin {
    fn noise(&self, p: &Vec3) -> f32 {
        let mut fract = Vec3::zeros();
        for i in 0..3 {
            fract[i] = p[i] - p[i].floor();
        }
        // Wraps the lattice every POINT_COUNT cells, negative cells included.
        let wrap = |x: f32| (x.floor() as i64 & 255) as usize;
        let (i, j, k) = (wrap(p[0]), wrap(p[1]), wrap(p[2]));
        let mut c = [[[Vec3::zeros(); 2]; 2]; 2];
        for di in 0..2 {
            for dj in 0..2 {
                for dk in 0..2 {
                    let idx = self.perm_x[(i + di) & 255]
                        ^ self.perm_y[(j + dj) & 255]
                        ^ self.perm_z[(k + dk) & 255];
                    c[di][dj][dk] = self.ranvec[idx as usize];
                }
            }
        }
        Self::perlin_interpolate(&c, &fract).max(-1.0).min(1.0) // [-1, 1]
    }
}

fn rnd_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    loop {
        let p = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let norm2 = p.norm_squared();
        // reject tiny vectors, normalizing them would blow up rounding error
        if 1.0e-12 < norm2 && norm2 <= 1.0 {
            return p / norm2.sqrt();
        }
    }
}
