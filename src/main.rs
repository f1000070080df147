mod swatches;

use crate::swatches::{SwatchParams, SwatchType};
use anyhow::{anyhow, bail, Context};
use clap::Parser;
use log::info;
use raytex::aliases::{Vec2, Vec3};
use raytex::texture::Texture;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Renders a texture swatch to a PNG file.
#[derive(Parser, Debug)]
#[command(name = "raytex")]
struct Args {
    /// Texture to render
    #[arg(short, long, value_enum, default_value = "checker")]
    texture: SwatchType,
    #[arg(long, default_value_t = 400)]
    width: usize,
    #[arg(long, default_value_t = 400)]
    height: usize,
    /// Checker cell size or noise frequency
    #[arg(short, long, default_value_t = 1.0)]
    scale: f32,
    /// Turbulence octaves
    #[arg(short, long, default_value_t = 7)]
    depth: usize,
    /// Side length of the rendered square in object space
    #[arg(long, default_value_t = 8.0)]
    extent: f32,
    /// Image file for the image texture
    #[arg(long)]
    image: Option<PathBuf>,
    /// Seed of the noise tables
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 4)]
    threads: usize,
    #[arg(short, long, default_value = "swatch.png")]
    output: PathBuf,
}

struct Swatch {
    nx: usize,
    ny: usize,
    rows: Vec<Vec<Vec3>>, // top to bottom
}

impl Swatch {
    fn save_png(&self, path: &Path) -> anyhow::Result<()> {
        let mut buffer: Vec<u8> = Vec::with_capacity(self.nx * self.ny * 3);
        for row in &self.rows {
            for col in row {
                for c in 0..3 {
                    buffer.push((255.99 * col[c].min(1.0).max(0.0)) as u8);
                }
            }
        }
        image::save_buffer(
            path,
            buffer.as_slice(),
            self.nx as u32,
            self.ny as u32,
            image::ColorType::Rgb8,
        )
        .with_context(|| format!("failed to write {}", path.display()))
    }
}

fn shade_rows(
    texture: &dyn Texture,
    rows: &[usize],
    nx: usize,
    ny: usize,
    extent: f32,
) -> Vec<Vec<Vec3>> {
    rows.iter()
        .map(|&j| {
            (0..nx)
                .map(|i| {
                    let (u, v, p) = swatches::shading_point(i, j, nx, ny, extent);
                    texture.value(&Vec2::new(u, v), &p)
                })
                .collect()
        })
        .collect()
}

fn render(
    texture: &dyn Texture,
    nx: usize,
    ny: usize,
    extent: f32,
    thread_cnt: usize,
) -> anyhow::Result<Swatch> {
    let mut rows: Vec<Vec<Vec3>> = vec![Vec::new(); ny];
    // row j goes to thread j % thread_cnt
    let assignments: Vec<Vec<usize>> = (0..thread_cnt)
        .map(|t| (0..ny).filter(|j| j % thread_cnt == t).collect())
        .collect();
    crossbeam::scope(|scope| -> anyhow::Result<()> {
        let threads: Vec<_> = assignments
            .iter()
            .map(|assigned| {
                scope.spawn(move |_| (assigned, shade_rows(texture, assigned, nx, ny, extent)))
            })
            .collect();
        for th in threads {
            let (assigned, shaded) = th.join().map_err(|_| anyhow!("swatch worker panicked"))?;
            for (j, row) in assigned.iter().zip(shaded) {
                rows[*j] = row;
            }
        }
        Ok(())
    })
    .map_err(|_| anyhow!("swatch worker panicked"))??;
    Ok(Swatch {
        nx: nx,
        ny: ny,
        rows: rows,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let start_time = Instant::now();
    let args = Args::parse();
    if args.width == 0 || args.height == 0 {
        bail!("swatch size must be positive: {}x{}", args.width, args.height);
    }
    if args.threads == 0 {
        bail!("--threads must be at least 1");
    }
    if args.scale == 0.0 {
        bail!("--scale must be nonzero");
    }
    info!(
        "TEXTURE: {:?}, WIDTH: {}, HEIGHT: {}, SCALE: {}, THREADS: {}",
        args.texture, args.width, args.height, args.scale, args.threads
    );
    let params = SwatchParams {
        scale: args.scale,
        turb_depth: args.depth,
        image: args.image.as_deref(),
        seed: args.seed,
    };
    let texture = swatches::get(args.texture, &params);
    info!(
        "Texture constructed. ({:.3} secs elapsed)",
        duration_to_secs(&start_time.elapsed())
    );
    let swatch = render(&*texture, args.width, args.height, args.extent, args.threads)?;
    swatch.save_png(&args.output)?;
    info!(
        "Completed {}. ({:.3} secs elapsed)",
        args.output.display(),
        duration_to_secs(&start_time.elapsed()),
    );
    Ok(())
}

fn duration_to_secs(dur: &Duration) -> f32 {
    dur.as_secs() as f32 + dur.subsec_millis() as f32 * 0.001
}
