use anyhow::{bail, Context};
use image;
use log::{debug, warn};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming an extra directory searched for image files.
pub const IMAGE_DIR_ENV: &'static str = "RAYTEX_IMAGES";

/// How many parent directories are searched for an `images/` directory.
const MAX_PARENT_LEVELS: usize = 6;

/// Pixel returned when sampling a bitmap which holds no data.
const MISSING_PIXEL: [u8; 3] = [255, 0, 255];

/// Decoded 8-bit RGB image. Row 0 is the top row.
#[derive(Clone, Debug)]
pub struct Bitmap {
    data: Vec<u8>, // RGBRGBRGB...
    width: usize,
    height: usize,
}

impl Bitmap {
    pub fn empty() -> Self {
        Bitmap {
            data: Vec::new(),
            width: 0,
            height: 0,
        }
    }

    /// Builds a bitmap from packed RGB bytes in row-major order.
    pub fn from_rgb(width: usize, height: usize, data: Vec<u8>) -> anyhow::Result<Self> {
        let needed = match width.checked_mul(height).and_then(|n| n.checked_mul(3)) {
            Some(needed) => needed,
            None => bail!("bitmap size {}x{} overflows", width, height),
        };
        if data.len() != needed {
            bail!(
                "bitmap data has {} bytes but {}x{} RGB needs {}",
                data.len(),
                width,
                height,
                needed
            );
        }
        Ok(Bitmap {
            data: data,
            width: width,
            height: height,
        })
    }

    /// Loads an image, falling back to an empty bitmap on any failure.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(bitmap) => bitmap,
            Err(err) => {
                warn!("could not load image {}: {:#}", path.display(), err);
                Self::empty()
            }
        }
    }

    pub fn try_load(path: &Path) -> anyhow::Result<Self> {
        let found = match search_candidates(path).into_iter().find(|c| c.is_file()) {
            Some(found) => found,
            None => bail!("image file not found: {}", path.display()),
        };
        let img = image::open(&found)
            .with_context(|| format!("failed to decode {}", found.display()))?
            .to_rgb8();
        let width = img.width() as usize;
        let height = img.height() as usize;
        debug!("loaded image {} ({}x{})", found.display(), width, height);
        Self::from_rgb(width, height, img.into_raw())
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// RGB of pixel (i, j); i counts columns from the left, j rows from the top.
    /// Out-of-range coordinates are clamped to the border.
    pub fn pixel(&self, i: usize, j: usize) -> [u8; 3] {
        if self.is_empty() {
            return MISSING_PIXEL;
        }
        let i = i.min(self.width - 1);
        let j = j.min(self.height - 1);
        let idx = 3 * (i + j * self.width);
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

/// Locations tried for `path`, in order.
fn search_candidates(path: &Path) -> Vec<PathBuf> {
    if path.is_absolute() {
        return vec![path.to_path_buf()];
    }
    let mut candidates = Vec::new();
    if let Ok(dir) = env::var(IMAGE_DIR_ENV) {
        candidates.push(Path::new(&dir).join(path));
    }
    candidates.push(path.to_path_buf());
    let mut prefix = PathBuf::new();
    for _ in 0..=MAX_PARENT_LEVELS {
        candidates.push(prefix.join("images").join(path));
        prefix.push("..");
    }
    candidates
}
