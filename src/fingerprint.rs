use std::path::{Path, PathBuf};

use colored::Colorize;
use image::ImageReader;
use image::imageops::FilterType;
use indicatif::ProgressBar;
use rayon::prelude::*;

/// Edge length of the reduced grayscale sample grid
pub const SAMPLE_DIM: u32 = 16;

/// Content fingerprint of an image: a BLAKE3 digest of its reduced sample
pub type Fingerprint = blake3::Hash;

/// Compute the fingerprint of a single image file.
///
/// The image is stretched to fill a 16x16 grid (aspect ratio is not
/// preserved), converted to grayscale, and the 256-byte raw sample is
/// hashed. Identical pixel content yields an identical fingerprint
/// regardless of the original format or resolution.
pub fn fingerprint_image(path: &Path) -> image::ImageResult<Fingerprint> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let sample = image
        .resize_exact(SAMPLE_DIM, SAMPLE_DIM, FilterType::Lanczos3)
        .to_luma8();

    Ok(blake3::hash(sample.as_raw()))
}

/// Fingerprint a batch of files in parallel.
///
/// The result vector lines up with `files`: indexed parallel iteration
/// preserves slice order on collect, so the index fold downstream sees
/// fingerprints in enumeration order. Files that fail to decode are logged
/// and reported as `None`.
pub fn fingerprint_files(files: &[PathBuf], progress: &ProgressBar) -> Vec<Option<Fingerprint>> {
    files
        .par_iter()
        .map(|path| {
            let result = fingerprint_image(path);
            progress.inc(1);

            match result {
                Ok(fingerprint) => Some(fingerprint),
                Err(e) => {
                    progress.suspend(|| {
                        eprintln!("{} {}: {}", "[skipped]".yellow(), path.display(), e);
                    });
                    None
                }
            }
        })
        .collect()
}
