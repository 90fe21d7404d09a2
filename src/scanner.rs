use std::path::{Path, PathBuf};

use colored::Colorize;
use globset::{Glob, GlobSet, GlobSetBuilder};
use jwalk::WalkDir;

/// File extensions (lowercase) treated as candidate images
pub const IMAGE_EXTENSIONS: [&str; 8] = [
    "jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif",
];

/// Whether a path carries a recognized image extension (case-insensitive)
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Compile user exclude patterns into a matcher.
///
/// Each pattern also matches as a path component and as a whole subtree, so
/// `cache` excludes `cache/` anywhere and `*.bak` matches by file name.
pub fn build_exclude_set(patterns: &[String]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
        builder.add(Glob::new(&format!("**/{pattern}"))?);
        builder.add(Glob::new(&format!("**/{pattern}/**"))?);
    }
    builder.build()
}

/// Walk `root` and return candidate image paths in enumeration order.
///
/// Entries are sorted per directory, so enumeration order (and with it the
/// duplicate-group representative) is stable across runs. Traversal errors
/// are logged and the affected entry is skipped.
pub fn scan_directory(root: &Path, recursive: bool, exclude: &GlobSet) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false);

    if !recursive {
        walker = walker.max_depth(1);
    }

    walker
        .into_iter()
        .filter_map(|entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    eprintln!("{} {}", "[skipped]".yellow(), e);
                    return None;
                }
            };

            let metadata = entry.metadata().ok()?;
            if !metadata.is_file() {
                return None;
            }

            let path = entry.path();
            if !is_image_path(&path) {
                return None;
            }

            if exclude.is_match(&path) {
                return None;
            }

            Some(path)
        })
        .collect()
}
