use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use colored::Colorize;

use crate::config::TransferMode;
use crate::scanner;
use crate::selection::OutputAction;

/// Outcome of executing a batch of output actions
#[derive(Debug, Default)]
pub struct MaterializeResult {
    /// Files that reached the output directory
    pub completed: usize,
    /// Failures encountered (source path, error message)
    pub errors: Vec<(PathBuf, String)>,
}

/// Execute all planned actions, continuing past individual failures.
pub fn materialize_all(
    actions: &[OutputAction],
    mode: TransferMode,
    print_verbose_logs: bool,
) -> MaterializeResult {
    let mut result = MaterializeResult::default();

    for action in actions {
        match materialize(&action.source, &action.dest_dir, mode) {
            Ok(dest) => {
                result.completed += 1;
                if print_verbose_logs {
                    let tag = match mode {
                        TransferMode::Copy => "[copied]",
                        TransferMode::Move => "[moved]",
                    };
                    println!(
                        "{} {} -> {}",
                        tag.green(),
                        action.source.display(),
                        dest.display()
                    );
                }
            }
            Err(e) => {
                eprintln!(
                    "{} {}: {}",
                    "[failed]".red(),
                    action.source.display(),
                    e
                );
                result.errors.push((action.source.clone(), e.to_string()));
            }
        }
    }

    result
}

/// Copy or move `source` into `dest_dir`, creating the directory as needed.
///
/// Returns the path the file landed at, which differs from the plain join
/// when the base name was already taken.
pub fn materialize(source: &Path, dest_dir: &Path, mode: TransferMode) -> io::Result<PathBuf> {
    fs::create_dir_all(dest_dir)?;
    let dest = collision_free_path(dest_dir, source);

    match mode {
        TransferMode::Copy => {
            fs::copy(source, &dest)?;
        }
        TransferMode::Move => {
            if fs::rename(source, &dest).is_err() {
                // rename fails across filesystems; copy then drop the original
                fs::copy(source, &dest)?;
                fs::remove_file(source)?;
            }
        }
    }

    Ok(dest)
}

/// Standalone single-file copy, independent of any scan.
///
/// Validates that the source exists and looks like an image before doing the
/// same ensure-dir + collision-safe copy as the batch path.
pub fn copy_single_image(source: &Path, dest_dir: &Path) -> io::Result<PathBuf> {
    if !source.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("source file {} does not exist", source.display()),
        ));
    }

    if !scanner::is_image_path(source) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a supported image file", source.display()),
        ));
    }

    materialize(source, dest_dir, TransferMode::Copy)
}

/// Pick a destination name that does not clobber an existing file.
///
/// The plain base name is used when free; otherwise a millisecond timestamp
/// is appended before the extension and bumped until the name is unused.
/// Two materializations in one run never overwrite each other.
fn collision_free_path(dest_dir: &Path, source: &Path) -> PathBuf {
    let file_name = source
        .file_name()
        .expect("materialized sources are regular files");

    let candidate = dest_dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = source.file_stem().unwrap_or_default().to_string_lossy();
    let ext = source.extension().map(|e| e.to_string_lossy());
    let mut stamp = unix_millis();

    loop {
        let name = match &ext {
            Some(ext) => format!("{stem}_{stamp}.{ext}"),
            None => format!("{stem}_{stamp}"),
        };
        let candidate = dest_dir.join(name);
        if !candidate.exists() {
            return candidate;
        }
        stamp += 1;
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
