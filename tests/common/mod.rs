#![allow(dead_code)]

use assert_cmd::cargo;
use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};

pub fn picsort() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("picsort"))
}

pub fn create_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Write a solid-color image; the format is taken from the file extension
pub fn create_image(dir: &Path, name: &str, pixel: [u8; 3], size: u32) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    RgbImage::from_pixel(size, size, Rgb(pixel))
        .save(&path)
        .unwrap();
    path
}

/// Sorted file names directly under `dir`; empty if the directory is absent
pub fn dir_filenames(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut names: Vec<String> = entries
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn scan_json(input: &Path, extra_args: &[&str]) -> serde_json::Value {
    let output = picsort()
        .arg(input)
        .args(extra_args)
        .arg("--format")
        .arg("json")
        .arg("--no-progress")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    serde_json::from_slice(&output).unwrap()
}
