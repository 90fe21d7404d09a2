mod common;

use common::{create_file, create_image, scan_json};
use tempfile::TempDir;

#[test]
fn test_empty_directory() {
    let dir = TempDir::new().unwrap();

    let json = scan_json(dir.path(), &[]);

    assert_eq!(json["stats"]["total_images"], 0);
    assert_eq!(json["stats"]["duplicate_groups"], 0);
    assert_eq!(json["stats"]["unique_images"], 0);
    assert!(json["groups"].as_array().unwrap().is_empty());
}

#[test]
fn test_non_image_files_are_not_candidates() {
    let dir = TempDir::new().unwrap();
    create_image(dir.path(), "photo.png", [40, 40, 40], 16);
    create_file(dir.path(), "notes.txt", b"same bytes");
    create_file(dir.path(), "notes_copy.txt", b"same bytes");

    let json = scan_json(dir.path(), &[]);

    assert_eq!(json["stats"]["total_images"], 1);
    assert_eq!(json["stats"]["duplicate_groups"], 0);
}

#[test]
fn test_duplicates_found_across_nested_directories() {
    let dir = TempDir::new().unwrap();
    create_image(dir.path(), "top.png", [60, 120, 60], 16);
    create_image(dir.path(), "sub/nested.png", [60, 120, 60], 32);

    let json = scan_json(dir.path(), &[]);

    assert_eq!(json["stats"]["duplicate_groups"], 1);
    assert_eq!(json["stats"]["duplicates"], 1);
}

#[test]
fn test_no_recursive_ignores_subdirectories() {
    let dir = TempDir::new().unwrap();
    create_image(dir.path(), "top.png", [60, 120, 60], 16);
    create_image(dir.path(), "sub/nested.png", [60, 120, 60], 32);

    let json = scan_json(dir.path(), &["--no-recursive"]);

    assert_eq!(json["stats"]["total_images"], 1);
    assert_eq!(json["stats"]["duplicate_groups"], 0);
    assert_eq!(json["stats"]["unique_images"], 1);
}

#[test]
fn test_exclude_keeps_output_directory_out_of_the_scan() {
    let dir = TempDir::new().unwrap();
    create_image(dir.path(), "photo.png", [90, 30, 200], 16);
    create_image(dir.path(), "sorted/photo.png", [90, 30, 200], 16);

    let json = scan_json(dir.path(), &["-e", "sorted"]);

    assert_eq!(json["stats"]["total_images"], 1);
    assert_eq!(json["stats"]["duplicate_groups"], 0);
}
