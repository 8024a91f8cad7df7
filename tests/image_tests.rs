mod common;
use common::write_zip;
use resetboard::core::images::{DEFAULT_EXTENSIONS, ImageArchives, matches_program, resolve_image};
use resetboard::errors::AppError;
use std::fs;
use std::path::PathBuf;

fn exts() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

#[test]
fn test_match_rules() {
    let e = exts();
    assert!(matches_program("p1_bay.jpg", "P1", &e));
    assert!(matches_program("P1 Front.JPEG", "p1", &e));
    assert!(matches_program("p1.png", "P1", &e));
    assert!(!matches_program("p1_bay.gif", "P1", &e));
    assert!(!matches_program("xp1.jpg", "P1", &e));
    assert!(!matches_program("p1", "P1", &e));
}

#[test]
fn test_scenario_e_second_archive_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = write_zip(dir.path(), "first.zip", &[("other_program.jpg", b"AAA")]);
    let second = write_zip(dir.path(), "second.zip", &[("p1_bay.jpg", b"BBB")]);

    let archives = ImageArchives::extract(&[first, second]).expect("extract");
    assert_eq!(archives.len(), 2);

    let dirs = archives.search_dirs(None).expect("dirs");
    let image = resolve_image("P1", &dirs, &exts())
        .expect("resolve")
        .expect("image found");

    assert_eq!(image.filename, "p1_bay.jpg");
    assert_eq!(image.bytes, b"BBB");
    assert!(image.path.starts_with(&archives.roots()[1]));
}

#[test]
fn test_archives_searched_before_local_folder() {
    let dir = tempfile::tempdir().expect("tempdir");
    let local = dir.path().join("images");
    fs::create_dir_all(&local).expect("mkdir");
    fs::write(local.join("p1_local.png"), b"LOCAL").expect("write");

    let zip = write_zip(dir.path(), "bundle.zip", &[("photos/P1_zip.jpg", b"ZIP")]);
    let archives = ImageArchives::extract(&[zip]).expect("extract");

    let dirs = archives.search_dirs(Some(local.as_path())).expect("dirs");
    let image = resolve_image("p1", &dirs, &exts())
        .expect("resolve")
        .expect("image found");
    assert_eq!(image.filename, "P1_zip.jpg");

    let none = ImageArchives::default();
    let dirs = none.search_dirs(Some(local.as_path())).expect("dirs");
    let image = resolve_image("p1", &dirs, &exts())
        .expect("resolve")
        .expect("image found");
    assert_eq!(image.bytes, b"LOCAL");
}

#[test]
fn test_no_match_is_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("does-not-exist");
    let dirs = vec![dir.path().to_path_buf(), missing];

    let image = resolve_image("P1", &dirs, &exts()).expect("resolve");
    assert!(image.is_none());
}

#[test]
fn test_extracted_dirs_removed_on_drop() {
    let dir = tempfile::tempdir().expect("tempdir");
    let zip = write_zip(dir.path(), "a.zip", &[("p1.jpg", b"X")]);

    let roots: Vec<PathBuf> = {
        let archives = ImageArchives::extract(&[zip]).expect("extract");
        let roots = archives.roots();
        assert!(roots[0].join("p1.jpg").exists());
        roots
    };

    assert!(!roots[0].exists());
}

#[test]
fn test_bad_archive_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = write_zip(dir.path(), "good.zip", &[("p1.jpg", b"X")]);
    let bad = dir.path().join("bad.zip");
    fs::write(&bad, b"not a zip").expect("write");

    let err = ImageArchives::extract(&[good, bad]).unwrap_err();
    assert!(matches!(err, AppError::Archive(_)));
}
