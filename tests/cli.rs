//! Process-level tests for the `img2pdf` binary: argument handling, the
//! `Error: <message>` contract and exit codes.

#![cfg(feature = "cli")]

use image::{Rgb, RgbImage};
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

fn img2pdf(args: &[&OsStr]) -> Output {
    img2pdf_in(Path::new("."), args)
}

fn img2pdf_in(cwd: &Path, args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_img2pdf"))
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("IMG2PDF_RESOLUTION")
        .env_remove("IMG2PDF_TITLE")
        .output()
        .expect("binary should run")
}

fn create_image(path: &Path) {
    RgbImage::from_pixel(8, 8, Rgb([200, 10, 10]))
        .save(path)
        .expect("fixture image should save");
}

#[test]
fn dir_mode_succeeds_and_creates_output_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("in");
    std::fs::create_dir(&input).unwrap();
    create_image(&input.join("b.png"));
    create_image(&input.join("a.jpg"));
    let output = tmp.path().join("out").join("combined.pdf");

    let out = img2pdf(&[
        OsStr::new("--no-progress"),
        OsStr::new("--dir"),
        input.as_os_str(),
        output.as_os_str(),
    ]);

    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(output.is_file());
    let doc = lopdf::Document::load(&output).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn path_mode_accepts_multiple_files() {
    let tmp = tempfile::tempdir().unwrap();
    let a = tmp.path().join("a.png");
    let b = tmp.path().join("b.png");
    create_image(&a);
    create_image(&b);
    let output = tmp.path().join("two.pdf");

    let out = img2pdf(&[
        OsStr::new("-q"),
        OsStr::new("--path"),
        a.as_os_str(),
        b.as_os_str(),
        OsStr::new("--"),
        output.as_os_str(),
    ]);

    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(lopdf::Document::load(&output).unwrap().get_pages().len(), 2);
}

#[test]
fn explicit_paths_example_from_help_runs_as_written() {
    let help = img2pdf(&[OsStr::new("--help")]);
    let help = String::from_utf8_lossy(&help.stdout);
    let example = "img2pdf --path cover.png page1.jpg page2.jpg -- booklet.pdf";
    assert!(help.contains(example), "help: {help}");

    let tmp = tempfile::tempdir().unwrap();
    for name in ["cover.png", "page1.jpg", "page2.jpg"] {
        create_image(&tmp.path().join(name));
    }
    let args: Vec<&OsStr> = example.split(' ').skip(1).map(OsStr::new).collect();

    let out = img2pdf_in(tmp.path(), &args);

    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let doc = lopdf::Document::load(tmp.path().join("booklet.pdf")).unwrap();
    assert_eq!(doc.get_pages().len(), 3);
}

#[test]
fn redirected_stderr_has_no_colour_codes() {
    let tmp = tempfile::tempdir().unwrap();
    create_image(&tmp.path().join("a.png"));
    let output = tmp.path().join("plain.pdf");

    let out = img2pdf(&[
        OsStr::new("--no-progress"),
        OsStr::new("--dir"),
        tmp.path().as_os_str(),
        output.as_os_str(),
    ]);

    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("1 pages"), "stderr: {stderr}");
    assert!(!stderr.contains('\x1b'), "stderr: {stderr:?}");
}

#[test]
fn missing_directory_prints_error_and_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("nope");
    let output = tmp.path().join("o.pdf");

    let out = img2pdf(&[OsStr::new("--dir"), missing.as_os_str(), output.as_os_str()]);

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.starts_with("Error: Directory does not exist"),
        "stderr: {stderr}"
    );
    assert!(!output.exists());
}

#[test]
fn undecodable_image_exits_1() {
    let tmp = tempfile::tempdir().unwrap();
    let bad = tmp.path().join("bad.png");
    std::fs::write(&bad, b"not an image").unwrap();
    let output = tmp.path().join("o.pdf");

    let out = img2pdf(&[
        OsStr::new("--no-progress"),
        OsStr::new("--path"),
        bad.as_os_str(),
        OsStr::new("--"),
        output.as_os_str(),
    ]);

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error: Failed to decode image"));
}

#[test]
fn dir_and_path_are_mutually_exclusive() {
    let tmp = tempfile::tempdir().unwrap();
    let a = tmp.path().join("a.png");
    create_image(&a);

    let out = img2pdf(&[
        OsStr::new("--dir"),
        tmp.path().as_os_str(),
        OsStr::new("--path"),
        a.as_os_str(),
        OsStr::new("--"),
        OsStr::new("o.pdf"),
    ]);

    assert!(!out.status.success());
}

#[test]
fn inspect_only_json_lists_pages_without_writing() {
    let tmp = tempfile::tempdir().unwrap();
    create_image(&tmp.path().join("p.png"));
    let output = tmp.path().join("unused.pdf");

    let out = img2pdf(&[
        OsStr::new("--inspect-only"),
        OsStr::new("--json"),
        OsStr::new("--dir"),
        tmp.path().as_os_str(),
        output.as_os_str(),
    ]);

    assert_eq!(out.status.code(), Some(0));
    let pages: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(pages[0]["width"], 8);
    assert_eq!(pages[0]["color_mode"], "rgb8");
    assert!(!output.exists());
}
