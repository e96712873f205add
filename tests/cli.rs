use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn mediaconv() -> Command {
    Command::cargo_bin("mediaconv").unwrap()
}

fn write_webp(path: &Path) {
    let img = image::RgbaImage::from_fn(8, 8, |x, y| {
        image::Rgba([(x * 32) as u8, (y * 32) as u8, 128, 255])
    });
    image::DynamicImage::ImageRgba8(img)
        .save_with_format(path, image::ImageFormat::WebP)
        .unwrap();
}

#[test]
fn converts_webp_next_to_input_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.webp");
    write_webp(&input);

    mediaconv()
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("Converted"));

    let output = dir.path().join("photo.png");
    let png = image::open(&output).unwrap();
    assert_eq!((png.width(), png.height()), (8, 8));
}

#[test]
fn disambiguates_when_default_output_exists() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.webp");
    write_webp(&input);
    fs::write(dir.path().join("photo.png"), b"already here").unwrap();

    mediaconv().arg(&input).assert().success();
    assert!(dir.path().join("photo (1).png").exists());

    mediaconv().arg(&input).assert().success();
    assert!(dir.path().join("photo (2).png").exists());

    // the pre-existing file is left alone
    assert_eq!(
        fs::read(dir.path().join("photo.png")).unwrap(),
        b"already here"
    );
}

#[test]
fn explicit_output_path_is_honored() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.webp");
    let output = dir.path().join("picked.png");
    write_webp(&input);

    mediaconv().arg(&input).arg(&output).assert().success();

    assert!(output.exists());
    assert!(!dir.path().join("photo.png").exists());
}

#[test]
fn converts_svg_through_the_binary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("banner.svg");
    fs::write(
        &input,
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="9"><rect width="16" height="9" fill="#336699"/></svg>"##,
    )
    .unwrap();

    mediaconv().arg(&input).assert().success();

    let png = image::open(dir.path().join("banner.png")).unwrap();
    assert_eq!((png.width(), png.height()), (16, 9));
}

#[test]
fn unsupported_extension_fails_with_listing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, b"plain text").unwrap();

    mediaconv()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"))
        .stderr(predicate::str::contains("webp"));
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    mediaconv()
        .arg(dir.path().join("no-such.webp"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn prompts_for_input_when_run_without_args() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.webp");
    write_webp(&input);

    mediaconv()
        .write_stdin(format!("{}\n", input.display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("Input file:"));

    assert!(dir.path().join("photo.png").exists());
}

#[test]
fn empty_prompt_answer_fails() {
    mediaconv()
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input file given"));
}
