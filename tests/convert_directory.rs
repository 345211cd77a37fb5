use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use png2svg::{
    ConversionParams, ErrorKind, convert_png_to_svg, process_directory_to_path,
    process_directory_with_progress,
};
use tempfile::TempDir;

fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let mut image = RgbaImage::new(width, height);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        *pixel = Rgba([x as u8 * 40, y as u8 * 40, 200, 255]);
    }
    let path = dir.join(name);
    image
        .save_with_format(&path, image::ImageFormat::Png)
        .expect("Writing fixture PNG failed");
    path
}

fn write_broken_png(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, b"not a png at all").expect("Writing broken fixture failed");
    path
}

fn svg_names(dir: &Path) -> Vec<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn converts_only_png_files_case_insensitively() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "a.png", 2, 2);
    write_png(dir.path(), "b.PNG", 1, 1);
    fs::write(dir.path().join("c.jpg"), b"jpeg").unwrap();
    fs::write(dir.path().join("d.txt"), b"text").unwrap();

    let report = process_directory_to_path(dir.path(), &ConversionParams::default()).unwrap();

    assert_eq!(report.candidates, 2);
    assert_eq!(report.converted, 2);
    assert_eq!(
        svg_names(&dir.path().join("png2svg")),
        vec!["a.svg".to_string(), "b.svg".to_string()]
    );
}

#[test]
fn summary_counts_every_listed_entry() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "only.png", 1, 1);
    fs::write(dir.path().join("notes.txt"), b"x").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let report = process_directory_to_path(dir.path(), &ConversionParams::default()).unwrap();

    assert_eq!(report.entries, 3);
    assert_eq!(report.converted, 1);
}

#[test]
fn empty_directory_reports_absolute_path_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("readme.md"), b"# nothing here").unwrap();

    let report = process_directory_to_path(dir.path(), &ConversionParams::default()).unwrap();

    assert!(report.found_no_png());
    assert_eq!(report.converted, 0);
    assert!(report.scanned_dir.is_absolute());
    assert!(report.scanned_dir.ends_with(dir.path().file_name().unwrap()));
    assert!(!dir.path().join("png2svg").exists());
}

#[test]
fn output_is_named_after_input_in_default_subdir() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "photo.png", 3, 2);

    let mut progress = Vec::new();
    let report =
        process_directory_with_progress(dir.path(), &ConversionParams::default(), |i, o| {
            progress.push((i.to_path_buf(), o.to_path_buf()))
        })
        .unwrap();

    let expected = dir.path().join("png2svg").join("photo.svg");
    assert_eq!(report.outputs, vec![expected.clone()]);
    assert_eq!(progress, vec![(dir.path().join("photo.png"), expected.clone())]);

    let svg = fs::read_to_string(&expected).unwrap();
    assert!(svg.starts_with(
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 3 2' width='3' height='2'>"
    ));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<rect ").count(), 6);
}

#[test]
fn custom_subdir_and_scale() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "tile.png", 2, 1);
    let params = ConversionParams {
        output_subdir: "vector".to_string(),
        scale: 4,
        ..Default::default()
    };

    process_directory_to_path(dir.path(), &params).unwrap();

    let svg = fs::read_to_string(dir.path().join("vector").join("tile.svg")).unwrap();
    assert!(svg.contains("viewBox='0 0 2 1' width='8' height='4'"));
}

#[test]
fn first_failure_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "one.png", 1, 1);
    write_broken_png(dir.path(), "two.png");
    write_png(dir.path(), "three.png", 1, 1);

    // Listing order is platform defined; the files before the broken one are converted.
    let listed: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    let broken_at = listed.iter().position(|n| n == "two.png").unwrap();
    let mut expected: Vec<String> = listed[..broken_at]
        .iter()
        .map(|n| n.replace(".png", ".svg"))
        .collect();
    expected.sort();

    let err = process_directory_to_path(dir.path(), &ConversionParams::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DecodeFailure);
    assert!(err.to_string().contains("two.png"));
    assert_eq!(svg_names(&dir.path().join("png2svg")), expected);
}

#[test]
fn keep_going_converts_the_rest() {
    let dir = TempDir::new().unwrap();
    write_png(dir.path(), "one.png", 1, 1);
    write_broken_png(dir.path(), "two.png");
    write_png(dir.path(), "three.png", 1, 1);
    let params = ConversionParams {
        continue_on_error: true,
        ..Default::default()
    };

    let report = process_directory_to_path(dir.path(), &params).unwrap();

    assert_eq!(report.converted, 2);
    assert_eq!(report.errors, 1);
    assert_eq!(
        svg_names(&dir.path().join("png2svg")),
        vec!["one.svg".to_string(), "three.svg".to_string()]
    );
}

#[test]
fn missing_directory_is_reported() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = process_directory_to_path(&missing, &ConversionParams::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DirectoryNotFound);
}

#[test]
fn transparent_pixels_survive_a_file_round_trip_as_gaps() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("sparse.png");
    let mut image = RgbaImage::new(2, 2);
    image.put_pixel(1, 1, Rgba([255, 0, 128, 3]));
    image.save(&input).unwrap();
    let output = dir.path().join("sparse.svg");

    let document = convert_png_to_svg(&input, &output, &ConversionParams::default()).unwrap();

    assert_eq!(document.rect_count(), 1);
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 2 2' width='2' height='2'> \
         <rect x='1' y='1' width='1' height='1' fill='#ff0080'/> </svg>"
    );
}

#[test]
fn absolute_output_subdir_cannot_escape_input_dir() {
    let dir = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    write_png(dir.path(), "a.png", 1, 1);
    let params = ConversionParams {
        output_subdir: elsewhere.path().to_string_lossy().into_owned(),
        ..Default::default()
    };

    let err = process_directory_to_path(dir.path(), &params).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(svg_names(elsewhere.path()).is_empty());
}
