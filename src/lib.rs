#![doc = r#"
png2svg — pixel-exact PNG to SVG conversion.

Every pixel whose alpha is greater than zero becomes one 1×1 `<rect>` filled
with the pixel's RGB color; fully transparent pixels are dropped. Adjacent
pixels are never merged, so the SVG reproduces the raster exactly at any zoom
level. Alpha only decides whether a rectangle exists: partially transparent
pixels are emitted fully opaque.

Convert a single file
---------------------
```rust,no_run
use std::path::Path;
use png2svg::{ConversionParams, convert_png_to_svg};

fn main() -> png2svg::Result<()> {
    let svg = convert_png_to_svg(
        Path::new("sprites/hero.png"),
        Path::new("sprites/png2svg/hero.svg"),
        &ConversionParams::default(),
    )?;
    println!("{} rectangles", svg.rect_count());
    Ok(())
}
```

Encode in memory
----------------
```rust
use image::{Rgba, RgbaImage};
use png2svg::encode_svg;

let mut image = RgbaImage::new(2, 1);
image.put_pixel(0, 0, Rgba([255, 0, 128, 255]));

let svg = encode_svg(&image);
assert_eq!(
    svg.as_str(),
    "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 2 1' width='2' height='1'> \
     <rect x='0' y='0' width='1' height='1' fill='#ff0080'/> </svg>"
);
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use png2svg::{ConversionParams, process_directory_to_path};

fn main() -> png2svg::Result<()> {
    let params = ConversionParams {
        output_subdir: "vector".to_string(),
        ..Default::default()
    };

    let report = process_directory_to_path(Path::new("assets"), &params)?;
    println!("entries={} converted={}", report.entries, report.converted);
    Ok(())
}
```

Error handling
--------------
All public functions return `png2svg::Result<T>`. Match on `png2svg::Error`,
or use `Error::kind()` for the flat category.

```rust,no_run
use std::path::Path;
use png2svg::{ConversionParams, ErrorKind, process_directory_to_path};

match process_directory_to_path(Path::new("missing"), &ConversionParams::default()) {
    Ok(report) => println!("{} converted", report.converted),
    Err(e) if e.kind() == ErrorKind::DirectoryNotFound => eprintln!("no such directory"),
    Err(e) => eprintln!("failed: {e}"),
}
```

Useful modules
--------------
- [`api`] — file and directory entry points, `BatchReport`.
- [`core`] — the encoder (`SvgEncoder`, `SvgDocument`) and `ConversionParams`.
- [`io`] — PNG discovery/decoding and the SVG writer.
- [`types`] — `Fill` and `SvgRect`.
- [`error`] — crate-level `Error`, `ErrorKind` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::encode::{SvgDocument, SvgEncoder, encode_svg};
pub use crate::core::params::{ConversionParams, DEFAULT_OUTPUT_SUBDIR};
pub use error::{Error, ErrorKind, Result};
pub use types::{Fill, SvgRect};

pub use api::{
    BatchReport, convert_png_to_svg, output_path_for, process_directory_to_path,
    process_directory_with_progress,
};
