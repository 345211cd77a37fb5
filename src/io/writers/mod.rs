pub mod svg;
pub use svg::write_svg;
