//! Shared helpers for the demo binaries.

use std::path::PathBuf;

use gwr::logging::{init_logging, LoggingConfig};

/// Path of a shader under `assets/shaders`.
pub fn shader_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("assets")
        .join("shaders")
        .join(name)
}

/// Starts logging from `RUST_LOG`, `info` when unset.
pub fn init_demo_logging() {
    init_logging(LoggingConfig::default());
}

/// RGBA8 checkerboard of `cells`×`cells` squares, `size`×`size` pixels.
pub fn checkerboard(size: u32, cells: u32) -> Vec<u8> {
    let cell = (size / cells.max(1)).max(1);
    let mut pixels = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let light = ((x / cell) + (y / cell)) % 2 == 0;
            let v = if light { 230 } else { 40 };
            pixels.extend_from_slice(&[v, v, v, 255]);
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_has_rgba_pixels() {
        let px = checkerboard(8, 2);
        assert_eq!(px.len(), 8 * 8 * 4);
        // top-left cell is light, the next cell to the right is dark
        assert_eq!(&px[0..4], &[230, 230, 230, 255]);
        assert_eq!(&px[4 * 4..4 * 4 + 4], &[40, 40, 40, 255]);
    }

    #[test]
    fn shader_paths_point_into_assets() {
        let p = shader_path("triangle.vert");
        assert!(p.ends_with("assets/shaders/triangle.vert"));
        assert!(p.exists());
    }
}
