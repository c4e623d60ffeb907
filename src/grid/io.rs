//! Convenience helpers for loading grids via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use std::path::Path;

use crate::grid::decode::{decode, encode, ChannelOrder, PixelLayout};
use crate::grid::Grid;
use crate::util::{GridMatchError, GridMatchResult};

/// Decodes an 8-bit RGB image buffer.
pub fn grid_from_rgb_image(img: &image::RgbImage) -> GridMatchResult<Grid> {
    let layout = PixelLayout::packed(img.width() as usize, img.height() as usize, ChannelOrder::Rgb);
    decode(img.as_raw(), layout)
}

/// Decodes an 8-bit RGBA image buffer, dropping alpha.
pub fn grid_from_rgba_image(img: &image::RgbaImage) -> GridMatchResult<Grid> {
    let layout =
        PixelLayout::packed(img.width() as usize, img.height() as usize, ChannelOrder::Rgba);
    decode(img.as_raw(), layout)
}

/// Converts any dynamic image to RGB and decodes it.
pub fn grid_from_dynamic_image(img: &image::DynamicImage) -> GridMatchResult<Grid> {
    grid_from_rgb_image(&img.to_rgb8())
}

/// Builds an RGB image buffer holding the grid's colors.
pub fn grid_to_rgb_image(grid: &Grid) -> GridMatchResult<image::RgbImage> {
    let (width, height) = (grid.width(), grid.height());
    let too_large = GridMatchError::InvalidDimensions { width, height };
    let w = u32::try_from(width).map_err(|_| too_large.clone())?;
    let h = u32::try_from(height).map_err(|_| too_large.clone())?;
    image::RgbImage::from_raw(w, h, encode(grid, ChannelOrder::Rgb)).ok_or(too_large)
}

/// Loads an image file from disk and decodes it into a grid.
pub fn load_grid<P: AsRef<Path>>(path: P) -> GridMatchResult<Grid> {
    let img = image::open(path).map_err(|err| GridMatchError::ImageIo {
        reason: err.to_string(),
    })?;
    grid_from_dynamic_image(&img)
}
