// Writes the visible part of the backing store to disk.

use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::{Error, Result};
use crate::types::PixelBuffer;

/// Crop the viewport out of the backing store into an `RgbImage`.
/// Visual: exactly what the window shows; the unused margin is dropped.
pub fn to_rgb_image(buf: &PixelBuffer) -> RgbImage {
    let (w, h) = (buf.view_width() as u32, buf.view_height() as u32);
    let surface = buf.surface();
    let data = buf.data();
    RgbImage::from_fn(w, h, |x, y| {
        let i = 3 * (x as usize + y as usize * surface);
        Rgb([data[i], data[i + 1], data[i + 2]])
    })
}

/// Save the viewport as a PNG at `path`.
pub fn save_png(buf: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    to_rgb_image(buf)
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| Error::Export(format!("{}: {e}", path.display())))
}
