// Software painting on the backing store: gradient, tint, rectangle, ring.
// Gradient and tint cover the visible viewport only; shapes address the whole
// backing store.

use crate::error::{Error, Result};
use crate::types::{Color, PixelBuffer, Rect, Ring};

/// Vertical gradient over the viewport: `top` at row 0 blending toward `bottom`.
/// Each row is `(bottom * y + top * (h - y)) / h`, floored.
/// Visual: horizontal bands fading top to bottom; the margin stays black.
pub fn gradient(buf: &mut PixelBuffer, top: Color, bottom: Color) {
    let h = buf.view_height() as u32;
    let w = buf.view_width();
    let surface = buf.surface();
    let data = buf.data_mut();

    for y in 0..h {
        let mix = |a: u8, b: u8| ((b as u32 * y + a as u32 * (h - y)) / h) as u8;
        let row = [mix(top.r, bottom.r), mix(top.g, bottom.g), mix(top.b, bottom.b)];

        let start = 3 * (y as usize) * surface;
        for px in data[start..start + 3 * w].chunks_exact_mut(3) {
            px.copy_from_slice(&row);
        }
    }
}

/// Add `offset` to every viewport channel. Wraps modulo 256.
/// Visual: bright channels can roll over to dark.
pub fn tint(buf: &mut PixelBuffer, offset: Color) {
    let (w, h) = (buf.view_width(), buf.view_height());
    let surface = buf.surface();
    let data = buf.data_mut();

    for y in 0..h {
        let start = 3 * y * surface;
        for px in data[start..start + 3 * w].chunks_exact_mut(3) {
            px[0] = px[0].wrapping_add(offset.r);
            px[1] = px[1].wrapping_add(offset.g);
            px[2] = px[2].wrapping_add(offset.b);
        }
    }
}

/// Fill `rect` with `color`.
/// Rejected as a whole (buffer untouched) if any pixel would land outside the
/// backing store. An empty rectangle is a no-op.
/// Visual: a hard-edged block; may sit outside the viewport and never be seen.
pub fn rectangle(buf: &mut PixelBuffer, rect: Rect, color: Color) -> Result<()> {
    if rect.width < 0 || rect.height < 0 {
        return Err(Error::InvalidArgument(format!("rectangle: negative size {rect:?}")));
    }
    if rect.width == 0 || rect.height == 0 {
        return Ok(());
    }

    let surface = buf.surface() as i64;
    let (x0, y0) = (rect.x as i64, rect.y as i64);
    let (x1, y1) = (x0 + rect.width as i64, y0 + rect.height as i64); // exclusive
    if x0 < 0 || y0 < 0 || x1 > surface || y1 > surface {
        return Err(Error::InvalidArgument(format!(
            "rectangle: {rect:?} outside {surface}x{surface} surface"
        )));
    }

    let rgb = [color.r, color.g, color.b];
    let (x0, x1) = (x0 as usize, x1 as usize);
    let surface = surface as usize;
    let data = buf.data_mut();
    for y in y0 as usize..y1 as usize {
        let row = 3 * y * surface;
        for px in data[row + 3 * x0..row + 3 * x1].chunks_exact_mut(3) {
            px.copy_from_slice(&rgb);
        }
    }
    Ok(())
}

/// Draw a ring: pixels whose truncated distance from the centre lies in
/// `[radius - thickness, radius]`. Pixels outside the backing store are skipped.
/// `radius <= 0` draws nothing; `thickness >= radius` gives a filled disc.
/// Visual: a solid band of `color`; near an edge only the on-surface arc shows.
pub fn circle(buf: &mut PixelBuffer, ring: Ring, color: Color) {
    if ring.radius <= 0 {
        return;
    }
    let r = ring.radius as i64;
    let inner = r - ring.thickness as i64;
    let (cx, cy) = (ring.cx as i64, ring.cy as i64);

    // Bounding square clipped to the backing store (inclusive)
    let last = buf.surface() as i64 - 1;
    let (x_lo, x_hi) = ((cx - r).max(0), (cx + r).min(last));
    let (y_lo, y_hi) = ((cy - r).max(0), (cy + r).min(last));
    if x_lo > x_hi || y_lo > y_hi {
        return;
    }

    let rgb = [color.r, color.g, color.b];
    let surface = buf.surface();
    let data = buf.data_mut();
    for y in y_lo..=y_hi {
        let dy = (y - cy) as i128;
        for x in x_lo..=x_hi {
            let dx = (x - cx) as i128;
            let dist = ((dx * dx + dy * dy) as f64).sqrt() as i64;
            if dist > r || dist < inner {
                continue;
            }
            let i = 3 * (x as usize + y as usize * surface);
            data[i..i + 3].copy_from_slice(&rgb);
        }
    }
}
