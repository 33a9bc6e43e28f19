// 3x3 convolution over the visible viewport.
// Reads always come from a snapshot taken before the pass, so no output pixel
// ever feeds into a neighbour computed later in the same pass.

use crate::error::{Error, Result};
use crate::types::PixelBuffer;

/// 3x3 kernel, weights listed row by row (top-left first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    /// Normalised box blur: nine weights of 1/9, float accumulation, truncated.
    Box,
    /// Integer weights, accumulated in i32 and clamped to 0..=255.
    Integer([i32; 9]),
}

impl Kernel {
    pub const EDGE_DETECT: Kernel = Kernel::Integer([1, 0, 1, 1, -1, 1, 1, 0, 1]);

    #[inline]
    fn apply(&self, window: &[u8; 9]) -> u8 {
        match self {
            Kernel::Box => {
                let sum: f32 = window.iter().map(|&v| v as f32).sum();
                (sum / 9.0) as u8
            }
            Kernel::Integer(weights) => {
                let acc: i32 = window
                    .iter()
                    .zip(weights)
                    .map(|(&v, &w)| v as i32 * w)
                    .sum();
                acc.clamp(0, 255) as u8
            }
        }
    }
}

/// Convolve the interior of the viewport of `src` into `dst`.
/// The 1-pixel viewport border and everything outside the viewport are left
/// as they are in `dst`.
pub fn convolve(src: &PixelBuffer, dst: &mut PixelBuffer, kernel: Kernel) -> Result<()> {
    if !src.same_shape(dst) {
        return Err(Error::InvalidArgument("convolve: size mismatch src↔dst".into()));
    }
    let w = src.view_width() as i32;
    let h = src.view_height() as i32;

    let mut window = [[0u8; 9]; 3]; // per channel
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            for ky in 0..3 {
                for kx in 0..3 {
                    let (sx, sy) = (x + kx - 1, y + ky - 1);
                    let i = src.offset(sx, sy).ok_or_else(|| {
                        Error::InvalidArgument(format!("convolve: ({sx},{sy}) outside snapshot"))
                    })?;
                    let k = (ky * 3 + kx) as usize;
                    window[0][k] = src.data()[i];
                    window[1][k] = src.data()[i + 1];
                    window[2][k] = src.data()[i + 2];
                }
            }

            let Some(o) = dst.offset(x, y) else {
                return Err(Error::InvalidArgument(format!("convolve: ({x},{y}) outside output")));
            };
            let out = dst.data_mut();
            for c in 0..3 {
                out[o + c] = kernel.apply(&window[c]);
            }
        }
    }
    Ok(())
}

/// Blur `buf` in place. `snapshot` is reusable scratch of the same shape; it is
/// overwritten with the pre-pass contents and then only read.
pub fn blur(buf: &mut PixelBuffer, snapshot: &mut PixelBuffer, kernel: Kernel) -> Result<()> {
    snapshot.copy_from(buf)?;
    convolve(snapshot, buf, kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{gradient, rectangle};
    use crate::types::{Color, Rect};
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn filled(value: u8) -> (PixelBuffer, PixelBuffer) {
        let mut buf = PixelBuffer::new(16, 12, 10).unwrap();
        let c = Color::new(value, value, value);
        gradient(&mut buf, c, c);
        let snapshot = PixelBuffer::new(16, 12, 10).unwrap();
        (buf, snapshot)
    }

    /// Distinct value per viewport pixel so borders are easy to compare.
    fn patterned() -> PixelBuffer {
        let mut buf = PixelBuffer::new(16, 12, 10).unwrap();
        for y in 0..16 {
            for x in 0..16 {
                let v = ((x * 7 + y * 13) % 256) as u8;
                buf.set_pixel(x, y, Color::new(v, v.wrapping_mul(3), 255 - v));
            }
        }
        buf
    }

    #[test]
    fn box_blur_keeps_flat_image_flat() {
        let (mut buf, mut snap) = filled(90);
        blur(&mut buf, &mut snap, Kernel::Box).unwrap();
        assert_eq!(buf.pixel(5, 5), Some(Color::new(90, 90, 90)));
        assert_eq!(buf.pixel(10, 8), Some(Color::new(90, 90, 90)));
    }

    #[test]
    fn box_blur_spreads_a_single_pixel() {
        let mut buf = PixelBuffer::new(16, 12, 10).unwrap();
        let mut snap = buf.clone();
        buf.set_pixel(5, 5, Color::new(90, 0, 0));
        blur(&mut buf, &mut snap, Kernel::Box).unwrap();
        for (x, y) in [(4, 4), (5, 5), (6, 6), (4, 6)] {
            assert_eq!(buf.pixel(x, y), Some(Color::new(10, 0, 0)), "at ({x},{y})");
        }
        assert_eq!(buf.pixel(7, 5), Some(Color::BLACK));
    }

    #[test]
    fn reads_come_from_snapshot_not_output() {
        // A left-to-right in-place scan would smear the bright column rightwards.
        let mut buf = PixelBuffer::new(16, 12, 10).unwrap();
        let mut snap = buf.clone();
        rectangle(&mut buf, Rect { x: 3, y: 0, width: 1, height: 10 }, Color::new(252, 0, 0)).unwrap();
        blur(&mut buf, &mut snap, Kernel::Box).unwrap();
        assert_eq!(buf.pixel(4, 5), Some(Color::new(84, 0, 0)));
        assert_eq!(buf.pixel(5, 5), Some(Color::BLACK));
    }

    #[test]
    fn edge_kernel_clamps_instead_of_wrapping() {
        // weights sum to 5: 40 * 5 = 200, 100 * 5 = 500 -> 255 (wrapping would give 244)
        let (mut buf, mut snap) = filled(40);
        blur(&mut buf, &mut snap, Kernel::EDGE_DETECT).unwrap();
        assert_eq!(buf.pixel(3, 3), Some(Color::new(200, 200, 200)));

        let (mut buf, mut snap) = filled(100);
        blur(&mut buf, &mut snap, Kernel::EDGE_DETECT).unwrap();
        assert_eq!(buf.pixel(3, 3), Some(Color::WHITE));
    }

    #[test]
    fn negative_sums_clamp_to_zero() {
        let mut buf = PixelBuffer::new(16, 12, 10).unwrap();
        let mut snap = buf.clone();
        buf.set_pixel(5, 5, Color::new(200, 200, 200));
        blur(&mut buf, &mut snap, Kernel::Integer([0, 0, 0, 0, -1, 0, 0, 0, 0])).unwrap();
        assert_eq!(buf.pixel(5, 5), Some(Color::BLACK));
    }

    #[test]
    fn border_and_margin_are_bit_identical() {
        let mut buf = patterned();
        let before = buf.clone();
        let mut snap = PixelBuffer::new(16, 12, 10).unwrap();

        for kernel in [Kernel::Box, Kernel::EDGE_DETECT] {
            blur(&mut buf, &mut snap, kernel).unwrap();
            for x in 0..12 {
                assert_eq!(buf.pixel(x, 0), before.pixel(x, 0));
                assert_eq!(buf.pixel(x, 9), before.pixel(x, 9));
            }
            for y in 0..10 {
                assert_eq!(buf.pixel(0, y), before.pixel(0, y));
                assert_eq!(buf.pixel(11, y), before.pixel(11, y));
            }
            for y in 10..16 {
                for x in 0..16 {
                    assert_eq!(buf.pixel(x, y), before.pixel(x, y));
                }
            }
        }
        assert_ne!(buf.pixel(5, 5), before.pixel(5, 5));
    }

    #[test]
    fn viewport_spanning_whole_surface_stays_in_bounds() {
        let mut buf = PixelBuffer::new(8, 8, 8).unwrap();
        let mut snap = buf.clone();
        buf.set_pixel(7, 7, Color::WHITE);
        blur(&mut buf, &mut snap, Kernel::Box).unwrap();
        assert_eq!(buf.pixel(6, 6), Some(Color::new(28, 28, 28)));
        assert_eq!(buf.pixel(7, 7), Some(Color::WHITE));
    }

    #[test]
    fn mismatched_snapshot_is_rejected() {
        let mut buf = PixelBuffer::new(16, 12, 10).unwrap();
        let mut snap = PixelBuffer::new(16, 10, 10).unwrap();
        assert_matches!(blur(&mut buf, &mut snap, Kernel::Box), Err(Error::InvalidArgument(_)));
        assert_matches!(convolve(&snap, &mut buf, Kernel::Box), Err(Error::InvalidArgument(_)));
    }

    #[test]
    fn tiny_viewport_has_no_interior() {
        let mut buf = PixelBuffer::new(4, 2, 2).unwrap();
        buf.set_pixel(0, 0, Color::WHITE);
        let before = buf.clone();
        let mut snap = buf.clone();
        blur(&mut buf, &mut snap, Kernel::Box).unwrap();
        assert_eq!(buf, before);
    }
}
