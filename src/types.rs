// Core types shared by every paint operation.

use crate::error::{Error, Result};

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as 0x00RRGGBB (what minifb wants).
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/// Axis-aligned rectangle, origin at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Ring (annulus): outer `radius`, wall `thickness`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    pub cx: i32,
    pub cy: i32,
    pub radius: i32,
    pub thickness: i32,
}

/// Row-major RGB backing store of `surface` x `surface` pixels.
/// Only the top-left `view_width` x `view_height` region is shown or exported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    surface: usize,
    view_width: usize,
    view_height: usize,
    data: Vec<u8>, // length = 3 * surface * surface
}

impl PixelBuffer {
    pub fn new(surface: usize, view_width: usize, view_height: usize) -> Result<Self> {
        if surface == 0 || view_width == 0 || view_height == 0 {
            return Err(Error::InvalidArgument(format!(
                "buffer: zero-sized surface {surface} or viewport {view_width}x{view_height}"
            )));
        }
        if view_width > surface || view_height > surface {
            return Err(Error::InvalidArgument(format!(
                "buffer: viewport {view_width}x{view_height} exceeds surface {surface}"
            )));
        }

        let len = surface
            .checked_mul(surface)
            .and_then(|n| n.checked_mul(3))
            .ok_or_else(|| Error::AllocationFailure(format!("buffer: {surface}^2 overflows")))?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| Error::AllocationFailure(format!("buffer: {len} bytes: {e}")))?;
        data.resize(len, 0);

        Ok(Self { surface, view_width, view_height, data })
    }

    pub fn surface(&self) -> usize {
        self.surface
    }

    pub fn view_width(&self) -> usize {
        self.view_width
    }

    pub fn view_height(&self) -> usize {
        self.view_height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Byte offset of the red channel of (x,y), or None outside the backing store.
    #[inline]
    pub fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.surface || y >= self.surface {
            return None;
        }
        Some(3 * (x + y * self.surface))
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.offset(x, y)
            .map(|i| Color::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Write one pixel; silently skipped outside the backing store.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        let Some(i) = self.offset(x, y) else {
            return false;
        };
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        true
    }

    /// Overwrite this buffer with `other`, reusing the allocation.
    pub fn copy_from(&mut self, other: &PixelBuffer) -> Result<()> {
        if !self.same_shape(other) {
            return Err(Error::InvalidArgument("copy: buffer dimensions differ".into()));
        }
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    pub fn same_shape(&self, other: &PixelBuffer) -> bool {
        self.surface == other.surface
            && self.view_width == other.view_width
            && self.view_height == other.view_height
    }
}
