// Build-time configuration. Nothing here is read from the environment.

use crate::convolve::Kernel;
use crate::types::{Color, Rect, Ring};

/// Visible window width in pixels.
pub const VIEW_WIDTH: usize = 800;
/// Visible window height in pixels.
pub const VIEW_HEIGHT: usize = 600;
/// Side of the square backing store; only the top-left viewport is shown.
pub const SURFACE_SIZE: usize = 1024;

pub const WINDOW_TITLE: &str = "Raster Painter";
pub const TARGET_FPS: usize = 60;

/// Where the first painted frame is written.
pub const EXPORT_PATH: &str = "frame0.png";

// Scene parameters (painted every tick in this order).
pub const GRADIENT_TOP: Color = Color::RED;
pub const GRADIENT_BOTTOM: Color = Color::BLUE;
pub const TINT: Color = Color::GREEN;
pub const RECT: Rect = Rect { x: 50, y: 100, width: 50, height: 100 };
pub const RECT_COLOR: Color = Color::RED;
pub const RING: Ring = Ring { cx: 400, cy: 357, radius: 78, thickness: 25 };
pub const RING_COLOR: Color = Color::BLACK;
pub const BLUR_KERNEL: Kernel = Kernel::Box;
