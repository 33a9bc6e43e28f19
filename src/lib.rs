//! Software raster painting on a flat RGB backing store: gradient, tint,
//! rectangle, ring and a 3x3 convolution, plus the window and PNG glue that
//! shows or saves the visible viewport.

pub mod config;
pub mod convolve;
pub mod draw;
pub mod error;
pub mod export;
pub mod paint;
pub mod scene;
pub mod types;

pub use convolve::Kernel;
pub use error::{Error, Result};
pub use types::{Color, PixelBuffer, Rect, Ring};
