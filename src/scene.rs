// The fixed per-tick paint sequence.

use log::trace;

use crate::config;
use crate::convolve::blur;
use crate::error::Result;
use crate::paint::{circle, gradient, rectangle, tint};
use crate::types::PixelBuffer;

/// Paint one frame: gradient, tint, rectangle, ring, blur.
/// On error the buffer keeps whatever the earlier steps already wrote.
pub fn paint_scene(buf: &mut PixelBuffer, snapshot: &mut PixelBuffer) -> Result<()> {
    gradient(buf, config::GRADIENT_TOP, config::GRADIENT_BOTTOM);
    tint(buf, config::TINT);
    rectangle(buf, config::RECT, config::RECT_COLOR)?;
    circle(buf, config::RING, config::RING_COLOR);
    blur(buf, snapshot, config::BLUR_KERNEL)?;
    trace!("scene painted");
    Ok(())
}
