// Window + input glue around minifb.
// The painter works on 3-byte RGB pixels; minifb wants one 0x00RRGGBB u32 per
// pixel, so `present` repacks the viewport into a scratch vec every frame.

use log::debug;
use minifb::{Key, MouseButton, MouseMode, Window, WindowOptions};

use crate::error::{Error, Result};
use crate::types::{Color, PixelBuffer};

pub struct Drawer {
    window: Window,   // the on-screen window you see
    packed: Vec<u32>, // viewport pixels as 0x00RRGGBB, reused every frame
    width: usize,
    height: usize,
    was_down: bool,
}

impl Drawer {
    /// Create a fixed-size (non-resizable) window.
    /// Visual: an empty window with `title` appears; it cannot be resized.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self> {
        let options = WindowOptions { resize: false, ..WindowOptions::default() };
        let mut window = Window::new(title, width, height, options)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self {
            window,
            packed: vec![0; width * height],
            width,
            height,
            was_down: false,
        })
    }

    /// Push the viewport of `buf` to the screen.
    /// Visual: the window immediately displays the painted frame.
    pub fn present(&mut self, buf: &PixelBuffer) -> Result<()> {
        if buf.view_width() != self.width || buf.view_height() != self.height {
            return Err(Error::WindowUpdate(format!(
                "viewport {}x{} does not match window {}x{}",
                buf.view_width(),
                buf.view_height(),
                self.width,
                self.height
            )));
        }
        pack_viewport(buf, &mut self.packed);
        self.window
            .update_with_buffer(&self.packed, self.width, self.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current mouse position in window pixel coordinates (clamped to the window).
    /// Visual: nothing; only used to log where a click landed.
    pub fn mouse_pos(&self) -> Option<(usize, usize)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x.max(0.0) as usize, y.max(0.0) as usize))
    }

    /// True while the left button is held.
    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// Fire `mouse_down` once per press of the left button, not once per frame
    /// it stays held.
    pub fn poll_clicks(&mut self) {
        let down = self.left_mouse_down();
        if down && !self.was_down {
            if let Some((x, y)) = self.mouse_pos() {
                mouse_down(x, y);
            }
        }
        self.was_down = down;
    }
}

/// Click handler.
/// Visual: none; the click only shows up in the log at debug level.
fn mouse_down(x: usize, y: usize) {
    debug!("mouse down at ({x}, {y})");
}

/// Repack the viewport into 0x00RRGGBB words, row by row.
pub fn pack_viewport(buf: &PixelBuffer, out: &mut Vec<u32>) {
    let (w, h) = (buf.view_width(), buf.view_height());
    out.clear();
    out.reserve(w * h);
    for row in buf.data().chunks_exact(3 * buf.surface()).take(h) {
        out.extend(row[..3 * w].chunks_exact(3).map(|p| Color::new(p[0], p[1], p[2]).to_u32()));
    }
}
