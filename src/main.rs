// What you SEE:
// • A fixed 800x600 window: red→blue gradient tinted green, a red rectangle,
//   a black ring, all softened by a 3x3 box blur.
// • The first frame is also written to disk as a PNG.
// • Clicks are logged (RUST_LOG=debug) and otherwise ignored. ESC quits.

use std::time::{Duration, Instant};

use log::{error, info, trace, warn};

use raster_painter::config::{
    EXPORT_PATH, SURFACE_SIZE, TARGET_FPS, VIEW_HEIGHT, VIEW_WIDTH, WINDOW_TITLE,
};
use raster_painter::draw::Drawer;
use raster_painter::export::save_png;
use raster_painter::scene::paint_scene;
use raster_painter::{Error, PixelBuffer};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    /* --- Backing store + blur snapshot, allocated once --- */
    let mut surface = PixelBuffer::new(SURFACE_SIZE, VIEW_WIDTH, VIEW_HEIGHT)?;
    let mut snapshot = PixelBuffer::new(SURFACE_SIZE, VIEW_WIDTH, VIEW_HEIGHT)?;
    info!("surface {SURFACE_SIZE}x{SURFACE_SIZE}, viewport {VIEW_WIDTH}x{VIEW_HEIGHT}");

    let mut drawer = Drawer::new(WINDOW_TITLE, VIEW_WIDTH, VIEW_HEIGHT, TARGET_FPS)?;

    /* --- Frame counter / FPS --- */
    let mut frame: u64 = 0;
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        drawer.poll_clicks();

        // A failed step leaves earlier steps' pixels in place; show them anyway.
        if let Err(e) = paint_scene(&mut surface, &mut snapshot) {
            warn!("frame {frame}: paint failed: {e}");
        }
        trace!("frame {frame}: painted in {:?}", now.elapsed());

        if frame == 0 {
            match save_png(&surface, EXPORT_PATH) {
                Ok(()) => info!("wrote first frame to {EXPORT_PATH}"),
                Err(e) => error!("{e}"),
            }
        }

        drawer.present(&surface)?;
        frame += 1;

        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            info!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    info!("closed after {frame} frames");
    Ok(())
}
