use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

mod constants;
mod rotator;
mod slide;
mod texture_loader;

use crate::constants::*;
use crate::rotator::Rotator;
use crate::slide::Slide;
use crate::texture_loader::{load_image_paths, load_texture_with_exif_rotation};

/// Randomized auto-rotating banner slideshow.
#[derive(Parser)]
#[command(name = "banner-slideshow", version)]
struct Args {
    /// Directory containing the banner images
    images: PathBuf,

    /// Time each slide stays visible, in milliseconds
    #[arg(long, default_value_t = DISPLAY_DURATION_MS)]
    duration_ms: u64,

    /// Shuffle seed for a reproducible ordering (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let image_paths = load_image_paths(&args.images);
    if image_paths.is_empty() {
        // Nothing to rotate; not an error.
        return;
    }

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Banner Slideshow")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides: Vec<Slide> = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => eprintln!("Warning: skipping {path:?}: {e}"),
        }
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let interval = args.duration_ms as f32 / 1000.0;
    let Some((mut rotator, mut ticker)) = Rotator::start(slides, interval, &mut rng) else {
        // Every image failed to load; same "nothing to rotate" case.
        return;
    };

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            if ticker.is_running() {
                ticker.stop();
            } else {
                ticker.resume();
            }
        }

        if ticker.tick(dt) {
            rotator.advance();
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        // Only the active slide draws; the rest short-circuit on visible.
        for slide in rotator.slides() {
            slide.draw(&mut d);
        }

        if !ticker.is_running() {
            d.draw_text("paused", 20, 20, 20, Color::GRAY);
        }
    }
}
