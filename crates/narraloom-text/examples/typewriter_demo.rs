//! Headless dialogue box: loads a `.fnt`, runs the typewriter at 60 fps and
//! reports what the renderer would draw each time the text changes.
//!
//! ```bash
//! cargo run --package narraloom-text --example typewriter_demo -- assets/fonts/default.fnt
//! ```

use narraloom_core::{logging, profiling};
use narraloom_text::{BitmapFont, LayoutRequest, TextBatch, Typewriter, TypewriterConfig, Vec2};

const TEXT: &str = "Narraloom is alive.\nPress space to continue.";
const FRAME: f64 = 1.0 / 60.0;

fn main() {
    logging::init();
    profiling::init_profiling(profiling::ProfilingBackend::InProcess);

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: typewriter_demo <font.fnt>");
        std::process::exit(2);
    };

    let font = match BitmapFont::load(&path) {
        Ok(font) => font,
        Err(err) => {
            tracing::error!("Cannot start dialogue box: {}", err);
            std::process::exit(1);
        }
    };
    match font.atlas_path(&path) {
        Ok(atlas) => tracing::info!("Atlas texture: {}", atlas.display()),
        Err(err) => tracing::warn!("{}", err),
    }

    let mut typewriter = Typewriter::for_text(TEXT, TypewriterConfig::default());
    let mut batch = TextBatch::new();
    let mut frame = 0u32;

    loop {
        profiling::new_frame();
        let revealed = typewriter.update(FRAME);

        let request = LayoutRequest::new(TEXT, 1120.0)
            .with_origin(Vec2::new(80.0, 520.0))
            .with_max_lines(4)
            .with_visible_chars(typewriter.visible_chars());
        let summary = batch.prepare(&request, &font);

        if revealed > 0 || frame == 0 {
            tracing::info!(
                "frame {:>4}: {:>3} chars, {:>3} quads, {} lines, {} bytes",
                frame,
                summary.chars_consumed,
                summary.quads,
                summary.lines,
                batch.quads().as_bytes().len()
            );
        }

        if summary.reached_end {
            tracing::info!("Text fully shown after {} frames", frame + 1);
            break;
        }
        frame += 1;
    }
}
