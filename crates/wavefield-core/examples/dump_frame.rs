//! Print one frame's samples as JSON.
//!
//! Usage: `cargo run -p wavefield-core --example dump_frame -- [width] [height] [time]`

use std::env;
use wavefield_core::{Viewport, WaveConfig, sample_frame};

fn main() {
    env_logger::init();

    let args: Vec<f64> = env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    let viewport = Viewport::new(
        args.first().copied().unwrap_or(1280.0),
        args.get(1).copied().unwrap_or(720.0),
    );
    let time = args.get(2).copied().unwrap_or(0.0);

    let config = WaveConfig::default();
    let frame = sample_frame(&config, viewport, time);
    log::info!("{} lines at t={time}", frame.len());

    match serde_json::to_string_pretty(&frame) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("serialization failed: {e}"),
    }
}
