//! entrain - play an entrainment preset from the terminal
//!
//! Run with: cargo run -- [preset-id] [seconds]

use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use entrain_dsp::engine::{SettingsDelta, SignalEngine};
use entrain_dsp::presets;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let preset_id = args.next().unwrap_or_else(|| "alpha-relax".to_string());
    let seconds: u64 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 30,
    };

    let settings = presets::get_by_id(&preset_id).ok_or_else(|| {
        let known: Vec<&str> = presets::all().iter().map(|p| p.id).collect();
        eyre!("unknown preset '{preset_id}'; available: {}", known.join(", "))
    })?;

    println!("=== entrain ===");
    println!(
        "Preset: {preset_id} (carrier {} Hz, beat {} Hz)",
        settings.carrier_frequency, settings.beat_frequency
    );
    println!("Playing for {seconds}s... Ctrl+C to stop");

    let mut engine = SignalEngine::new();
    engine.play(settings);
    if !engine.is_playing() {
        return Err(eyre!("no audio output available"));
    }

    // Ease the volume up from the preset level over the first moments.
    std::thread::sleep(Duration::from_secs(1));
    engine.update_settings(&SettingsDelta::default().volume(settings.volume.max(0.6)));

    std::thread::sleep(Duration::from_secs(seconds.saturating_sub(1)));
    engine.cleanup();
    Ok(())
}
