//! Render a scrollable control's chrome to a PNG file.
//!
//! Usage: `scrollchrome-snapshot [config.json] [output.png] [theme]`

use std::path::PathBuf;

use scrollchrome::{ChromeConfig, logging};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let mut config = match args.next() {
        Some(path) if path != "-" => ChromeConfig::load_from_file(&PathBuf::from(path))?,
        _ => ChromeConfig::default(),
    };
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("scrollchrome.png"));
    if let Some(theme) = args.next() {
        config.set_theme_name(&theme)?;
    }

    logging::init(config.log_level);
    log::info!(
        "Rendering {} ({}) at {}x{}",
        config.theme,
        if config.dark { "dark" } else { "light" },
        config.width,
        config.height
    );

    let surface = scrollchrome::render(&config)?;
    scrollchrome::save_png(&surface, &output)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        log::error!("Snapshot failed: {}", e);
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}
