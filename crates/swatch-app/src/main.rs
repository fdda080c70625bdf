mod cli;
mod logging;
mod preview;
mod selection;

use std::process::ExitCode;

use swatch_config::SwatchConfig;
use swatch_palette::{BackgroundModel, SelectionState};

use cli::OutputFormat;

fn main() -> ExitCode {
    let args = cli::parse();

    let log_handle = logging::init(args.log_level.as_deref());

    let loaded = swatch_config::load_config_from(args.config.as_deref());
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    logging::apply_level(&log_handle, args.log_level.as_deref(), config.logging.level);

    tracing::info!("Swatch v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    apply_overrides(&mut config, &args);

    let mut state = SelectionState::from_config(&config.palette);
    state.subscribe(|background: &BackgroundModel| {
        tracing::debug!(
            "background recomputed ({} swatches)",
            background.swatches().len()
        );
    });
    tracing::info!("Palette ready ({} candidates)", state.candidates().len());

    if let Err(e) = selection::apply_selections(&mut state, &args.select) {
        tracing::error!("{e}");
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    let output = match args.format {
        OutputFormat::Text => preview::render_text(&state, &config.background),
        OutputFormat::Json => preview::render_json(&state, &config.background),
    };
    println!("{}", output.trim_end());
    ExitCode::SUCCESS
}

/// Fold command-line overrides into the loaded config.
fn apply_overrides(config: &mut SwatchConfig, args: &cli::Args) {
    if let Some(seed) = args.seed {
        config.palette.seed = Some(seed);
    }
    if let Some(count) = args.count {
        config.palette.candidate_count = count;
    }
    if let Err(e) = swatch_config::validation::validate(config) {
        tracing::warn!("{e}");
    }
}
