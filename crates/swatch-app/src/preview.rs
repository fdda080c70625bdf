//! Headless preview of the derived background.

use serde::Serialize;
use std::fmt::Write;
use swatch_config::schema::{BackgroundConfig, GradientType};
use swatch_palette::{BackgroundModel, ColorModel, ColorStop, SelectionState};

#[derive(Debug, Serialize)]
struct Preview<'a> {
    gradient_type: GradientType,
    angle: u32,
    selected: Option<&'a ColorModel>,
    background: &'a BackgroundModel,
    stops: Vec<ColorStop>,
}

pub fn render_json(state: &SelectionState, config: &BackgroundConfig) -> String {
    let preview = Preview {
        gradient_type: config.gradient_type,
        angle: config.angle,
        selected: state.selected(),
        background: state.background(),
        stops: state.background().stops(),
    };
    serde_json::to_string_pretty(&preview)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize preview: {e}\"}}"))
}

pub fn render_text(state: &SelectionState, config: &BackgroundConfig) -> String {
    let background = state.background();
    let mut out = String::new();

    if background.is_empty() {
        out.push_str("background: empty (placeholder)\n");
    } else {
        let kind = match config.gradient_type {
            GradientType::Linear => format!("linear gradient, {}°", config.angle),
            GradientType::Radial => "radial gradient".to_string(),
        };
        let _ = writeln!(out, "background: {kind}, {} stops", background.swatches().len());

        let width = background
            .swatches()
            .iter()
            .map(|s| s.color.name.chars().count())
            .max()
            .unwrap_or(0);
        for (i, (swatch, stop)) in background
            .swatches()
            .iter()
            .zip(background.stops())
            .enumerate()
        {
            let marker = if swatch.selected { '*' } else { ' ' };
            let _ = writeln!(
                out,
                "{marker} {i:>2}  {name:<width$}  {hex:<9}  t={t:.3}",
                name = swatch.color.name,
                hex = stop.color.to_string(),
                t = stop.t,
            );
        }
    }

    match state.selected() {
        Some(selected) => {
            let _ = writeln!(out, "selected: {selected}");
        }
        None => out.push_str("selected: none\n"),
    }
    out
}
