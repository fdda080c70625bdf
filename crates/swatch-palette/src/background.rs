//! Derived background model for the preview area.

use serde::Serialize;
use swatch_common::types::Color;

use crate::color_model::ColorModel;

/// A candidate tagged with whether it is the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub color: ColorModel,
    pub selected: bool,
}

/// A single gradient stop. `t` runs from 0 at the first swatch to 1 at the last.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// What the preview renders: a gradient across swatches, or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "swatches", rename_all = "snake_case")]
pub enum BackgroundModel {
    Gradient(Vec<Swatch>),
    Empty,
}

impl BackgroundModel {
    pub fn swatches(&self) -> &[Swatch] {
        match self {
            BackgroundModel::Gradient(swatches) => swatches,
            BackgroundModel::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.swatches().is_empty()
    }

    /// The first highlighted swatch, if any.
    pub fn selected(&self) -> Option<&Swatch> {
        self.swatches().iter().find(|s| s.selected)
    }

    /// Evenly spaced gradient stops, one per swatch.
    pub fn stops(&self) -> Vec<ColorStop> {
        let swatches = self.swatches();
        let last = swatches.len().saturating_sub(1);
        swatches
            .iter()
            .enumerate()
            .map(|(i, swatch)| {
                let t = if last == 0 {
                    0.0
                } else {
                    i as f32 / last as f32
                };
                ColorStop::new(t, swatch.color.color())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swatch(hex: &str, selected: bool) -> Swatch {
        Swatch {
            color: ColorModel::new(hex, hex),
            selected,
        }
    }

    #[test]
    fn empty_has_no_swatches_or_stops() {
        let bg = BackgroundModel::Empty;
        assert!(bg.is_empty());
        assert!(bg.stops().is_empty());
        assert!(bg.selected().is_none());
    }

    #[test]
    fn single_swatch_stop_at_zero() {
        let bg = BackgroundModel::Gradient(vec![swatch("FFA500", true)]);
        let stops = bg.stops();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].t, 0.0);
        assert_eq!(stops[0].color, Color::from_rgb(255, 165, 0));
    }

    #[test]
    fn stops_are_evenly_spaced() {
        let bg = BackgroundModel::Gradient(vec![
            swatch("000", false),
            swatch("777", true),
            swatch("FFF", false),
        ]);
        let ts: Vec<f32> = bg.stops().iter().map(|s| s.t).collect();
        assert_eq!(ts, [0.0, 0.5, 1.0]);
    }

    #[test]
    fn selected_finds_highlighted_swatch() {
        let bg = BackgroundModel::Gradient(vec![swatch("000", false), swatch("FFF", true)]);
        assert_eq!(bg.selected().unwrap().color.hex_code, "FFF");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(BackgroundModel::Empty).unwrap();
        assert_eq!(json["kind"], "empty");

        let bg = BackgroundModel::Gradient(vec![swatch("FFF", true)]);
        let json = serde_json::to_value(&bg).unwrap();
        assert_eq!(json["kind"], "gradient");
        assert_eq!(json["swatches"][0]["selected"], true);
        assert_eq!(json["swatches"][0]["color"]["hex_code"], "FFF");
    }
}
