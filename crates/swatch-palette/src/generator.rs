//! Random candidate generation.
//!
//! The generator is always passed in, so tests and `palette.seed` can pin
//! the output with a seeded [`StdRng`](rand::rngs::StdRng).

use rand::Rng;
use swatch_common::types::Color;

use crate::color_model::ColorModel;

/// One opaque color with each RGB channel drawn uniformly from `[0, 1)`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    let r: f64 = rng.gen();
    let g: f64 = rng.gen();
    let b: f64 = rng.gen();
    Color::from_unit(r, g, b, 1.0)
}

/// `count` random candidates named `Color 1` through `Color {count}`.
pub fn random_candidates<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<ColorModel> {
    (1..=count)
        .map(|n| ColorModel::from_color(format!("Color {n}"), random_color(rng), false))
        .collect()
}
