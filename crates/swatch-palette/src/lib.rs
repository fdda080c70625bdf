//! Color swatches and the selection state that drives the background preview.
//!
//! A [`SelectionState`] owns a list of candidate [`ColorModel`]s and the
//! current selection. Every mutation recomputes a [`BackgroundModel`]
//! synchronously, hands it to registered observers, and returns it.

pub mod background;
pub mod color_model;
pub mod generator;
pub mod selection;

pub use background::{BackgroundModel, ColorStop, Swatch};
pub use color_model::ColorModel;
pub use selection::{derive_background, BackgroundObserver, SelectionState};
