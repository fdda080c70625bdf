use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use swatch_config::colors::normalize_hex;
use swatch_config::schema::{PaletteConfig, MAX_CANDIDATES};
use tracing::{debug, warn};

use super::observer::BackgroundObserver;
use crate::background::{BackgroundModel, Swatch};
use crate::color_model::ColorModel;
use crate::generator;

/// Number of random candidates generated when nothing else is configured.
pub const DEFAULT_CANDIDATE_COUNT: usize = 15;

/// Build the background for a candidate list and selection.
///
/// The gradient always spans every candidate in order; candidates equal to
/// the selection are tagged `selected`. No candidates means `Empty`.
pub fn derive_background(
    candidates: &[ColorModel],
    selected: Option<&ColorModel>,
) -> BackgroundModel {
    if candidates.is_empty() {
        return BackgroundModel::Empty;
    }

    BackgroundModel::Gradient(
        candidates
            .iter()
            .map(|color| Swatch {
                color: color.clone(),
                selected: selected == Some(color),
            })
            .collect(),
    )
}

/// Candidate colors, the current selection, and the background derived
/// from them.
///
/// The background is recomputed eagerly on every mutation, so
/// [`background`](Self::background) never goes stale.
pub struct SelectionState {
    candidates: Vec<ColorModel>,
    selected: Option<ColorModel>,
    background: BackgroundModel,
    observers: Vec<Box<dyn BackgroundObserver>>,
}

impl SelectionState {
    /// Wrap an explicit candidate list. The first candidate starts selected.
    pub fn new(candidates: Vec<ColorModel>) -> Self {
        let selected = candidates.first().cloned();
        let background = derive_background(&candidates, selected.as_ref());
        Self {
            candidates,
            selected,
            background,
            observers: Vec::new(),
        }
    }

    /// `count` random candidates followed by `reference`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, reference: ColorModel) -> Self {
        let mut candidates = generator::random_candidates(rng, count);
        candidates.push(reference);
        debug!("generated {} candidates", candidates.len());
        Self::new(candidates)
    }

    /// Generate from config, seeded when `palette.seed` is set.
    ///
    /// The candidate count is clamped to [`MAX_CANDIDATES`].
    pub fn from_config(config: &PaletteConfig) -> Self {
        let reference = &config.reference;
        let hex = normalize_hex(&reference.hex).unwrap_or_else(|| reference.hex.clone());
        let reference = ColorModel::new(reference.name.clone(), hex);
        let count = config.bounded_candidate_count();
        if count != config.candidate_count {
            warn!(
                "palette.candidate_count = {} exceeds {MAX_CANDIDATES}, generating {count}",
                config.candidate_count
            );
        }
        let count = count as usize;

        match config.seed {
            Some(seed) => {
                debug!("seeding palette generator with {seed}");
                Self::generate(&mut StdRng::seed_from_u64(seed), count, reference)
            }
            None => Self::generate(&mut StdRng::from_entropy(), count, reference),
        }
    }

    /// Register an observer. It is called after every subsequent change.
    pub fn subscribe(&mut self, observer: impl BackgroundObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replace the selection and return the recomputed background.
    ///
    /// `color` does not have to be a candidate; if it is not, no swatch
    /// is highlighted.
    pub fn select(&mut self, color: &ColorModel) -> BackgroundModel {
        if !self.candidates.contains(color) {
            debug!("selection {color} is not among the candidates");
        }
        self.selected = Some(color.clone());
        self.refresh()
    }

    /// Select the candidate at `index`. Out of range leaves state untouched.
    pub fn select_index(&mut self, index: usize) -> Option<BackgroundModel> {
        let color = self.candidates.get(index)?.clone();
        Some(self.select(&color))
    }

    /// Move to the next candidate, wrapping at the end.
    pub fn select_next(&mut self) -> Option<BackgroundModel> {
        self.step(1)
    }

    /// Move to the previous candidate, wrapping at the start.
    pub fn select_prev(&mut self) -> Option<BackgroundModel> {
        let len = self.candidates.len();
        self.step(len.saturating_sub(1))
    }

    pub fn candidates(&self) -> &[ColorModel] {
        &self.candidates
    }

    pub fn selected(&self) -> Option<&ColorModel> {
        self.selected.as_ref()
    }

    /// Position of the first candidate equal to the selection.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.as_ref()?;
        self.candidates.iter().position(|c| c == selected)
    }

    pub fn is_selected(&self, color: &ColorModel) -> bool {
        self.selected.as_ref() == Some(color)
    }

    pub fn background(&self) -> &BackgroundModel {
        &self.background
    }

    fn step(&mut self, offset: usize) -> Option<BackgroundModel> {
        let len = self.candidates.len();
        if len == 0 {
            return None;
        }
        let next = match self.selected_index() {
            Some(i) => (i + offset) % len,
            None => 0,
        };
        self.select_index(next)
    }

    fn refresh(&mut self) -> BackgroundModel {
        self.background = derive_background(&self.candidates, self.selected.as_ref());
        if let Some(swatch) = self.background.selected() {
            debug!("background updated, selected {}", swatch.color);
        }
        for observer in &mut self.observers {
            observer.background_changed(&self.background);
        }
        self.background.clone()
    }
}

impl fmt::Debug for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionState")
            .field("candidates", &self.candidates)
            .field("selected", &self.selected)
            .field("background", &self.background)
            .field("observers", &self.observers.len())
            .finish()
    }
}
