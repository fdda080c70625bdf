//! Candidate palette configuration types.

use serde::{Deserialize, Serialize};

/// Upper bound on generated candidates.
pub const MAX_CANDIDATES: u32 = 64;

/// The fixed color appended after the generated candidates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReferenceColorConfig {
    pub name: String,
    /// 3, 6 or 8 hex digits, optionally prefixed with `#`.
    pub hex: String,
}

impl Default for ReferenceColorConfig {
    fn default() -> Self {
        Self {
            name: "Orange".into(),
            hex: "FFA500".into(),
        }
    }
}

/// Candidate generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Number of random candidates (valid range: 0-64).
    pub candidate_count: u32,
    /// Fixed generator seed. Unset means a fresh palette every run.
    pub seed: Option<u64>,
    pub reference: ReferenceColorConfig,
}

impl PaletteConfig {
    /// Candidate count clamped to [`MAX_CANDIDATES`].
    pub fn bounded_candidate_count(&self) -> u32 {
        self.candidate_count.min(MAX_CANDIDATES)
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            candidate_count: 15,
            seed: None,
            reference: ReferenceColorConfig::default(),
        }
    }
}
