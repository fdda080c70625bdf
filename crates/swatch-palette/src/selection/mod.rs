//! Selection state: candidates, current selection, derived background.

mod observer;
mod state;


pub use observer::BackgroundObserver;
pub use state::{derive_background, SelectionState, DEFAULT_CANDIDATE_COUNT};
