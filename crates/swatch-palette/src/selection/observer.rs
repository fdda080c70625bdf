use crate::background::BackgroundModel;

/// Receives the recomputed background after every selection change.
///
/// Any `FnMut(&BackgroundModel)` closure is an observer.
pub trait BackgroundObserver {
    fn background_changed(&mut self, background: &BackgroundModel);
}

impl<F> BackgroundObserver for F
where
    F: FnMut(&BackgroundModel),
{
    fn background_changed(&mut self, background: &BackgroundModel) {
        self(background)
    }
}
