use crate::category::OverlayCategory;
use crate::history::OverlayHistory;
use voyage_classify::Prediction;

/// Folds classifier results into the overlay history.
///
/// Only the top prediction counts. A recognized label appends its category,
/// anything else leaves the history untouched.
#[derive(Clone, Debug, Default)]
pub struct ClassificationOverlayReducer {
    history: OverlayHistory,
}

impl ClassificationOverlayReducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one classification result. Returns the appended category, if any.
    pub fn on_predictions(&mut self, predictions: &[Prediction]) -> Option<OverlayCategory> {
        let top = predictions.first()?;

        match OverlayCategory::from_label(&top.label) {
            Some(category) => {
                self.history.push(category);
                log::debug!(
                    "{} ({:.2}) added to overlay, {} shown",
                    category,
                    top.confidence,
                    self.history.len()
                );
                Some(category)
            }
            None => {
                log::debug!("'{}' has no overlay", top.label);
                None
            }
        }
    }

    pub fn history(&self) -> &OverlayHistory {
        &self.history
    }
}
