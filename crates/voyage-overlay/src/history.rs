use crate::category::OverlayCategory;

/// Every category shown so far, oldest first.
///
/// Starts as `[None]` and only ever grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayHistory {
    entries: Vec<OverlayCategory>,
}

impl Default for OverlayHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayHistory {
    pub fn new() -> Self {
        Self {
            entries: vec![OverlayCategory::None],
        }
    }

    pub(crate) fn push(&mut self, category: OverlayCategory) {
        self.entries.push(category);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true, the history starts with `OverlayCategory::None`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recently recognized category.
    pub fn latest(&self) -> OverlayCategory {
        self.entries.last().copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = OverlayCategory> + '_ {
        self.entries.iter().copied()
    }

    pub fn as_slice(&self) -> &[OverlayCategory] {
        &self.entries
    }
}
