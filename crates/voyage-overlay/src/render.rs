use crate::category::OverlayCategory;
use crate::history::OverlayHistory;

/// One asset the view stacks on top of the camera preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayLayer {
    pub category: OverlayCategory,
    pub asset: &'static str,
    pub z_index: i32,
    /// Position in the history; later layers draw over earlier ones at the
    /// same z-index.
    pub order: usize,
}

impl OverlayLayer {
    pub fn new(category: OverlayCategory, order: usize) -> Self {
        Self {
            category,
            asset: category.asset_name(),
            z_index: category.z_index(),
            order,
        }
    }
}

/// The layers to draw for `history`, in arrival order.
pub fn layers(history: &OverlayHistory) -> Vec<OverlayLayer> {
    history
        .iter()
        .enumerate()
        .map(|(order, category)| OverlayLayer::new(category, order))
        .collect()
}

/// `layers` sorted back to front.
pub fn draw_order(history: &OverlayHistory) -> Vec<OverlayLayer> {
    let mut layers = layers(history);
    layers.sort_by_key(|layer| (layer.z_index, layer.order));
    layers
}
