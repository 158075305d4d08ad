//! Overlay state driven by classification results.
//!
//! The [`ClassificationOverlayReducer`] owns the grow-only
//! [`OverlayHistory`]; the render layer turns snapshots of it into
//! [`OverlayLayer`]s.

pub mod category;
pub mod history;
pub mod reducer;
pub mod render;

pub use category::{COLLECTING_ASSET, LABEL_TABLE, OverlayCategory};
pub use history::OverlayHistory;
pub use reducer::ClassificationOverlayReducer;
pub use render::{OverlayLayer, draw_order, layers};
