use std::fmt;

/// A recognized object class that drives which overlay asset is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OverlayCategory {
    /// Nothing recognized yet; shows the collecting placeholder.
    #[default]
    None,
    Sunscreen,
    Glasses,
    Drug,
    WaterBottle,
}

/// Classifier labels that select a category. Matching is exact and
/// case-sensitive; any other label selects nothing.
pub const LABEL_TABLE: [(&str, OverlayCategory); 4] = [
    ("Sunscreen", OverlayCategory::Sunscreen),
    ("Glasses", OverlayCategory::Glasses),
    ("Drug", OverlayCategory::Drug),
    ("WaterBottle", OverlayCategory::WaterBottle),
];

/// Asset drawn for [`OverlayCategory::None`].
pub const COLLECTING_ASSET: &str = "CollectingThings";

impl OverlayCategory {
    pub fn from_label(label: &str) -> Option<Self> {
        LABEL_TABLE
            .iter()
            .find(|(name, _)| *name == label)
            .map(|&(_, category)| category)
    }

    pub fn asset_name(self) -> &'static str {
        match self {
            OverlayCategory::None => COLLECTING_ASSET,
            OverlayCategory::Sunscreen => "Sunscreen",
            OverlayCategory::Glasses => "Glasses",
            OverlayCategory::Drug => "Drug",
            OverlayCategory::WaterBottle => "WaterBottle",
        }
    }

    /// Drawing order: recognized objects sit above the placeholder.
    pub fn z_index(self) -> i32 {
        match self {
            OverlayCategory::None => 2,
            _ => 3,
        }
    }
}

impl fmt::Display for OverlayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.asset_name())
    }
}
