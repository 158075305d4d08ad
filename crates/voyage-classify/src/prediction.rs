/// One ranked classifier output.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// Between 0 and 1 for models with a probability output.
    pub confidence: f32,
}

impl Prediction {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}
