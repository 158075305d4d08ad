use crate::error::Result;
use crate::prediction::Prediction;
use voyage_image::Image;

/// Image in, ranked labels out.
///
/// Predictions come back best first. An image the model cannot use is an
/// error, not an empty list.
#[allow(async_fn_in_trait)]
pub trait ImageClassifier {
    async fn make_predictions(&self, image: &Image) -> Result<Vec<Prediction>>;
}
