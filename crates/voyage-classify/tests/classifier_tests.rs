use voyage_classify::{ClassifyError, ImageClassifier, Labels, Prediction, Preprocess, rank, softmax};
use voyage_image::Image;

/// Scores an image by its mean channel values; enough to exercise the seam.
struct ColorClassifier {
    labels: Labels,
}

impl ImageClassifier for ColorClassifier {
    async fn make_predictions(&self, image: &Image) -> Result<Vec<Prediction>, ClassifyError> {
        let tensor = Preprocess::default()
            .with_size(4, 4)
            .with_normalization([0.0; 3], [1.0; 3])
            .to_nchw(image)?;
        let plane = tensor.data.len() / 3;
        let means: Vec<f32> = tensor
            .data
            .chunks(plane)
            .map(|c| c.iter().sum::<f32>() / plane as f32)
            .collect();
        rank(&softmax(&means), &self.labels, 2)
    }
}

fn classifier() -> ColorClassifier {
    ColorClassifier {
        labels: Labels::parse("Sunscreen\nGlasses\nWaterBottle").unwrap(),
    }
}

#[tokio::test]
async fn test_make_predictions_ranks_dominant_channel() {
    let image = Image::from_rgb(4, 4, [10u8, 200, 30].repeat(16)).unwrap();

    let predictions = classifier().make_predictions(&image).await.unwrap();

    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0].label, "Glasses");
    assert!(predictions[0].confidence > predictions[1].confidence);
}

#[tokio::test]
async fn test_make_predictions_rejects_empty_image() {
    let result = classifier().make_predictions(&Image::empty()).await;
    assert!(matches!(result, Err(ClassifyError::Input(_))));
}
