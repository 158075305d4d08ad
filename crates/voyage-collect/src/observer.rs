use tokio::sync::watch;
use voyage_camera::ImageObserver;
use voyage_classify::ImageClassifier;
use voyage_image::Image;
use voyage_overlay::{ClassificationOverlayReducer, OverlayHistory};

/// Classifies every captured photo and folds the result into the overlay.
///
/// The reducer lives here, on the loop's context. Readers get snapshots of
/// the history through [`CollectingObserver::subscribe`], sent whenever it
/// grows.
pub struct CollectingObserver<C> {
    classifier: C,
    reducer: ClassificationOverlayReducer,
    overlay: watch::Sender<OverlayHistory>,
}

impl<C: ImageClassifier> CollectingObserver<C> {
    pub fn new(classifier: C) -> Self {
        let reducer = ClassificationOverlayReducer::new();
        let (overlay, _) = watch::channel(reducer.history().clone());
        Self {
            classifier,
            reducer,
            overlay,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<OverlayHistory> {
        self.overlay.subscribe()
    }

    pub fn history(&self) -> &OverlayHistory {
        self.reducer.history()
    }
}

impl<C: ImageClassifier> ImageObserver for CollectingObserver<C> {
    async fn image_captured(&mut self, image: Image) {
        if image.is_empty() {
            log::debug!("no image this cycle, nothing to classify");
            return;
        }

        let predictions = match self.classifier.make_predictions(&image).await {
            Ok(predictions) => predictions,
            Err(e) => {
                log::error!("classification failed: {}", e);
                return;
            }
        };

        match predictions.first() {
            Some(top) => log::info!("Prediction {} ({:.2})", top.label, top.confidence),
            None => log::debug!("classifier returned no predictions"),
        }

        if self.reducer.on_predictions(&predictions).is_some() {
            self.overlay.send_replace(self.reducer.history().clone());
        }
    }
}
