use crate::observer::CollectingObserver;
use tokio::sync::watch;
use voyage_camera::{CaptureScheduler, CaptureSurface, SchedulerConfig, SchedulerHandle, SchedulerStatus};
use voyage_classify::ImageClassifier;
use voyage_overlay::OverlayHistory;

/// A running capture, classify and overlay loop.
///
/// Dropping it tears the loop down.
pub struct CollectingLoop {
    scheduler: SchedulerHandle,
    overlay: watch::Receiver<OverlayHistory>,
}

impl CollectingLoop {
    /// Start the loop on the current `LocalSet`.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a `tokio::task::LocalSet`.
    pub fn start<S, C>(surface: S, classifier: C, config: SchedulerConfig) -> Self
    where
        S: CaptureSurface + 'static,
        C: ImageClassifier + 'static,
    {
        let observer = CollectingObserver::new(classifier);
        let overlay = observer.subscribe();

        log::info!(
            "collecting every {:?}, first capture in {:?}",
            config.interval(),
            config.initial_delay()
        );
        let scheduler = CaptureScheduler::new(surface, config).start(observer);

        Self { scheduler, overlay }
    }

    /// Receiver for overlay snapshots, marked changed whenever the history grows.
    pub fn overlay(&self) -> watch::Receiver<OverlayHistory> {
        self.overlay.clone()
    }

    pub fn history(&self) -> OverlayHistory {
        self.overlay.borrow().clone()
    }

    pub fn status(&self) -> SchedulerStatus {
        self.scheduler.status()
    }

    pub fn scheduler(&self) -> &SchedulerHandle {
        &self.scheduler
    }

    pub fn teardown(&mut self) {
        self.scheduler.teardown();
    }
}
