use crate::CameraError;
use crate::session::CaptureOutcome;
use tokio::sync::oneshot;
use voyage_image::Image;

/// Turns one hardware completion into one delivered image.
///
/// [`CaptureCompletionBridge::open`] pairs a producer half, handed to the
/// surface, with a consumer half awaited by the scheduler. The producer is
/// consumed when it reports and reports `NoImage` if dropped unfinished, so
/// each request yields exactly one outcome.
pub struct CaptureCompletionBridge;

impl CaptureCompletionBridge {
    pub fn open(sequence: u64) -> (CaptureCompletion, PendingCapture) {
        let (sender, receiver) = oneshot::channel();
        (
            CaptureCompletion {
                sequence,
                sender: Some(sender),
            },
            PendingCapture { sequence, receiver },
        )
    }

    /// Decode an outcome, degrading anything unusable to [`Image::empty`].
    pub fn decode(sequence: u64, outcome: CaptureOutcome) -> Image {
        match outcome {
            CaptureOutcome::Image(data) => match voyage_image::decode_image(&data) {
                Ok(image) => image,
                Err(e) => {
                    log::warn!("capture #{}: {} bytes not decodable: {}", sequence, data.len(), e);
                    Image::empty()
                }
            },
            CaptureOutcome::NoImage => Image::empty(),
        }
    }
}

/// Producer half of the bridge, owned by the surface while a photo is taken.
#[derive(Debug)]
pub struct CaptureCompletion {
    sequence: u64,
    sender: Option<oneshot::Sender<CaptureOutcome>>,
}

impl CaptureCompletion {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Report the hardware result: encoded photo bytes, an error, or neither.
    ///
    /// An error wins over data.
    pub fn on_capture_finished(mut self, data: Option<Vec<u8>>, error: Option<CameraError>) {
        let outcome = match (data, error) {
            (_, Some(error)) => {
                log::warn!("capture #{} failed: {}", self.sequence, error);
                CaptureOutcome::NoImage
            }
            (Some(data), None) => CaptureOutcome::Image(data),
            (None, None) => {
                log::warn!("capture #{} finished without data", self.sequence);
                CaptureOutcome::NoImage
            }
        };
        self.deliver(outcome);
    }

    fn deliver(&mut self, outcome: CaptureOutcome) {
        if let Some(sender) = self.sender.take() {
            if sender.send(outcome).is_err() {
                log::debug!(
                    "capture #{} finished after the loop was torn down",
                    self.sequence
                );
            }
        }
    }
}

impl Drop for CaptureCompletion {
    fn drop(&mut self) {
        if self.sender.is_some() {
            log::warn!("capture #{} abandoned by the surface", self.sequence);
            self.deliver(CaptureOutcome::NoImage);
        }
    }
}

/// Consumer half of the bridge.
#[derive(Debug)]
pub struct PendingCapture {
    sequence: u64,
    receiver: oneshot::Receiver<CaptureOutcome>,
}

impl PendingCapture {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Wait for the raw outcome of the request.
    pub async fn outcome(self) -> CaptureOutcome {
        // the completion always sends before it goes away
        self.receiver.await.unwrap_or(CaptureOutcome::NoImage)
    }

    /// Wait for the request and decode its photo.
    pub async fn delivered(self) -> Image {
        let sequence = self.sequence;
        let outcome = self.outcome().await;
        CaptureCompletionBridge::decode(sequence, outcome)
    }
}
