use crate::bridge::CaptureCompletion;
use crate::session::{CaptureRequest, CaptureSession};
use voyage_image::Image;

/// The camera side of the loop: owns the session and takes photos on request.
pub trait CaptureSurface {
    /// The session, or `None` if setup never got as far as configuring one.
    fn session(&self) -> Option<&CaptureSession>;

    /// Begin capturing one photo for `request`.
    ///
    /// The surface hands the result to `completion` exactly once, possibly
    /// later and from another thread. Dropping `completion` without finishing
    /// it counts as a capture that produced no image.
    fn capture_photo(&mut self, request: CaptureRequest, completion: CaptureCompletion);
}

/// Receives every captured photo, one call per capture attempt.
///
/// A failed capture arrives as [`Image::empty`]. The scheduler waits for
/// this call to return before it starts the inter-capture delay.
#[allow(async_fn_in_trait)]
pub trait ImageObserver {
    async fn image_captured(&mut self, image: Image);
}
