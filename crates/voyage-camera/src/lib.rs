//! Camera side of the voyage capture loop.
//!
//! A [`CaptureSurface`] owns the live [`CaptureSession`] and takes one photo
//! per [`CaptureRequest`]. The [`CaptureCompletionBridge`] turns the
//! hardware completion into exactly one decoded image, and the
//! [`CaptureScheduler`] repeats the trigger/deliver/wait cycle until its
//! handle is torn down.

pub mod bridge;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod session;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use bridge::{CaptureCompletion, CaptureCompletionBridge, PendingCapture};
pub use config::{CameraConfig, DEFAULT_INTERVAL, SchedulerConfig};
pub use error::CameraError;
pub use scheduler::{CaptureScheduler, SchedulerHandle, SchedulerState, SchedulerStatus};
pub use session::{
    CaptureOutcome, CaptureRequest, CaptureSession, CaptureSettings, FlashMode, PhotoFormat,
    SessionPreset,
};
pub use traits::{CaptureSurface, ImageObserver};

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Surface;
