//! Image classification for the capture loop: the [`ImageClassifier`]
//! seam, label files, preprocessing and ranking, plus an ONNX Runtime
//! classifier behind the `onnx` feature.

pub mod error;
pub mod labels;
pub mod prediction;
pub mod preprocess;
pub mod ranking;
pub mod traits;

#[cfg(feature = "onnx")]
pub mod onnx;

pub use error::{ClassifyError, Result};
pub use labels::Labels;
pub use prediction::Prediction;
pub use preprocess::Preprocess;
pub use ranking::{rank, softmax};
pub use traits::ImageClassifier;

#[cfg(feature = "onnx")]
pub use onnx::OnnxClassifier;
