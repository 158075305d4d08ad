use std::fmt;
use voyage_base::TensorError;
use voyage_image::ImageError;

#[derive(Debug)]
pub enum ClassifyError {
    /// The image cannot be turned into model input.
    Input(String),
    Model(String),
    Runtime(String),
    Io(String),
    Labels(String),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::Input(msg) => write!(f, "input error: {msg}"),
            ClassifyError::Model(msg) => write!(f, "model error: {msg}"),
            ClassifyError::Runtime(msg) => write!(f, "runtime error: {msg}"),
            ClassifyError::Io(msg) => write!(f, "io error: {msg}"),
            ClassifyError::Labels(msg) => write!(f, "labels error: {msg}"),
        }
    }
}

impl std::error::Error for ClassifyError {}

impl From<std::io::Error> for ClassifyError {
    fn from(err: std::io::Error) -> Self {
        ClassifyError::Io(err.to_string())
    }
}

impl From<TensorError> for ClassifyError {
    fn from(err: TensorError) -> Self {
        ClassifyError::Input(err.to_string())
    }
}

impl From<ImageError> for ClassifyError {
    fn from(err: ImageError) -> Self {
        ClassifyError::Input(err.to_string())
    }
}

#[cfg(feature = "onnx")]
impl From<ort::Error> for ClassifyError {
    fn from(err: ort::Error) -> Self {
        ClassifyError::Runtime(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
