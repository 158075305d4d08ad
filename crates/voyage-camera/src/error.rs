use std::fmt;

#[derive(Debug)]
pub enum CameraError {
    /// No capturable device; the surface cannot be set up.
    ConfigurationMissing(String),
    Device(String),
    Stream(String),
    Decode(voyage_image::ImageError),
    Channel(String),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::ConfigurationMissing(msg) => write!(f, "camera not configured: {msg}"),
            CameraError::Device(msg) => write!(f, "device error: {msg}"),
            CameraError::Stream(msg) => write!(f, "stream error: {msg}"),
            CameraError::Decode(err) => write!(f, "decode error: {err}"),
            CameraError::Channel(msg) => write!(f, "channel error: {msg}"),
        }
    }
}

impl std::error::Error for CameraError {}

impl From<std::io::Error> for CameraError {
    fn from(err: std::io::Error) -> Self {
        CameraError::Device(err.to_string())
    }
}

impl From<voyage_image::ImageError> for CameraError {
    fn from(err: voyage_image::ImageError) -> Self {
        CameraError::Decode(err)
    }
}
