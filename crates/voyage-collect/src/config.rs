use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use voyage_camera::{CameraConfig, SchedulerConfig};
use voyage_classify::Labels;

/// Everything the collecting loop needs to start.
#[derive(Clone, Debug, Default)]
pub struct CollectConfig {
    camera: CameraConfig,
    scheduler: SchedulerConfig,
    model: Option<PathBuf>,
    labels: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    top_k: Option<usize>,
}

impl CollectConfig {
    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }

    pub fn with_scheduler(mut self, scheduler: SchedulerConfig) -> Self {
        self.scheduler = scheduler;
        self
    }

    /// Set the ONNX classifier model.
    pub fn with_model(mut self, model: impl Into<PathBuf>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the labels file, one class name per line in model output order.
    pub fn with_labels(mut self, labels: impl Into<PathBuf>) -> Self {
        self.labels = Some(labels.into());
        self
    }

    /// Log to date-named files in `dir` instead of stdout.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn camera(&self) -> &CameraConfig {
        &self.camera
    }

    pub fn scheduler(&self) -> &SchedulerConfig {
        &self.scheduler
    }

    pub fn model(&self) -> Option<&Path> {
        self.model.as_deref()
    }

    pub fn labels(&self) -> Option<&Path> {
        self.labels.as_deref()
    }

    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }

    pub fn top_k(&self) -> Option<usize> {
        self.top_k
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scheduler.interval().is_zero() {
            return Err(ConfigError::InvalidInterval(
                "the delay between captures must be positive".to_string(),
            ));
        }
        if self.camera.width() == 0 || self.camera.height() == 0 {
            return Err(ConfigError::InvalidResolution {
                width: self.camera.width(),
                height: self.camera.height(),
            });
        }
        if self.model.is_some() && self.labels.is_none() {
            return Err(ConfigError::MissingLabels);
        }
        Ok(())
    }

    /// Read the configured labels file, if any.
    pub fn load_labels(&self) -> Result<Option<Labels>, ConfigError> {
        match &self.labels {
            Some(path) => Ok(Some(Labels::load(path)?)),
            None => Ok(None),
        }
    }
}
