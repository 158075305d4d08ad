use std::path::Path;
use std::time::Duration;
use voyage_camera::{CameraConfig, SchedulerConfig};
use voyage_collect::{CollectConfig, ConfigError};

#[test]
fn test_default_is_valid() {
    let config = CollectConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.scheduler().interval(), Duration::from_secs(3));
    assert_eq!(config.camera().device(), "/dev/video0");
    assert!(config.model().is_none());
    assert!(config.log_dir().is_none());
    assert!(config.load_labels().unwrap().is_none());
}

#[test]
fn test_builder() {
    let config = CollectConfig::default()
        .with_camera(CameraConfig::default().with_device("/dev/video1".to_string()))
        .with_scheduler(SchedulerConfig::default().with_interval(Duration::from_secs(1)))
        .with_model("models/objects.onnx")
        .with_labels("models/objects.txt")
        .with_log_dir("/var/log/voyage")
        .with_top_k(3);

    assert_eq!(config.camera().device(), "/dev/video1");
    assert_eq!(config.scheduler().interval(), Duration::from_secs(1));
    assert_eq!(config.model(), Some(Path::new("models/objects.onnx")));
    assert_eq!(config.labels(), Some(Path::new("models/objects.txt")));
    assert_eq!(config.log_dir(), Some(Path::new("/var/log/voyage")));
    assert_eq!(config.top_k(), Some(3));
    assert!(config.validate().is_ok());
}

#[test]
fn test_zero_interval_is_rejected() {
    let config = CollectConfig::default()
        .with_scheduler(SchedulerConfig::default().with_interval(Duration::ZERO));
    assert!(matches!(config.validate(), Err(ConfigError::InvalidInterval(_))));
}

#[test]
fn test_zero_resolution_is_rejected() {
    let config = CollectConfig::default().with_camera(CameraConfig::default().with_width(0));
    match config.validate() {
        Err(ConfigError::InvalidResolution { width, height }) => {
            assert_eq!((width, height), (0, 480));
        }
        other => panic!("Expected ConfigError::InvalidResolution, got {:?}", other),
    }
}

#[test]
fn test_model_without_labels_is_rejected() {
    let config = CollectConfig::default().with_model("objects.onnx");
    assert!(matches!(config.validate(), Err(ConfigError::MissingLabels)));
}

#[test]
fn test_missing_labels_file() {
    let config = CollectConfig::default().with_labels("/nonexistent/labels.txt");
    assert!(matches!(config.load_labels(), Err(ConfigError::Labels(_))));
}
