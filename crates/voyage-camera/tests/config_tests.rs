use std::time::Duration;
use voyage_camera::{
    CameraConfig, CaptureRequest, CaptureSession, CaptureSettings, DEFAULT_INTERVAL, FlashMode,
    PhotoFormat, SchedulerConfig, SessionPreset,
};

#[test]
fn test_camera_config_defaults() {
    let config = CameraConfig::default();
    assert_eq!(config.device(), "/dev/video0");
    assert_eq!(config.width(), 640);
    assert_eq!(config.height(), 480);
    assert_eq!(config.buffer_count(), 2);
    assert_eq!(config.warmup_frames(), 3);
}

#[test]
fn test_camera_config_builder() {
    let config = CameraConfig::default()
        .with_device("/dev/video2".to_string())
        .with_width(1280)
        .with_height(720)
        .with_buffer_count(4)
        .with_warmup_frames(0);

    assert_eq!(config.device(), "/dev/video2");
    assert_eq!(config.width(), 1280);
    assert_eq!(config.height(), 720);
    assert_eq!(config.buffer_count(), 4);
    assert_eq!(config.warmup_frames(), 0);
}

#[test]
fn test_scheduler_config_defaults_to_three_seconds() {
    let config = SchedulerConfig::default();
    assert_eq!(DEFAULT_INTERVAL, Duration::from_secs(3));
    assert_eq!(config.interval(), DEFAULT_INTERVAL);
    assert_eq!(config.initial_delay(), DEFAULT_INTERVAL);
    assert_eq!(config.settings().format, PhotoFormat::Jpeg);
    assert_eq!(config.settings().flash, FlashMode::Off);
}

#[test]
fn test_scheduler_config_builder() {
    let settings = CaptureSettings {
        flash: FlashMode::Auto,
        ..Default::default()
    };
    let config = SchedulerConfig::default()
        .with_interval(Duration::from_millis(500))
        .with_initial_delay(Duration::ZERO)
        .with_settings(settings);

    assert_eq!(config.interval(), Duration::from_millis(500));
    assert!(config.initial_delay().is_zero());
    assert_eq!(config.settings(), settings);
}

#[test]
fn test_session_starts_once() {
    let mut session = CaptureSession::new(SessionPreset::Photo);
    assert!(!session.is_running());
    assert_eq!(session.preset(), SessionPreset::Photo);

    session.start();
    session.start();
    assert!(session.is_running());
}

#[test]
fn test_request_carries_settings() {
    let request = CaptureRequest::new(42, CaptureSettings::default());
    assert_eq!(request.sequence(), 42);
    assert_eq!(request.settings().format, PhotoFormat::Jpeg);
    assert_eq!(request.settings().flash, FlashMode::Off);
}
