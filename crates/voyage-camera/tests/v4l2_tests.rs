#[cfg(feature = "v4l2")]
mod v4l2_tests {
    use voyage_camera::{CameraConfig, CameraError, CaptureSurface, V4l2Surface};

    #[test]
    fn test_missing_device_is_configuration_missing() {
        let config = CameraConfig::default().with_device("/dev/nonexistent_camera".to_string());

        match V4l2Surface::open(config) {
            Err(CameraError::ConfigurationMissing(msg)) => {
                assert!(msg.contains("/dev/nonexistent_camera"))
            }
            Err(other) => panic!("Expected CameraError::ConfigurationMissing, got {:?}", other),
            Ok(surface) => panic!("Expected an error, got {:?}", surface.session()),
        }
    }
}
