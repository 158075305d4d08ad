use std::io;
use voyage_camera::CameraError;
use voyage_image::ImageError;

#[test]
fn test_from_io_error() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "camera busy");
    let cam_err: CameraError = io_err.into();

    match cam_err {
        CameraError::Device(msg) => assert!(msg.contains("camera busy")),
        other => panic!("Expected CameraError::Device, got {:?}", other),
    }
}

#[test]
fn test_from_image_error() {
    let cam_err: CameraError = ImageError::Decode("not a JPEG".to_string()).into();

    match cam_err {
        CameraError::Decode(ImageError::Decode(msg)) => assert_eq!(msg, "not a JPEG"),
        other => panic!("Expected CameraError::Decode, got {:?}", other),
    }
}

#[test]
fn test_error_display() {
    let missing = CameraError::ConfigurationMissing("no capture device".to_string());
    assert!(missing.to_string().contains("not configured"));
    assert!(missing.to_string().contains("no capture device"));

    let stream_err = CameraError::Stream("dequeue failed".to_string());
    assert!(stream_err.to_string().contains("dequeue failed"));

    let channel_err = CameraError::Channel("worker gone".to_string());
    assert!(channel_err.to_string().contains("worker gone"));
}
