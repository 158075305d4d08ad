use std::io;
use voyage_base::TensorError;
use voyage_classify::ClassifyError;
use voyage_image::ImageError;

#[test]
fn test_from_io_error() {
    let err: ClassifyError = io::Error::new(io::ErrorKind::NotFound, "model.onnx").into();
    match err {
        ClassifyError::Io(msg) => assert!(msg.contains("model.onnx")),
        other => panic!("Expected ClassifyError::Io, got {:?}", other),
    }
}

#[test]
fn test_from_tensor_and_image_errors_are_input() {
    let err: ClassifyError = TensorError::ShapeOverflow.into();
    assert!(matches!(err, ClassifyError::Input(_)));

    let err: ClassifyError = ImageError::Decode("bad pixels".to_string()).into();
    assert!(matches!(err, ClassifyError::Input(ref msg) if msg.contains("bad pixels")));
}

#[test]
fn test_error_display() {
    assert!(ClassifyError::Runtime("ort failed".to_string()).to_string().contains("ort failed"));
    assert!(ClassifyError::Labels("no labels".to_string()).to_string().starts_with("labels error"));
}
