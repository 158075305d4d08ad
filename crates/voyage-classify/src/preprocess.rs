use crate::error::{ClassifyError, Result};
use voyage_base::Tensor;
use voyage_image::Image;

const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Resize and normalization applied before inference.
///
/// Defaults to a 224x224 input with ImageNet mean and standard deviation.
#[derive(Clone, Debug, PartialEq)]
pub struct Preprocess {
    width: usize,
    height: usize,
    mean: [f32; 3],
    std: [f32; 3],
}

impl Default for Preprocess {
    fn default() -> Self {
        Self {
            width: 224,
            height: 224,
            mean: IMAGENET_MEAN,
            std: IMAGENET_STD,
        }
    }
}

impl Preprocess {
    /// Set the model input size.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the per-channel normalization, applied to values in 0..1.
    pub fn with_normalization(mut self, mean: [f32; 3], std: [f32; 3]) -> Self {
        self.mean = mean;
        self.std = std;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// HWC u8 image -> `[1, 3, height, width]` normalized f32 tensor.
    pub fn to_nchw(&self, image: &Image) -> Result<Tensor<f32>> {
        if image.is_empty() {
            return Err(ClassifyError::Input("image is empty".to_string()));
        }
        if image.channels() != 3 {
            return Err(ClassifyError::Input(format!(
                "expected 3 channels (RGB), got {}",
                image.channels()
            )));
        }

        let resized = image.resized(self.width, self.height)?;
        let pixels = &resized.pixels().data;
        let plane = self.width * self.height;

        let mut data = vec![0.0f32; 3 * plane];
        for (i, rgb) in pixels.chunks_exact(3).enumerate() {
            for c in 0..3 {
                let value = rgb[c] as f32 / 255.0;
                data[c * plane + i] = (value - self.mean[c]) / self.std[c];
            }
        }

        Ok(Tensor::new(vec![1, 3, self.height, self.width], data)?)
    }
}
