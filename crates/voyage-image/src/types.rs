use crate::ImageError;
use image::{RgbImage, imageops::FilterType};
use voyage_base::Tensor;

/// An RGB photo, `[height, width, 3]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pixels: Tensor<u8>,
}

impl Image {
    /// The sentinel for "capture completed but produced no usable image".
    pub fn empty() -> Self {
        Self {
            pixels: Tensor {
                shape: vec![0, 0, 3],
                data: Vec::new(),
            },
        }
    }

    /// Wrap raw RGB bytes of a `width` x `height` photo.
    pub fn from_rgb(width: usize, height: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        Ok(Self {
            pixels: Tensor::new(vec![height, width, 3], data)?,
        })
    }

    pub(crate) fn from_tensor(pixels: Tensor<u8>) -> Self {
        Self { pixels }
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn height(&self) -> usize {
        self.pixels.shape[0]
    }

    pub fn width(&self) -> usize {
        self.pixels.shape[1]
    }

    pub fn channels(&self) -> usize {
        self.pixels.shape[2]
    }

    pub fn pixels(&self) -> &Tensor<u8> {
        &self.pixels
    }

    /// Resample to `width` x `height` with a triangle filter.
    ///
    /// The sentinel stays empty.
    pub fn resized(&self, width: usize, height: usize) -> Result<Image, ImageError> {
        if self.is_empty() {
            return Ok(Image::empty());
        }
        if self.width() == width && self.height() == height {
            return Ok(self.clone());
        }

        let source = RgbImage::from_raw(
            self.width() as u32,
            self.height() as u32,
            self.pixels.data.clone(),
        )
        .ok_or_else(|| ImageError::Decode("pixel buffer does not match dimensions".to_string()))?;

        let scaled = image::imageops::resize(&source, width as u32, height as u32, FilterType::Triangle);
        Image::from_rgb(width, height, scaled.into_raw())
    }
}
