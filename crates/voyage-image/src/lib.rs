//! Captured photo representation for the voyage loop.
//!
//! Every photo is decoded into 8-bit RGB pixels in HWC layout
//! (`[height, width, 3]`). A capture that produced nothing usable is
//! represented by the zero-sized [`Image::empty`] sentinel rather than an
//! error.

pub mod error;
pub mod types;

pub use error::ImageError;
pub use types::Image;

use voyage_base::Tensor;

/// Decodes an encoded photo (JPEG, PNG, ...) into an RGB [`Image`].
///
/// The format is auto-detected. Grayscale, alpha and 16-bit sources are
/// converted to 8-bit RGB.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is empty, truncated or in an
/// unsupported format.
pub fn decode_image(data: &[u8]) -> Result<Image, ImageError> {
    if data.is_empty() {
        return Err(ImageError::Decode("empty buffer".to_string()));
    }

    let rgb = image::load_from_memory(data)?.into_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::Decode(format!(
            "image has no pixels ({}x{})",
            width, height
        )));
    }

    let pixels = Tensor::new(vec![height as usize, width as usize, 3], rgb.into_raw())?;
    Ok(Image::from_tensor(pixels))
}

/// Like [`decode_image`], but degrades any failure to [`Image::empty`].
pub fn decode_or_empty(data: &[u8]) -> Image {
    decode_image(data).unwrap_or_else(|_| Image::empty())
}
