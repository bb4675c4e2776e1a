use super::core::{MaskIm, RGBAIm};
use image::ImageResult;
use std::path::Path;

fn dim_mismatch_err() -> image::ImageError {
    image::ImageError::Parameter(image::error::ParameterError::from_kind(
        image::error::ParameterErrorKind::DimensionMismatch,
    ))
}

// Decode
// -----------------------------------------------------------------------------
impl RGBAIm {
    /// Decode any supported image file into an RGBA8 raster.
    pub fn load<P: AsRef<Path>>(path: P) -> ImageResult<Self> {
        let img = image::open(path)?.into_rgba8();
        let w = img.width() as usize;
        let h = img.height() as usize;
        let arr = img.into_raw();

        if arr.len() != w * h * 4 {
            return Err(dim_mismatch_err());
        }

        Ok(Self { w, h, s: w * 4, arr })
    }
}

// Encode
// -----------------------------------------------------------------------------
impl MaskIm {
    /// Write the mask as a single-channel raster. Pixel values are raw class
    /// ids (0 = background); no colormap is embedded. The container format is
    /// inferred from the path's extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let img = image::GrayImage::from_raw(self.w as u32, self.h as u32, self.arr.clone())
            .ok_or_else(dim_mismatch_err)?;

        img.save(path)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> ImageResult<Self> {
        let img = image::open(path)?.into_luma8();
        let w = img.width() as usize;
        let h = img.height() as usize;
        let arr = img.into_raw();

        if arr.len() != w * h {
            return Err(dim_mismatch_err());
        }

        Ok(Self { w, h, s: w, arr })
    }
}

// Tests
// -----------------------------------------------------------------------------
