use crate::foundation::error::{FrameError, FrameResult};

/// Width of the normalized 4:3 base bitmap.
pub const BASE_PHOTO_WIDTH: u32 = 1200;
/// Height of the normalized 4:3 base bitmap.
pub const BASE_PHOTO_HEIGHT: u32 = 900;

/// Centered crop region in source pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Compute the largest centered 4:3 rectangle inside a source bitmap.
///
/// Sources wider than 4:3 keep their full height and crop the sides;
/// sources at or below 4:3 keep their full width and crop top/bottom.
/// Fractional edges round to the nearest pixel, splitting the remainder
/// by integer halving so the region stays centered.
pub fn center_crop_rect(width: u32, height: u32) -> FrameResult<CropRect> {
    if width == 0 || height == 0 {
        return Err(FrameError::validation("source dimensions must be > 0"));
    }

    // 4:3 comparison via cross-multiplication, exact in integers.
    if 3 * u64::from(width) > 4 * u64::from(height) {
        let crop_width = ((f64::from(height) * 4.0 / 3.0).round() as u32).min(width);
        Ok(CropRect {
            x: (width - crop_width) / 2,
            y: 0,
            width: crop_width,
            height,
        })
    } else {
        let crop_height = ((f64::from(width) * 3.0 / 4.0).round() as u32).min(height);
        Ok(CropRect {
            x: 0,
            y: (height - crop_height) / 2,
            width,
            height: crop_height,
        })
    }
}

/// The user's photo after fixed-ratio center-crop and resize.
///
/// Invariant: exactly `BASE_PHOTO_WIDTH x BASE_PHOTO_HEIGHT` (4:3).
#[derive(Clone, Debug)]
pub struct NormalizedPhoto {
    rgba: image::RgbaImage,
}

impl NormalizedPhoto {
    fn from_base_rgba(rgba: image::RgbaImage) -> FrameResult<Self> {
        if rgba.dimensions() != (BASE_PHOTO_WIDTH, BASE_PHOTO_HEIGHT) {
            return Err(FrameError::validation(format!(
                "normalized photo must be {BASE_PHOTO_WIDTH}x{BASE_PHOTO_HEIGHT}, got {}x{}",
                rgba.width(),
                rgba.height()
            )));
        }
        Ok(Self { rgba })
    }

    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    pub fn as_rgba(&self) -> &image::RgbaImage {
        &self.rgba
    }

    pub fn into_rgba(self) -> image::RgbaImage {
        self.rgba
    }
}

/// Center-crop a decoded photo to 4:3 and resample it into the fixed
/// base bitmap. The source is not retained.
pub fn normalize_photo(src: &image::RgbaImage) -> FrameResult<NormalizedPhoto> {
    let crop = center_crop_rect(src.width(), src.height())?;
    let cropped =
        image::imageops::crop_imm(src, crop.x, crop.y, crop.width, crop.height).to_image();
    let resized = image::imageops::resize(
        &cropped,
        BASE_PHOTO_WIDTH,
        BASE_PHOTO_HEIGHT,
        image::imageops::FilterType::CatmullRom,
    );
    NormalizedPhoto::from_base_rgba(resized)
}

#[cfg(test)]
#[path = "../tests/unit/normalize.rs"]
mod tests;
