use crate::foundation::error::{FrameError, FrameResult};

/// Sniff the container format from magic bytes.
///
/// Anything `image` cannot recognize is reported as an invalid file type;
/// this is the "is it an image at all" gate in front of decoding.
pub fn sniff_image_format(bytes: &[u8]) -> FrameResult<image::ImageFormat> {
    image::guess_format(bytes)
        .map_err(|_| FrameError::invalid_file_type("input bytes are not a recognizable image"))
}

/// Decode an uploaded photo into straight-alpha RGBA8.
pub fn decode_photo(bytes: &[u8]) -> FrameResult<image::RgbaImage> {
    let format = sniff_image_format(bytes)?;
    let dyn_img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| FrameError::decode(format!("decode {format:?} image: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
