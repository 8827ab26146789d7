use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageEncoder;

use crate::composition::params::{FrameParams, OutputFormat};
use crate::foundation::error::{FrameError, FrameResult};
use crate::render::compositor::FrameRGBA;

/// Fixed JPEG quality for exports.
pub const JPEG_QUALITY: u8 = 92;
/// Fixed lossy-grade quality applied to WebP exports via RGB quantization.
pub const WEBP_QUALITY: u8 = 80;

/// Serialize a composed canvas into the requested encoding.
///
/// Encoding is entirely in-memory; a failure here produces no bytes, so
/// no partial file can ever reach disk.
pub fn encode_frame(frame: FrameRGBA, format: OutputFormat) -> FrameResult<Vec<u8>> {
    let frame = frame.into_straight_alpha();
    let (width, height) = (frame.width, frame.height);
    let rgba = image::RgbaImage::from_raw(width, height, frame.data)
        .ok_or_else(|| FrameError::encode("frame buffer does not match its dimensions"))?;

    let mut buffer = Vec::new();
    match format {
        OutputFormat::Jpeg => {
            let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
            let mut enc = image::codecs::jpeg::JpegEncoder::new_with_quality(
                Cursor::new(&mut buffer),
                JPEG_QUALITY,
            );
            enc.encode(
                rgb.as_raw(),
                width,
                height,
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| FrameError::encode(format!("encode jpeg: {e}")))?;
        }
        OutputFormat::Png => {
            let enc = image::codecs::png::PngEncoder::new(Cursor::new(&mut buffer));
            enc.write_image(
                rgba.as_raw(),
                width,
                height,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| FrameError::encode(format!("encode png: {e}")))?;
        }
        OutputFormat::Webp => {
            // Stay pure-Rust: quantize RGB toward a coarser palette for
            // lossy-grade sizes, then run the lossless encoder.
            let mut rgba = rgba;
            quantize_rgb_for_webp(rgba.as_mut(), WEBP_QUALITY);
            let enc = image::codecs::webp::WebPEncoder::new_lossless(Cursor::new(&mut buffer));
            enc.encode(
                rgba.as_raw(),
                width,
                height,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| FrameError::encode(format!("encode webp: {e}")))?;
        }
    }
    Ok(buffer)
}

/// `<fileName>.<ext>` for the current parameters.
pub fn export_file_name(params: &FrameParams) -> String {
    format!("{}.{}", params.file_name(), params.output_format.extension())
}

/// Write fully encoded bytes under `dir`, creating it if needed.
pub fn write_export(dir: &Path, file_name: &str, bytes: &[u8]) -> FrameResult<PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|e| FrameError::io(format!("create output dir '{}': {e}", dir.display())))?;
    let path = dir.join(file_name);
    std::fs::write(&path, bytes)
        .map_err(|e| FrameError::io(format!("write export '{}': {e}", path.display())))?;
    Ok(path)
}

/// Map a quality slider to a reduced RGB palette in place. Alpha is left
/// untouched so transparency stays crisp while color detail becomes more
/// compressible for the lossless encoder.
fn quantize_rgb_for_webp(data: &mut [u8], quality: u8) {
    if quality >= 100 {
        return;
    }
    let levels = webp_levels_from_quality(quality);
    let step = 255.0 / (levels as f32 - 1.0);
    for pixel in data.chunks_exact_mut(4) {
        for channel in pixel.iter_mut().take(3) {
            let value = f32::from(*channel);
            let bucket = (value / step).round();
            *channel = (bucket * step).round().clamp(0.0, 255.0) as u8;
        }
    }
}

/// Bias the bucket count toward finer palettes at high quality while
/// keeping very low qualities aggressively coarse.
fn webp_levels_from_quality(quality: u8) -> u16 {
    if quality >= 100 {
        return 256;
    }
    let normalized = (quality as f32).clamp(1.0, 100.0) / 100.0;
    let levels = 2.0 + normalized * normalized * 254.0;
    levels.round().clamp(2.0, 256.0) as u16
}

#[cfg(test)]
#[path = "../tests/unit/encode.rs"]
mod tests;
