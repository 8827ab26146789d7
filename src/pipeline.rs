use std::path::{Path, PathBuf};

use crate::assets::decode::decode_photo;
use crate::assets::font::PreparedFont;
use crate::composition::params::FrameParams;
use crate::encode::{encode_frame, export_file_name, write_export};
use crate::foundation::error::FrameResult;
use crate::normalize::{NormalizedPhoto, normalize_photo};
use crate::render::compositor::{Compositor, FrameRGBA};

/// Summary of one completed export.
#[derive(Clone, Debug)]
pub struct Export {
    /// Path of the written file.
    pub path: PathBuf,
    /// `<fileName>.<ext>` the file was written as.
    pub file_name: String,
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Encoded size in bytes.
    pub bytes_written: usize,
}

/// Decode and normalize an uploaded photo (the preview flow).
#[tracing::instrument(skip_all)]
pub fn render_preview(photo_bytes: &[u8]) -> FrameResult<NormalizedPhoto> {
    let src = decode_photo(photo_bytes)?;
    normalize_photo(&src)
}

/// Run the pipeline up to the composed canvas, without encoding.
#[tracing::instrument(skip_all, fields(size = params.output_size.px()))]
pub fn render_frame(
    photo_bytes: &[u8],
    params: &FrameParams,
    font: &PreparedFont,
) -> FrameResult<FrameRGBA> {
    let src = decode_photo(photo_bytes)?;
    let photo = normalize_photo(&src)?;
    let mut compositor = Compositor::new();
    compositor.compose(&photo, params, font)
}

/// Full pipeline: sniff, decode, normalize, compose, encode, write.
#[tracing::instrument(skip_all, fields(out_dir = %out_dir.display()))]
pub fn render_export(
    photo_bytes: &[u8],
    params: &FrameParams,
    font: &PreparedFont,
    out_dir: &Path,
) -> FrameResult<Export> {
    let frame = render_frame(photo_bytes, params, font)?;
    let (width, height) = (frame.width, frame.height);
    let bytes = encode_frame(frame, params.output_format)?;
    let file_name = export_file_name(params);
    let path = write_export(out_dir, &file_name, &bytes)?;

    Ok(Export {
        path,
        file_name,
        width,
        height,
        bytes_written: bytes.len(),
    })
}
