//! Paperframe composes an uploaded photo into a captioned square "paper
//! frame" and exports it as WebP, JPEG, or PNG.
//!
//! # Pipeline overview
//!
//! 1. **Normalize**: decoded photo -> largest centered 4:3 crop ->
//!    fixed 1200x900 base bitmap ([`normalize_photo`])
//! 2. **Compose**: base bitmap + [`FrameParams`] -> square output canvas
//!    with card, drop shadows, and three caption lines
//!    ([`Compositor::compose`]); every offset, padding, and font size
//!    scales linearly with `output_size / 1200`
//! 3. **Encode**: canvas -> webp/jpeg/png byte stream -> file named
//!    `<fileName>.<ext>` ([`encode_frame`], [`write_export`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: composition is pure for a given input; nothing is
//!   retained across renders.
//! - **No IO in the compositor**: photo bytes and the caption font are
//!   loaded and validated up front ([`PreparedFont`] is the explicit
//!   font-wait step), so rendering never falls back to a default
//!   typeface or touches the filesystem.
//! - **Premultiplied RGBA8** on the canvas; readback unpremultiplies for
//!   encoders.
#![forbid(unsafe_code)]

mod assets;
mod composition;
mod encode;
mod foundation;
mod normalize;
mod pipeline;
mod render;

pub use assets::decode::{decode_photo, sniff_image_format};
pub use assets::font::{PreparedFont, TextBrushRgba8, TextLayoutEngine, find_system_font};
pub use composition::params::{
    FileNameField, FrameParams, OutputFormat, OutputSize, REFERENCE_SIZE_PX, TitleColor,
    sanitize_title,
};
pub use encode::{JPEG_QUALITY, WEBP_QUALITY, encode_frame, export_file_name, write_export};
pub use foundation::core::{Canvas, Rgba8Premul};
pub use foundation::error::{FrameError, FrameResult};
pub use normalize::{
    BASE_PHOTO_HEIGHT, BASE_PHOTO_WIDTH, CropRect, NormalizedPhoto, center_crop_rect,
    normalize_photo,
};
pub use pipeline::{Export, render_export, render_frame, render_preview};
pub use render::blur::blur_coverage;
pub use render::compositor::{Compositor, FrameRGBA};
pub use render::layout::{
    BACKGROUND_RGBA, CARD_RGBA, COPYRIGHT_RGBA, COPYRIGHT_TEXT, FrameLayout, SHADOW_RGBA,
    ShadowSpec, SUBTITLE_RGBA, TextAnchor,
};
