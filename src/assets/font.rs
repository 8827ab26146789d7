use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::error::{FrameError, FrameResult};

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl TextBrushRgba8 {
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        }
    }
}

/// A caption font, fully loaded and registered before any text draw.
///
/// Construction is the explicit font-wait step: it reads the bytes and
/// resolves the primary family name, so composition never falls back to
/// an unintended typeface mid-render.
#[derive(Clone)]
pub struct PreparedFont {
    bytes: Arc<Vec<u8>>,
    family_name: String,
}

impl std::fmt::Debug for PreparedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedFont")
            .field("bytes_len", &self.bytes.len())
            .field("family_name", &self.family_name)
            .finish()
    }
}

impl PreparedFont {
    pub fn from_bytes(bytes: Vec<u8>) -> FrameResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| FrameError::font("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| FrameError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            bytes: Arc::new(bytes),
            family_name,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> FrameResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| FrameError::io(format!("read font '{}': {e}", path.display())))?;
        Self::from_bytes(bytes)
    }

    pub fn bytes(&self) -> &Arc<Vec<u8>> {
        &self.bytes
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }
}

/// Locate a usable font file in the usual system font directories.
///
/// Used by the CLI as a fallback when no explicit font is given, and by
/// tests so they can skip cleanly on fontless machines.
pub fn find_system_font() -> Option<PathBuf> {
    const ROOTS: &[&str] = &[
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ];

    for root in ROOTS {
        if let Some(found) = find_font_in_dir(Path::new(root), 3) {
            return Some(found);
        }
    }
    None
}

fn find_font_in_dir(dir: &Path, depth: u32) -> Option<PathBuf> {
    let rd = std::fs::read_dir(dir).ok()?;

    let mut entries: Vec<PathBuf> = rd.flatten().map(|e| e.path()).collect();
    entries.sort();

    let mut subdirs = Vec::new();
    for path in entries {
        if path.is_dir() {
            subdirs.push(path);
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext == "ttf" || ext == "otf" || ext == "ttc" {
            return Some(path);
        }
    }

    if depth == 0 {
        return None;
    }
    for sub in subdirs {
        if let Some(found) = find_font_in_dir(&sub, depth - 1) {
            return Some(found);
        }
    }
    None
}

/// Stateful helper for building Parley text layouts from a prepared font.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape and lay out a single caption line.
    ///
    /// Captions are never wrapped; the caller centers the measured layout.
    pub fn layout_plain(
        &mut self,
        text: &str,
        font: &PreparedFont,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> FrameResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(FrameError::validation("text size_px must be finite and > 0"));
        }

        self.font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes().to_vec()), None);

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(
                font.family_name().to_string(),
            )),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);

        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
