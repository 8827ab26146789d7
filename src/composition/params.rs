use crate::foundation::error::{FrameError, FrameResult};

/// Reference output side in pixels; every layout metric is authored
/// against this base and scaled by `output_size / REFERENCE_SIZE_PX`.
pub const REFERENCE_SIZE_PX: u32 = 1200;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Title ink color, a fixed five-entry palette.
pub enum TitleColor {
    Orange,
    Brown,
    Navy,
    #[default]
    Pink,
    Black,
}

impl TitleColor {
    pub const ALL: [TitleColor; 5] = [
        TitleColor::Orange,
        TitleColor::Brown,
        TitleColor::Navy,
        TitleColor::Pink,
        TitleColor::Black,
    ];

    pub fn parse(input: &str) -> FrameResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "orange" => Ok(Self::Orange),
            "brown" => Ok(Self::Brown),
            "navy" => Ok(Self::Navy),
            "pink" => Ok(Self::Pink),
            "black" => Ok(Self::Black),
            other => Err(FrameError::validation(format!(
                "unknown title color '{other}'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Brown => "brown",
            Self::Navy => "navy",
            Self::Pink => "pink",
            Self::Black => "black",
        }
    }

    /// Straight (non-premultiplied) RGBA for this palette entry.
    pub fn rgba8(self) -> [u8; 4] {
        match self {
            Self::Orange => [0xf9, 0x73, 0x16, 0xff],
            Self::Brown => [0x78, 0x35, 0x0f, 0xff],
            Self::Navy => [0x1e, 0x3a, 0x8a, 0xff],
            Self::Pink => [0xdb, 0x27, 0x77, 0xff],
            Self::Black => [0x1f, 0x29, 0x37, 0xff],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u32", into = "u32")]
/// Output canvas side; one of three fixed pixel values.
pub enum OutputSize {
    Px400,
    Px800,
    #[default]
    Px1200,
}

impl OutputSize {
    pub const ALL: [OutputSize; 3] = [OutputSize::Px400, OutputSize::Px800, OutputSize::Px1200];

    pub fn px(self) -> u32 {
        match self {
            Self::Px400 => 400,
            Self::Px800 => 800,
            Self::Px1200 => 1200,
        }
    }

    /// Linear scale factor relative to the 1200px reference base.
    pub fn scale(self) -> f64 {
        f64::from(self.px()) / f64::from(REFERENCE_SIZE_PX)
    }

    pub fn parse(input: &str) -> FrameResult<Self> {
        let px: u32 = input
            .trim()
            .parse()
            .map_err(|_| FrameError::validation(format!("invalid output size '{input}'")))?;
        Self::try_from(px)
    }
}

impl TryFrom<u32> for OutputSize {
    type Error = FrameError;

    fn try_from(px: u32) -> Result<Self, Self::Error> {
        match px {
            400 => Ok(Self::Px400),
            800 => Ok(Self::Px800),
            1200 => Ok(Self::Px1200),
            other => Err(FrameError::validation(format!(
                "output size must be one of 400/800/1200, got {other}"
            ))),
        }
    }
}

impl From<OutputSize> for u32 {
    fn from(size: OutputSize) -> u32 {
        size.px()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Output encoding for the exported canvas.
pub enum OutputFormat {
    #[default]
    Webp,
    Jpeg,
    Png,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Webp, OutputFormat::Jpeg, OutputFormat::Png];

    pub fn parse(input: &str) -> FrameResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "webp" => Ok(Self::Webp),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            other => Err(FrameError::validation(format!(
                "unsupported output format: {other}"
            ))),
        }
    }

    /// File extension used for exports (`<name>.<extension>`).
    pub fn extension(self) -> &'static str {
        match self {
            Self::Webp => "webp",
            Self::Jpeg => "jpeg",
            Self::Png => "png",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Webp => "image/webp",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// Whether the container keeps an alpha channel. Formats without one
    /// get an opaque background fill before compositing.
    pub fn supports_alpha(self) -> bool {
        matches!(self, Self::Png)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Export file name state.
///
/// `Derived` follows the sanitized title; `Manual` pins the name so later
/// title edits no longer affect it.
pub enum FileNameField {
    #[default]
    Derived,
    Manual(String),
}

/// Full set of user-configurable rendering inputs for one export.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameParams {
    /// Center caption line, drawn in the palette color.
    pub title: String,
    /// Upper caption line.
    pub subtitle: String,
    #[serde(default)]
    pub title_color: TitleColor,
    #[serde(default)]
    pub output_size: OutputSize,
    #[serde(default)]
    pub output_format: OutputFormat,
    #[serde(default)]
    pub file_name: FileNameField,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            title: "우리집 도서관".to_string(),
            subtitle: "Reading Together, Growing Together".to_string(),
            title_color: TitleColor::default(),
            output_size: OutputSize::default(),
            output_format: OutputFormat::default(),
            file_name: FileNameField::default(),
        }
    }
}

impl FrameParams {
    /// Effective export file name (without extension): the manual override
    /// when set, otherwise the sanitized title.
    pub fn file_name(&self) -> String {
        match &self.file_name {
            FileNameField::Derived => sanitize_title(&self.title),
            FileNameField::Manual(name) => name.clone(),
        }
    }

    /// Pin the file name; subsequent title edits no longer affect it.
    pub fn set_file_name(&mut self, name: impl Into<String>) {
        self.file_name = FileNameField::Manual(name.into());
    }

    /// Return the file name to title-derived behavior.
    pub fn reset_file_name(&mut self) {
        self.file_name = FileNameField::Derived;
    }

    pub fn from_json(json: &str) -> FrameResult<Self> {
        serde_json::from_str(json).map_err(|e| FrameError::serde(format!("parse frame params: {e}")))
    }
}

/// Derive a file-system-safe name from a caption title.
///
/// Reserved characters (`\/?%*:|"<>.`) become `_`, then whitespace runs
/// collapse to a single `_`. An empty title falls back to `image`.
pub fn sanitize_title(title: &str) -> String {
    const RESERVED: &[char] = &['\\', '/', '?', '%', '*', ':', '|', '"', '<', '>', '.'];

    let replaced: String = title
        .chars()
        .map(|c| if RESERVED.contains(&c) { '_' } else { c })
        .collect();

    let mut out = String::with_capacity(replaced.len());
    let mut in_whitespace = false;
    for c in replaced.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }

    if out.is_empty() {
        "image".to_string()
    } else {
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/params.rs"]
mod tests;
