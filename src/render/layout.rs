use kurbo::{Point, Rect};

use crate::composition::params::{OutputSize, REFERENCE_SIZE_PX};

/// Canvas background behind the card, used only for formats without an
/// alpha channel.
pub const BACKGROUND_RGBA: [u8; 4] = [0xf9, 0xfa, 0xfb, 0xff];
/// Paper card fill.
pub const CARD_RGBA: [u8; 4] = [0xff, 0xfb, 0xeb, 0xff];
/// Subtitle ink.
pub const SUBTITLE_RGBA: [u8; 4] = [0x33, 0x33, 0x33, 0xff];
/// Copyright caption ink.
pub const COPYRIGHT_RGBA: [u8; 4] = [0x6b, 0x72, 0x80, 0xff];
/// Drop shadow ink (10% black).
pub const SHADOW_RGBA: [u8; 4] = [0x00, 0x00, 0x00, 0x1a];

/// Fixed caption under the title block.
pub const COPYRIGHT_TEXT: &str = "COPYRIGHT © 우리집도서관";

/// A soft drop shadow: gaussian blur radius and vertical offset, both in
/// output pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowSpec {
    pub blur_px: f64,
    pub offset_y: f64,
}

/// Horizontal center anchor and font size for one caption line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextAnchor {
    /// Center of the line in canvas coordinates (middle baseline).
    pub center: Point,
    pub font_px: f64,
}

/// Every scaled metric of the composed frame, precomputed for one output
/// size.
///
/// All values derive linearly from the 1200px reference base: the card is
/// inset by a shadow gutter, the photo is inset again inside the card,
/// and the three caption anchors divide the space left under the photo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLayout {
    pub output_size: u32,
    /// `output_size / 1200`.
    pub scale: f64,
    /// `card_size / 1200`; content metrics use this.
    pub content_scale: f64,
    pub card: Rect,
    pub card_shadow: ShadowSpec,
    pub photo: Rect,
    pub photo_shadow: ShadowSpec,
    pub subtitle: TextAnchor,
    pub title: TextAnchor,
    pub copyright: TextAnchor,
}

impl FrameLayout {
    pub fn for_size(size: OutputSize) -> Self {
        let output_size = size.px();
        let side = f64::from(output_size);
        let scale = side / f64::from(REFERENCE_SIZE_PX);

        let shadow_padding = 30.0 * scale;
        let card_size = side - shadow_padding * 2.0;
        let card = Rect::new(
            shadow_padding,
            shadow_padding,
            shadow_padding + card_size,
            shadow_padding + card_size,
        );
        let card_shadow = ShadowSpec {
            blur_px: 15.0 * scale,
            offset_y: 10.0 * scale,
        };

        let content_scale = card_size / f64::from(REFERENCE_SIZE_PX);
        let padding = 60.0 * content_scale;
        let photo_width = card_size - padding * 2.0;
        let photo_height = photo_width * 3.0 / 4.0;
        let photo = Rect::new(
            card.x0 + padding,
            card.y0 + padding,
            card.x0 + padding + photo_width,
            card.y0 + padding + photo_height,
        );
        let photo_shadow = ShadowSpec {
            blur_px: 8.0 * content_scale,
            offset_y: 4.0 * content_scale,
        };

        // Caption anchors, in card-local y first: the subtitle sits 35%
        // into the space below the photo, the copyright line hugs the
        // bottom edge, and the title splits the distance between them.
        let text_start_y = padding + photo_height;
        let remaining = card_size - text_start_y;
        let subtitle_y = text_start_y + remaining * 0.35;
        let copyright_y = card_size - 25.0 * content_scale;
        let title_y = subtitle_y + (copyright_y - subtitle_y) / 2.0;

        let center_x = card.x0 + card_size / 2.0;
        let subtitle = TextAnchor {
            center: Point::new(center_x, card.y0 + subtitle_y),
            font_px: 48.0 * content_scale,
        };
        let title = TextAnchor {
            center: Point::new(center_x, card.y0 + title_y),
            font_px: 62.0 * content_scale,
        };
        let copyright = TextAnchor {
            center: Point::new(center_x, card.y0 + copyright_y),
            font_px: 20.0 * content_scale,
        };

        Self {
            output_size,
            scale,
            content_scale,
            card,
            card_shadow,
            photo,
            photo_shadow,
            subtitle,
            title,
            copyright,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layout.rs"]
mod tests;
