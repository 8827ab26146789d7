use std::sync::Arc;

use crate::assets::decode::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place};
use crate::assets::font::{PreparedFont, TextBrushRgba8, TextLayoutEngine};
use crate::composition::params::FrameParams;
use crate::foundation::core::{Canvas, Rgba8Premul};
use crate::foundation::error::{FrameError, FrameResult};
use crate::normalize::NormalizedPhoto;
use crate::render::blur::blur_coverage;
use crate::render::layout::{
    BACKGROUND_RGBA, CARD_RGBA, COPYRIGHT_RGBA, COPYRIGHT_TEXT, FrameLayout, SHADOW_RGBA,
    ShadowSpec, SUBTITLE_RGBA, TextAnchor,
};

/// Readback of one composed output canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Convert to straight alpha for encoders that expect it.
    pub fn into_straight_alpha(mut self) -> FrameRGBA {
        if self.premultiplied {
            unpremultiply_rgba8_in_place(&mut self.data);
            self.premultiplied = false;
        }
        self
    }
}

/// Single-frame compositor: photo, card, shadows, and caption text onto a
/// square output canvas.
///
/// Holds no per-render state; every [`Compositor::compose`] builds the
/// canvas from scratch. Input IO (photo decode, font load) happens before
/// this layer, so composition itself is pure and deterministic.
pub struct Compositor {
    text_engine: TextLayoutEngine,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    pub fn new() -> Self {
        Self {
            text_engine: TextLayoutEngine::new(),
        }
    }

    /// Compose one output canvas from a normalized photo and parameters.
    #[tracing::instrument(skip_all, fields(size = params.output_size.px(), format = ?params.output_format))]
    pub fn compose(
        &mut self,
        photo: &NormalizedPhoto,
        params: &FrameParams,
        font: &PreparedFont,
    ) -> FrameResult<FrameRGBA> {
        let layout = FrameLayout::for_size(params.output_size);
        let canvas = Canvas::square(layout.output_size)?;
        let side = canvas.width;
        let side_u16: u16 = side
            .try_into()
            .map_err(|_| FrameError::render("output side exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(side_u16, side_u16);
        let font_data =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(font.bytes().to_vec()), 0);

        // Formats without an alpha channel get an opaque page background.
        if !params.output_format.supports_alpha() {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(color_from_straight(BACKGROUND_RGBA));
            ctx.fill_rect(&full_canvas_rect(side));
        }

        draw_shadow(&mut ctx, side, &layout.card, layout.card_shadow)?;

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_from_straight(CARD_RGBA));
        ctx.fill_rect(&rect_to_cpu(&layout.card));

        draw_shadow(&mut ctx, side, &layout.photo, layout.photo_shadow)?;
        draw_photo(&mut ctx, photo, &layout)?;

        self.draw_caption(
            &mut ctx,
            &params.subtitle,
            font,
            &font_data,
            layout.subtitle,
            SUBTITLE_RGBA,
        )?;
        self.draw_caption(
            &mut ctx,
            &params.title,
            font,
            &font_data,
            layout.title,
            params.title_color.rgba8(),
        )?;
        self.draw_caption(
            &mut ctx,
            COPYRIGHT_TEXT,
            font,
            &font_data,
            layout.copyright,
            COPYRIGHT_RGBA,
        )?;

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(side_u16, side_u16);
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn draw_caption(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        font: &PreparedFont,
        font_data: &vello_cpu::peniko::FontData,
        anchor: TextAnchor,
        color_rgba8: [u8; 4],
    ) -> FrameResult<()> {
        if text.is_empty() {
            return Ok(());
        }

        let layout = self.text_engine.layout_plain(
            text,
            font,
            anchor.font_px as f32,
            TextBrushRgba8::from_rgba8(color_rgba8),
        )?;

        // Center-aligned with a middle vertical anchor: offset the layout
        // box so its center lands on the anchor point.
        let tx = anchor.center.x - f64::from(layout.width()) / 2.0;
        let ty = anchor.center.y - f64::from(layout.height()) / 2.0;
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((tx, ty)));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(font_data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }

        Ok(())
    }
}

fn draw_photo(
    ctx: &mut vello_cpu::RenderContext,
    photo: &NormalizedPhoto,
    layout: &FrameLayout,
) -> FrameResult<()> {
    let rgba = photo.as_rgba();
    let mut bytes = rgba.as_raw().clone();
    premultiply_rgba8_in_place(&mut bytes);
    let paint = rgba_premul_to_image(&bytes, rgba.width(), rgba.height())?;

    let sx = layout.photo.width() / f64::from(rgba.width());
    let sy = layout.photo.height() / f64::from(rgba.height());
    let tr = kurbo::Affine::translate((layout.photo.x0, layout.photo.y0))
        * kurbo::Affine::scale_non_uniform(sx, sy);

    ctx.set_transform(affine_to_cpu(tr));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(rgba.width()),
        f64::from(rgba.height()),
    ));
    Ok(())
}

/// Rasterize a rect silhouette offset downward, blur its coverage, tint
/// it with the shadow ink, and lay it under whatever draws next.
fn draw_shadow(
    ctx: &mut vello_cpu::RenderContext,
    side: u32,
    rect: &kurbo::Rect,
    spec: ShadowSpec,
) -> FrameResult<()> {
    let w = side as usize;
    let mut coverage = vec![0u8; w * w];

    let clamp_px = |v: f64| -> usize { v.round().clamp(0.0, side as f64) as usize };
    let x0 = clamp_px(rect.x0);
    let x1 = clamp_px(rect.x1);
    let y0 = clamp_px(rect.y0 + spec.offset_y);
    let y1 = clamp_px(rect.y1 + spec.offset_y);
    for row in coverage.chunks_exact_mut(w).take(y1).skip(y0) {
        row[x0..x1].fill(255);
    }

    // Canvas-style shadowBlur maps to roughly half the blur as sigma.
    let radius = spec.blur_px.max(0.0).ceil() as u32;
    let sigma = (spec.blur_px * 0.5) as f32;
    let blurred = blur_coverage(&coverage, side, side, radius, sigma)?;

    let ink_alpha = u16::from(SHADOW_RGBA[3]);
    let mut bytes = Vec::with_capacity(w * w * 4);
    for &c in &blurred {
        let a = (((ink_alpha * u16::from(c)) + 127) / 255) as u8;
        let px = Rgba8Premul::from_straight_rgba(SHADOW_RGBA[0], SHADOW_RGBA[1], SHADOW_RGBA[2], a);
        bytes.extend_from_slice(&[px.r, px.g, px.b, px.a]);
    }
    let paint = rgba_premul_to_image(&bytes, side, side)?;

    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(paint);
    ctx.fill_rect(&full_canvas_rect(side));
    Ok(())
}

fn color_from_straight(rgba: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn full_canvas_rect(side: u32) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(side), f64::from(side))
}

fn rect_to_cpu(r: &kurbo::Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> FrameResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| FrameError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| FrameError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(FrameError::render("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let mut pixels = Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(
        (width as usize) * (height as usize),
    );
    for px in bytes.chunks_exact(4) {
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels, w, h, true,
    ))
}

fn rgba_premul_to_image(bytes_premul: &[u8], width: u32, height: u32) -> FrameResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, width, height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
