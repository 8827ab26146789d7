use super::*;

use crate::composition::params::OutputSize;

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn reference_layout_matches_the_authored_metrics() {
    let l = FrameLayout::for_size(OutputSize::Px1200);
    assert_eq!(l.output_size, 1200);
    assert!(approx(l.scale, 1.0, 1e-12));

    // Card inset by the 30px shadow gutter.
    assert!(approx(l.card.x0, 30.0, 1e-9));
    assert!(approx(l.card.width(), 1140.0, 1e-9));
    assert!(approx(l.content_scale, 1140.0 / 1200.0, 1e-12));

    // Photo inset by 60 content-scaled pixels, 4:3.
    assert!(approx(l.photo.x0, 30.0 + 57.0, 1e-9));
    assert!(approx(l.photo.width(), 1140.0 - 114.0, 1e-9));
    assert!(approx(l.photo.width() * 3.0 / 4.0, l.photo.height(), 1e-9));

    assert!(approx(l.card_shadow.blur_px, 15.0, 1e-9));
    assert!(approx(l.card_shadow.offset_y, 10.0, 1e-9));
    assert!(approx(l.photo_shadow.blur_px, 8.0 * l.content_scale, 1e-9));
    assert!(approx(l.photo_shadow.offset_y, 4.0 * l.content_scale, 1e-9));

    assert!(approx(l.subtitle.font_px, 48.0 * l.content_scale, 1e-9));
    assert!(approx(l.title.font_px, 62.0 * l.content_scale, 1e-9));
    assert!(approx(l.copyright.font_px, 20.0 * l.content_scale, 1e-9));
}

#[test]
fn photo_sits_centered_inside_the_card() {
    for size in OutputSize::ALL {
        let l = FrameLayout::for_size(size);
        let left = l.photo.x0 - l.card.x0;
        let right = l.card.x1 - l.photo.x1;
        assert!(approx(left, right, 1e-9), "size {}", size.px());
    }
}

#[test]
fn captions_stack_inside_the_card_with_title_midway() {
    for size in OutputSize::ALL {
        let l = FrameLayout::for_size(size);
        assert!(l.photo.y1 < l.subtitle.center.y);
        assert!(l.subtitle.center.y < l.title.center.y);
        assert!(l.title.center.y < l.copyright.center.y);
        assert!(l.copyright.center.y < l.card.y1);
        assert!(approx(
            l.title.center.y,
            (l.subtitle.center.y + l.copyright.center.y) / 2.0,
            1e-9
        ));
        assert!(approx(l.subtitle.center.x, l.card.center().x, 1e-9));
    }
}

#[test]
fn every_metric_scales_linearly_with_output_size() {
    let base = FrameLayout::for_size(OutputSize::Px1200);
    for size in [OutputSize::Px400, OutputSize::Px800] {
        let l = FrameLayout::for_size(size);
        let k = f64::from(size.px()) / 1200.0;
        let pairs = [
            (l.card.x0, base.card.x0),
            (l.card.width(), base.card.width()),
            (l.photo.x0, base.photo.x0),
            (l.photo.y0, base.photo.y0),
            (l.photo.width(), base.photo.width()),
            (l.photo.height(), base.photo.height()),
            (l.card_shadow.blur_px, base.card_shadow.blur_px),
            (l.card_shadow.offset_y, base.card_shadow.offset_y),
            (l.photo_shadow.blur_px, base.photo_shadow.blur_px),
            (l.photo_shadow.offset_y, base.photo_shadow.offset_y),
            (l.subtitle.center.x, base.subtitle.center.x),
            (l.subtitle.center.y, base.subtitle.center.y),
            (l.title.center.y, base.title.center.y),
            (l.copyright.center.y, base.copyright.center.y),
            (l.subtitle.font_px, base.subtitle.font_px),
            (l.title.font_px, base.title.font_px),
            (l.copyright.font_px, base.copyright.font_px),
        ];
        for (scaled, reference) in pairs {
            assert!(
                approx(scaled, reference * k, 1e-6),
                "size {}: {scaled} != {reference} * {k}",
                size.px()
            );
        }
    }
}
