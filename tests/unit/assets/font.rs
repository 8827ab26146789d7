use super::*;

#[test]
fn garbage_bytes_are_not_a_font() {
    let err = PreparedFont::from_bytes(vec![0u8; 64]).unwrap_err();
    assert!(matches!(err, FrameError::Font(_)));
}

#[test]
fn missing_font_file_is_an_io_error() {
    let err = PreparedFont::from_path("/definitely/not/here.ttf").unwrap_err();
    assert!(matches!(err, FrameError::Io(_)));
}

#[test]
fn layout_rejects_non_positive_size() {
    // Needs a real font only past the size check, so probe the guard with
    // a discovered one when available.
    let Some(path) = find_system_font() else {
        eprintln!("skipping: no system font found");
        return;
    };
    let Ok(font) = PreparedFont::from_path(&path) else {
        eprintln!("skipping: system font at {} not loadable", path.display());
        return;
    };

    let mut engine = TextLayoutEngine::new();
    let err = engine
        .layout_plain("x", &font, 0.0, TextBrushRgba8::default())
        .map(|_| ())
        .unwrap_err();
    assert!(matches!(err, FrameError::Validation(_)));
}

#[test]
fn layout_measures_nonzero_extent_for_visible_text() {
    let Some(path) = find_system_font() else {
        eprintln!("skipping: no system font found");
        return;
    };
    let Ok(font) = PreparedFont::from_path(&path) else {
        eprintln!("skipping: system font at {} not loadable", path.display());
        return;
    };
    assert!(!font.family_name().is_empty());

    let mut engine = TextLayoutEngine::new();
    let brush = TextBrushRgba8::from_rgba8([10, 20, 30, 255]);
    let layout = engine.layout_plain("Ag", &font, 32.0, brush).unwrap();
    assert!(layout.width() > 0.0);
    assert!(layout.height() > 0.0);

    // Larger sizes produce larger extents.
    let bigger = engine.layout_plain("Ag", &font, 64.0, brush).unwrap();
    assert!(bigger.width() > layout.width());
    assert!(bigger.height() > layout.height());
}
