use super::*;

#[test]
fn sanitize_collapses_whitespace_to_underscores() {
    assert_eq!(sanitize_title("우리집 도서관"), "우리집_도서관");
    assert_eq!(sanitize_title("a  b\tc"), "a_b_c");
    assert_eq!(sanitize_title("  hi  there  "), "_hi_there_");
}

#[test]
fn sanitize_replaces_reserved_characters() {
    assert_eq!(
        sanitize_title("a\\b/c?d%e*f:g|h\"i<j>k.l"),
        "a_b_c_d_e_f_g_h_i_j_k_l"
    );
    // A reserved char and an adjacent space each contribute their own '_'.
    assert_eq!(sanitize_title("a? b"), "a__b");
}

#[test]
fn sanitize_empty_title_falls_back() {
    assert_eq!(sanitize_title(""), "image");
    assert_eq!(sanitize_title("..."), "___");
}

#[test]
fn file_name_follows_title_until_manually_edited() {
    let mut params = FrameParams::default();
    assert_eq!(params.file_name(), "우리집_도서관");

    params.title = "Summer Album".to_string();
    assert_eq!(params.file_name(), "Summer_Album");

    params.set_file_name("holiday");
    params.title = "Winter Album".to_string();
    assert_eq!(params.file_name(), "holiday");

    params.reset_file_name();
    assert_eq!(params.file_name(), "Winter_Album");
}

#[test]
fn title_color_palette_is_fixed() {
    assert_eq!(TitleColor::ALL.len(), 5);
    assert_eq!(TitleColor::Orange.rgba8(), [0xf9, 0x73, 0x16, 0xff]);
    assert_eq!(TitleColor::Brown.rgba8(), [0x78, 0x35, 0x0f, 0xff]);
    assert_eq!(TitleColor::Navy.rgba8(), [0x1e, 0x3a, 0x8a, 0xff]);
    assert_eq!(TitleColor::Pink.rgba8(), [0xdb, 0x27, 0x77, 0xff]);
    assert_eq!(TitleColor::Black.rgba8(), [0x1f, 0x29, 0x37, 0xff]);
}

#[test]
fn title_color_parse_is_case_insensitive() {
    assert_eq!(TitleColor::parse("Navy").unwrap(), TitleColor::Navy);
    assert_eq!(TitleColor::parse(" pink ").unwrap(), TitleColor::Pink);
    assert!(matches!(
        TitleColor::parse("teal"),
        Err(FrameError::Validation(_))
    ));
}

#[test]
fn output_size_px_and_scale() {
    assert_eq!(OutputSize::Px400.px(), 400);
    assert_eq!(OutputSize::Px800.px(), 800);
    assert_eq!(OutputSize::Px1200.px(), 1200);
    assert!((OutputSize::Px400.scale() - 1.0 / 3.0).abs() < 1e-12);
    assert!((OutputSize::Px1200.scale() - 1.0).abs() < 1e-12);
}

#[test]
fn output_size_rejects_other_values() {
    assert!(OutputSize::try_from(400).is_ok());
    assert!(matches!(
        OutputSize::try_from(500),
        Err(FrameError::Validation(_))
    ));
    assert!(matches!(
        OutputSize::parse("huge"),
        Err(FrameError::Validation(_))
    ));
}

#[test]
fn output_format_surface() {
    assert_eq!(OutputFormat::Webp.extension(), "webp");
    assert_eq!(OutputFormat::Jpeg.extension(), "jpeg");
    assert_eq!(OutputFormat::Png.extension(), "png");
    assert_eq!(OutputFormat::Webp.mime(), "image/webp");
    assert!(OutputFormat::Png.supports_alpha());
    assert!(!OutputFormat::Webp.supports_alpha());
    assert!(!OutputFormat::Jpeg.supports_alpha());
    assert_eq!(OutputFormat::parse("jpg").unwrap(), OutputFormat::Jpeg);
    assert!(matches!(
        OutputFormat::parse("gif"),
        Err(FrameError::Validation(_))
    ));
}

#[test]
fn params_json_round_trip() {
    let mut params = FrameParams::default();
    params.set_file_name("pinned");
    let json = serde_json::to_string(&params).unwrap();
    let back = FrameParams::from_json(&json).unwrap();
    assert_eq!(back, params);
}

#[test]
fn params_json_accepts_numeric_size_and_defaults() {
    let json = r#"{
        "title": "우리집 도서관",
        "subtitle": "Reading Together, Growing Together",
        "output_size": 800,
        "output_format": "jpeg"
    }"#;
    let params = FrameParams::from_json(json).unwrap();
    assert_eq!(params.output_size, OutputSize::Px800);
    assert_eq!(params.output_format, OutputFormat::Jpeg);
    assert_eq!(params.title_color, TitleColor::Pink);
    assert_eq!(params.file_name, FileNameField::Derived);
}

#[test]
fn params_json_rejects_unknown_size() {
    let json = r#"{"title": "t", "subtitle": "s", "output_size": 999}"#;
    assert!(matches!(
        FrameParams::from_json(json),
        Err(FrameError::Serde(_))
    ));
}
