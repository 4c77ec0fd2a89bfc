//! End-to-end decoding with the resvg engine

use svg_decode::{DecodeOptions, Error, ParseErrorKind};

const RED_SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
    <rect width="100" height="100" fill="red"/>
</svg>"#;

const BLUE_SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
    <rect width="100" height="100" fill="blue"/>
</svg>"#;

const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

fn no_fonts() -> DecodeOptions {
    DecodeOptions {
        load_fonts: false,
        ..Default::default()
    }
}

#[test]
fn decode_intrinsic_size() {
    let img = svg_decode::decode(RED_SQUARE, &no_fonts()).unwrap();
    assert_eq!((img.width, img.height), (100, 100));
    assert_eq!(img.data.len(), 100 * 100 * 4);
    assert_eq!(img.pixel(50, 50), Some([255, 0, 0, 255]));
}

#[test]
fn decode_with_width_scales_up() {
    let opts = DecodeOptions {
        width: Some(200.0),
        ..no_fonts()
    };
    let img = svg_decode::decode(RED_SQUARE, &opts).unwrap();
    assert_eq!((img.width, img.height), (200, 200));
    assert_eq!(img.data.len(), 200 * 200 * 4);
    assert_eq!(img.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(img.pixel(199, 199), Some([255, 0, 0, 255]));
}

#[test]
fn decode_with_height_keeps_aspect_ratio() {
    let wide = r#"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="100"/>"#;
    let opts = DecodeOptions {
        height: Some(50.0),
        ..no_fonts()
    };
    let img = svg_decode::decode(wide, &opts).unwrap();
    assert_eq!((img.width, img.height), (150, 50));
}

#[test]
fn stretched_box_letterboxes_content() {
    let opts = DecodeOptions {
        width: Some(300.0),
        height: Some(100.0),
        ..no_fonts()
    };
    let img = svg_decode::decode(BLUE_SQUARE, &opts).unwrap();
    assert_eq!((img.width, img.height), (300, 100));

    // content is 100x100 centered with 100px margins left and right
    assert_eq!(img.pixel(50, 50), Some(TRANSPARENT));
    assert_eq!(img.pixel(150, 50), Some([0, 0, 255, 255]));
    assert_eq!(img.pixel(250, 50), Some(TRANSPARENT));
}

#[test]
fn unpainted_pixels_are_transparent() {
    let dot = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
        <rect x="4" y="4" width="2" height="2" fill="black"/>
    </svg>"#;
    let img = svg_decode::decode(dot, &no_fonts()).unwrap();
    assert_eq!(img.pixel(0, 0), Some(TRANSPARENT));
    assert_eq!(img.pixel(9, 9), Some(TRANSPARENT));
    assert_eq!(img.pixel(4, 4), Some([0, 0, 0, 255]));
}

#[test]
fn decode_bytes_input() {
    let img = svg_decode::decode(RED_SQUARE.as_bytes(), &no_fonts()).unwrap();
    assert_eq!((img.width, img.height), (100, 100));
}

#[test]
fn viewbox_only_document_uses_viewbox_size() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 50 25"/>"#;
    let img = svg_decode::decode(svg, &no_fonts()).unwrap();
    assert_eq!((img.width, img.height), (50, 25));
}

#[test]
fn dpi_controls_absolute_units() {
    let inch = r#"<svg xmlns="http://www.w3.org/2000/svg" width="1in" height="1in"/>"#;
    let img = svg_decode::decode(inch, &no_fonts()).unwrap();
    assert_eq!((img.width, img.height), (96, 96));

    let opts = DecodeOptions {
        dpi: 192.0,
        ..no_fonts()
    };
    let img = svg_decode::decode(inch, &opts).unwrap();
    assert_eq!((img.width, img.height), (192, 192));
}

#[test]
fn decode_with_system_fonts() {
    let svg = include_str!("fixtures/sample_text.svg");
    let img = svg_decode::decode(svg, &DecodeOptions::default()).unwrap();
    assert_eq!((img.width, img.height), (200, 50));
}

#[test]
fn invalid_utf8_is_reported() {
    let err = svg_decode::decode(&[0x3c, 0x73, 0xff, 0xfe][..], &no_fonts()).unwrap_err();
    assert_eq!(err.parse_kind(), Some(ParseErrorKind::NotUtf8));
    assert_eq!(err.to_string(), "SVG data is not valid UTF-8");
}

#[test]
fn garbage_input_fails_to_parse() {
    for input in ["", "hello world", "<svg"] {
        let err = svg_decode::decode(input, &no_fonts()).unwrap_err();
        assert!(
            matches!(err, Error::Parse(ParseErrorKind::ParseFailed)),
            "unexpected error for {:?}: {:?}",
            input,
            err
        );
    }
}

#[test]
fn malformed_gzip_is_reported() {
    let err = svg_decode::decode(&[0x1f, 0x8b, 0x08, 0x00, 0xde, 0xad][..], &no_fonts()).unwrap_err();
    assert_eq!(err.parse_kind(), Some(ParseErrorKind::MalformedGzip));
}

#[test]
fn png_export_roundtrips_size() {
    let img = svg_decode::decode(include_str!("fixtures/sample.svg"), &no_fonts()).unwrap();
    let png = img.encode_png().unwrap();
    assert_eq!(&png[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}
