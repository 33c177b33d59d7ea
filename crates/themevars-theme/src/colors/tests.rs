//! Tests for color parsing and component encoding.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#00d4ff").unwrap();
    assert_eq!(c, Color::from_rgba(0, 212, 255, 255));
}

#[test]
fn parse_hex_8_digit() {
    let c = parse_color("#00D4FF80").unwrap();
    assert_eq!(c, Color::from_rgba(0, 212, 255, 128));
}

#[test]
fn parse_hex_short_forms() {
    assert_eq!(parse_color("#f00").unwrap(), Color::from_rgba(255, 0, 0, 255));
    assert_eq!(parse_color("#f008").unwrap(), Color::from_rgba(255, 0, 0, 136));
}

#[test]
fn parse_rgba_comma_syntax() {
    let c = parse_color("rgba(0,212,255,0.12)").unwrap();
    assert_eq!((c.r, c.g, c.b), (0, 212, 255));
    // 0.12 * 255 = 30.6 -> 31
    assert_eq!(c.a, 31);
}

#[test]
fn parse_rgb_space_syntax() {
    let c = parse_color("rgb(100 180 255 / 50%)").unwrap();
    assert_eq!((c.r, c.g, c.b), (100, 180, 255));
    assert_eq!(c.a, 128);

    let c = parse_color("rgb( 100 , 180 , 255 )").unwrap();
    assert_eq!(c, Color::from_rgba(100, 180, 255, 255));
}

#[test]
fn parse_rgb_percentage_channels() {
    let c = parse_color("rgb(100%, 0%, 50%)").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 128, 255));
}

#[test]
fn parse_hsl_forms() {
    assert_eq!(
        parse_color("hsl(0, 100%, 50%)").unwrap(),
        Color::from_rgba(255, 0, 0, 255)
    );
    assert_eq!(
        parse_color("hsl(240deg 100% 50% / 0.5)").unwrap(),
        Color::from_rgba(0, 0, 255, 128)
    );
}

#[test]
fn parse_named_colors() {
    assert_eq!(parse_color("white").unwrap(), Color::from_rgba(255, 255, 255, 255));
    assert_eq!(parse_color("Navy").unwrap(), Color::from_rgba(0, 0, 128, 255));
}

#[test]
fn parse_color_invalid_format() {
    assert_eq!(
        parse_color("not-a-color").unwrap_err(),
        ColorError::Unrecognized("not-a-color".into())
    );
    assert!(matches!(parse_color(""), Err(ColorError::Unrecognized(_))));
    assert!(matches!(parse_color("#xyz"), Err(ColorError::InvalidHex(_))));
    assert!(matches!(parse_color("#12345"), Err(ColorError::InvalidHex(_))));
    assert!(matches!(
        parse_color("rgba(300,0,0,1.0)"),
        Err(ColorError::InvalidFunction(_))
    ));
    assert!(matches!(
        parse_color("rgb(10,20)"),
        Err(ColorError::InvalidFunction(_))
    ));
    assert!(matches!(
        parse_color("hsl(0, 120%, 50%)"),
        Err(ColorError::InvalidFunction(_))
    ));
}

#[test]
fn validate_color_accepts_and_rejects() {
    assert!(validate_color("#00d4ff"));
    assert!(validate_color("rgba(255,255,255,1.0)"));
    assert!(validate_color("hsl(210 40% 50%)"));
    assert!(!validate_color("tomato-ish"));
    assert!(!validate_color("rgba(0,0,0,2)"));
}

#[test]
fn hsl_format_components_and_reference() {
    let white = parse_color("#ffffff").unwrap();
    assert_eq!(ColorFormat::Hsl.components(&white), "0 0% 100%");
    assert_eq!(
        ColorFormat::Hsl.reference("--primary"),
        "hsl(var(--primary) / <alpha-value>)"
    );
}

#[test]
fn rgb_format_components_and_reference() {
    let c = parse_color("#00d4ff").unwrap();
    assert_eq!(ColorFormat::Rgb.components(&c), "0 212 255");
    assert_eq!(
        ColorFormat::Rgb.reference("--bg-primary"),
        "rgb(var(--bg-primary) / <alpha-value>)"
    );
}

#[test]
fn stored_hsl_components_parse_back_to_the_same_color() {
    let steps: Vec<u8> = (0..=255u8).step_by(15).collect();
    for &r in &steps {
        for &g in &steps {
            for &b in &steps {
                let color = Color::from_rgba(r, g, b, 255);
                let stored = ColorFormat::Hsl.components(&color);
                let back = parse_color(&format!("hsl({stored})")).unwrap();
                let delta = [(back.r, r), (back.g, g), (back.b, b)]
                    .iter()
                    .map(|(x, y)| x.abs_diff(*y))
                    .max()
                    .unwrap();
                assert!(delta <= 1, "{} stored as {stored} came back as {}", color.to_hex(), back.to_hex());
            }
        }
    }
}
