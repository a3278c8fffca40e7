//! Comprehensive tests for prism-color
//!
//! Parsing edge cases and the WCAG contrast properties the audit
//! engine relies on.

use prism_color::{contrast, relative_luminance, ColorParseError, ColorSpec};

#[test]
fn test_parse_all_supported_forms() {
    for input in [
        "#f00",
        "#ff0000",
        "#ff000080",
        "red",
        "Navy",
        "rgb(128, 0, 128)",
        "rgba(255, 165, 0, 0.25)",
    ] {
        assert!(ColorSpec::parse(input).is_ok(), "failed on {input}");
    }
}

#[test]
fn test_shorthand_hex_expands() {
    assert_eq!(
        ColorSpec::parse("#abc").unwrap(),
        ColorSpec::parse("#aabbcc").unwrap()
    );
}

#[test]
fn test_whitespace_tolerated() {
    assert_eq!(ColorSpec::parse("  #ffffff ").unwrap(), ColorSpec::WHITE);
}

#[test]
fn test_contrast_symmetric_over_sample_grid() {
    let samples = [
        ColorSpec::BLACK,
        ColorSpec::WHITE,
        ColorSpec::rgb(0x99, 0x99, 0x99),
        ColorSpec::rgb(255, 0, 0),
        ColorSpec::rgb(0, 128, 128),
        ColorSpec::rgb(255, 165, 0),
    ];
    for a in samples {
        for b in samples {
            assert_eq!(contrast(a, b).unwrap(), contrast(b, a).unwrap());
        }
    }
}

#[test]
fn test_ratio_bounds() {
    let samples = [
        ColorSpec::BLACK,
        ColorSpec::WHITE,
        ColorSpec::rgb(12, 200, 77),
        ColorSpec::rgb(0x66, 0x66, 0x66),
    ];
    for a in samples {
        for b in samples {
            let ratio = contrast(a, b).unwrap().ratio;
            assert!((1.0..=21.0).contains(&ratio));
        }
    }
}

#[test]
fn test_luminance_monotone_in_gray_levels() {
    let mut previous = -1.0;
    for level in (0..=255).step_by(17) {
        let l = relative_luminance(ColorSpec::rgb(level, level, level));
        assert!(l > previous);
        previous = l;
    }
}

#[test]
fn test_known_ratios() {
    // #767676 on white is the canonical 4.5:1 boundary color
    let boundary = contrast(ColorSpec::rgb(0x76, 0x76, 0x76), ColorSpec::WHITE).unwrap();
    assert!((boundary.ratio - 4.54).abs() < 0.05);
    assert!(boundary.passes_aa);
    assert!(!boundary.passes_aaa);
}

#[test]
fn test_transparent_never_a_partner() {
    for partner in [ColorSpec::BLACK, ColorSpec::WHITE] {
        assert!(matches!(
            contrast(partner, ColorSpec::TRANSPARENT),
            Err(ColorParseError::Transparent)
        ));
    }
}
