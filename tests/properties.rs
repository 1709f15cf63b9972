use floem_hex::{argb_to_rgba, HexColorError, SolidColor};

#[test]
fn hex6_formats_back_to_its_digits() {
    for v in 0..=0xFF_FFFFu32 {
        let hex = SolidColor::from_hex6(v).to_hex_string_with(false).unwrap();
        assert_eq!(hex, format!("#{v:06X}"));
    }
}

#[test]
fn shorthand_formats_as_doubled_digits() {
    for v in 0..=0xFFFu16 {
        let [r, g, b] = [(v >> 8) & 0xF, (v >> 4) & 0xF, v & 0xF];
        let expected = format!("#{:X}{:X}{:X}{:X}{:X}{:X}", r, r, g, g, b, b);
        let hex = SolidColor::from_hex3(v).to_hex_string_with(false).unwrap();
        assert_eq!(hex, expected);
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// A channel that is an exact multiple of 1/255.
    fn byte_channel() -> impl Strategy<Value = f64> {
        (0..=255u8).prop_map(|k| k as f64 / 255.0)
    }

    proptest! {
        #[test]
        fn hex8_formats_back_to_its_digits(v in any::<u32>()) {
            let hex = SolidColor::from_hex8(v).to_hex_string().unwrap();
            prop_assert_eq!(hex, format!("#{v:08X}"));
        }

        #[test]
        fn hex6_ignores_bits_above_24(v in any::<u32>()) {
            let hex = SolidColor::from_hex6(v).to_hex_string_with(false).unwrap();
            prop_assert_eq!(hex, format!("#{:06X}", v & 0xFF_FFFF));
        }

        #[test]
        fn byte_aligned_colors_round_trip(
            r in byte_channel(),
            g in byte_channel(),
            b in byte_channel(),
            a in byte_channel(),
        ) {
            let c = SolidColor::from_rgba(r, g, b, a);
            let parsed = SolidColor::from_hex_str(&c.to_hex_string().unwrap()).unwrap();
            prop_assert!((c.r() - parsed.r()).abs() < 1e-12, "r: {} vs {}", c.r(), parsed.r());
            prop_assert!((c.g() - parsed.g()).abs() < 1e-12, "g: {} vs {}", c.g(), parsed.g());
            prop_assert!((c.b() - parsed.b()).abs() < 1e-12, "b: {} vs {}", c.b(), parsed.b());
            prop_assert!((c.a() - parsed.a()).abs() < 1e-12, "a: {} vs {}", c.a(), parsed.a());
        }
    }
}

#[test]
fn documented_examples() {
    let red = SolidColor::from_rgba(1.0, 0.0, 0.0, 1.0);
    assert_eq!(SolidColor::from_hex_str("#FF0000"), Ok(red));
    assert_eq!(SolidColor::from_hex_str("#F00"), Ok(red));

    assert_eq!(
        SolidColor::from_hex_str("XYZ"),
        Err(HexColorError::MissingHashPrefix)
    );
    assert_eq!(
        SolidColor::from_hex_str("#GG0000"),
        Err(HexColorError::UnableToScanHex)
    );
    assert!(matches!(
        SolidColor::from_hex_str("#ABCDE"),
        Err(HexColorError::MismatchedLength(_))
    ));

    let clear = SolidColor::from_rgba(0.0, 0.0, 0.0, 0.0);
    assert_eq!(SolidColor::from_hex_str_or("not-a-color", clear), clear);

    let hot = SolidColor::from_rgba(1.5, 0.0, 0.0, 1.0);
    assert!(matches!(
        hot.to_hex_string(),
        Err(HexColorError::ChannelOutOfRange { .. })
    ));
    assert_eq!(hot.to_hex_string_or_empty(true), "");

    assert_eq!(argb_to_rgba("#F080").as_deref(), Some("#080F"));
    assert_eq!(argb_to_rgba("#FF008000").as_deref(), Some("#008000FF"));
    assert_eq!(argb_to_rgba("#ABC"), None);
    assert_eq!(argb_to_rgba("no-hash"), None);
}

#[test]
fn argb_then_parse_matches_rgba_parse() {
    let rgba = argb_to_rgba("#803B82F6").unwrap();
    assert_eq!(
        SolidColor::from_hex_str(&rgba),
        Ok(SolidColor::from_hex8(0x3B82F680))
    );
}
