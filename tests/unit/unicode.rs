//! Code-point indexing: multi-byte and astral characters count as one.

use damlev::{distance, distance_utf16, CodePoints, Distance, EncodingErrorKind, Error, Options};

#[test]
fn multibyte_substitution_is_one_edit() {
    let d = distance("café", "cafe", &Options::default()).unwrap();
    assert_eq!(d, Distance::Scalar(1.0));
}

#[test]
fn astral_characters_are_single_units() {
    let opts = Options::default();
    assert_eq!(distance("😀", "😁", &opts).unwrap().value(), 1.0);
    assert_eq!(distance("a😀b", "ab", &opts).unwrap().value(), 1.0);
}

#[test]
fn swap_of_astral_pair() {
    let opts = Options {
        damerau: true,
        restricted: true,
        ..Options::default()
    };
    assert_eq!(distance("🦀😀", "😀🦀", &opts).unwrap().value(), 1.0);
}

#[test]
fn search_offset_counts_code_points() {
    let opts = Options {
        search: true,
        ..Options::default()
    };
    let d = distance("語", "日本語です", &opts).unwrap();
    let m = d.as_match().unwrap();
    assert_eq!(m.offset, 2);
    assert_eq!(m.matched, "語");
}

#[test]
fn utf16_and_str_agree() {
    let opts = Options {
        damerau: true,
        ..Options::default()
    };
    let a = "naïve 🦀";
    let b = "navïe 😀";
    let from_str = distance(a, b, &opts).unwrap();
    let a16: Vec<u16> = a.encode_utf16().collect();
    let b16: Vec<u16> = b.encode_utf16().collect();
    assert_eq!(distance_utf16(&a16, &b16, &opts).unwrap(), from_str);
}

#[test]
fn lone_surrogate_is_an_encoding_error() {
    let err = distance_utf16(&[0x61, 0xD83E], &[0x61], &Options::default()).unwrap_err();
    match err {
        Error::Encoding(e) => {
            assert_eq!(e.index, 1);
            assert_eq!(e.kind, EncodingErrorKind::UnpairedSurrogate(0xD83E));
        }
        other => panic!("expected encoding error, got {:?}", other),
    }
}

#[test]
fn utf8_decoding() {
    assert_eq!(CodePoints::from_utf8("ē".as_bytes()).unwrap(), "ē");
    assert!(CodePoints::from_utf8(&[0xC3]).is_err());
}
