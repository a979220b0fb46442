//! Same inputs, same answer, across calls and entry points.

use super::common::{chars, costs, MODES};
use damlev::{compute_best_substring, distance, distance_utf16, Distance, Options};

#[test]
fn repeated_search_is_stable() {
    let hay = chars("abab abab abba");
    for mode in MODES {
        let model = costs(0.5, 1.0, 1.0, 0.5, mode);
        let first = compute_best_substring(&chars("abba"), &hay, &model);
        for _ in 0..10 {
            assert_eq!(compute_best_substring(&chars("abba"), &hay, &model), first);
        }
    }
}

#[test]
fn string_and_utf16_entry_points_agree() {
    let options = Options {
        search: true,
        damerau: true,
        ..Options::default()
    };
    let cases = [("naïve", "un naïf très naive"), ("😀b", "a😀bc"), ("abc", "")];
    for (p, h) in cases {
        let from_str = distance(p, h, &options).unwrap();
        let p16: Vec<u16> = p.encode_utf16().collect();
        let h16: Vec<u16> = h.encode_utf16().collect();
        let from_utf16 = distance_utf16(&p16, &h16, &options).unwrap();
        assert_eq!(from_str, from_utf16, "{} in {}", p, h);
    }
}

#[test]
fn equal_cost_ends_resolve_leftmost() {
    // "ab" vs "xaybx": every window costs 1, the first one to finish wins
    let m = compute_best_substring(&chars("ab"), &chars("xaybx"), &costs(1.0, 1.0, 1.0, 1.0, MODES[0]));
    assert_eq!(m.distance, 1.0);
    assert_eq!(m.end(), 2);
    assert_eq!(m.matched, "a");
}

#[test]
fn search_result_serializes_with_substring_key() {
    let options = Options {
        search: true,
        ..Options::default()
    };
    let result = distance("abc", "xxabcxx", &options).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"substring": "abc", "distance": 0.0, "offset": 2})
    );

    let scalar = distance("a", "b", &Options::default()).unwrap();
    assert_eq!(serde_json::to_value(&scalar).unwrap(), serde_json::json!(1.0));
    assert!(matches!(scalar, Distance::Scalar(_)));
}
