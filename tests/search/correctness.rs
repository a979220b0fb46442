//! Known-answer search vectors.

use super::common::{chars, costs, MODES};
use damlev::engine::{Boundary, DistanceMatrix};
use damlev::{compute_best_substring, distance, Distance, EditStep, Options, SubstringMatch, Transposition};

fn search(pattern: &str, haystack: &str, options: Options) -> SubstringMatch {
    let options = Options {
        search: true,
        ..options
    };
    match distance(pattern, haystack, &options).unwrap() {
        Distance::Substring(m) => m,
        other => panic!("expected substring match, got {:?}", other),
    }
}

#[test]
fn exact_occurrence_in_the_middle() {
    for mode in MODES {
        let m = compute_best_substring(&chars("abc"), &chars("xxabcxx"), &costs(1.0, 1.0, 1.0, 1.0, mode));
        assert_eq!(m.matched, "abc", "{:?}", mode);
        assert_eq!(m.distance, 0.0);
        assert_eq!(m.offset, 2);
    }
}

#[test]
fn single_substitution_costs_the_substitution_weight() {
    let options = Options {
        substitution_cost: 0.5,
        ..Options::default()
    };
    let m = search("kitten", "xxkittenxx", options);
    assert_eq!((m.distance, m.offset), (0.0, 2));

    let m = search("kitten", "xxkotten", options);
    assert_eq!(m.matched, "kotten");
    assert_eq!((m.distance, m.offset), (0.5, 2));
}

#[test]
fn empty_pattern() {
    let m = search("", "anything", Options::default());
    assert_eq!(m.matched, "");
    assert_eq!((m.distance, m.offset), (0.0, 0));
}

#[test]
fn empty_haystack_charges_deletions() {
    let options = Options {
        deletion_cost: 0.25,
        ..Options::default()
    };
    let m = search("abcd", "", options);
    assert_eq!(m.matched, "");
    assert_eq!((m.distance, m.offset), (1.0, 0));
}

#[test]
fn both_empty() {
    let m = search("", "", Options::default());
    assert_eq!(m.matched, "");
    assert_eq!((m.distance, m.offset), (0.0, 0));
}

#[test]
fn first_of_two_equal_occurrences() {
    let m = search("ab", "xxabyyab", Options::default());
    assert_eq!(m.matched, "ab");
    assert_eq!(m.offset, 2);
}

#[test]
fn prefix_and_suffix_of_haystack() {
    let m = search("abc", "abcxyz", Options::default());
    assert_eq!((m.offset, m.distance), (0, 0.0));

    let m = search("xyz", "abcxyz", Options::default());
    assert_eq!((m.offset, m.distance), (3, 0.0));
    assert_eq!(m.range(), 3..6);
}

#[test]
fn pattern_longer_than_haystack() {
    // Whole haystack is used; the extra pattern code points are deleted
    let m = search("abcdef", "abc", Options::default());
    assert_eq!(m.matched, "abc");
    assert_eq!((m.distance, m.offset), (3.0, 0));
}

#[test]
fn swapped_pair_inside_haystack() {
    let plain = search("abcd", "zzacbdzz", Options::default());
    assert_eq!(plain.distance, 2.0);

    let damerau = search(
        "abcd",
        "zzacbdzz",
        Options {
            damerau: true,
            ..Options::default()
        },
    );
    assert_eq!(damerau.matched, "acbd");
    assert_eq!((damerau.distance, damerau.offset), (1.0, 2));
}

#[test]
fn unicode_offsets_count_code_points() {
    let m = search("ērla", "tummalachērla", Options::default());
    assert_eq!(m.matched, "ērla");
    assert_eq!(m.offset, 9);

    let m = search("語", "日本語です", Options::default());
    assert_eq!(m.offset, 2);

    let m = search("🦀b", "a😀🦀bc", Options::default());
    assert_eq!((m.offset, m.distance), (2, 0.0));
}

#[test]
fn cheap_insertions_let_the_match_stretch() {
    // Pattern "ac" against "abc": inserting b at 0.25 beats any cut
    let options = Options {
        insertion_cost: 0.25,
        ..Options::default()
    };
    let m = search("ac", "xxabcxx", options);
    assert_eq!(m.matched, "abc");
    assert_eq!((m.distance, m.offset), (0.25, 2));
}

#[test]
fn unrestricted_mode_search_matches_plain_distance() {
    let model = costs(1.0, 1.0, 1.0, 1.0, Transposition::Unrestricted);
    let m = compute_best_substring(&chars("ca"), &chars("zzabczz"), &model);
    let plain = damlev::compute_distance(&chars("ca"), &m.matched, &model);
    assert_eq!(m.distance, plain);
}

// Equal-cost alignments: the backtrace prefers transposition, then
// substitution, then deletion, then insertion. These pin which start column
// gets reported.

#[test]
fn substitution_wins_tie_over_deletion() {
    // "xb" (substitute a->x) and "b" (delete a) both cost 1
    let m = compute_best_substring(&chars("ab"), &chars("xb"), &costs(1.0, 1.0, 1.0, 1.0, Transposition::Disabled));
    assert_eq!(m.matched, "xb");
    assert_eq!((m.distance, m.offset), (1.0, 0));
}

#[test]
fn deletion_wins_tie_over_insertion() {
    // Free insertions: "b" (delete a) and "xb" (delete a, insert x) both cost 1
    let model = costs(0.0, 1.0, 5.0, 1.0, Transposition::Disabled);
    let m = compute_best_substring(&chars("ab"), &chars("xb"), &model);
    assert_eq!(m.matched, "b");
    assert_eq!((m.distance, m.offset), (1.0, 1));

    let matrix = DistanceMatrix::build(&chars("ab"), &chars("xb"), &model, Boundary::FreeStart);
    assert_eq!(matrix.trace_path(2, 2), vec![EditStep::Match, EditStep::Delete]);
}

#[test]
fn transposition_wins_tie_over_substitution() {
    // Swapping "ab" -> "ba" costs 1, as do two half-price substitutions
    let model = costs(1.0, 2.0, 0.5, 1.0, Transposition::Restricted);
    let m = compute_best_substring(&chars("ab"), &chars("ba"), &model);
    assert_eq!(m.matched, "ba");
    assert_eq!((m.distance, m.offset), (1.0, 0));

    let matrix = DistanceMatrix::build(&chars("ab"), &chars("ba"), &model, Boundary::FreeStart);
    assert_eq!(matrix.trace_path(2, 2), vec![EditStep::Transpose { rows: 2, cols: 2 }]);

    let plain = DistanceMatrix::build(
        &chars("ab"),
        &chars("ba"),
        &model.with_mode(Transposition::Disabled),
        Boundary::FreeStart,
    );
    assert_eq!(plain.trace_path(2, 2), vec![EditStep::Substitute, EditStep::Substitute]);
}
