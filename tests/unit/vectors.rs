//! Fixed reference vectors through the public front door.

use damlev::{damerau_levenshtein, distance, levenshtein, Distance, InvalidCostError, Options};

fn scalar(source: &str, target: &str, options: &Options) -> f64 {
    match distance(source, target, options).expect("valid options") {
        Distance::Scalar(d) => d,
        other => panic!("expected a number, got {:?}", other),
    }
}

#[test]
fn identical_strings_are_zero() {
    for s in ["", "a", "kitten", "tummalachērla", "🦀🦀"] {
        assert_eq!(scalar(s, s, &Options::default()), 0.0);
    }
}

#[test]
fn empty_side_costs() {
    let opts = Options {
        insertion_cost: 0.5,
        deletion_cost: 2.0,
        ..Options::default()
    };
    assert_eq!(scalar("", "abc", &opts), 1.5);
    assert_eq!(scalar("abc", "", &opts), 6.0);
}

#[test]
fn single_swap() {
    let osa = Options {
        damerau: true,
        restricted: true,
        transposition_cost: 0.75,
        ..Options::default()
    };
    assert_eq!(scalar("ab", "ba", &osa), 0.75);

    let plain = Options {
        substitution_cost: 0.75,
        ..Options::default()
    };
    assert_eq!(scalar("ab", "ba", &plain), 1.5);

    // insert + delete is cheaper than two substitutions here
    let cheap_indel = Options {
        insertion_cost: 0.25,
        deletion_cost: 0.5,
        ..Options::default()
    };
    assert_eq!(scalar("ab", "ba", &cheap_indel), 0.75);
}

#[test]
fn fractional_substitution() {
    let opts = Options {
        substitution_cost: 0.5,
        ..Options::default()
    };
    assert_eq!(scalar("a", "b", &opts), 0.5);
}

#[test]
fn weighted_substitution_loses_to_indel() {
    let opts = Options {
        insertion_cost: 2.0,
        deletion_cost: 3.0,
        substitution_cost: 10.0,
        ..Options::default()
    };
    assert_eq!(scalar("abc", "abd", &opts), 5.0);
}

#[test]
fn classic_pairs() {
    let opts = Options::default();
    assert_eq!(scalar("kitten", "sitting", &opts), 3.0);
    assert_eq!(scalar("saturday", "sunday", &opts), 3.0);
    assert_eq!(scalar("book", "back", &opts), 2.0);
}

#[test]
fn osa_versus_unrestricted() {
    let osa = Options {
        restricted: true,
        ..Options::default()
    };
    let full = Options::default();
    let value = |d: Result<Distance, InvalidCostError>| d.map(|d| d.value()).unwrap();

    assert_eq!(value(damerau_levenshtein("ca", "abc", &osa)), 3.0);
    assert_eq!(value(damerau_levenshtein("ca", "abc", &full)), 2.0);
    assert_eq!(value(levenshtein("ca", "abc", &full)), 3.0);
    assert_eq!(value(damerau_levenshtein("abcdef", "badcfe", &osa)), 3.0);
}

#[test]
fn unrestricted_swap_across_gap() {
    // "ab" -> "bxa": swap a/b then insert x between them
    let opts = Options {
        damerau: true,
        transposition_cost: 0.5,
        ..Options::default()
    };
    assert_eq!(scalar("ab", "bxa", &opts), 1.5);
}

#[test]
fn transposition_cost_unused_without_damerau() {
    let opts = Options {
        transposition_cost: 0.0,
        ..Options::default()
    };
    assert_eq!(scalar("ab", "ba", &opts), 2.0);
}
