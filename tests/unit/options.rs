//! Option validation and JSON configuration.

use damlev::{distance, CostViolation, Operation, Options, Transposition};

#[test]
fn every_cost_is_validated() {
    let cases = [
        (
            Options { insertion_cost: -1.0, ..Options::default() },
            Operation::Insertion,
        ),
        (
            Options { deletion_cost: f64::NAN, ..Options::default() },
            Operation::Deletion,
        ),
        (
            Options { substitution_cost: f64::INFINITY, ..Options::default() },
            Operation::Substitution,
        ),
        (
            Options { transposition_cost: -0.1, ..Options::default() },
            Operation::Transposition,
        ),
    ];
    for (opts, op) in cases {
        let err = distance("a", "b", &opts).unwrap_err();
        assert_eq!(err.operation, op);
    }
}

#[test]
fn nan_reports_non_finite() {
    let opts = Options {
        deletion_cost: f64::NAN,
        ..Options::default()
    };
    assert_eq!(opts.cost_model().unwrap_err().reason(), CostViolation::NonFinite);
}

#[test]
fn json_option_bag_parses() {
    let opts: Options = serde_json::from_str(
        r#"{
            "insertion_cost": 0.5,
            "deletion_cost": 2,
            "damerau": true,
            "restricted": true,
            "search": true
        }"#,
    )
    .unwrap();
    assert_eq!(opts.insertion_cost, 0.5);
    assert_eq!(opts.deletion_cost, 2.0);
    assert_eq!(opts.substitution_cost, 1.0);
    assert_eq!(opts.transposition(), Transposition::Restricted);
    assert!(opts.search);
}

#[test]
fn empty_json_is_default() {
    let opts: Options = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, Options::default());
}
