mod common;

use std::fs;

use common::{Fixture, identity_table, points};
use hpo_gain::core::iterations::iterations_needed;
use hpo_gain::core::matrix;

fn fixture(name: &str) -> Fixture {
    let fx = Fixture::new(name);
    identity_table(&fx, &[0.0, 25.0, 95.5, 97.25, 99.0, 100.0]);
    fx.write_path(1, &points(&[0.0, 95.5, 97.25, 100.0]));
    fx.write_path(2, &points(&[25.0, 99.0, 0.0]));
    fx.write_path(3, &points(&[0.0, 0.0, 25.0, 97.25, 99.0, 100.0]));
    fx
}

fn assert_bit_identical(a: &[&[f64]; 4], b: &[&[f64]; 4]) {
    for (ra, rb) in a.iter().zip(b.iter()) {
        assert_eq!(ra.len(), rb.len());
        for (x, y) in ra.iter().zip(rb.iter()) {
            assert_eq!(x.to_bits(), y.to_bits(), "{x} vs {y}");
        }
    }
}

#[test]
fn second_call_survives_removed_scoring_inputs() {
    let fx = fixture("removed");
    let first = iterations_needed(&fx.layout, 1, 3, fx.key).unwrap();

    fs::remove_dir_all(fx.layout.root().join("scoring_function")).unwrap();
    fs::remove_dir_all(fx.layout.root().join("exp_results").join("exp2")).unwrap();

    let second = iterations_needed(&fx.layout, 1, 3, fx.key).unwrap();
    assert_bit_identical(&first.rows(), &second.rows());
}

#[test]
fn second_call_ignores_corrupted_scoring_inputs() {
    let fx = fixture("corrupted");
    let first = iterations_needed(&fx.layout, 1, 3, fx.key).unwrap();

    fs::write(fx.layout.params_path(), "not,a,number\n").unwrap();
    fs::write(fx.layout.scores_path(fx.key), "garbage\n").unwrap();

    let second = iterations_needed(&fx.layout, 1, 3, fx.key).unwrap();
    assert_bit_identical(&first.rows(), &second.rows());
}

#[test]
fn cache_file_is_four_rows_of_101() {
    let fx = fixture("shape");
    iterations_needed(&fx.layout, 1, 3, fx.key).unwrap();
    let rows = matrix::read_rows(&fx.cache_path(1, 3)).unwrap();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|r| r.len() == 101));

    let text = fs::read_to_string(fx.cache_path(1, 3)).unwrap();
    assert!(text.lines().all(|l| l.split(',').all(|f| f.contains("e+") || f.contains("e-"))));
}

#[test]
fn cache_is_keyed_by_scoring_parameters() {
    let fx = fixture("keyed");
    iterations_needed(&fx.layout, 1, 3, fx.key).unwrap();

    // Pre-seeded cache for another key is returned verbatim, stale or not.
    let other = hpo_gain::core::layout::ScoringKey::new(0.1, 1.0);
    let other_path = fx.layout.cache_path(1, 3, other);
    let seeded: Vec<Vec<f64>> = (0..4).map(|r| vec![r as f64; 101]).collect();
    matrix::write_rows(&other_path, &seeded).unwrap();

    let agg = iterations_needed(&fx.layout, 1, 3, other).unwrap();
    assert!(agg.mean.iter().all(|&v| v == 0.0));
    assert!(agg.q1.iter().all(|&v| v == 1.0));
    assert!(agg.median.iter().all(|&v| v == 2.0));
    assert!(agg.q3.iter().all(|&v| v == 3.0));
}
