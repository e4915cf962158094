use std::collections::{HashMap, HashSet};

use rand::{rngs::StdRng, SeedableRng};

use super::*;
use crate::rng::secure_rng;

fn seeded() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

#[test]
fn random_number_integer_stays_in_range() {
    let mut rng = seeded();

    for (min, max) in [(0, 0), (-5, 5), (1, 100), (i64::MIN, i64::MAX), (-3, -1)] {
        for _ in 0..200 {
            match random_number(&mut rng, min, max, NumericKind::Integer).unwrap() {
                Number::Integer(v) => assert!(min <= v && v <= max, "{v} not in [{min}, {max}]"),
                other => panic!("expected an integer, got {other:?}"),
            }
        }
    }
}

#[test]
fn random_number_float_is_rounded_to_two_decimals() {
    let mut rng = seeded();

    for _ in 0..500 {
        let v = random_number(&mut rng, -10, 10, NumericKind::Float)
            .unwrap()
            .as_f64();

        assert!((-10.0..=10.0).contains(&v));
        assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6, "{v}");
    }
}

#[test]
fn random_number_float_with_equal_bounds() {
    let mut rng = seeded();

    let v = random_number(&mut rng, 7, 7, NumericKind::Float).unwrap();

    assert_eq!(Number::Float(7.0), v);
    assert_eq!("7.0", v.to_string());
}

#[test]
fn range_operations_reject_inverted_bounds() {
    let mut rng = seeded();
    let mut secure = secure_rng();

    assert!(matches!(
        random_number(&mut rng, 10, 1, NumericKind::Integer),
        Err(Error::Range(_))
    ));
    assert!(matches!(
        random_number(&mut rng, 10, 1, NumericKind::Float),
        Err(Error::Range(_))
    ));
    assert!(matches!(
        random_sequence(&mut rng, 3, 10, 1, NumericKind::Integer),
        Err(Error::Range(_))
    ));
    assert!(matches!(
        unique_numbers(&mut rng, 10, 1, 1),
        Err(Error::Range(_))
    ));
    assert!(matches!(
        secure_numbers(&mut secure, 10, 1, 1),
        Err(Error::Range(_))
    ));
}

#[test]
fn random_sequence_zero_length_is_empty() {
    let mut rng = seeded();

    let numbers = random_sequence(&mut rng, 0, 0, 100, NumericKind::Integer).unwrap();

    assert!(numbers.is_empty());
}

#[test]
fn random_sequence_has_requested_length() {
    let mut rng = seeded();

    let numbers = random_sequence(&mut rng, 50, 1, 6, NumericKind::Integer).unwrap();

    assert_eq!(50, numbers.len());
    assert!(numbers
        .iter()
        .all(|n| matches!(n, Number::Integer(v) if (1..=6).contains(v))));
}

#[test]
fn random_sequence_is_reproducible_with_the_same_seed() {
    let a = random_sequence(&mut seeded(), 20, 0, 1000, NumericKind::Float).unwrap();
    let b = random_sequence(&mut seeded(), 20, 0, 1000, NumericKind::Float).unwrap();

    assert_eq!(a, b);
}

#[test]
fn unique_numbers_are_distinct_and_in_range() {
    let mut rng = seeded();

    let numbers = unique_numbers(&mut rng, -20, 20, 30).unwrap();
    let distinct: HashSet<i64> = numbers.iter().copied().collect();

    assert_eq!(30, numbers.len());
    assert_eq!(30, distinct.len());
    assert!(numbers.iter().all(|n| (-20..=20).contains(n)));
}

#[test]
fn unique_numbers_can_exhaust_the_range() {
    let mut rng = seeded();

    let mut numbers = unique_numbers(&mut rng, 1, 5, 5).unwrap();
    numbers.sort();

    assert_eq!(vec![1, 2, 3, 4, 5], numbers);
}

#[test]
fn unique_numbers_more_than_range() {
    let mut rng = seeded();

    let result = unique_numbers(&mut rng, 1, 5, 6);

    assert!(matches!(result, Err(Error::Range(_))));
}

#[test]
fn unique_numbers_zero_count() {
    let mut rng = seeded();

    assert!(unique_numbers(&mut rng, 1, 5, 0).unwrap().is_empty());
}

#[test]
fn unique_numbers_over_the_whole_i64_range() {
    let mut rng = seeded();

    let numbers = unique_numbers(&mut rng, i64::MIN, i64::MAX, 3).unwrap();

    assert_eq!(3, numbers.len());
    assert_eq!(3, numbers.iter().collect::<HashSet<_>>().len());
}

#[test]
fn weighted_choice_follows_the_weights() {
    let mut rng = seeded();
    let values = [1, 2, 3, 4, 5];
    let weights = [0.1, 0.2, 0.3, 0.2, 0.2];
    let trials = 20;

    let mut counts: HashMap<i32, usize> = HashMap::new();
    for _ in 0..trials {
        let drawn = weighted_choice(&mut rng, &values, &weights, 1000).unwrap();
        assert_eq!(1000, drawn.len());
        for v in drawn {
            *counts.entry(v).or_default() += 1;
        }
    }

    let total = (trials * 1000) as f64;
    for (value, weight) in values.iter().zip(weights.iter()) {
        let frequency = *counts.get(value).unwrap_or(&0) as f64 / total;
        assert!(
            (frequency - weight).abs() < 0.02,
            "value {value} drawn with frequency {frequency}, expected {weight}"
        );
    }
}

#[test]
fn weighted_choice_never_picks_zero_weight() {
    let mut rng = seeded();

    let drawn = weighted_choice(&mut rng, &["a", "b", "c"], &[0.0, 1.0, 0.0], 100).unwrap();

    assert!(drawn.iter().all(|v| *v == "b"));
}

#[test]
fn weighted_choice_rejects_malformed_weights() {
    let mut rng = seeded();

    assert!(matches!(
        weighted_choice(&mut rng, &[1, 2, 3], &[0.5, 0.5], 1),
        Err(Error::Argument(_))
    ));
    assert!(matches!(
        weighted_choice::<_, i32>(&mut rng, &[], &[], 1),
        Err(Error::Argument(_))
    ));
    assert!(matches!(
        weighted_choice(&mut rng, &[1, 2], &[0.0, 0.0], 1),
        Err(Error::Argument(_))
    ));
    assert!(matches!(
        weighted_choice(&mut rng, &[1, 2], &[-1.0, 2.0], 1),
        Err(Error::Argument(_))
    ));
    assert!(matches!(
        weighted_choice(&mut rng, &[1, 2], &[f64::NAN, 2.0], 1),
        Err(Error::Argument(_))
    ));
    assert!(matches!(
        weighted_choice(&mut rng, &[1, 2], &[f64::INFINITY, 2.0], 1),
        Err(Error::Argument(_))
    ));
}

#[test]
fn distribution_sample_uniform_is_in_unit_interval() {
    let mut rng = seeded();

    let samples = distribution_sample(&mut rng, Distribution::Uniform, 1000).unwrap();

    assert_eq!(1000, samples.len());
    assert!(samples.iter().all(|s| (0.0..1.0).contains(s)));
}

#[test]
fn distribution_sample_normal_is_centered() {
    let mut rng = seeded();

    let samples = distribution_sample(&mut rng, Distribution::Normal, 10_000).unwrap();
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;

    assert!(mean.abs() < 0.1, "mean {mean}");
    assert!(samples.iter().any(|s| *s < 0.0));
}

#[test]
fn distribution_sample_exponential_is_non_negative() {
    let mut rng = seeded();

    let samples = distribution_sample(&mut rng, Distribution::Exponential, 10_000).unwrap();
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;

    assert!(samples.iter().all(|s| *s >= 0.0));
    assert!((mean - 1.0).abs() < 0.1, "mean {mean}");
}

#[test]
fn distribution_sample_poisson_yields_counts() {
    let mut rng = seeded();

    let samples = distribution_sample(&mut rng, Distribution::Poisson, 10_000).unwrap();
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;

    assert!(samples.iter().all(|s| *s >= 0.0 && s.fract() == 0.0));
    assert!((mean - 3.0).abs() < 0.2, "mean {mean}");
}

#[test]
fn distribution_sample_zero_count() {
    let mut rng = seeded();

    for distribution in Distribution::ALL {
        assert!(distribution_sample(&mut rng, distribution, 0)
            .unwrap()
            .is_empty());
    }
}

#[test]
fn secure_numbers_stay_in_range() {
    let mut rng = secure_rng();

    let numbers = secure_numbers(&mut rng, 0, 9, 1000).unwrap();

    assert_eq!(1000, numbers.len());
    assert!(numbers.iter().all(|n| (0..=9).contains(n)));
}

#[test]
fn secure_numbers_are_uniform() {
    let numbers = secure_numbers(&mut secure_rng(), 0, 9, 100_000).unwrap();

    let mut counts: HashMap<i64, usize> = HashMap::new();
    for n in &numbers {
        *counts.entry(*n).or_default() += 1;
    }

    assert_eq!(10, counts.len());
    for (digit, count) in counts {
        let frequency = count as f64 / numbers.len() as f64;
        assert!(
            (frequency - 0.1).abs() < 0.01,
            "{digit} drawn with frequency {frequency}"
        );
    }
}

#[test]
fn secure_numbers_are_not_repeated_between_calls() {
    let a = secure_numbers(&mut secure_rng(), 0, 9, 1000).unwrap();
    let b = secure_numbers(&mut secure_rng(), 0, 9, 1000).unwrap();

    assert_ne!(a, b);
}

#[test]
fn secure_numbers_single_value_range() {
    let numbers = secure_numbers(&mut secure_rng(), -4, -4, 10).unwrap();

    assert_eq!(vec![-4; 10], numbers);
}

#[test]
fn kinds_and_distributions_parse_from_keys() {
    for kind in NumericKind::ALL {
        assert_eq!(kind, kind.key().parse::<NumericKind>().unwrap());
    }
    for distribution in Distribution::ALL {
        assert_eq!(
            distribution,
            distribution.key().parse::<Distribution>().unwrap()
        );
    }
    assert_eq!(Distribution::Normal, " NORMAL ".parse().unwrap());
    assert!("gamma".parse::<Distribution>().is_err());
    assert!("complex".parse::<NumericKind>().is_err());
}

#[test]
fn numbers_display_like_their_kind() {
    assert_eq!("42", Number::Integer(42).to_string());
    assert_eq!("-1", Number::Integer(-1).to_string());
    assert_eq!("3.5", Number::Float(3.5).to_string());
    assert_eq!("3.0", Number::Float(3.0).to_string());
}
