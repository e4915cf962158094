//! The generation operations. Every function is stateless, randomness comes from the source
//! passed in by the caller.

use std::{collections::HashSet, fmt, str::FromStr};

use rand::{distributions::WeightedIndex, Rng};
use rand_distr::{Exp1, Poisson, StandardNormal};

use crate::{
    error::{Error, Result},
    rng::{Prng, SecureRng},
};

/// Selects between discrete and continuous sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NumericKind {
    #[default]
    Integer,
    /// Continuous values, rounded to two decimals.
    Float,
}

impl NumericKind {
    pub const ALL: [NumericKind; 2] = [NumericKind::Integer, NumericKind::Float];

    /// The name used for this kind in the settings file.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "Integer"),
            Self::Float => write!(f, "Float"),
        }
    }
}

impl FromStr for NumericKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::GenericDyn(format!("unknown number kind: {s}")))
    }
}

/// The fixed-parameter distributions that can be sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Uniform over `[0, 1)`.
    #[default]
    Uniform,
    /// Mean 0, standard deviation 1.
    Normal,
    /// Rate 1.
    Exponential,
    /// Lambda 3.
    Poisson,
}

const POISSON_LAMBDA: f64 = 3.0;

impl Distribution {
    pub const ALL: [Distribution; 4] = [
        Distribution::Uniform,
        Distribution::Normal,
        Distribution::Exponential,
        Distribution::Poisson,
    ];

    /// The name used for this distribution in the settings file.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Normal => "normal",
            Self::Exponential => "exponential",
            Self::Poisson => "poisson",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Uniform => write!(f, "uniform"),
            Self::Normal => write!(f, "normal"),
            Self::Exponential => write!(f, "exponential"),
            Self::Poisson => write!(f, "Poisson"),
        }
    }
}

impl FromStr for Distribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::GenericDyn(format!("unknown distribution: {s}")))
    }
}

/// A single generated value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            // debug formatting keeps the decimal point on whole values
            Self::Float(v) => write!(f, "{v:?}"),
        }
    }
}

fn check_range(min: i64, max: i64) -> Result<()> {
    if min > max {
        return Err(Error::range(format!(
            "minimum value {min} is greater than maximum value {max}"
        )));
    }
    Ok(())
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn draw<R: Prng + ?Sized>(rng: &mut R, min: i64, max: i64, kind: NumericKind) -> Number {
    match kind {
        NumericKind::Integer => Number::Integer(rng.gen_range(min..=max)),
        NumericKind::Float => {
            Number::Float(round_to_cents(rng.gen_range(min as f64..=max as f64)))
        }
    }
}

/// Returns one value in `[min, max]`, both ends included.
pub fn random_number<R: Prng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    kind: NumericKind,
) -> Result<Number> {
    check_range(min, max)?;

    Ok(draw(rng, min, max, kind))
}

/// Returns `length` independent draws of [`random_number`].
pub fn random_sequence<R: Prng + ?Sized>(
    rng: &mut R,
    length: usize,
    min: i64,
    max: i64,
    kind: NumericKind,
) -> Result<Vec<Number>> {
    check_range(min, max)?;

    Ok((0..length).map(|_| draw(rng, min, max, kind)).collect())
}

/// Samples `count` distinct integers from `[min, max]` without replacement. The order of the
/// result is random.
pub fn unique_numbers<R: Prng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    count: usize,
) -> Result<Vec<i64>> {
    check_range(min, max)?;

    let span = (i128::from(max) - i128::from(min) + 1) as u128;
    if (count as u128) > span {
        return Err(Error::range(format!(
            "can't draw {count} unique numbers from a range of {span} values"
        )));
    }
    let span = match usize::try_from(span) {
        Ok(span) => span,
        Err(_) => return Ok(unique_by_rejection(rng, min, max, count)),
    };

    Ok(rand::seq::index::sample(rng, span, count)
        .into_iter()
        .map(|offset| (i128::from(min) + offset as i128) as i64)
        .collect())
}

// Only reached when the span exceeds usize, so collisions are vanishingly rare.
fn unique_by_rejection<R: Prng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    count: usize,
) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(count);
    let mut numbers = Vec::with_capacity(count);
    while numbers.len() < count {
        let n = rng.gen_range(min..=max);
        if seen.insert(n) {
            numbers.push(n);
        }
    }
    numbers
}

/// Draws `count` values with replacement, each picked with a probability proportional to its
/// weight.
pub fn weighted_choice<R: Prng + ?Sized, T: Clone>(
    rng: &mut R,
    values: &[T],
    weights: &[f64],
    count: usize,
) -> Result<Vec<T>> {
    if values.len() != weights.len() {
        return Err(Error::argument(format!(
            "got {} values but {} weights",
            values.len(),
            weights.len()
        )));
    }
    if let Some(w) = weights.iter().find(|w| !w.is_finite()) {
        return Err(Error::argument(format!("weight {w} is not a finite number")));
    }
    let index = WeightedIndex::new(weights).map_err(|err| Error::argument(err.to_string()))?;

    Ok((0..count)
        .map(|_| values[rng.sample(&index)].clone())
        .collect())
}

/// Draws `count` samples from `distribution`.
pub fn distribution_sample<R: Prng + ?Sized>(
    rng: &mut R,
    distribution: Distribution,
    count: usize,
) -> Result<Vec<f64>> {
    let samples: Vec<f64> = match distribution {
        Distribution::Uniform => (0..count).map(|_| rng.gen::<f64>()).collect(),
        Distribution::Normal => (0..count).map(|_| rng.sample(StandardNormal)).collect(),
        Distribution::Exponential => (0..count).map(|_| rng.sample(Exp1)).collect(),
        Distribution::Poisson => {
            let poisson: Poisson<f64> = Poisson::new(POISSON_LAMBDA)?;
            (0..count).map(|_| rng.sample(&poisson)).collect()
        }
    };

    Ok(samples)
}

/// Draws `count` integers from `[min, max]` out of a cryptographically secure source.
///
/// The range reduction rejects out-of-zone samples, so every value is equally likely.
pub fn secure_numbers<S: SecureRng + ?Sized>(
    rng: &mut S,
    min: i64,
    max: i64,
    count: usize,
) -> Result<Vec<i64>> {
    check_range(min, max)?;

    Ok((0..count).map(|_| rng.gen_range(min..=max)).collect())
}

#[cfg(test)]
#[path = "tests/generator.rs"]
mod generator_tests;
