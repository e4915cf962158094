/// The generation operations: numbers in a range, unique samples, weighted choices,
/// distribution samples and cryptographically secure numbers.
pub mod generator;
/// Random passwords built from a configurable alphabet.
pub mod password_generator;
/// The two kinds of random sources the generators draw from.
pub mod rng;

pub mod history;
pub mod session;
/// Settings persisted between runs, read with the `config` crate from a TOML file.
pub mod settings;

pub mod error;

pub use error::{Error, Result};
