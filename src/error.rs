use std::io;

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// The requested bounds or count can't be satisfied.
    Range(String),
    /// Auxiliary arguments, like a list of weights, are malformed.
    Argument(String),
    Io(io::Error),
    Generic(&'static str),
    GenericDyn(String),
    ConfigError(config::ConfigError),
    SerError(toml::ser::Error),
}

impl Error {
    pub fn range<S: Into<String>>(msg: S) -> Self {
        Self::Range(msg.into())
    }

    pub fn argument<S: Into<String>>(msg: S) -> Self {
        Self::Argument(msg.into())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::SerError(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Self::GenericDyn(err.to_owned())
    }
}

impl From<rand_distr::PoissonError> for Error {
    fn from(err: rand_distr::PoissonError) -> Self {
        Self::GenericDyn(err.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Range(err) => write!(f, "{err}"),
            Self::Argument(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
            Self::GenericDyn(err) => write!(f, "{err}"),
            Self::ConfigError(err) => write!(f, "{err}"),
            Self::SerError(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "tests/error.rs"]
mod error_tests;
