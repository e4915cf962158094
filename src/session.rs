//! The state of one interactive session and the dispatch from a form submission to a
//! generation operation.

use std::{fmt, path::Path, str::FromStr};

use crate::{
    error::{Error, Result},
    generator::{self, Distribution, NumericKind},
    history::History,
    password_generator::{generate_passwords, PasswordPolicy},
    rng::{self, Prng, SecureRng},
};

/// The candidates offered by [`GenerationMode::Weighted`].
pub const WEIGHTED_VALUES: [i64; 5] = [1, 2, 3, 4, 5];
/// The weights matching [`WEIGHTED_VALUES`].
pub const WEIGHTED_WEIGHTS: [f64; 5] = [0.1, 0.2, 0.3, 0.2, 0.2];
/// The largest count, or password length, a form may ask for.
pub const MAX_COUNT: usize = 1000;
/// The smallest and largest bounds a form may use.
pub const BOUND_LIMITS: (i64, i64) = (-1_000_000, 1_000_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GenerationMode {
    #[default]
    Numbers,
    Unique,
    Weighted,
    Distribution,
    Secure,
    Passwords,
}

impl GenerationMode {
    pub const ALL: [GenerationMode; 6] = [
        GenerationMode::Numbers,
        GenerationMode::Unique,
        GenerationMode::Weighted,
        GenerationMode::Distribution,
        GenerationMode::Secure,
        GenerationMode::Passwords,
    ];

    /// The name used for this mode in the settings file.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Numbers => "numbers",
            Self::Unique => "unique",
            Self::Weighted => "weighted",
            Self::Distribution => "distribution",
            Self::Secure => "secure",
            Self::Passwords => "passwords",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Numbers => write!(f, "Random numbers"),
            Self::Unique => write!(f, "Unique numbers"),
            Self::Weighted => write!(f, "Weighted generation"),
            Self::Distribution => write!(f, "Distribution"),
            Self::Secure => write!(f, "Cryptographically secure"),
            Self::Passwords => write!(f, "Password generator"),
        }
    }
}

impl FromStr for GenerationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::GenericDyn(format!("unknown generation mode: {s}")))
    }
}

/// The values the user has entered when asking for a generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Form {
    pub min: i64,
    pub max: i64,
    /// How many values to draw, or the password length in [`GenerationMode::Passwords`].
    pub count: usize,
    pub mode: GenerationMode,
    pub kind: NumericKind,
    pub distribution: Distribution,
    pub policy: PasswordPolicy,
}

impl Default for Form {
    fn default() -> Self {
        Form {
            min: 0,
            max: 100,
            count: 1,
            mode: GenerationMode::default(),
            kind: NumericKind::default(),
            distribution: Distribution::default(),
            policy: PasswordPolicy::default(),
        }
    }
}

pub struct Session {
    history: History,
    dark_theme: bool,
}

impl Session {
    pub fn new(dark_theme: bool) -> Session {
        Session {
            history: History::new(),
            dark_theme,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn dark_theme(&self) -> bool {
        self.dark_theme
    }

    /// Flips the theme and returns whether it's now dark.
    pub fn toggle_theme(&mut self) -> bool {
        self.dark_theme = !self.dark_theme;
        self.dark_theme
    }

    /// Runs the operation selected in `form`, records the rendered result in the history and
    /// returns it.
    pub fn generate(&mut self, form: &Form) -> Result<String> {
        self.generate_with(&mut rng::prng(), &mut rng::secure_rng(), form)
    }

    /// Like [`Session::generate`], drawing from the given sources.
    pub fn generate_with<R: Prng + ?Sized, S: SecureRng + ?Sized>(
        &mut self,
        rng: &mut R,
        secure_rng: &mut S,
        form: &Form,
    ) -> Result<String> {
        log::debug!("generating with {:?}", form);

        let text = match render_result(rng, secure_rng, form) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("rejected {} request: {}", form.mode.key(), err);
                return Err(err);
            }
        };

        self.history.push(text.clone());
        Ok(text)
    }

    /// Like [`Session::generate`] but turns a failure into a message that can be shown in
    /// place of the result.
    pub fn render(&mut self, form: &Form) -> String {
        match self.generate(form) {
            Ok(text) => text,
            Err(err) => format!("Error: {err}"),
        }
    }

    pub fn export_history(&self, path: &Path) -> Result<()> {
        self.history.export(path)
    }
}

fn render_result<R: Prng + ?Sized, S: SecureRng + ?Sized>(
    rng: &mut R,
    secure_rng: &mut S,
    form: &Form,
) -> Result<String> {
    if form.min > form.max {
        return Err(Error::range("minimum value cannot be greater than maximum"));
    }
    let (lowest, highest) = BOUND_LIMITS;
    if form.min < lowest || form.max > highest {
        return Err(Error::range(format!(
            "values must be between {lowest} and {highest}"
        )));
    }
    if form.count > MAX_COUNT {
        return Err(Error::range(format!("count must be at most {MAX_COUNT}")));
    }

    let text = match form.mode {
        GenerationMode::Numbers => {
            let numbers =
                generator::random_sequence(rng, form.count, form.min, form.max, form.kind)?;
            format!("Generated numbers ({}):\n{}", form.count, format_list(numbers))
        }
        GenerationMode::Unique => {
            let numbers = generator::unique_numbers(rng, form.min, form.max, form.count)?;
            format!("Generated unique numbers:\n{}", format_list(numbers))
        }
        GenerationMode::Weighted => {
            let numbers = generator::weighted_choice(
                rng,
                &WEIGHTED_VALUES[..],
                &WEIGHTED_WEIGHTS[..],
                form.count,
            )?;
            format!("Generated weighted numbers:\n{}", format_list(numbers))
        }
        GenerationMode::Distribution => {
            let samples = generator::distribution_sample(rng, form.distribution, form.count)?;
            format!(
                "Generated numbers from the {} distribution:\n{}",
                form.distribution,
                format_list(samples.iter().map(|s| format!("{s:?}")))
            )
        }
        GenerationMode::Secure => {
            let numbers = generator::secure_numbers(secure_rng, form.min, form.max, form.count)?;
            format!(
                "Generated cryptographically secure numbers:\n{}",
                format_list(numbers)
            )
        }
        GenerationMode::Passwords => {
            let passwords = generate_passwords(secure_rng, form.count, &form.policy);
            format!(
                "Generated passwords:\n{}",
                format_list(passwords.iter().map(|p| format!("'{}'", p.as_str())))
            )
        }
    };

    Ok(text)
}

fn format_list<T: fmt::Display, I: IntoIterator<Item = T>>(items: I) -> String {
    let items: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
#[path = "tests/session.rs"]
mod session_tests;
