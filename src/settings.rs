use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    generator::{Distribution, NumericKind},
    password_generator::PasswordPolicy,
    session::{Form, GenerationMode},
};

const DEFAULT_HISTORY_FILE: &str = "history.txt";

/// Everything that survives between runs: the last form values, the theme and where the
/// history is exported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub form: Form,
    pub dark_theme: bool,
    pub history_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            form: Form::default(),
            dark_theme: true,
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }
}

impl Settings {
    /// Reads the settings out of a merged configuration, every key must have a value.
    pub fn from_config(settings: &config::Config) -> Result<Settings> {
        let count = settings.get_int("count")?;
        let count = usize::try_from(count)
            .map_err(|_| Error::GenericDyn(format!("count must not be negative, got {count}")))?;

        let form = Form {
            min: settings.get_int("min")?,
            max: settings.get_int("max")?,
            count,
            mode: settings.get_str("mode")?.parse()?,
            kind: settings.get_str("kind")?.parse()?,
            distribution: settings.get_str("distribution")?.parse()?,
            policy: PasswordPolicy {
                include_uppercase: settings.get_bool("uppercase")?,
                include_digits: settings.get_bool("digits")?,
                include_symbols: settings.get_bool("symbols")?,
            },
        };

        Ok(Settings {
            form,
            dark_theme: settings.get_bool("dark_theme")?,
            history_file: PathBuf::from(settings.get_str("history_file")?),
        })
    }

    fn to_table(&self) -> Result<toml::Table> {
        let count = i64::try_from(self.form.count).map_err(|_| Error::Generic("count too large"))?;

        let mut table = toml::Table::new();
        table.insert("min".to_owned(), toml::Value::Integer(self.form.min));
        table.insert("max".to_owned(), toml::Value::Integer(self.form.max));
        table.insert("count".to_owned(), toml::Value::Integer(count));
        table.insert("mode".to_owned(), self.form.mode.key().into());
        table.insert("kind".to_owned(), self.form.kind.key().into());
        table.insert(
            "distribution".to_owned(),
            self.form.distribution.key().into(),
        );
        table.insert(
            "uppercase".to_owned(),
            toml::Value::Boolean(self.form.policy.include_uppercase),
        );
        table.insert(
            "digits".to_owned(),
            toml::Value::Boolean(self.form.policy.include_digits),
        );
        table.insert(
            "symbols".to_owned(),
            toml::Value::Boolean(self.form.policy.include_symbols),
        );
        table.insert("dark_theme".to_owned(), toml::Value::Boolean(self.dark_theme));
        table.insert(
            "history_file".to_owned(),
            toml::Value::String(self.history_file.to_string_lossy().into_owned()),
        );

        Ok(table)
    }
}

fn set_defaults(settings: &mut config::Config) -> Result<()> {
    let defaults = Settings::default();

    settings.set_default("min", defaults.form.min)?;
    settings.set_default("max", defaults.form.max)?;
    settings.set_default("count", defaults.form.count as i64)?;
    settings.set_default("mode", defaults.form.mode.key())?;
    settings.set_default("kind", defaults.form.kind.key())?;
    settings.set_default("distribution", defaults.form.distribution.key())?;
    settings.set_default("uppercase", defaults.form.policy.include_uppercase)?;
    settings.set_default("digits", defaults.form.policy.include_digits)?;
    settings.set_default("symbols", defaults.form.policy.include_symbols)?;
    settings.set_default("dark_theme", defaults.dark_theme)?;
    settings.set_default("history_file", DEFAULT_HISTORY_FILE)?;

    Ok(())
}

/// Where the settings file lives, `$XDG_CONFIG_HOME/randgen/settings.toml` or
/// `$HOME/.config/randgen/settings.toml`.
pub fn xdg_config_file_location(
    home: &Option<PathBuf>,
    xdg_config_home: &Option<PathBuf>,
) -> Result<PathBuf> {
    let config_home = match xdg_config_home {
        Some(path) => path.clone(),
        None => match home {
            Some(home) => home.join(".config"),
            None => return Err(Error::Generic("no home directory set")),
        },
    };

    Ok(config_home.join("randgen").join("settings.toml"))
}

pub fn file_settings(file: &Path) -> config::File<config::FileSourceFile> {
    config::File::from(file.to_path_buf())
}

/// Builds the settings from the defaults, the settings file if there is one, and `RANDGEN_`
/// environment variables, in increasing priority.
pub fn read_config(home: &Option<PathBuf>, xdg_config_home: &Option<PathBuf>) -> Result<Settings> {
    let mut settings = config::Config::default();
    set_defaults(&mut settings)?;

    let config_file = xdg_config_file_location(home, xdg_config_home)?;
    if config_file.exists() {
        log::debug!("reading settings from {}", config_file.display());
        settings.merge(file_settings(&config_file))?;
    }

    settings.merge(config::Environment::with_prefix("RANDGEN"))?;

    Settings::from_config(&settings)
}

/// Writes `settings` to `path` as TOML, creating the parent directories.
pub fn save_config(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string(&settings.to_table()?)?;
    std::fs::write(path, contents)?;

    log::info!("saved settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "tests/settings.rs"]
mod settings_tests;
