use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::Result;

/// The rendered results of one session, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub fn push<S: Into<String>>(&mut self, entry: S) {
        self.entries.push(entry.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes every entry followed by a newline to `path`, replacing whatever the file held.
    pub fn export(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        for entry in &self.entries {
            writer.write_all(entry.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        log::info!(
            "exported {} history entries to {}",
            self.entries.len(),
            path.display()
        );
        Ok(())
    }
}

impl From<Vec<String>> for History {
    fn from(entries: Vec<String>) -> Self {
        History { entries }
    }
}

#[cfg(test)]
#[path = "tests/history.rs"]
mod history_tests;
