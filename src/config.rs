//! A minimal git-style configuration document.
//!
//! Documents are ordered lists of `[section]` blocks, each holding ordered
//! `key = value` entries. This covers what a fresh repository's `config`
//! file needs and no more: no subsections, quoting, or continuation lines.

use std::{
    fmt,
    io::{self, Write},
    str::FromStr,
};

use thiserror::Error;

/// An in-memory configuration document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    sections: Vec<Section>,
}

/// A named group of key/value entries within a [`Config`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

/// Reasons why text can not be read as a [`Config`].
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ConfigParseError {
    #[error("line {0}: key outside of any section")]
    KeyOutsideSection(usize),

    #[error("line {0}: malformed section header")]
    BadSectionHeader(usize),

    #[error("line {0}: expected `key = value`")]
    MissingEquals(usize),
}

impl Config {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section named `name` and return it for population.
    ///
    /// If a section of that name already exists, it is returned instead.
    pub fn new_section(&mut self, name: &str) -> &mut Section {
        let idx = match self.sections.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section {
                    name: name.to_owned(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        };

        &mut self.sections[idx]
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Serialize the whole document to `w`.
    pub fn write_to<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                writeln!(w)?;
            }

            writeln!(w, "[{}]", section.name)?;
            for (key, value) in &section.entries {
                writeln!(w, "{} = {}", key, value)?;
            }
        }

        Ok(())
    }
}

impl Section {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set `key` to `value`, replacing any existing value in place.
    pub fn set(&mut self, key: &str, value: &str) -> &mut Self {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_owned(),
            None => self.entries.push((key.to_owned(), value.to_owned())),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.write_to(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

impl FromStr for Config {
    type Err = ConfigParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut config = Config::new();
        let mut current: Option<String> = None;

        for (idx, line) in s.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') {
                if !line.ends_with(']') || line.len() < 3 {
                    return Err(ConfigParseError::BadSectionHeader(line_no));
                }
                let name = line[1..line.len() - 1].trim();
                config.new_section(name);
                current = Some(name.to_owned());
                continue;
            }

            let section = match &current {
                Some(name) => name.clone(),
                None => return Err(ConfigParseError::KeyOutsideSection(line_no)),
            };

            let eq = line.find('=').ok_or(ConfigParseError::MissingEquals(line_no))?;
            let key = line[..eq].trim();
            let value = line[eq + 1..].trim();
            config.new_section(&section).set(key, value);
        }

        Ok(config)
    }
}
