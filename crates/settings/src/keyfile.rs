//! Key file parsing.
//!
//! A key file is a list of `[section]` blocks holding `key = value` lines.
//! Lines starting with `#` and blank lines are ignored. Values are kept as raw
//! strings; turning them into typed values is the binder's job.

use std::path::Path;

use collections::IndexMap;

use crate::error::{LoadError, SyntaxError};

type Section = IndexMap<String, String>;

/// Parsed key file: ordered sections of ordered key/value pairs.
///
/// Immutable once built. A reload produces a fresh document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: IndexMap<String, Section>,
}

impl ConfigDocument {
    /// Read and parse the key file at `path`.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // Size guard
        let size = content.len() as u64;
        if size > crate::constants::settings::MAX_FILE_SIZE {
            return Err(LoadError::TooLarge {
                path: path.to_path_buf(),
                size,
            });
        }

        Self::parse(&content).map_err(|source| LoadError::Syntax {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse key file text.
    pub fn parse(text: &str) -> Result<Self, SyntaxError> {
        let mut sections: IndexMap<String, Section> = IndexMap::default();
        let mut current: Option<String> = None;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_start();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') {
                let header = line.trim_end();
                let Some(name) = header
                    .strip_prefix('[')
                    .and_then(|rest| rest.strip_suffix(']'))
                else {
                    return Err(SyntaxError::Malformed {
                        line: line_no,
                        text: raw.to_string(),
                    });
                };
                if !is_valid_section_name(name) {
                    return Err(SyntaxError::InvalidSection {
                        line: line_no,
                        name: name.to_string(),
                    });
                }
                // A repeated header reopens the earlier section.
                sections.entry(name.to_string()).or_default();
                current = Some(name.to_string());
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(SyntaxError::Malformed {
                    line: line_no,
                    text: raw.to_string(),
                });
            };

            let key = key.trim();
            if key.is_empty() {
                return Err(SyntaxError::EmptyKey { line: line_no });
            }

            let Some(section) = current.as_ref() else {
                return Err(SyntaxError::KeyOutsideSection { line: line_no });
            };

            sections
                .entry(section.clone())
                .or_default()
                .insert(key.to_string(), value.trim_start().to_string());
        }

        Ok(Self { sections })
    }

    /// True when `section` contains `key`.
    pub fn has(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Raw value of `section.key`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// Value of `section.key` with `\s`, `\n`, `\t`, `\r` and `\\` decoded.
    pub fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.get(section, key).map(unescape)
    }

    /// Section names in file order.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Keys of `section` in file order (empty if the section is absent).
    pub fn keys<'a>(&'a self, section: &str) -> impl Iterator<Item = &'a str> {
        self.sections
            .get(section)
            .into_iter()
            .flat_map(|s| s.keys().map(String::as_str))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.values().all(|s| s.is_empty())
    }
}

fn is_valid_section_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(|c| c == '[' || c == ']' || c.is_control())
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('s') => out.push(' '),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            // Unknown escapes are kept as written.
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
