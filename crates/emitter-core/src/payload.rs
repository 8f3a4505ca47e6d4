//! The fixed configuration payload
//!
//! The payload is a header comment followed by ordered `key=value` lines.
//! It is compiled in; nothing at runtime can change it.

use std::io::{self, Write};

use crate::LineEnding;

/// A single `key=value` line of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: &'static str,
    pub value: &'static str,
}

impl ConfigEntry {
    pub const fn new(key: &'static str, value: &'static str) -> Self {
        Self { key, value }
    }
}

impl std::fmt::Display for ConfigEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Ordered payload written by the emitter.
///
/// Entries are written in slice order. Keys are not required to be unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmittedConfig {
    header: &'static str,
    entries: &'static [ConfigEntry],
}

const DEFAULT_ENTRIES: &[ConfigEntry] = &[
    ConfigEntry::new("project_name", "CMakeLanguageModelToolsExample"),
    ConfigEntry::new("version", "1.0.0"),
    ConfigEntry::new("debug_mode", "true"),
    ConfigEntry::new("log_level", "info"),
];

impl EmittedConfig {
    /// The payload the `config-emitter` binary writes.
    pub const DEFAULT: Self = Self {
        header: "# Auto-generated configuration file",
        entries: DEFAULT_ENTRIES,
    };

    /// The header comment line, including its leading `#`.
    pub fn header(&self) -> &'static str {
        self.header
    }

    pub fn entries(&self) -> &'static [ConfigEntry] {
        self.entries
    }

    /// Number of key-value entries (the header is not counted).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the header and every entry, each followed by `ending`.
    pub fn write_to<W: Write>(&self, mut writer: W, ending: LineEnding) -> io::Result<()> {
        let eol = ending.as_str();
        write!(writer, "{}{}", self.header, eol)?;
        for entry in self.entries {
            write!(writer, "{}{}", entry, eol)?;
        }
        Ok(())
    }

    /// Render the payload into a string.
    pub fn render(&self, ending: LineEnding) -> String {
        let eol = ending.as_str();
        let mut out = format!("{}{eol}", self.header);
        for entry in self.entries {
            out.push_str(&format!("{entry}{eol}"));
        }
        out
    }
}

impl Default for EmittedConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for EmittedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(LineEnding::Lf))
    }
}
