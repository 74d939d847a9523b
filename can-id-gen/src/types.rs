//! Core types for the CAN identifier generator library
//!
//! This module defines the validated command mapping that the parser builds
//! and the table renderer consumes, along with the parse error taxonomy and
//! the output format selector.

use std::fmt;
use std::str::FromStr;

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing command entries
///
/// Every variant is recoverable: the offending entry is dropped (or the
/// prompt repeated) and the command set under construction is untouched.
/// The `Display` messages are user-facing and echoed verbatim by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid format: '{0}'. Use: CommandName 0xBB")]
    Format(String),

    #[error("Duplicate command name: '{0}' (skipped)")]
    DuplicateName(String),

    #[error("Invalid command byte in '{0}'. Use hex (0xBB) or decimal.")]
    NumberDecode(String),

    #[error("Command byte out of range: 0x{0:02X} (must be 0x00-0xFF)")]
    ByteRange(u64),
}

/// Textual rendering selected for combined identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Zero-padded 6-digit hexadecimal, "0x" prefixed
    #[default]
    Hex,
    /// Zero-padded 29-bit binary, "0b" prefixed
    Binary,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Hex => write!(f, "hex"),
            OutputFormat::Binary => write!(f, "binary"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "binary" => Ok(OutputFormat::Binary),
            _ => Err(format!(
                "unknown output format '{}' (expected 'hex' or 'binary')",
                s
            )),
        }
    }
}

/// An insertion-ordered mapping from command name to command byte
///
/// Insertion order is significant: it determines table row order. Keys are
/// unique; inserting an existing name is rejected, never overwritten.
/// Backed by a plain `Vec` because command sets are tiny and ordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSet {
    entries: Vec<(String, u8)>,
}

impl CommandSet {
    /// Create an empty command set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a command, rejecting duplicates
    pub fn insert(&mut self, name: impl Into<String>, byte: u8) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(ParseError::DuplicateName(name));
        }
        self.entries.push((name, byte));
        Ok(())
    }

    /// Check whether a command name is already present
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Look up the byte value for a command name
    pub fn get(&self, name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, byte)| byte)
    }

    /// Number of commands in the set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the set contains no commands
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (name, byte) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(n, b)| (n.as_str(), *b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut set = CommandSet::new();
        set.insert("SetSpeed", 0x64).unwrap();
        set.insert("GetStatus", 0x92).unwrap();
        set.insert("Stop", 0x80).unwrap();

        let names: Vec<&str> = set.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["SetSpeed", "GetStatus", "Stop"]);
        assert_eq!(set.get("GetStatus"), Some(0x92));
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut set = CommandSet::new();
        set.insert("SetSpeed", 0x64).unwrap();

        let err = set.insert("SetSpeed", 0x99).unwrap_err();
        assert_eq!(err, ParseError::DuplicateName("SetSpeed".to_string()));

        // Original value and size are untouched
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("SetSpeed"), Some(0x64));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("hex".parse::<OutputFormat>(), Ok(OutputFormat::Hex));
        assert_eq!("Binary".parse::<OutputFormat>(), Ok(OutputFormat::Binary));
        assert!("octal".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_error_messages() {
        let err = ParseError::ByteRange(0x100);
        assert_eq!(
            err.to_string(),
            "Command byte out of range: 0x100 (must be 0x00-0xFF)"
        );
    }
}
