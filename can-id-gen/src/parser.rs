//! Command entry parsing
//!
//! Turns free-text command entries into validated (name, byte) pairs. An
//! entry is a command name followed by whitespace and a byte-value token;
//! the token is the *last* whitespace-delimited word, so names may contain
//! internal spaces ("Set Target Speed 0x64").
//!
//! Three textual shapes are supported without the caller declaring which
//! one is in use: a single entry per line, a comma-separated list on one
//! line, and pasted multi-line input (one entry per line, fed through
//! [`parse_bulk_line`] line by line).

use crate::types::{CommandSet, ParseError};

/// Sentinel that terminates interactive entry (case-insensitive)
pub const DONE_SENTINEL: &str = "done";

/// Decode an unsigned integer token: "0x"-prefixed hex or plain decimal
pub fn parse_unsigned(token: &str) -> Option<u64> {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' && bytes[1].eq_ignore_ascii_case(&b'x') {
        u64::from_str_radix(&token[2..], 16).ok()
    } else {
        token.parse().ok()
    }
}

/// Parse a single command entry against an existing set.
///
/// Returns `Ok(None)` for an empty entry or the "done" sentinel (a no-op,
/// not an error), `Ok(Some((name, byte)))` for a valid entry, and a
/// [`ParseError`] describing the rejection otherwise. Insertion into the
/// set is the caller's responsibility.
pub fn parse_entry(
    entry: &str,
    existing: &CommandSet,
) -> Result<Option<(String, u8)>, ParseError> {
    let entry = entry.trim();
    if entry.is_empty() || entry.eq_ignore_ascii_case(DONE_SENTINEL) {
        return Ok(None);
    }

    // Split off the trailing byte token; everything before it is the name.
    let mut parts = entry.rsplitn(2, char::is_whitespace);
    let byte_token = parts.next().unwrap_or("");
    let name = parts.next().map(str::trim_end).unwrap_or("");
    if name.is_empty() {
        return Err(ParseError::Format(entry.to_string()));
    }

    if existing.contains(name) {
        return Err(ParseError::DuplicateName(name.to_string()));
    }

    let value = parse_unsigned(byte_token)
        .ok_or_else(|| ParseError::NumberDecode(entry.to_string()))?;
    if value > 0xFF {
        return Err(ParseError::ByteRange(value));
    }

    Ok(Some((name.to_string(), value as u8)))
}

/// Outcome of one piece of a bulk line, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkOutcome {
    /// The entry was valid and has been inserted into the set
    Added(String, u8),
    /// The entry was rejected; the set is unchanged
    Rejected(String, ParseError),
}

/// Per-piece report produced by [`parse_bulk_line`]
///
/// Outcomes are in input order so callers can echo interleaved
/// added/rejected feedback exactly as the entries appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    pub outcomes: Vec<BulkOutcome>,
}

impl BulkReport {
    /// Number of entries that were inserted
    pub fn added_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, BulkOutcome::Added(..)))
            .count()
    }
}

/// Parse one line of bulk input, inserting valid entries into `commands`.
///
/// The line is split on commas when any comma is present (each piece
/// trimmed), otherwise treated as a single entry. "done" pieces are
/// skipped. Successes are inserted immediately, so later pieces on the
/// same line see earlier ones as duplicates.
pub fn parse_bulk_line(line: &str, commands: &mut CommandSet) -> BulkReport {
    let mut report = BulkReport::default();

    let pieces: Vec<&str> = if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        vec![line.trim()]
    };

    for piece in pieces {
        match parse_entry(piece, commands) {
            Ok(Some((name, byte))) => {
                // Cannot collide: parse_entry already checked for duplicates
                let _ = commands.insert(name.clone(), byte);
                report.outcomes.push(BulkOutcome::Added(name, byte));
            }
            Ok(None) => {} // empty piece or "done" sentinel
            Err(err) => {
                log::debug!("rejected entry '{}': {}", piece, err);
                report.outcomes.push(BulkOutcome::Rejected(piece.to_string(), err));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unsigned() {
        assert_eq!(parse_unsigned("0x64"), Some(0x64));
        assert_eq!(parse_unsigned("0X1FF"), Some(0x1FF));
        assert_eq!(parse_unsigned("100"), Some(100));
        assert_eq!(parse_unsigned("0"), Some(0));
        assert_eq!(parse_unsigned("0x"), None);
        assert_eq!(parse_unsigned("banana"), None);
        assert_eq!(parse_unsigned("-5"), None);
    }

    #[test]
    fn test_parse_entry_hex_and_decimal() {
        let set = CommandSet::new();
        assert_eq!(
            parse_entry("SetSpeed 0x64", &set),
            Ok(Some(("SetSpeed".to_string(), 0x64)))
        );
        assert_eq!(
            parse_entry("SetSpeed 100", &set),
            Ok(Some(("SetSpeed".to_string(), 100)))
        );
    }

    #[test]
    fn test_parse_entry_name_with_spaces() {
        let set = CommandSet::new();
        assert_eq!(
            parse_entry("Set Target Speed 0xFF", &set),
            Ok(Some(("Set Target Speed".to_string(), 0xFF)))
        );
    }

    #[test]
    fn test_parse_entry_sentinel_and_empty() {
        let set = CommandSet::new();
        assert_eq!(parse_entry("", &set), Ok(None));
        assert_eq!(parse_entry("done", &set), Ok(None));
        assert_eq!(parse_entry("DONE", &set), Ok(None));
        assert_eq!(parse_entry("  done  ", &set), Ok(None));
    }

    #[test]
    fn test_parse_entry_format_error() {
        let set = CommandSet::new();
        assert_eq!(
            parse_entry("JustOneWord", &set),
            Err(ParseError::Format("JustOneWord".to_string()))
        );
    }

    #[test]
    fn test_parse_entry_duplicate() {
        let mut set = CommandSet::new();
        set.insert("SetSpeed", 0x64).unwrap();
        assert_eq!(
            parse_entry("SetSpeed 0x92", &set),
            Err(ParseError::DuplicateName("SetSpeed".to_string()))
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_parse_entry_bad_number() {
        let set = CommandSet::new();
        assert_eq!(
            parse_entry("Cmd 0xZZ", &set),
            Err(ParseError::NumberDecode("Cmd 0xZZ".to_string()))
        );
        assert_eq!(
            parse_entry("Cmd twelve", &set),
            Err(ParseError::NumberDecode("Cmd twelve".to_string()))
        );
    }

    #[test]
    fn test_parse_entry_range() {
        let set = CommandSet::new();
        assert_eq!(parse_entry("Cmd 0x100", &set), Err(ParseError::ByteRange(0x100)));
        assert_eq!(parse_entry("Cmd 256", &set), Err(ParseError::ByteRange(256)));
        // Boundary values are accepted
        assert_eq!(parse_entry("Lo 0", &set), Ok(Some(("Lo".to_string(), 0))));
        assert_eq!(parse_entry("Hi 0xFF", &set), Ok(Some(("Hi".to_string(), 0xFF))));
    }

    #[test]
    fn test_bulk_line_comma_separated() {
        let mut set = CommandSet::new();
        let report = parse_bulk_line("Cmd1 0x64, Cmd2 0x92, Cmd3 0x80", &mut set);

        assert_eq!(report.added_count(), 3);
        assert_eq!(set.len(), 3);
        let entries: Vec<(&str, u8)> = set.iter().collect();
        assert_eq!(
            entries,
            vec![("Cmd1", 0x64), ("Cmd2", 0x92), ("Cmd3", 0x80)]
        );
    }

    #[test]
    fn test_bulk_line_single_entry() {
        let mut set = CommandSet::new();
        let report = parse_bulk_line("SetSpeed 0x64", &mut set);
        assert_eq!(report.added_count(), 1);
        assert_eq!(set.get("SetSpeed"), Some(0x64));
    }

    #[test]
    fn test_bulk_line_intra_line_duplicate() {
        let mut set = CommandSet::new();
        let report = parse_bulk_line("Cmd 0x64, Cmd 0x92", &mut set);

        // Second piece sees the first as a duplicate
        assert_eq!(report.added_count(), 1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("Cmd"), Some(0x64));
        assert_eq!(
            report.outcomes[1],
            BulkOutcome::Rejected(
                "Cmd 0x92".to_string(),
                ParseError::DuplicateName("Cmd".to_string())
            )
        );
    }

    #[test]
    fn test_bulk_line_skips_done_and_reports_rejects() {
        let mut set = CommandSet::new();
        let report = parse_bulk_line("Cmd1 0x64, done, Cmd2 0x999", &mut set);

        assert_eq!(set.len(), 1);
        assert_eq!(report.outcomes.len(), 2); // "done" produces no outcome
        assert!(matches!(
            report.outcomes[1],
            BulkOutcome::Rejected(_, ParseError::ByteRange(0x999))
        ));
    }

    #[test]
    fn test_rejection_never_mutates() {
        let mut set = CommandSet::new();
        set.insert("Cmd", 0x64).unwrap();

        for line in ["Cmd 0x92", "Cmd 0x92", "Other 0x500", "nonsense"] {
            let before = set.clone();
            let report = parse_bulk_line(line, &mut set);
            assert_eq!(report.added_count(), 0);
            assert_eq!(set, before);
        }
    }
}
