//! Interactive acquisition loops
//!
//! Each loop is generic over the console streams so tests can replay a
//! scripted session through an in-memory reader. Malformed input is never
//! fatal: every loop reports the problem and re-prompts. The only error
//! path out of this module is the console itself failing (stdin closing
//! mid-session).

use anyhow::{bail, Context, Result};
use can_id_gen::{
    parse_bulk_line, parse_entry, parse_unsigned, BulkOutcome, BulkReport, CommandSet,
    OutputFormat,
};
use std::io::{BufRead, Write};

/// Read the next line, trimmed. Fails only if the stream is closed.
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    let n = reader
        .read_line(&mut line)
        .context("failed to read from console")?;
    if n == 0 {
        bail!("input closed before the session finished");
    }
    Ok(line.trim().to_string())
}

/// Prompt for the base CAN ID until a valid hex or decimal value arrives.
pub fn read_base_id<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<u32> {
    loop {
        write!(writer, "Enter base CAN ID (hex with '0x' prefix or decimal): ")?;
        writer.flush()?;
        let input = read_trimmed_line(reader)?;

        match parse_unsigned(&input) {
            Some(value) if value <= u64::from(u32::MAX) => return Ok(value as u32),
            _ => writeln!(
                writer,
                "Invalid input. Please enter a valid hex (0x...) or decimal number."
            )?,
        }
    }
}

/// Collect at least one command, auto-detecting the input shape from the
/// first line.
///
/// Detection order matters and must not be rearranged:
/// 1. line contains a comma -> comma-separated mode (falling back to
///    single-entry mode if nothing was accepted)
/// 2. line parses as one entry -> single-entry interactive mode
/// 3. line is "done" -> invalid while the set is empty, restart
/// 4. anything else -> bulk/paste mode, one entry per line until "done"
pub fn collect_commands<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<CommandSet> {
    loop {
        let mut commands = CommandSet::new();

        writeln!(writer)?;
        writeln!(writer, "Enter commands (name and byte value). Options:")?;
        writeln!(writer, "  - Single entry: CommandName 0xBB (type 'done' when finished)")?;
        writeln!(
            writer,
            "  - Bulk paste: Paste multiple lines (one command per line), then type 'done'"
        )?;
        writeln!(
            writer,
            "  - Comma-separated: Command1 0x64, Command2 0x92, Command3 0x80"
        )?;
        write!(writer, "\nEnter command(s): ")?;
        writer.flush()?;
        let first = read_trimmed_line(reader)?;

        if first.contains(',') {
            report_bulk(&parse_bulk_line(&first, &mut commands), writer)?;
            if !commands.is_empty() {
                return Ok(commands);
            }
            // Nothing accepted: fall back to single-entry mode
            return interactive_entry(reader, writer, commands);
        }

        match parse_entry(&first, &commands) {
            Ok(Some((name, byte))) => {
                let _ = commands.insert(name.clone(), byte);
                writeln!(writer, "Added: {} = 0x{:02X}", name, byte)?;
                return interactive_entry(reader, writer, commands);
            }
            Ok(None) => {
                if first.eq_ignore_ascii_case("done") {
                    // "done" before any command: restart the acquisition
                    writeln!(writer, "Please add at least one command.")?;
                    continue;
                }
                // Blank first line: drop into bulk mode below
            }
            Err(_) => {
                // Unparseable first line: assume the user pasted bulk input;
                // parse_bulk_line re-parses it and reports the rejection.
            }
        }

        writeln!(
            writer,
            "(Bulk paste mode - enter one command per line, type 'done' when finished)"
        )?;
        report_bulk(&parse_bulk_line(&first, &mut commands), writer)?;
        return bulk_entry(reader, writer, commands);
    }
}

/// Single-entry interactive loop: one command per line until "done".
fn interactive_entry<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    mut commands: CommandSet,
) -> Result<CommandSet> {
    loop {
        write!(writer, "Enter command (or 'done'): ")?;
        writer.flush()?;
        let input = read_trimmed_line(reader)?;

        if input.eq_ignore_ascii_case("done") {
            if commands.is_empty() {
                writeln!(writer, "Please add at least one command.")?;
                continue;
            }
            return Ok(commands);
        }

        match parse_entry(&input, &commands) {
            Ok(Some((name, byte))) => {
                let _ = commands.insert(name.clone(), byte);
                writeln!(writer, "Added: {} = 0x{:02X}", name, byte)?;
            }
            Ok(None) => {} // blank line
            Err(err) => writeln!(writer, "{}", err)?,
        }
    }
}

/// Bulk/paste loop: feed every line through the bulk parser until "done".
fn bulk_entry<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    mut commands: CommandSet,
) -> Result<CommandSet> {
    writeln!(writer, "(Paste commands, one per line. Type 'done' to finish.)")?;
    loop {
        let input = read_trimmed_line(reader)?;

        if input.eq_ignore_ascii_case("done") {
            if commands.is_empty() {
                writeln!(writer, "Please add at least one command.")?;
                continue;
            }
            return Ok(commands);
        }

        if !input.is_empty() {
            report_bulk(&parse_bulk_line(&input, &mut commands), writer)?;
        }
    }
}

/// Echo per-entry feedback in input order.
fn report_bulk<W: Write>(report: &BulkReport, writer: &mut W) -> Result<()> {
    for outcome in &report.outcomes {
        match outcome {
            BulkOutcome::Added(name, byte) => {
                writeln!(writer, "Added: {} = 0x{:02X}", name, byte)?;
            }
            BulkOutcome::Rejected(entry, err) => {
                log::debug!("rejected entry '{}': {}", entry, err);
                writeln!(writer, "{}", err)?;
            }
        }
    }
    Ok(())
}

/// Prompt for the output format via a two-option menu.
pub fn read_output_format<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<OutputFormat> {
    loop {
        write!(
            writer,
            "\nChoose output format:\n  1. Hexadecimal (0x...)\n  2. Binary (0b...)\nEnter choice (1 or 2): "
        )?;
        writer.flush()?;
        let choice = read_trimmed_line(reader)?;

        match choice.as_str() {
            "1" => return Ok(OutputFormat::Hex),
            "2" => return Ok(OutputFormat::Binary),
            _ => writeln!(writer, "Invalid choice. Please enter 1 or 2.")?,
        }
    }
}
