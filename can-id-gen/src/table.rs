//! Identifier combination and table rendering
//!
//! The combined identifier packs the motor-adjusted base into the high
//! bits and the command byte into the low 8 bits:
//!
//! ```text
//! combined = ((base + motor) << 8) | command_byte
//! ```
//!
//! With a typical 21-bit base this yields a 29-bit extended CAN ID. No
//! range check is applied: a larger base simply produces a wider value,
//! and the rendered cell grows past its column accordingly.

use crate::types::{CommandSet, OutputFormat};

/// Default number of motor slots on the bus
pub const DEFAULT_MOTOR_COUNT: u32 = 8;

/// Width of the command-name column
const COMMAND_WIDTH: usize = 50;

/// Combine base ID, motor index, and command byte into one identifier.
///
/// Pure arithmetic, computed in `u64` so any `u32` base survives the
/// shift without wrapping.
pub fn combine_id(base: u32, motor: u32, cmd: u8) -> u64 {
    let combined_base = u64::from(base) + u64::from(motor);
    (combined_base << 8) | u64::from(cmd)
}

fn format_id(value: u64, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => format!("0x{:06X}", value),
        OutputFormat::Binary => format!("0b{:029b}", value),
    }
}

/// Render the full (command x motor) identifier table as text.
///
/// One row per command in insertion order; one column per motor index
/// 1..=`motor_count` in ascending order. Trusts the invariants the parser
/// already enforced on `commands`.
pub fn render_table(
    base: u32,
    commands: &CommandSet,
    motor_count: u32,
    format: OutputFormat,
) -> String {
    let motor_width = match format {
        OutputFormat::Binary => 14,
        OutputFormat::Hex => 10,
    };

    let mut out = String::new();

    out.push_str(&format!("{:<width$}", "Command", width = COMMAND_WIDTH));
    for motor in 1..=motor_count {
        out.push_str(&format!(" M{:<width$}", motor, width = motor_width - 2));
    }
    out.push('\n');
    out.push_str(&"-".repeat(COMMAND_WIDTH + motor_width * motor_count as usize));
    out.push('\n');

    for (name, cmd_byte) in commands.iter() {
        out.push_str(&format!("{:<width$}", name, width = COMMAND_WIDTH));
        for motor in 1..=motor_count {
            let combined = combine_id(base, motor, cmd_byte);
            out.push_str(&format!(
                " {:<width$}",
                format_id(combined, format),
                width = motor_width
            ));
        }
        out.push('\n');
    }

    out
}
