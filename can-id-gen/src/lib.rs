//! CAN Identifier Generator Library
//!
//! A small, stateless library for deriving 29-bit (extended format) CAN
//! identifiers on a multi-motor bus. Each identifier combines a bus-level
//! base ID, a per-motor offset, and a one-byte command opcode:
//!
//! ```text
//! combined = ((base + motor) << 8) | command_byte
//! ```
//!
//! The library has two halves:
//! - Command entry parsing: turns free-text entries ("Name 0xBB", plain,
//!   or comma-separated) into a validated, insertion-ordered [`CommandSet`]
//! - Identifier generation: the bit-packing arithmetic plus a fixed-width
//!   table renderer covering every (command, motor) pair
//!
//! The library does NOT:
//! - Transmit anything on a CAN bus
//! - Persist command sets or read configuration files
//! - Perform any console I/O
//!
//! All interactive prompting is in the application layer (can-id-cli).
//!
//! # Example Usage
//!
//! ```
//! use can_id_gen::{combine_id, render_table, CommandSet, OutputFormat};
//!
//! let mut commands = CommandSet::new();
//! commands.insert("SetSpeed", 0x64).unwrap();
//! commands.insert("GetStatus", 0x92).unwrap();
//!
//! assert_eq!(combine_id(0x160, 1, 0x64), 0x16164);
//!
//! let table = render_table(0x160, &commands, 8, OutputFormat::Hex);
//! assert!(table.contains("0x016164"));
//! ```

// Public modules
pub mod parser;
pub mod table;
pub mod types;

// Re-export main types for convenience
pub use parser::{parse_bulk_line, parse_entry, parse_unsigned, BulkOutcome, BulkReport};
pub use table::{combine_id, render_table, DEFAULT_MOTOR_COUNT};
pub use types::{CommandSet, OutputFormat, ParseError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
