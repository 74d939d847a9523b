//! CAN Identifier Generator CLI
//!
//! Interactive front-end for the can-id-gen library. Prompts for a base
//! CAN ID, a set of named command bytes, and an output format, then prints
//! the full (command x motor) identifier table. The base ID, motor count,
//! and format can also be supplied as flags to skip the prompts.

use anyhow::{anyhow, Result};
use can_id_gen::{parse_unsigned, render_table, OutputFormat};
use clap::Parser;
use std::io;
use std::str::FromStr;

mod session;

/// CAN Identifier Generator - derive 29-bit CAN IDs for a multi-motor bus
#[derive(Parser, Debug)]
#[command(name = "can-id-cli")]
#[command(about = "Generate a table of 29-bit CAN identifiers for a multi-motor bus", long_about = None)]
#[command(version)]
struct Args {
    /// Number of motor slots on the bus
    #[arg(short, long, value_name = "COUNT", default_value_t = can_id_gen::DEFAULT_MOTOR_COUNT)]
    motors: u32,

    /// Base CAN ID (hex with '0x' prefix, or decimal); prompts if omitted
    #[arg(short, long, value_name = "ID")]
    base: Option<String>,

    /// Output format: hex or binary; prompts if omitted
    #[arg(short, long, value_name = "FORMAT", value_parser = OutputFormat::from_str)]
    format: Option<OutputFormat>,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("CAN ID Generator CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using generator library v{}", can_id_gen::VERSION);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();

    println!("=== CAN Identifier Generator ===");

    let base = match &args.base {
        Some(token) => parse_unsigned(token)
            .filter(|v| *v <= u64::from(u32::MAX))
            .map(|v| v as u32)
            .ok_or_else(|| {
                anyhow!("invalid base CAN ID '{}' (use hex 0x... or decimal)", token)
            })?,
        None => session::read_base_id(&mut reader, &mut writer)?,
    };
    println!("Base CAN ID set to: 0x{:03X}", base);

    let commands = session::collect_commands(&mut reader, &mut writer)?;
    println!("\nLoaded {} command(s).\n", commands.len());

    let format = match args.format {
        Some(format) => format,
        None => session::read_output_format(&mut reader, &mut writer)?,
    };
    println!("\nOutput format: {}\n", format.to_string().to_uppercase());

    print!("{}", render_table(base, &commands, args.motors, format));

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
