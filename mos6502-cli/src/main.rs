//! Thin host around [`mos6502_core`]: loads a ROM image from disk, wires
//! stdin/`--keys` into the keyboard port, and prints `CharOut` events to the
//! terminal. Everything the core crate explicitly refuses to own — file
//! I/O, argument parsing, process exit codes, terminal color — lives here.

use std::fs;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use log::info;

use mos6502_core::{Emulator, Event};

/// Run a 6502 ROM image against a 64 KiB machine with a keyboard port at
/// $F000 and a character-out port at $F001.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a raw binary ROM image.
    rom: String,

    /// Address the ROM image is copied to.
    #[arg(long, value_parser = parse_hex_or_decimal, default_value = "0x8000")]
    base: u16,

    /// Override the RESET vector (defaults to `--base`) if the ROM image
    /// doesn't carry its own vector table at $FFFC/$FFFD.
    #[arg(long, value_parser = parse_hex_or_decimal)]
    reset_vector: Option<u16>,

    /// Seed the keyboard buffer with this literal text before running.
    #[arg(long)]
    keys: Option<String>,

    /// After the ROM halts, keep feeding stdin to the keyboard buffer one
    /// line at a time, running the program between lines.
    #[arg(long)]
    interactive: bool,

    /// Maximum instructions to execute per `run` call.
    #[arg(long, default_value_t = 200_000)]
    max_steps: u64,

    /// Emit a `TracePC`/`TraceJSR` event to the log for every step.
    #[arg(long)]
    trace: bool,
}

fn parse_hex_or_decimal(raw: &str) -> Result<u16, String> {
    let raw = raw.trim();
    let without_prefix = raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X"));
    match without_prefix {
        Some(hex) => u16::from_str_radix(hex, 16).map_err(|e| e.to_string()),
        None => raw.parse::<u16>().map_err(|e| e.to_string()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{} {message}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let bytes = fs::read(&cli.rom).map_err(|e| format!("reading {}: {e}", cli.rom))?;

    let mut emulator = Emulator::new();
    emulator
        .load_rom(cli.base, &bytes)
        .map_err(|e| e.to_string())?;

    let reset_vector = cli.reset_vector.unwrap_or(cli.base);
    emulator.poke(0xFFFC, (reset_vector & 0xFF) as u8);
    emulator.poke(0xFFFD, (reset_vector >> 8) as u8);

    emulator.cpu.trace_enabled = cli.trace;
    info!(
        "loaded {} bytes at {:#06x}, reset vector {:#06x}",
        bytes.len(),
        cli.base,
        reset_vector
    );

    emulator.boot();
    if let Some(keys) = &cli.keys {
        emulator.send_keys(keys).map_err(|e| e.to_string())?;
    }

    emulator.run(cli.max_steps).map_err(|e| e.to_string())?;
    drain_and_print(&mut emulator);

    if cli.interactive {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.map_err(|e| e.to_string())?;
            emulator.cpu.halted = false;
            emulator.send_keys(&format!("{line}\r")).map_err(|e| e.to_string())?;
            emulator.run(cli.max_steps).map_err(|e| e.to_string())?;
            drain_and_print(&mut emulator);
        }
    }

    Ok(())
}

/// Drain pending events and render `CharOut` bytes to stdout, dimming
/// non-printable control bytes rather than dropping them.
fn drain_and_print(emulator: &mut Emulator) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for event in emulator.drain_events() {
        match event {
            Event::CharOut(byte) => {
                if (0x20..0x7F).contains(&byte) || byte == b'\n' || byte == b'\r' {
                    let _ = write!(handle, "{}", byte as char);
                } else {
                    let _ = write!(handle, "{}", format!("[{byte:#04x}]").dimmed());
                }
            }
            Event::ProgramHalted(steps) => {
                info!("halted after {steps} steps");
            }
            Event::TracePC(pc) => {
                log::trace!("pc={pc:#06x}");
            }
            Event::TraceJSR(target) => {
                log::trace!("jsr -> {target:#06x}");
            }
        }
    }
    let _ = handle.flush();
}
