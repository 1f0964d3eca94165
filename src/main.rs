//! Thin driver around the emulator core.
//!
//! Loads a raw machine-code image at the program origin 0x0600 (or seeds a
//! built-in demo program), runs the CPU until BRK, and prints the cycle
//! count. Set RUST_LOG=instr=trace for a per-instruction execution log.

use std::fs;
use std::process::ExitCode;

use clap::{Arg, Command};

use emu6502::{FlatMemory, MemoryBus, CPU};

/// Programs load and start at this address; reset pins PC here.
const LOAD_ADDR: u16 = 0x0600;

fn main() -> ExitCode {
    env_logger::init();

    let matches = Command::new("emu6502")
        .about("Runs a 6502 machine-code program until BRK")
        .arg(
            Arg::new("program")
                .value_name("FILE")
                .help("Raw machine-code image to load at $0600"),
        )
        .get_matches();

    let mut memory = FlatMemory::new();

    match matches.get_one::<String>("program") {
        Some(path) => {
            let image = match fs::read(path) {
                Ok(image) => image,
                Err(err) => {
                    eprintln!("emu6502: {}: {}", path, err);
                    return ExitCode::FAILURE;
                }
            };

            let available = 0x10000 - LOAD_ADDR as usize;
            if image.len() > available {
                eprintln!(
                    "emu6502: {}: image is {} bytes but only {} fit at ${:04X}",
                    path,
                    image.len(),
                    available,
                    LOAD_ADDR
                );
                return ExitCode::FAILURE;
            }

            memory.load(LOAD_ADDR, &image);
            log::info!("loaded {} bytes from {} at ${:04X}", image.len(), path, LOAD_ADDR);
        }
        None => {
            // Demo: add the seeded zero-page byte, double it, stop.
            memory.write(0x0000, 0x01);
            memory.load(
                LOAD_ADDR,
                &[
                    0x65, 0x00, // ADC $00
                    0x0A, // ASL A
                    0x00, // BRK
                ],
            );
            log::info!("no image given, running built-in demo program");
        }
    }

    let mut cpu = CPU::new();
    let cycles = cpu.run(&mut memory);

    println!("Program exited in {} cycles", cycles);
    ExitCode::SUCCESS
}
