//! Tests for the compare instructions CMP, CPX, and CPY.
//!
//! A compare performs register - M without storing the result: carry
//! means no borrow (register >= M), zero means equality, and negative
//! tracks bit 7 of the difference.

use emu6502::{FlatMemory, MemoryBus, CPU};

fn setup() -> (CPU, FlatMemory) {
    (CPU::new(), FlatMemory::new())
}

// ========== CMP ==========

#[test]
fn test_cmp_greater_than() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0xC9, 0x10]); // CMP #$10

    cpu.set_a(0x20);
    let start = cpu.cycles();
    cpu.step(&mut memory);

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x20); // register untouched
    assert_eq!(cpu.cycles() - start, 2);
}

#[test]
fn test_cmp_equal() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0xC9, 0x42]);

    cpu.set_a(0x42);
    cpu.step(&mut memory);

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_less_than() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0xC9, 0x20]);

    cpu.set_a(0x10);
    cpu.step(&mut memory);

    assert!(!cpu.flag_c()); // borrow
    assert!(!cpu.flag_z());
    assert!(cpu.flag_n()); // 0x10 - 0x20 = 0xF0
}

#[test]
fn test_cmp_difference_bit7_sets_n() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0xC9, 0x01]);

    // 0x90 - 0x01 = 0x8F: carry set, negative set
    cpu.set_a(0x90);
    cpu.step(&mut memory);

    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_cmp_zero_page_cycles() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0xC5, 0x42]);
    memory.write(0x0042, 0x05);

    cpu.set_a(0x05);
    let start = cpu.cycles();
    cpu.step(&mut memory);

    assert!(cpu.flag_z());
    assert_eq!(cpu.cycles() - start, 3);
}

// ========== CPX ==========

#[test]
fn test_cpx_immediate() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0xE0, 0x10]); // CPX #$10

    cpu.set_x(0x10);
    cpu.step(&mut memory);

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert_eq!(cpu.x(), 0x10);
}

#[test]
fn test_cpx_absolute() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0xEC, 0x00, 0x30]); // CPX $3000
    memory.write(0x3000, 0x50);

    cpu.set_x(0x20);
    let start = cpu.cycles();
    cpu.step(&mut memory);

    assert!(!cpu.flag_c());
    assert!(cpu.flag_n()); // 0x20 - 0x50 = 0xD0
    assert_eq!(cpu.cycles() - start, 4);
}

// ========== CPY ==========

#[test]
fn test_cpy_immediate() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0xC0, 0x01]); // CPY #$01

    cpu.set_y(0x02);
    cpu.step(&mut memory);

    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.y(), 0x02);
}

#[test]
fn test_cpy_zero_page() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0xC4, 0x10]); // CPY $10
    memory.write(0x0010, 0xFF);

    cpu.set_y(0x00);
    cpu.step(&mut memory);

    assert!(!cpu.flag_c());
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n()); // 0x00 - 0xFF = 0x01
}
