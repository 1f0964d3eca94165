//! Tests for the stack instructions PHA, PHP, PLA, PLP.
//!
//! The stack occupies page 0x0100-0x01FF and grows downward; the stack
//! pointer wraps within the page.

use emu6502::{FlatMemory, MemoryBus, CPU};

fn setup() -> (CPU, FlatMemory) {
    (CPU::new(), FlatMemory::new())
}

#[test]
fn test_pha_pushes_accumulator() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x48]); // PHA

    cpu.set_a(0x42);
    let start = cpu.cycles();
    cpu.step(&mut memory);

    assert_eq!(memory.read(0x01FF), 0x42);
    assert_eq!(cpu.sp(), 0xFE);
    assert_eq!(cpu.cycles() - start, 1);
}

#[test]
fn test_pla_pulls_and_sets_flags() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x68]); // PLA
    memory.write(0x01FF, 0x80);

    cpu.set_sp(0xFE);
    cpu.step(&mut memory);

    assert_eq!(cpu.a(), 0x80);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_pla_zero_flag() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x48, 0x68]); // PHA, PLA

    cpu.set_a(0x00);
    cpu.step(&mut memory);
    cpu.set_a(0x7F);
    cpu.step(&mut memory);

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_pha_pla_round_trip_preserves_sp() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x48, 0x68]); // PHA, PLA

    cpu.set_a(0xC3);
    let sp_before = cpu.sp();
    cpu.step(&mut memory);
    cpu.step(&mut memory);

    assert_eq!(cpu.a(), 0xC3);
    assert_eq!(cpu.sp(), sp_before);
}

#[test]
fn test_php_pushes_packed_status_as_stored() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x08]); // PHP

    cpu.set_flag_n(true);
    cpu.set_flag_c(true);
    cpu.step(&mut memory);

    // N and C only; bit 5 has no storage and stays clear
    assert_eq!(memory.read(0x01FF), 0x81);
    assert_eq!(memory.read(0x01FF) & 0x20, 0x00);
}

#[test]
fn test_plp_restores_flags_and_drops_bit5() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x28]); // PLP
    memory.write(0x01FF, 0b0110_0011); // V, bit 5, Z, C

    cpu.set_sp(0xFE);
    cpu.step(&mut memory);

    assert!(cpu.flag_v());
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.status() & 0x20, 0x00);
}

#[test]
fn test_php_plp_round_trip() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x08, 0x18, 0xB8, 0x28]); // PHP, CLC, CLV, PLP

    cpu.set_flag_c(true);
    cpu.set_flag_v(true);
    for _ in 0..4 {
        cpu.step(&mut memory);
    }

    assert!(cpu.flag_c());
    assert!(cpu.flag_v());
}

#[test]
fn test_plp_with_break_bit_ends_run() {
    let (mut cpu, mut memory) = setup();
    // PLA would be next, but the restored B flag stops the loop first
    memory.load(0x0600, &[0x28, 0x68]); // PLP, PLA
    memory.write(0x01FF, 0x10); // B bit set

    cpu.set_sp(0xFE);
    cpu.run(&mut memory);

    assert!(cpu.flag_b());
    assert_eq!(cpu.pc(), 0x0601); // loop stopped before the PLA
}

#[test]
fn test_push_wraps_stack_pointer() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x48, 0x48]); // PHA, PHA

    cpu.set_sp(0x00);
    cpu.set_a(0xAB);
    cpu.step(&mut memory);

    assert_eq!(memory.read(0x0100), 0xAB);
    assert_eq!(cpu.sp(), 0xFF);

    cpu.step(&mut memory);
    assert_eq!(memory.read(0x01FF), 0xAB);
    assert_eq!(cpu.sp(), 0xFE);
}
