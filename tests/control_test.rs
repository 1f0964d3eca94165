//! Tests for JMP, JSR, RTS, RTI, BRK, and NOP.

use emu6502::{FlatMemory, MemoryBus, CPU};

fn setup() -> (CPU, FlatMemory) {
    (CPU::new(), FlatMemory::new())
}

// ========== JMP ==========

#[test]
fn test_jmp_absolute() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x4C, 0x34, 0x12]); // JMP $1234

    let start = cpu.cycles();
    cpu.step(&mut memory);

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.cycles() - start, 4);
}

#[test]
fn test_jmp_indirect_dereferences_pointer() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x6C, 0x00, 0x30]); // JMP ($3000)
    memory.write(0x3000, 0x78);
    memory.write(0x3001, 0x56);

    let start = cpu.cycles();
    cpu.step(&mut memory);

    assert_eq!(cpu.pc(), 0x5678);
    assert_eq!(cpu.cycles() - start, 5);
}

#[test]
fn test_jmp_indirect_page_wrap_quirk() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x6C, 0xFF, 0x30]); // JMP ($30FF)

    // High byte comes from 0x3000, not 0x3100
    memory.write(0x30FF, 0x34);
    memory.write(0x3000, 0x12);
    memory.write(0x3100, 0xEE);

    cpu.step(&mut memory);

    assert_eq!(cpu.pc(), 0x1234);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_return_address_minus_one() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x20, 0x00, 0x30]); // JSR $3000

    let start = cpu.cycles();
    cpu.step(&mut memory);

    assert_eq!(cpu.pc(), 0x3000);
    // PC past the operand was 0x0603; 0x0602 is pushed high-first
    assert_eq!(memory.read(0x01FF), 0x06);
    assert_eq!(memory.read(0x01FE), 0x02);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(cpu.cycles() - start, 4);
}

#[test]
fn test_rts_adds_one_to_popped_address() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x60]); // RTS
    memory.write(0x01FE, 0x02);
    memory.write(0x01FF, 0x06);

    cpu.set_sp(0xFD);
    let start = cpu.cycles();
    cpu.step(&mut memory);

    assert_eq!(cpu.pc(), 0x0603);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.cycles() - start, 1);
}

#[test]
fn test_nested_jsr_rts() {
    let (mut cpu, mut memory) = setup();
    // main: JSR $0620 / BRK
    memory.load(0x0600, &[0x20, 0x20, 0x06, 0x00]);
    // sub1 at 0x0620: JSR $0630 / INX / RTS
    memory.load(0x0620, &[0x20, 0x30, 0x06, 0xE8, 0x60]);
    // sub2 at 0x0630: INX / RTS
    memory.load(0x0630, &[0xE8, 0x60]);

    cpu.run(&mut memory);

    assert_eq!(cpu.x(), 0x02); // both subroutine bodies ran
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.pc(), 0x0604);
}

// ========== RTI ==========

#[test]
fn test_rti_restores_status_then_pc() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x40]); // RTI
    memory.write(0x01FD, 0x81); // status: N and C
    memory.write(0x01FE, 0x34); // PC low
    memory.write(0x01FF, 0x12); // PC high

    cpu.set_sp(0xFC);
    let start = cpu.cycles();
    cpu.step(&mut memory);

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_n());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.cycles() - start, 1);
}

#[test]
fn test_rti_unlike_rts_has_no_address_bias() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x40]);
    memory.write(0x01FD, 0x00);
    memory.write(0x01FE, 0x00);
    memory.write(0x01FF, 0x20);

    cpu.set_sp(0xFC);
    cpu.step(&mut memory);

    assert_eq!(cpu.pc(), 0x2000); // exactly as popped
}

// ========== BRK / NOP ==========

#[test]
fn test_brk_sets_break_flag_and_costs_seven_cycles() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0x00]); // BRK

    let start = cpu.cycles();
    cpu.step(&mut memory);

    assert!(cpu.flag_b());
    assert_eq!(cpu.pc(), 0x0601);
    assert_eq!(cpu.cycles() - start, 7);
    // Nothing is pushed: no interrupt delivery in this core
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_nop_changes_nothing_but_pc_and_cycles() {
    let (mut cpu, mut memory) = setup();
    memory.load(0x0600, &[0xEA]); // NOP

    cpu.set_a(0x11);
    cpu.set_x(0x22);
    cpu.set_flag_c(true);
    let status_before = cpu.status();
    let start = cpu.cycles();
    cpu.step(&mut memory);

    assert_eq!(cpu.pc(), 0x0601);
    assert_eq!(cpu.cycles() - start, 1);
    assert_eq!(cpu.a(), 0x11);
    assert_eq!(cpu.x(), 0x22);
    assert_eq!(cpu.status(), status_before);
}
