//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR. All four read an operand, move one bit through the
//! carry flag, and write the result back to the accumulator or to the
//! effective address depending on the addressing mode.

use crate::{AddressingMode, MemoryBus, CPU};

/// Shared read-modify-write: fetch the operand, apply the bit operation,
/// set Z/N, and write back to the accumulator (Accumulator mode) or to
/// the effective address (memory modes). Writeback charges no cycles
/// beyond the resolver contribution.
fn modify<M, F>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode, operation: F)
where
    M: MemoryBus,
    F: FnOnce(&mut CPU, u8) -> u8,
{
    let (value, addr) = cpu.fetch_operand(memory, mode);
    let result = operation(cpu, value);
    cpu.set_zn(result);

    if mode == AddressingMode::Accumulator {
        cpu.a = result;
    } else {
        memory.write(addr, result);
    }
}

/// ASL: shift left one bit. Old bit 7 enters the carry, bit 0 becomes 0.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    modify(cpu, memory, mode, |cpu, value| {
        cpu.flag_c = value & 0x80 != 0;
        value << 1
    });
}

/// LSR: shift right one bit. Old bit 0 enters the carry, bit 7 becomes 0.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    modify(cpu, memory, mode, |cpu, value| {
        cpu.flag_c = value & 0x01 != 0;
        value >> 1
    });
}

/// ROL: rotate left through the carry. The old carry fills bit 0 and the
/// old bit 7 becomes the new carry.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    modify(cpu, memory, mode, |cpu, value| {
        let carry_in = cpu.flag_c as u8;
        cpu.flag_c = value & 0x80 != 0;
        (value << 1) | carry_in
    });
}

/// ROR: rotate right through the carry. The old carry fills bit 7 and the
/// old bit 0 becomes the new carry.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    modify(cpu, memory, mode, |cpu, value| {
        let carry_in = (cpu.flag_c as u8) << 7;
        cpu.flag_c = value & 0x01 != 0;
        (value >> 1) | carry_in
    });
}
