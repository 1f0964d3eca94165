//! # Increment and Decrement Instructions
//!
//! INC and DEC read-modify-write memory; INX, INY, DEX, DEY adjust the
//! index registers directly. All six wrap at the 8-bit boundary and set
//! Z and N from the new value.

use crate::{AddressingMode, MemoryBus, CPU};

/// INC: increment the byte at the effective address.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let (value, addr) = cpu.fetch_operand(memory, mode);
    let result = value.wrapping_add(1);
    memory.write(addr, result);
    cpu.set_zn(result);
}

/// DEC: decrement the byte at the effective address.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let (value, addr) = cpu.fetch_operand(memory, mode);
    let result = value.wrapping_sub(1);
    memory.write(addr, result);
    cpu.set_zn(result);
}

/// INX: increment the X register.
pub(crate) fn inx(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_add(1);
    let result = cpu.x;
    cpu.set_zn(result);
}

/// INY: increment the Y register.
pub(crate) fn iny(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_add(1);
    let result = cpu.y;
    cpu.set_zn(result);
}

/// DEX: decrement the X register.
pub(crate) fn dex(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_sub(1);
    let result = cpu.x;
    cpu.set_zn(result);
}

/// DEY: decrement the Y register.
pub(crate) fn dey(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_sub(1);
    let result = cpu.y;
    cpu.set_zn(result);
}
