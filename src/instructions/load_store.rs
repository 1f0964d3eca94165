//! # Load and Store Instructions
//!
//! LDA, LDX, LDY set Z and N from the loaded value. STA, STX, STY write a
//! register to the effective address and leave every flag alone.

use crate::{AddressingMode, MemoryBus, CPU};

/// LDA: load the accumulator from memory.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU, memory: &M, mode: AddressingMode) {
    let (value, _) = cpu.fetch_operand(memory, mode);
    cpu.a = value;
    cpu.set_zn(value);
}

/// LDX: load the X register from memory.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU, memory: &M, mode: AddressingMode) {
    let (value, _) = cpu.fetch_operand(memory, mode);
    cpu.x = value;
    cpu.set_zn(value);
}

/// LDY: load the Y register from memory.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU, memory: &M, mode: AddressingMode) {
    let (value, _) = cpu.fetch_operand(memory, mode);
    cpu.y = value;
    cpu.set_zn(value);
}

/// STA: store the accumulator at the effective address.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let addr = cpu.fetch_address(memory, mode);
    memory.write(addr, cpu.a);
}

/// STX: store the X register at the effective address.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let addr = cpu.fetch_address(memory, mode);
    memory.write(addr, cpu.x);
}

/// STY: store the Y register at the effective address.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode) {
    let addr = cpu.fetch_address(memory, mode);
    memory.write(addr, cpu.y);
}
