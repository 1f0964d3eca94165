//! # Branch Instructions
//!
//! The eight conditional branches: BCC, BCS, BEQ, BNE, BMI, BPL, BVC,
//! BVS. All use relative addressing with a two's-complement signed 8-bit
//! offset applied to the PC after the operand byte.
//!
//! Cycle timing: the relative fetch contributes 2 cycles; a taken branch
//! adds 1 more, and 1 again when the target lies in a different page than
//! the instruction's end.

use crate::{AddressingMode, MemoryBus, CPU};

/// Fetches the signed offset and redirects PC when the condition holds.
fn branch_on<M: MemoryBus>(cpu: &mut CPU, memory: &M, taken: bool) {
    let (offset, _) = cpu.fetch_operand(memory, AddressingMode::Relative);

    if !taken {
        return;
    }

    let target = cpu.pc.wrapping_add_signed(offset as i8 as i16);

    cpu.cycles += 1;
    if (cpu.pc & 0xFF00) != (target & 0xFF00) {
        cpu.cycles += 1;
    }

    cpu.pc = target;
}

/// BCC: branch when the carry flag is clear.
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = !cpu.flag_c;
    branch_on(cpu, memory, taken);
}

/// BCS: branch when the carry flag is set.
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = cpu.flag_c;
    branch_on(cpu, memory, taken);
}

/// BEQ: branch when the zero flag is set.
pub(crate) fn beq<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = cpu.flag_z;
    branch_on(cpu, memory, taken);
}

/// BNE: branch when the zero flag is clear.
pub(crate) fn bne<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = !cpu.flag_z;
    branch_on(cpu, memory, taken);
}

/// BMI: branch when the negative flag is set.
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = cpu.flag_n;
    branch_on(cpu, memory, taken);
}

/// BPL: branch when the negative flag is clear.
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = !cpu.flag_n;
    branch_on(cpu, memory, taken);
}

/// BVC: branch when the overflow flag is clear.
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = !cpu.flag_v;
    branch_on(cpu, memory, taken);
}

/// BVS: branch when the overflow flag is set.
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let taken = cpu.flag_v;
    branch_on(cpu, memory, taken);
}
