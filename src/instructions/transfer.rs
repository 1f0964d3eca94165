//! # Register Transfer Instructions
//!
//! TAX, TAY, TSX, TXA, TYA copy between registers and set Z and N from
//! the destination. TXS copies X into the stack pointer without touching
//! the flags.

use crate::CPU;

/// TAX: X = A, Z/N from the copy.
pub(crate) fn tax(cpu: &mut CPU) {
    let value = cpu.a;
    cpu.x = value;
    cpu.set_zn(value);
}

/// TAY: Y = A, Z/N from the copy.
pub(crate) fn tay(cpu: &mut CPU) {
    let value = cpu.a;
    cpu.y = value;
    cpu.set_zn(value);
}

/// TSX: X = SP, Z/N from the copy.
pub(crate) fn tsx(cpu: &mut CPU) {
    let value = cpu.sp;
    cpu.x = value;
    cpu.set_zn(value);
}

/// TXA: A = X, Z/N from the copy.
pub(crate) fn txa(cpu: &mut CPU) {
    let value = cpu.x;
    cpu.a = value;
    cpu.set_zn(value);
}

/// TXS: SP = X. Flags unchanged.
pub(crate) fn txs(cpu: &mut CPU) {
    cpu.sp = cpu.x;
}

/// TYA: A = Y, Z/N from the copy.
pub(crate) fn tya(cpu: &mut CPU) {
    let value = cpu.y;
    cpu.a = value;
    cpu.set_zn(value);
}
