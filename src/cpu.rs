//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor
//! state, the fetch-decode-execute loop, and the addressing-mode resolver.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! - `run()`: interpret until BRK sets the break flag
//! - `step()`: execute one instruction
//! - `run_for_cycles()`: execute until a cycle budget is exhausted
//!
//! Memory is not owned by the CPU. The host constructs a `MemoryBus`
//! implementation and lends it mutably to each call; between calls the
//! host is free to inspect or rewrite it.
//!
//! ## Cycle Accounting
//!
//! Cycles are charged where bytes are consumed: the opcode fetch costs 1
//! cycle, and each addressing mode adds its own contribution (plus a
//! page-cross penalty for the indexed modes). Branches add 1 cycle when
//! taken and 1 more when the target lies in a different page. BRK adds 6
//! cycles beyond its fetch, and reset adds 8.

use crate::instructions::{
    alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer,
};
use crate::{AddressingMode, MemoryBus, Mnemonic, OPCODE_TABLE};

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state: registers, flags, program
/// counter, stack pointer, and the cycle counter. Memory is passed in by
/// the host on each call rather than owned here.
///
/// # Examples
///
/// ```
/// use emu6502::CPU;
///
/// let cpu = CPU::new();
///
/// // Power-on state: PC at the fixed program origin, stack pointer at
/// // the top of the stack page, 8 cycles spent on reset.
/// assert_eq!(cpu.pc(), 0x0600);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.cycles(), 8);
/// assert_eq!(cpu.status(), 0x00);
/// ```
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Break flag (set when BRK instruction executed)
    pub(crate) flag_b: bool,

    /// Decimal mode flag (storage only, no arithmetic effect)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (storage only, no interrupt lines)
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,
}

impl CPU {
    /// Creates a new CPU in the power-on reset state.
    ///
    /// Equivalent to zero-initialising every field and calling
    /// [`reset`](CPU::reset): PC = 0x0600, SP = 0xFF, registers and flags
    /// cleared, and 8 cycles on the counter.
    pub fn new() -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0x00,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: false,
            flag_z: false,
            flag_c: false,
            cycles: 0,
        };
        cpu.reset();
        cpu
    }

    /// Resets the processor.
    ///
    /// Sets PC to the fixed program origin 0x0600, SP to 0xFF, clears the
    /// registers and every status flag, and charges 8 cycles. There is no
    /// reset-vector fetch; programs are expected to be loaded at 0x0600.
    ///
    /// The cycle counter is not cleared, so repeated resets keep
    /// accumulating.
    pub fn reset(&mut self) {
        self.pc = 0x0600;
        self.sp = 0xFF;
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.flag_n = false;
        self.flag_v = false;
        self.flag_b = false;
        self.flag_d = false;
        self.flag_i = false;
        self.flag_z = false;
        self.flag_c = false;
        self.cycles += 8;
    }

    /// Interprets instructions until BRK sets the break flag.
    ///
    /// Returns the total cycle count accumulated since construction
    /// (including the reset cost). The loop makes no progress guarantee
    /// beyond BRK; a program without one runs forever.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0600, &[0xA9, 0x31, 0x0A, 0x00]); // LDA #$31, ASL A, BRK
    ///
    /// let mut cpu = CPU::new();
    /// let cycles = cpu.run(&mut memory);
    ///
    /// assert_eq!(cpu.a(), 0x62);
    /// assert_eq!(cycles, cpu.cycles());
    /// ```
    pub fn run<M: MemoryBus>(&mut self, memory: &mut M) -> u64 {
        while !self.flag_b {
            self.step(memory);
        }
        self.cycles
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch the opcode byte at PC (1 cycle, PC advances)
    /// 2. Look up the mnemonic and addressing mode in the decode table
    /// 3. Dispatch to the instruction implementation
    ///
    /// Bytes without a documented assignment decode as NOP, so every
    /// possible opcode executes.
    pub fn step<M: MemoryBus>(&mut self, memory: &mut M) {
        let pc = self.pc;
        let (opcode, _) = self.fetch_operand(memory, AddressingMode::Immediate);
        let entry = &OPCODE_TABLE[opcode as usize];

        log::trace!(
            target: "instr",
            "{:04X}  {:02X}  {:?} {:?}",
            pc,
            opcode,
            entry.mnemonic,
            entry.mode
        );

        self.execute(memory, entry.mnemonic, entry.mode);
    }

    /// Runs the CPU until a cycle budget is exhausted or BRK executes.
    ///
    /// Returns the number of cycles actually consumed, which may overshoot
    /// the budget by the tail of the final instruction. Useful for hosts
    /// that pace execution externally (e.g. frame-locked emulation).
    pub fn run_for_cycles<M: MemoryBus>(&mut self, memory: &mut M, cycle_budget: u64) -> u64 {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles && !self.flag_b {
            self.step(memory);
        }

        self.cycles - start_cycles
    }

    /// Dispatches a decoded instruction to its implementation.
    fn execute<M: MemoryBus>(&mut self, memory: &mut M, mnemonic: Mnemonic, mode: AddressingMode) {
        match mnemonic {
            Mnemonic::Adc => alu::adc(self, memory, mode),
            Mnemonic::And => alu::and(self, memory, mode),
            Mnemonic::Asl => shifts::asl(self, memory, mode),
            Mnemonic::Bcc => branches::bcc(self, memory),
            Mnemonic::Bcs => branches::bcs(self, memory),
            Mnemonic::Beq => branches::beq(self, memory),
            Mnemonic::Bit => alu::bit(self, memory, mode),
            Mnemonic::Bmi => branches::bmi(self, memory),
            Mnemonic::Bne => branches::bne(self, memory),
            Mnemonic::Bpl => branches::bpl(self, memory),
            Mnemonic::Brk => control::brk(self),
            Mnemonic::Bvc => branches::bvc(self, memory),
            Mnemonic::Bvs => branches::bvs(self, memory),
            Mnemonic::Clc => flags::clc(self),
            Mnemonic::Cld => flags::cld(self),
            Mnemonic::Cli => flags::cli(self),
            Mnemonic::Clv => flags::clv(self),
            Mnemonic::Cmp => alu::cmp(self, memory, mode),
            Mnemonic::Cpx => alu::cpx(self, memory, mode),
            Mnemonic::Cpy => alu::cpy(self, memory, mode),
            Mnemonic::Dec => inc_dec::dec(self, memory, mode),
            Mnemonic::Dex => inc_dec::dex(self),
            Mnemonic::Dey => inc_dec::dey(self),
            Mnemonic::Eor => alu::eor(self, memory, mode),
            Mnemonic::Inc => inc_dec::inc(self, memory, mode),
            Mnemonic::Inx => inc_dec::inx(self),
            Mnemonic::Iny => inc_dec::iny(self),
            Mnemonic::Jmp => control::jmp(self, memory, mode),
            Mnemonic::Jsr => control::jsr(self, memory),
            Mnemonic::Lda => load_store::lda(self, memory, mode),
            Mnemonic::Ldx => load_store::ldx(self, memory, mode),
            Mnemonic::Ldy => load_store::ldy(self, memory, mode),
            Mnemonic::Lsr => shifts::lsr(self, memory, mode),
            Mnemonic::Nop => control::nop(),
            Mnemonic::Ora => alu::ora(self, memory, mode),
            Mnemonic::Pha => stack::pha(self, memory),
            Mnemonic::Php => stack::php(self, memory),
            Mnemonic::Pla => stack::pla(self, memory),
            Mnemonic::Plp => stack::plp(self, memory),
            Mnemonic::Rol => shifts::rol(self, memory, mode),
            Mnemonic::Ror => shifts::ror(self, memory, mode),
            Mnemonic::Rti => control::rti(self, memory),
            Mnemonic::Rts => control::rts(self, memory),
            Mnemonic::Sbc => alu::sbc(self, memory, mode),
            Mnemonic::Sec => flags::sec(self),
            Mnemonic::Sed => flags::sed(self),
            Mnemonic::Sei => flags::sei(self),
            Mnemonic::Sta => load_store::sta(self, memory, mode),
            Mnemonic::Stx => load_store::stx(self, memory, mode),
            Mnemonic::Sty => load_store::sty(self, memory, mode),
            Mnemonic::Tax => transfer::tax(self),
            Mnemonic::Tay => transfer::tay(self),
            Mnemonic::Tsx => transfer::tsx(self),
            Mnemonic::Txa => transfer::txa(self),
            Mnemonic::Txs => transfer::txs(self),
            Mnemonic::Tya => transfer::tya(self),
        }
    }

    // ========== Addressing-Mode Resolver ==========

    /// Resolves an addressing mode to an (operand value, effective address)
    /// pair, consuming operand bytes from the instruction stream.
    ///
    /// PC is advanced past the consumed bytes and the mode's cycle
    /// contribution is charged, including the page-cross penalty for the
    /// indexed modes. Implicit and Accumulator modes have no effective
    /// address and report 0 for it.
    pub(crate) fn fetch_operand<M: MemoryBus>(
        &mut self,
        memory: &M,
        mode: AddressingMode,
    ) -> (u8, u16) {
        match mode {
            AddressingMode::Implicit => (0, 0),
            AddressingMode::Accumulator => {
                self.cycles += 1;
                (self.a, 0)
            }
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                self.cycles += 1;
                (memory.read(addr), addr)
            }
            AddressingMode::Relative => {
                // Same stream position as an immediate; the branch decides
                // what the signed byte means.
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                self.cycles += 2;
                (memory.read(addr), addr)
            }
            _ => {
                let addr = self.fetch_address(memory, mode);
                (memory.read(addr), addr)
            }
        }
    }

    /// Resolves an addressing mode to an effective address without reading
    /// the operand byte, for stores and jumps.
    ///
    /// Charges the same per-mode cycle contribution as
    /// [`fetch_operand`](CPU::fetch_operand).
    pub(crate) fn fetch_address<M: MemoryBus>(&mut self, memory: &M, mode: AddressingMode) -> u16 {
        match mode {
            AddressingMode::ZeroPage => {
                let addr = memory.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.cycles += 2;
                addr
            }
            AddressingMode::ZeroPageX => {
                let base = memory.read(self.pc);
                self.pc = self.pc.wrapping_add(1);
                self.cycles += 3;
                base.wrapping_add(self.x) as u16
            }
            AddressingMode::ZeroPageY => {
                let base = memory.read(self.pc);
                self.pc = self.pc.wrapping_add(1);
                self.cycles += 3;
                base.wrapping_add(self.y) as u16
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_word(memory);
                self.cycles += 3;
                addr
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(memory);
                let addr = base.wrapping_add(self.x as u16);
                self.cycles += 3 + page_cross_penalty(base, addr);
                addr
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(memory);
                let addr = base.wrapping_add(self.y as u16);
                self.cycles += 3 + page_cross_penalty(base, addr);
                addr
            }
            AddressingMode::Indirect => {
                // The 16-bit pointer is dereferenced to form the target.
                // NMOS quirk: a pointer ending in 0xFF takes its high byte
                // from the start of the same page.
                let ptr = self.fetch_word(memory);
                let lo = memory.read(ptr) as u16;
                let hi_addr = if ptr & 0x00FF == 0x00FF {
                    ptr & 0xFF00
                } else {
                    ptr.wrapping_add(1)
                };
                let hi = memory.read(hi_addr) as u16;
                self.cycles += 4;
                (hi << 8) | lo
            }
            AddressingMode::IndirectX => {
                // Pointer lives entirely in the zero page; both index and
                // pointer-high reads wrap at 0xFF.
                let base = memory.read(self.pc);
                self.pc = self.pc.wrapping_add(1);
                let ptr = base.wrapping_add(self.x);
                let lo = memory.read(ptr as u16) as u16;
                let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
                self.cycles += 5;
                (hi << 8) | lo
            }
            AddressingMode::IndirectY => {
                let ptr = memory.read(self.pc);
                self.pc = self.pc.wrapping_add(1);
                let lo = memory.read(ptr as u16) as u16;
                let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
                let base = (hi << 8) | lo;
                let addr = base.wrapping_add(self.y as u16);
                self.cycles += 4 + page_cross_penalty(base, addr);
                addr
            }
            AddressingMode::Implicit
            | AddressingMode::Accumulator
            | AddressingMode::Immediate
            | AddressingMode::Relative => {
                panic!("{:?} has no effective address", mode);
            }
        }
    }

    /// Reads a little-endian 16-bit word from the instruction stream.
    fn fetch_word<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let lo = memory.read(self.pc) as u16;
        self.pc = self.pc.wrapping_add(1);
        let hi = memory.read(self.pc) as u16;
        self.pc = self.pc.wrapping_add(1);
        (hi << 8) | lo
    }

    // ========== Stack Protocol ==========

    /// Pushes a byte: write to 0x0100 + SP, then decrement SP (8-bit wrap).
    pub(crate) fn push<M: MemoryBus>(&mut self, memory: &mut M, value: u8) {
        memory.write(0x0100 | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pops a byte: increment SP (8-bit wrap), then read 0x0100 + SP.
    pub(crate) fn pop<M: MemoryBus>(&mut self, memory: &M) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        memory.read(0x0100 | self.sp as u16)
    }

    // ========== Status Register ==========

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: unused, always 0
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0x00;

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Unpacks a status byte into the flag fields (PLP, RTI).
    ///
    /// Bit 5 has no storage and is dropped; the packed form of the
    /// restored state always reads it back as 0.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_b = value & 0b0001_0000 != 0;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }

    /// Sets the Z and N flags from a result byte.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = value & 0x80 != 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Register Setters (for tests and hosts) ==========

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}

/// 1 when the indexed address landed in a different page than its base.
fn page_cross_penalty(base: u16, addr: u16) -> u64 {
    ((base & 0xFF00) != (addr & 0xFF00)) as u64
}
