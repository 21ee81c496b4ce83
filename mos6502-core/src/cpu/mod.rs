//! The MOS 6502 register file, addressing unit, stack, and interrupt
//! controller. Opcode handlers live in [`crate::opcodes`] and operate on
//! this struct through its public addressing/stack/flag helpers.

#[cfg(test)]
mod test_helpers;


use log::{trace, warn};

use crate::error::Error;
use crate::events::Event;
use crate::memory::{SharedMemory, IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
use crate::opcodes::{Mode, ADDRESSING_MODE_TABLE, CYCLES_TABLE, OPERATION_FN_TABLE};

/// Bit positions within `P`, matching the 6502's `NV_B DIZC` layout.
pub mod flag {
    pub const CARRY: u8 = 0;
    pub const ZERO: u8 = 1;
    pub const INTERRUPT_DISABLE: u8 = 2;
    pub const DECIMAL: u8 = 3;
    pub const BREAK: u8 = 4;
    pub const UNUSED: u8 = 5;
    pub const OVERFLOW: u8 = 6;
    pub const NEGATIVE: u8 = 7;
}

/// The CPU's register file plus the addressing/stack machinery every
/// opcode handler drives. Memory is shared with the host so MMIO writes
/// (e.g. a character-out port) are visible outside the CPU.
pub struct Cpu {
    pub memory: SharedMemory,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub pc: u16,
    pub sp: u8,
    pub p: u8,
    pub cycles: u64,
    pub tick_count: u64,
    pub halted: bool,
    pub irq_pending: bool,
    pub nmi_pending: bool,
    pub trace_enabled: bool,

    /// Opcode byte currently being executed; read by the unimplemented-opcode
    /// sentinel to build its error.
    pub(crate) current_opcode: u8,
    /// PC the current opcode was fetched from (before advancing past it).
    pub(crate) opcode_pc: u16,
    /// Set by the addressing unit when the last resolved address crossed a
    /// page boundary. Cycle accounting is best-effort; see `step`.
    pub(crate) page_crossed: bool,
}

impl Cpu {
    pub fn new(memory: SharedMemory) -> Cpu {
        let pc = memory.borrow_mut().read_u16(RESET_VECTOR);
        Cpu {
            memory,
            a: 0,
            x: 0,
            y: 0,
            pc,
            sp: 0xFD,
            p: 0x04,
            cycles: 0,
            tick_count: 0,
            halted: false,
            irq_pending: false,
            nmi_pending: false,
            trace_enabled: false,
            current_opcode: 0,
            opcode_pc: 0,
            page_crossed: false,
        }
    }

    /// Restore power-on state and reread the RESET vector. Does not touch
    /// RAM contents; ROM stays loaded across a reboot.
    pub fn boot(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = 0xFD;
        self.p = 0x04;
        self.cycles = 0;
        self.tick_count = 0;
        self.halted = false;
        self.irq_pending = false;
        self.nmi_pending = false;
        let mut memory = self.memory.borrow_mut();
        memory.rewind_keyboard();
        self.pc = memory.read_u16(RESET_VECTOR);
    }

    /// Snapshot of the register file, handy for test harnesses and the CLI's
    /// `--trace` output: `(A, X, Y, SP, PC, P, cycles)`.
    pub fn registers(&self) -> (u8, u8, u8, u8, u16, u8, u64) {
        (self.a, self.x, self.y, self.sp, self.pc, self.p, self.cycles)
    }

    pub fn trigger_irq(&mut self) {
        self.irq_pending = true;
    }

    pub fn trigger_nmi(&mut self) {
        self.nmi_pending = true;
    }

    pub fn get_flag(&self, bit: u8) -> bool {
        self.p & (1 << bit) != 0
    }

    pub fn set_flag(&mut self, bit: u8, value: bool) {
        if value {
            self.p |= 1 << bit;
        } else {
            self.p &= !(1 << bit);
        }
    }

    pub fn update_zn(&mut self, value: u8) {
        self.set_flag(flag::ZERO, value == 0);
        self.set_flag(flag::NEGATIVE, value & 0x80 != 0);
    }

    fn fetch_u8(&mut self) -> u8 {
        let value = self.memory.borrow_mut().read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    fn fetch_u16(&mut self) -> u16 {
        let lo = self.fetch_u8() as u16;
        let hi = self.fetch_u8() as u16;
        (hi << 8) | lo
    }

    /// Resolve the effective address for every mode except Implied and
    /// Accumulator, which carry no address. Advances `PC` past the operand
    /// bytes and records whether a page boundary was crossed.
    pub fn resolve_address(&mut self, mode: Mode) -> u16 {
        self.page_crossed = false;
        match mode {
            Mode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                address
            }
            Mode::ZeroPage => self.fetch_u8() as u16,
            Mode::ZeroPageX => self.fetch_u8().wrapping_add(self.x) as u16,
            Mode::ZeroPageY => self.fetch_u8().wrapping_add(self.y) as u16,
            Mode::Absolute => self.fetch_u16(),
            Mode::AbsoluteX => {
                let base = self.fetch_u16();
                let address = base.wrapping_add(self.x as u16);
                self.page_crossed = (base & 0xFF00) != (address & 0xFF00);
                address
            }
            Mode::AbsoluteY => {
                let base = self.fetch_u16();
                let address = base.wrapping_add(self.y as u16);
                self.page_crossed = (base & 0xFF00) != (address & 0xFF00);
                address
            }
            Mode::IndirectX => {
                let ptr = self.fetch_u8().wrapping_add(self.x);
                let mut memory = self.memory.borrow_mut();
                let lo = memory.read(ptr as u16) as u16;
                let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
                (hi << 8) | lo
            }
            Mode::IndirectY => {
                let ptr = self.fetch_u8();
                let base = {
                    let mut memory = self.memory.borrow_mut();
                    let lo = memory.read(ptr as u16) as u16;
                    let hi = memory.read(ptr.wrapping_add(1) as u16) as u16;
                    (hi << 8) | lo
                };
                let address = base.wrapping_add(self.y as u16);
                self.page_crossed = (base & 0xFF00) != (address & 0xFF00);
                address
            }
            Mode::Relative => {
                let offset = self.fetch_u8() as i8;
                let base = self.pc;
                let target = base.wrapping_add(offset as u16);
                self.page_crossed = (target & 0xFF00) != (base & 0xFF00);
                target
            }
            // 6502 hardware bug: if the pointer's low byte is 0xFF, the high
            // byte is fetched from the start of the same page rather than
            // the next page. JMP ($12FF) reads its high byte from $1200,
            // not $1300.
            Mode::Indirect => {
                let ptr = self.fetch_u16();
                let hi_address = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let mut memory = self.memory.borrow_mut();
                let lo = memory.read(ptr) as u16;
                let hi = memory.read(hi_address) as u16;
                (hi << 8) | lo
            }
            Mode::Implied | Mode::Accumulator => {
                unreachable!("{mode:?} has no effective address")
            }
        }
    }

    /// Read an operand for modes that only need the value, not its address
    /// (loads, arithmetic, compares, branches).
    pub fn read_operand(&mut self, mode: Mode) -> u8 {
        if mode == Mode::Accumulator {
            return self.a;
        }
        let address = self.resolve_address(mode);
        self.memory.borrow_mut().read(address)
    }

    /// Read an operand for read-modify-write instructions (shifts, INC/DEC),
    /// which need the address back to write the result to the same place.
    /// `None` means the operand was the accumulator.
    pub fn read_operand_with_address(&mut self, mode: Mode) -> (Option<u16>, u8) {
        if mode == Mode::Accumulator {
            return (None, self.a);
        }
        let address = self.resolve_address(mode);
        let value = self.memory.borrow_mut().read(address);
        (Some(address), value)
    }

    /// Write back the result of a read-modify-write instruction.
    pub fn write_back(&mut self, address: Option<u16>, value: u8) {
        match address {
            Some(address) => self.memory.borrow_mut().write(address, value),
            None => self.a = value,
        }
    }

    pub fn push_u8(&mut self, value: u8) {
        let address = 0x0100 | self.sp as u16;
        self.memory.borrow_mut().write(address, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub fn pop_u8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        let address = 0x0100 | self.sp as u16;
        self.memory.borrow_mut().read(address)
    }

    /// Pushes high byte then low byte, so the low byte ends up on top of
    /// the stack and `pop_u16` can read it back low-then-high.
    pub fn push_u16(&mut self, value: u16) {
        self.push_u8((value >> 8) as u8);
        self.push_u8((value & 0xFF) as u8);
    }

    pub fn pop_u16(&mut self) -> u16 {
        let lo = self.pop_u8() as u16;
        let hi = self.pop_u8() as u16;
        (hi << 8) | lo
    }

    /// Push PC and a status byte (bit 5 always set, bit 4 per `set_b`) and
    /// jump through `vector`. Shared by BRK and the hardware NMI/IRQ paths.
    pub fn service_interrupt(&mut self, vector: u16, set_b: bool) {
        self.push_u16(self.pc);
        let mut status = self.p | 0x20;
        if set_b {
            status |= 0x10;
        } else {
            status &= !0x10;
        }
        self.push_u8(status);
        self.set_flag(flag::INTERRUPT_DISABLE, true);
        self.pc = self.memory.borrow_mut().read_u16(vector);
    }

    /// Service any pending interrupt (NMI takes priority over IRQ), or
    /// execute one instruction. Returns after at most one of those.
    pub fn step(&mut self) -> Result<(), Error> {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.service_interrupt(NMI_VECTOR, false);
            return Ok(());
        }
        if self.irq_pending && !self.get_flag(flag::INTERRUPT_DISABLE) {
            self.irq_pending = false;
            self.service_interrupt(IRQ_VECTOR, false);
            return Ok(());
        }

        self.tick_count += 1;
        self.opcode_pc = self.pc;
        let opcode = self.fetch_u8();
        self.current_opcode = opcode;

        if self.trace_enabled {
            self.memory.borrow_mut().push_event(Event::TracePC(self.opcode_pc));
            trace!("step pc={:#06x} opcode={:#04x}", self.opcode_pc, opcode);
        }

        let index = opcode as usize;
        let mode = ADDRESSING_MODE_TABLE[index];
        let operation = OPERATION_FN_TABLE[index];
        self.cycles += CYCLES_TABLE[index] as u64;

        operation(self, mode)?;

        if self.page_crossed {
            self.cycles += 1;
        }

        Ok(())
    }

    /// Step until halted or `max_steps` instructions have executed,
    /// whichever comes first. Emits `ProgramHalted` on exit either way.
    pub fn run(&mut self, max_steps: u64) -> Result<(), Error> {
        if max_steps == 0 {
            warn!("run() called with a zero step budget");
            return Err(Error::ZeroBudget);
        }
        let mut executed = 0;
        while executed < max_steps && !self.halted {
            self.step()?;
            executed += 1;
        }
        let mut memory = self.memory.borrow_mut();
        memory.compact_keyboard();
        memory.push_event(Event::ProgramHalted(executed));
        Ok(())
    }
}
