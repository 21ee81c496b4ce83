//! Branches, jumps, subroutine linkage, interrupts, flag instructions, BIT,
//! and NOP.

use crate::cpu::{flag, Cpu};
use crate::error::Error;
use crate::events::Event;
use crate::memory::IRQ_VECTOR;
use crate::opcodes::Mode;

/// Resolve the branch target, and move the PC there only if `condition`
/// holds. A not-taken branch still has to consume its operand byte, since
/// PC has already moved past the opcode.
fn branch(cpu: &mut Cpu, mode: Mode, condition: bool) -> Result<(), Error> {
    let target = cpu.resolve_address(mode);
    if condition {
        cpu.pc = target;
    }
    Ok(())
}

/// Branch if plus (N=0).
pub fn bpl(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    branch(cpu, mode, !cpu.get_flag(flag::NEGATIVE))
}

/// Branch if minus (N=1).
pub fn bmi(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    branch(cpu, mode, cpu.get_flag(flag::NEGATIVE))
}

/// Branch if overflow clear.
pub fn bvc(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    branch(cpu, mode, !cpu.get_flag(flag::OVERFLOW))
}

/// Branch if overflow set.
pub fn bvs(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    branch(cpu, mode, cpu.get_flag(flag::OVERFLOW))
}

/// Branch if carry clear.
pub fn bcc(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    branch(cpu, mode, !cpu.get_flag(flag::CARRY))
}

/// Branch if carry set.
pub fn bcs(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    branch(cpu, mode, cpu.get_flag(flag::CARRY))
}

/// Branch if not equal (Z=0).
pub fn bne(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    branch(cpu, mode, !cpu.get_flag(flag::ZERO))
}

/// Branch if equal (Z=1).
pub fn beq(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    branch(cpu, mode, cpu.get_flag(flag::ZERO))
}

/// Force interrupt. Discards the padding byte that follows the BRK opcode,
/// services the IRQ/BRK vector with B=1, and halts the CPU so a host
/// without a surrounding OS has a way to stop the run loop. A later RTI
/// still works if the host clears `halted` and calls `run` again.
pub fn brk(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.pc = cpu.pc.wrapping_add(1);
    cpu.service_interrupt(IRQ_VECTOR, true);
    cpu.halted = true;
    Ok(())
}

/// Return from interrupt: pop status (B cleared, bit 5 set), then PC.
pub fn rti(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    let popped = cpu.pop_u8();
    cpu.p = (popped & !(1 << flag::BREAK)) | (1 << flag::UNUSED);
    cpu.pc = cpu.pop_u16();
    Ok(())
}

/// Jump to subroutine: push the address of the last operand byte, then
/// jump.
pub fn jsr(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let target = cpu.resolve_address(mode);
    cpu.push_u16(cpu.pc.wrapping_sub(1));
    if cpu.trace_enabled {
        cpu.memory.borrow_mut().push_event(Event::TraceJSR(target));
    }
    cpu.pc = target;
    Ok(())
}

/// Return from subroutine: pop the pushed address and resume just after it.
pub fn rts(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.pc = cpu.pop_u16().wrapping_add(1);
    Ok(())
}

/// Jump. For `Mode::Indirect` this resolves through the page-wrap bug in
/// `Cpu::resolve_address`.
pub fn jmp(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    cpu.pc = cpu.resolve_address(mode);
    Ok(())
}

/// Bit test: Z from `A & M`, N and V copied straight from bits 7 and 6 of
/// the operand. A and M are both left unchanged.
pub fn bit(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let operand = cpu.read_operand(mode);
    cpu.set_flag(flag::ZERO, (cpu.a & operand) == 0);
    cpu.set_flag(flag::NEGATIVE, operand & 0x80 != 0);
    cpu.set_flag(flag::OVERFLOW, operand & 0x40 != 0);
    Ok(())
}

pub fn clc(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.set_flag(flag::CARRY, false);
    Ok(())
}

pub fn sec(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.set_flag(flag::CARRY, true);
    Ok(())
}

pub fn cld(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.set_flag(flag::DECIMAL, false);
    Ok(())
}

pub fn sed(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.set_flag(flag::DECIMAL, true);
    Ok(())
}

pub fn cli(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.set_flag(flag::INTERRUPT_DISABLE, false);
    Ok(())
}

pub fn sei(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.set_flag(flag::INTERRUPT_DISABLE, true);
    Ok(())
}

pub fn clv(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.set_flag(flag::OVERFLOW, false);
    Ok(())
}

/// No operation.
pub fn nop(_cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    Ok(())
}
