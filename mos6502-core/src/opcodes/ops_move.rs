//! Loads, stores, register transfers, and stack push/pull.

use crate::cpu::{flag, Cpu};
use crate::error::Error;
use crate::opcodes::Mode;

/// Load register A.
/// Flags: N Z
pub fn lda(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    cpu.a = cpu.read_operand(mode);
    cpu.update_zn(cpu.a);
    Ok(())
}

/// Store register A.
pub fn sta(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let address = cpu.resolve_address(mode);
    cpu.memory.borrow_mut().write(address, cpu.a);
    Ok(())
}

/// Load register X.
/// Flags: N Z
pub fn ldx(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    cpu.x = cpu.read_operand(mode);
    cpu.update_zn(cpu.x);
    Ok(())
}

/// Store register X.
pub fn stx(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let address = cpu.resolve_address(mode);
    cpu.memory.borrow_mut().write(address, cpu.x);
    Ok(())
}

/// Load register Y.
/// Flags: N Z
pub fn ldy(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    cpu.y = cpu.read_operand(mode);
    cpu.update_zn(cpu.y);
    Ok(())
}

/// Store register Y.
pub fn sty(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let address = cpu.resolve_address(mode);
    cpu.memory.borrow_mut().write(address, cpu.y);
    Ok(())
}

/// Transfer A to X. Flags: N Z
pub fn tax(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);
    Ok(())
}

/// Transfer X to A. Flags: N Z
pub fn txa(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.a = cpu.x;
    cpu.update_zn(cpu.a);
    Ok(())
}

/// Transfer A to Y. Flags: N Z
pub fn tay(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.y = cpu.a;
    cpu.update_zn(cpu.y);
    Ok(())
}

/// Transfer Y to A. Flags: N Z
pub fn tya(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.a = cpu.y;
    cpu.update_zn(cpu.a);
    Ok(())
}

/// Transfer SP to X. Flags: N Z
pub fn tsx(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.x = cpu.sp;
    cpu.update_zn(cpu.x);
    Ok(())
}

/// Transfer X to SP. Does NOT update flags.
pub fn txs(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.sp = cpu.x;
    Ok(())
}

/// Pull A from the stack. Flags: N Z
pub fn pla(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.a = cpu.pop_u8();
    cpu.update_zn(cpu.a);
    Ok(())
}

/// Push A to the stack.
pub fn pha(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.push_u8(cpu.a);
    Ok(())
}

/// Pull the status register. Bit 4 (B) is cleared and bit 5 is set on the
/// restored value; the pushed copy that caused this pull is left as-is.
pub fn plp(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    let popped = cpu.pop_u8();
    cpu.p = (popped & !(1 << flag::BREAK)) | (1 << flag::UNUSED);
    Ok(())
}

/// Push the status register with B and bit 5 both set, regardless of their
/// value in the live register.
pub fn php(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.push_u8(cpu.p | 0x30);
    Ok(())
}
