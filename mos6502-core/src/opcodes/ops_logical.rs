//! Arithmetic, bitwise logic, compares, increments/decrements, and
//! shifts/rotates. All shift results are computed with `u16` arithmetic and
//! truncated with `as u8`, so there's no ambiguity about 8-bit wraparound.

use crate::cpu::{flag, Cpu};
use crate::error::Error;
use crate::opcodes::Mode;

/// Logical OR into A. Flags: N Z
pub fn ora(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let operand = cpu.read_operand(mode);
    cpu.a |= operand;
    cpu.update_zn(cpu.a);
    Ok(())
}

/// Logical AND into A. Flags: N Z
pub fn and(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let operand = cpu.read_operand(mode);
    cpu.a &= operand;
    cpu.update_zn(cpu.a);
    Ok(())
}

/// Logical exclusive OR into A. Flags: N Z
pub fn eor(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let operand = cpu.read_operand(mode);
    cpu.a ^= operand;
    cpu.update_zn(cpu.a);
    Ok(())
}

/// Shared ADC/SBC core. SBC is defined as `ADC(M XOR 0xFF)`, so both
/// instructions' flag behavior lives here in one place.
fn add_with_carry(cpu: &mut Cpu, operand: u8) {
    let carry_in = cpu.get_flag(flag::CARRY) as u16;
    let sum = cpu.a as u16 + operand as u16 + carry_in;
    let result = sum as u8;

    let overflow = (!(cpu.a ^ operand) & (cpu.a ^ result) & 0x80) != 0;

    cpu.set_flag(flag::CARRY, sum > 0xFF);
    cpu.set_flag(flag::OVERFLOW, overflow);
    cpu.a = result;
    cpu.update_zn(cpu.a);
}

/// Add with Carry. Flags: N V Z C
pub fn adc(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let operand = cpu.read_operand(mode);
    add_with_carry(cpu, operand);
    Ok(())
}

/// Subtract with Carry, implemented as `ADC(M XOR 0xFF)`. A preceding SEC
/// is expected to set the initial "no borrow" state. Flags: N V Z C
pub fn sbc(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let operand = cpu.read_operand(mode);
    add_with_carry(cpu, operand ^ 0xFF);
    Ok(())
}

/// Compare A with the operand. Flags: N Z C
pub fn cmp(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let operand = cpu.read_operand(mode);
    cpu.set_flag(flag::CARRY, cpu.a >= operand);
    cpu.update_zn(cpu.a.wrapping_sub(operand));
    Ok(())
}

/// Compare X with the operand. Flags: N Z C
pub fn cpx(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let operand = cpu.read_operand(mode);
    cpu.set_flag(flag::CARRY, cpu.x >= operand);
    cpu.update_zn(cpu.x.wrapping_sub(operand));
    Ok(())
}

/// Compare Y with the operand. Flags: N Z C
pub fn cpy(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let operand = cpu.read_operand(mode);
    cpu.set_flag(flag::CARRY, cpu.y >= operand);
    cpu.update_zn(cpu.y.wrapping_sub(operand));
    Ok(())
}

/// Decrement memory. Flags: N Z
pub fn dec(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let (address, operand) = cpu.read_operand_with_address(mode);
    let result = operand.wrapping_sub(1);
    cpu.update_zn(result);
    cpu.write_back(address, result);
    Ok(())
}

/// Decrement X. Flags: N Z
pub fn dex(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zn(cpu.x);
    Ok(())
}

/// Decrement Y. Flags: N Z
pub fn dey(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zn(cpu.y);
    Ok(())
}

/// Increment memory. Flags: N Z
pub fn inc(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let (address, operand) = cpu.read_operand_with_address(mode);
    let result = operand.wrapping_add(1);
    cpu.update_zn(result);
    cpu.write_back(address, result);
    Ok(())
}

/// Increment X. Flags: N Z
pub fn inx(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zn(cpu.x);
    Ok(())
}

/// Increment Y. Flags: N Z
pub fn iny(cpu: &mut Cpu, _mode: Mode) -> Result<(), Error> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zn(cpu.y);
    Ok(())
}

/// Arithmetic shift left. Carry receives the outgoing bit 7. Flags: N Z C
pub fn asl(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let (address, operand) = cpu.read_operand_with_address(mode);
    let shifted = (operand as u16) << 1;
    let result = shifted as u8;
    cpu.set_flag(flag::CARRY, shifted & 0x100 != 0);
    cpu.update_zn(result);
    cpu.write_back(address, result);
    Ok(())
}

/// Rotate left through carry. Flags: N Z C
pub fn rol(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let (address, operand) = cpu.read_operand_with_address(mode);
    let carry_in = cpu.get_flag(flag::CARRY) as u16;
    let shifted = ((operand as u16) << 1) | carry_in;
    let result = shifted as u8;
    cpu.set_flag(flag::CARRY, shifted & 0x100 != 0);
    cpu.update_zn(result);
    cpu.write_back(address, result);
    Ok(())
}

/// Logical shift right. Carry receives the outgoing bit 0; N is always 0.
/// Flags: N Z C
pub fn lsr(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let (address, operand) = cpu.read_operand_with_address(mode);
    let result = operand >> 1;
    cpu.set_flag(flag::CARRY, operand & 0x01 != 0);
    cpu.update_zn(result);
    cpu.write_back(address, result);
    Ok(())
}

/// Rotate right through carry. Flags: N Z C
pub fn ror(cpu: &mut Cpu, mode: Mode) -> Result<(), Error> {
    let (address, operand) = cpu.read_operand_with_address(mode);
    let carry_in = cpu.get_flag(flag::CARRY) as u8;
    let result = (operand >> 1) | (carry_in << 7);
    cpu.set_flag(flag::CARRY, operand & 0x01 != 0);
    cpu.update_zn(result);
    cpu.write_back(address, result);
    Ok(())
}
