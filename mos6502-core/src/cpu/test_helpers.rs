use crate::cpu::Cpu;
use crate::memory::Memory;

/// Build a CPU backed by a fresh 64 KiB memory with `program` written at
/// `origin` and the RESET vector pointed at `origin`, then boot it so
/// execution is ready to start at the first byte of `program`.
pub fn cpu_with_program(origin: u16, program: &[u8]) -> Cpu {
    let memory = Memory::shared();
    {
        let mut mem = memory.borrow_mut();
        for (offset, byte) in program.iter().enumerate() {
            mem.poke(origin.wrapping_add(offset as u16), *byte);
        }
        mem.poke(0xFFFC, (origin & 0xFF) as u8);
        mem.poke(0xFFFD, (origin >> 8) as u8);
    }
    let mut cpu = Cpu::new(memory);
    cpu.boot();
    cpu
}

/// Run exactly `n` steps, panicking (with the opcode's own message) if any
/// of them hits an unimplemented opcode.
pub fn step_n(cpu: &mut Cpu, n: usize) {
    for _ in 0..n {
        cpu.step().unwrap();
    }
}
