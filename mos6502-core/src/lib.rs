//! A MOS 6502 (NMOS) CPU core: registers, the 13 addressing modes, exact
//! flag semantics for every documented opcode, the stack, and a small
//! interrupt controller, wrapped around a 64 KiB address space with two
//! memory-mapped I/O ports (a keyboard input buffer and a character-out
//! sink). Illegal opcodes and undocumented NMOS behavior are out of scope;
//! see [`opcodes::unimplemented_opcode`].

pub mod cpu;
pub mod error;
pub mod events;
pub mod keyboard;
pub mod memory;
pub mod opcodes;

pub use cpu::Cpu;
pub use error::Error;
pub use events::Event;
pub use memory::{Memory, SharedMemory, IO_KBD, IO_TTY};

/// Top-level facade bundling a [`Cpu`] with its [`Memory`]. This is the
/// type a host program drives; `Cpu` and `Memory` remain usable on their
/// own for tests that want finer-grained control.
pub struct Emulator {
    pub cpu: Cpu,
    pub memory: SharedMemory,
}

impl Emulator {
    /// A fresh emulator: 64 KiB of zeroed RAM, registers at their power-on
    /// values, PC loaded from the RESET vector (0x0000 until a ROM writes
    /// it).
    pub fn new() -> Emulator {
        let memory = Memory::shared();
        let cpu = Cpu::new(memory.clone());
        Emulator { cpu, memory }
    }

    pub fn load_rom(&mut self, base: u16, bytes: &[u8]) -> Result<(), Error> {
        self.memory.borrow_mut().load_rom(base, bytes)
    }

    pub fn boot(&mut self) {
        self.cpu.boot();
    }

    pub fn step(&mut self) -> Result<(), Error> {
        self.cpu.step()
    }

    pub fn run(&mut self, max_steps: u64) -> Result<(), Error> {
        self.cpu.run(max_steps)
    }

    pub fn trigger_irq(&mut self) {
        self.cpu.trigger_irq();
    }

    pub fn trigger_nmi(&mut self) {
        self.cpu.trigger_nmi();
    }

    pub fn send_keys(&mut self, input: &str) -> Result<(), Error> {
        self.memory.borrow_mut().send_keys(input)
    }

    pub fn peek(&self, address: u16) -> u8 {
        self.memory.borrow().peek(address)
    }

    /// `(A, X, Y, SP, PC, P, cycles)`, for hosts that want to display or log
    /// register state without reaching into `cpu` directly.
    pub fn registers(&self) -> (u8, u8, u8, u8, u16, u8, u64) {
        self.cpu.registers()
    }

    pub fn poke(&mut self, address: u16, value: u8) {
        self.memory.borrow_mut().poke(address, value);
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.memory.borrow_mut().drain_events()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
