use thiserror::Error;

/// Everything that can go wrong inside the core. The CLI host maps these to
/// exit codes and human-readable messages; the core itself never panics on
/// any of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("opcode {opcode:#04x} at {pc:#06x} is not implemented")]
    OpcodeNotImplemented { opcode: u8, pc: u16 },

    #[error("a ROM image is already loaded; reset before loading another")]
    RomAlreadyLoaded,

    #[error("ROM of {len} bytes does not fit in memory starting at {base:#06x}")]
    RomTooBig { base: usize, len: usize },

    #[error("step budget of zero ticks was requested")]
    ZeroBudget,

    #[error("keyboard input must not be empty")]
    EmptyKeyboardInput,
}
