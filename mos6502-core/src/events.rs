/// Observable things the emulator does while stepping, drained by the host
/// after each call to `step`/`run` instead of being pushed out over a real
/// channel. Keeps the core synchronous and single-threaded while still
/// giving a host (CLI, test, GUI) a uniform way to observe character output
/// and tracing without polling memory or the CPU directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A byte was written to the TTY output port.
    CharOut(u8),
    /// The CPU halted (KIL or an exhausted step budget), after this many ticks.
    ProgramHalted(u64),
    /// Emitted once per instruction when tracing is enabled, carrying the PC
    /// the instruction was fetched from.
    TracePC(u16),
    /// Emitted on every JSR when tracing is enabled, carrying the subroutine
    /// address that was jumped to.
    TraceJSR(u16),
}
