//! Interpreter core for a Game-Boy-style 8-bit instruction subset.
//!
//! The caller owns the two memory buffers, sets up initial machine state,
//! runs the machine to its halt opcode, and inspects the results afterward.

pub mod cpu;
pub mod mem;
