//! The register file and arithmetic-logic unit of the Game Boy's Sharp LR35902.
//!
//! The crate models the eight 8-bit registers, their 16-bit pairings, the packed flags register,
//! and an ALU that executes arithmetic and logic instructions against them. Instruction fetch and
//! decoding, memory, timing, and interrupts belong to the surrounding emulator.
//!
//! ```
//! use lr35902_alu::cpu::{Cpu, Flags, Instruction, Register};
//!
//! let mut cpu = Cpu::new();
//! cpu.reg.a = 20;
//! cpu.reg.b = 10;
//!
//! cpu.execute(Instruction::And, Register::B.into())?;
//!
//! assert_eq!(cpu.reg.a, 0);
//! assert_eq!(cpu.reg.f, Flags::ZERO | Flags::HALF_CARRY);
//! # Ok::<(), lr35902_alu::errors::Error>(())
//! ```

pub mod bytes;
pub mod cpu;
pub mod errors;
pub mod tui;
