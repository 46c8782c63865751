//! Functionality related to the CPU.
//!
//! Contains the register file and the arithmetic-logic unit. Fetching and decoding instructions
//! is left to the caller, which hands [`Cpu::execute`] an already decoded instruction and target.

use std::fmt;
use std::ops::{AddAssign, SubAssign};

use log::*;

use crate::errors::{Error, Result};

mod alu;
mod arithmetic;
mod flags;
mod instructions;
mod registers;

pub use self::arithmetic::{add16, add8, sub8, CarryBound};
pub use self::flags::Flags;
pub use self::instructions::{ArithmeticTarget, Instruction};
pub use self::registers::{Register, RegisterPair, RegisterPairMut, Registers};

/// CPU configuration.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// How additions decide whether they carried.
    pub carry_bound: CarryBound,
}

/// The CPU core: one register file and the ALU that operates on it.
#[derive(Debug, Default, Clone)]
pub struct Cpu {
    /// Registers
    pub reg: Registers,

    config: Config,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu::default()
    }

    pub fn with_config(config: Config) -> Cpu {
        debug!("carry bound: {:?}", config.carry_bound);

        Cpu {
            reg: Registers::default(),
            config,
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Reset registers to their initial values. The configuration is kept.
    pub fn reset(&mut self) {
        self.reg = Registers::default();
    }

    /// Executes an instruction against a target.
    ///
    /// The width of the target picks the execution path. On success, all register and flag
    /// changes are complete before this returns. An instruction that is not defined for the
    /// target's width is rejected with [`Error::UnsupportedTarget`], and no state changes.
    ///
    /// ```
    /// use lr35902_alu::cpu::{Cpu, Flags, Instruction, Register};
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.reg.a = 0xFF;
    /// cpu.reg.b = 0x01;
    ///
    /// cpu.execute(Instruction::Add, Register::B.into()).unwrap();
    ///
    /// assert_eq!(cpu.reg.a, 0x00);
    /// assert_eq!(cpu.reg.f, Flags::ZERO | Flags::HALF_CARRY | Flags::CARRY);
    /// ```
    pub fn execute(&mut self, instruction: Instruction, target: ArithmeticTarget) -> Result<()> {
        debug!(
            "executing {} {} ({}-bit)",
            instruction,
            target,
            if target.is_wide() { 16 } else { 8 }
        );

        let result = match target {
            ArithmeticTarget::Register(register) => self.execute8(instruction, register),
            ArithmeticTarget::Pair(pair) => self.execute16(instruction, pair),
        };

        match &result {
            Ok(()) => trace!("A {:#04x} F {} HL {:#06x}", self.reg.a, self.reg.f, self.reg.hl()),
            Err(e) => warn!("rejected instruction: {}", e),
        }

        result
    }

    /// Executes an instruction on an 8-bit register.
    pub fn execute8(&mut self, instruction: Instruction, register: Register) -> Result<()> {
        let value = self.reg.get(register);

        match instruction {
            Instruction::Add => self.reg.a = self.add(value),
            Instruction::Adc => self.reg.a = self.adc(value),
            Instruction::Sub => self.reg.a = self.sub(value),
            Instruction::Sbc => self.reg.a = self.sbc(value),
            Instruction::And => self.reg.a = self.and(value),
            Instruction::Or => self.reg.a = self.or(value),
            Instruction::Xor => self.reg.a = self.xor(value),
            Instruction::Cp => self.cp(value),
            Instruction::Inc => {
                let result = self.inc(value);
                self.reg.set(register, result);
            }
            Instruction::Dec => {
                let result = self.dec(value);
                self.reg.set(register, result);
            }
            Instruction::Ccf => self.ccf(),
            Instruction::AddHl => {
                return Err(Error::UnsupportedTarget {
                    instruction,
                    target: register.into(),
                })
            }
        }

        Ok(())
    }

    /// Executes an instruction on a 16-bit register pair.
    ///
    /// Incrementing and decrementing a pair never touches the flags.
    pub fn execute16(&mut self, instruction: Instruction, pair: RegisterPair) -> Result<()> {
        match instruction {
            Instruction::AddHl => {
                let value = self.reg.get_pair(pair);
                let result = self.add_hl(value);
                self.reg.hl_mut().write(result);
            }
            Instruction::Inc => self.reg.pair_mut(pair).add_assign(1),
            Instruction::Dec => self.reg.pair_mut(pair).sub_assign(1),
            Instruction::Add
            | Instruction::Adc
            | Instruction::Sub
            | Instruction::Sbc
            | Instruction::And
            | Instruction::Or
            | Instruction::Xor
            | Instruction::Cp
            | Instruction::Ccf => {
                return Err(Error::UnsupportedTarget {
                    instruction,
                    target: pair.into(),
                })
            }
        }

        Ok(())
    }
}

impl fmt::Display for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reg)
    }
}
