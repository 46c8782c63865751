//! Instruction and operand definitions.
//!
//! A decoder hands the CPU an [`Instruction`] together with the [`ArithmeticTarget`] it applies to.
//! The target alone decides whether the 8-bit or the 16-bit execution path runs.

use std::fmt;
use std::str::FromStr;

use derive_more::{Display, From};

use crate::cpu::{Register, RegisterPair};
use crate::errors::Error;

/// The arithmetic and logic instructions understood by the ALU.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Add to `A`.
    #[display(fmt = "ADD")]
    Add,

    /// Add a register pair to `HL`.
    #[display(fmt = "ADDHL")]
    AddHl,

    /// Add to `A` with the carry flag.
    #[display(fmt = "ADC")]
    Adc,

    /// Subtract from `A`.
    #[display(fmt = "SUB")]
    Sub,

    /// Subtract from `A` with the carry flag.
    #[display(fmt = "SBC")]
    Sbc,

    #[display(fmt = "AND")]
    And,

    #[display(fmt = "OR")]
    Or,

    #[display(fmt = "XOR")]
    Xor,

    /// Compare with `A`. Only the flags change.
    #[display(fmt = "CP")]
    Cp,

    /// Increment the target in place.
    #[display(fmt = "INC")]
    Inc,

    /// Decrement the target in place.
    #[display(fmt = "DEC")]
    Dec,

    /// Complement the carry flag.
    #[display(fmt = "CCF")]
    Ccf,
}

impl FromStr for Instruction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let instruction = match s.to_ascii_uppercase().as_str() {
            "ADD" => Instruction::Add,
            "ADDHL" => Instruction::AddHl,
            "ADC" => Instruction::Adc,
            "SUB" => Instruction::Sub,
            "SBC" => Instruction::Sbc,
            "AND" => Instruction::And,
            "OR" => Instruction::Or,
            "XOR" => Instruction::Xor,
            "CP" => Instruction::Cp,
            "INC" => Instruction::Inc,
            "DEC" => Instruction::Dec,
            "CCF" => Instruction::Ccf,
            _ => return Err(Error::Parse(s.to_owned())),
        };

        Ok(instruction)
    }
}

/// The operand of an instruction: either a single 8-bit register or a 16-bit register pair.
///
/// ```
/// use lr35902_alu::cpu::{ArithmeticTarget, Register, RegisterPair};
///
/// assert_eq!("b".parse(), Ok(ArithmeticTarget::Register(Register::B)));
/// assert_eq!("HL".parse(), Ok(ArithmeticTarget::Pair(RegisterPair::HL)));
/// ```
#[derive(Debug, From, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ArithmeticTarget {
    /// An 8-bit operand.
    Register(Register),

    /// A 16-bit operand.
    Pair(RegisterPair),
}

impl ArithmeticTarget {
    /// Returns `true` if the target is a register pair.
    pub fn is_wide(self) -> bool {
        match self {
            ArithmeticTarget::Register(_) => false,
            ArithmeticTarget::Pair(_) => true,
        }
    }
}

impl fmt::Display for ArithmeticTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticTarget::Register(register) => write!(f, "{}", register),
            ArithmeticTarget::Pair(pair) => write!(f, "{}", pair),
        }
    }
}

impl FromStr for ArithmeticTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Register>()
            .map(ArithmeticTarget::from)
            .or_else(|_| s.parse::<RegisterPair>().map(ArithmeticTarget::from))
    }
}
