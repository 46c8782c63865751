//! Error handling.

use thiserror::Error;

use crate::cpu::{ArithmeticTarget, Instruction};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The instruction is not defined for an operand of the target's width.
    #[error("{instruction} cannot operate on {target}")]
    UnsupportedTarget {
        instruction: Instruction,
        target: ArithmeticTarget,
    },

    #[error("could not parse {0:?}")]
    Parse(String),
}
