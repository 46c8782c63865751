//! The flags register, `F`.

use std::fmt;

use bitflags::bitflags;

use crate::bytes::ByteExt;

bitflags! {
    /// CPU status flags.
    ///
    /// The hardware register is a full byte, but only the upper nibble is meaningful. Converting a
    /// byte into `Flags` discards the lower nibble, and converting back always leaves it zeroed.
    ///
    /// ```
    /// use lr35902_alu::cpu::Flags;
    ///
    /// let flags = Flags::from(0b1010_1111u8);
    /// assert_eq!(flags, Flags::ZERO | Flags::HALF_CARRY);
    /// assert_eq!(u8::from(flags), 0b1010_0000);
    /// ```
    #[derive(Default)]
    pub struct Flags: u8 {
        /// Set if the value of the computation is zero.
        const ZERO          = 0b1000_0000;

        /// Set if the last operation was a subtraction.
        const SUBTRACT      = 0b0100_0000;

        /// Set if there was a carry out of the low nibble (or out of bit 10 for 16-bit additions).
        const HALF_CARRY    = 0b0010_0000;

        /// Set if the result did not fit in the register.
        const CARRY         = 0b0001_0000;
    }
}

impl Flags {
    /// Packs the flags into their hardware byte representation.
    pub fn pack(self) -> u8 {
        self.bits()
    }

    /// Unpacks a hardware byte. The lower nibble is never interpreted.
    pub fn unpack(byte: u8) -> Flags {
        Flags::from_bits_truncate(byte)
    }

    /// The carry flag as an operand bit, `0` or `1`.
    pub fn carry_bit(self) -> u8 {
        self.contains(Flags::CARRY) as u8
    }
}

impl From<u8> for Flags {
    fn from(byte: u8) -> Flags {
        Flags::unpack(byte)
    }
}

impl From<Flags> for u8 {
    fn from(flags: Flags) -> u8 {
        flags.pack()
    }
}

impl fmt::Display for Flags {
    /// Prints the flags in `ZNHC` order, using `-` for a cleared flag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte = self.pack();

        for (bit, name) in (4..8).rev().zip("ZNHC".chars()) {
            if byte.has_bit_set(bit) {
                write!(f, "{}", name)?;
            } else {
                write!(f, "-")?;
            }
        }

        Ok(())
    }
}
