//! CPU Registers.

use std::default::Default;
use std::fmt;
use std::num::Wrapping;
use std::ops::{AddAssign, SubAssign};
use std::str::FromStr;

use byteorder::{BigEndian, ByteOrder};
use derive_more::Display;

use super::Flags;
use crate::errors::Error;

/// A single 8-bit register that instructions may operate on.
///
/// `F` is not addressable here. The flags are reachable only through [`Flags`].
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Register {
    #[display(fmt = "A")]
    A,
    #[display(fmt = "B")]
    B,
    #[display(fmt = "C")]
    C,
    #[display(fmt = "D")]
    D,
    #[display(fmt = "E")]
    E,
    #[display(fmt = "H")]
    H,
    #[display(fmt = "L")]
    L,
}

/// Two 8-bit registers viewed as a single 16-bit register. The first named register is the high
/// byte.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RegisterPair {
    #[display(fmt = "BC")]
    BC,
    #[display(fmt = "DE")]
    DE,
    #[display(fmt = "HL")]
    HL,
}

impl FromStr for Register {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let register = match s.to_ascii_uppercase().as_str() {
            "A" => Register::A,
            "B" => Register::B,
            "C" => Register::C,
            "D" => Register::D,
            "E" => Register::E,
            "H" => Register::H,
            "L" => Register::L,
            _ => return Err(Error::Parse(s.to_owned())),
        };

        Ok(register)
    }
}

impl FromStr for RegisterPair {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pair = match s.to_ascii_uppercase().as_str() {
            "BC" => RegisterPair::BC,
            "DE" => RegisterPair::DE,
            "HL" => RegisterPair::HL,
            _ => return Err(Error::Parse(s.to_owned())),
        };

        Ok(pair)
    }
}

/// Two mutable registers treated as a pair (`BC`, `DE`, `HL`).
///
/// Addition and subtraction may be performed on each pair. Both wrap and neither touches the
/// flags.
#[derive(Debug)]
pub struct RegisterPairMut<'a> {
    hi: &'a mut u8,
    lo: &'a mut u8,
}

impl<'a> RegisterPairMut<'a> {
    /// Returns the register pair as a word.
    pub fn as_word(&self) -> u16 {
        BigEndian::read_u16(&[*self.hi, *self.lo])
    }

    /// Write a word to the register pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use lr35902_alu::cpu::Registers;
    ///
    /// let mut registers = Registers::new();
    ///
    /// registers.bc_mut().write(0xABCD);
    ///
    /// assert_eq!(registers.bc(), 0xABCD);
    /// assert_eq!(registers.b, 0xAB);
    /// assert_eq!(registers.c, 0xCD);
    /// ```
    pub fn write(&mut self, value: u16) {
        let mut bytes = [0u8; 2];
        BigEndian::write_u16(&mut bytes, value);

        *self.hi = bytes[0];
        *self.lo = bytes[1];
    }
}

impl<'a> AddAssign<u16> for RegisterPairMut<'a> {
    fn add_assign(&mut self, rhs: u16) {
        let pair = Wrapping(self.as_word()) + Wrapping(rhs);

        self.write(pair.0)
    }
}

impl<'a> SubAssign<u16> for RegisterPairMut<'a> {
    fn sub_assign(&mut self, rhs: u16) {
        let pair = Wrapping(self.as_word()) - Wrapping(rhs);

        self.write(pair.0)
    }
}

/// The register file.
///
/// The 8-bit registers (`A`, `F`, `B`, `C`, `D`, `E`, `H`, and `L`) may be accessed by their
/// individual fields, or by name through [`Register`].
///
/// Note that the flag register is not actually a `u8`. To access it as a byte, use
/// [`Flags::pack`].
///
/// ```
/// use lr35902_alu::cpu::{Flags, Registers};
///
/// let mut registers = Registers::new();
/// registers.f.insert(Flags::ZERO | Flags::HALF_CARRY);
/// assert_eq!(registers.f.pack(), 0b1010_0000);
/// ```
///
/// Register pairs are never stored. They are assembled from their halves on every read and split
/// back on every write, with the left register as the high byte.
///
/// ```
/// use lr35902_alu::cpu::{Registers, RegisterPair};
///
/// let mut registers = Registers::new();
/// registers.b = 10;
/// registers.c = 10;
/// assert_eq!(registers.bc(), 2570);
///
/// registers.set_pair(RegisterPair::HL, 0x0101);
/// assert_eq!((registers.h, registers.l), (0x01, 0x01));
/// ```
///
/// For convenience, assigning addition and subtraction may be performed on each pair.
///
/// ```
/// use lr35902_alu::cpu::Registers;
///
/// let mut registers = Registers::new();
/// {
///     let mut de = registers.de_mut();
///     de += 1;
/// }
///
/// assert_eq!(registers.de(), 0x0001);
/// assert_eq!(registers.d, 0x00);
/// assert_eq!(registers.e, 0x01);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,

    /// Status flags.
    pub f: Flags,

    /// General purpose register `B`.
    pub b: u8,

    /// General purpose register `C`.
    pub c: u8,

    /// General purpose register `D`.
    pub d: u8,

    /// General purpose register `E`.
    pub e: u8,

    /// General purpose register `H`.
    pub h: u8,

    /// General purpose register `L`.
    pub l: u8,
}

impl Registers {
    /// Create a new register set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the value of an 8-bit register.
    pub fn get(&self, register: Register) -> u8 {
        match register {
            Register::A => self.a,
            Register::B => self.b,
            Register::C => self.c,
            Register::D => self.d,
            Register::E => self.e,
            Register::H => self.h,
            Register::L => self.l,
        }
    }

    /// Writes an 8-bit register.
    pub fn set(&mut self, register: Register, value: u8) {
        *self.get_mut(register) = value;
    }

    fn get_mut(&mut self, register: Register) -> &mut u8 {
        match register {
            Register::A => &mut self.a,
            Register::B => &mut self.b,
            Register::C => &mut self.c,
            Register::D => &mut self.d,
            Register::E => &mut self.e,
            Register::H => &mut self.h,
            Register::L => &mut self.l,
        }
    }

    /// Returns the value of a register pair.
    pub fn get_pair(&self, pair: RegisterPair) -> u16 {
        match pair {
            RegisterPair::BC => self.bc(),
            RegisterPair::DE => self.de(),
            RegisterPair::HL => self.hl(),
        }
    }

    /// Writes a register pair, splitting the word across both halves.
    pub fn set_pair(&mut self, pair: RegisterPair, value: u16) {
        self.pair_mut(pair).write(value);
    }

    /// Returns a mutable reference to a register pair.
    pub fn pair_mut(&mut self, pair: RegisterPair) -> RegisterPairMut<'_> {
        match pair {
            RegisterPair::BC => self.bc_mut(),
            RegisterPair::DE => self.de_mut(),
            RegisterPair::HL => self.hl_mut(),
        }
    }

    /// Returns register pair `AF`.
    pub fn af(&self) -> u16 {
        BigEndian::read_u16(&[self.a, self.f.pack()])
    }

    /// Writes register pair `AF`. The lower nibble of `F` is dropped.
    pub fn set_af(&mut self, value: u16) {
        let mut bytes = [0u8; 2];
        BigEndian::write_u16(&mut bytes, value);

        self.a = bytes[0];
        self.f = Flags::unpack(bytes[1]);
    }

    /// Returns register pair `BC`.
    pub fn bc(&self) -> u16 {
        BigEndian::read_u16(&[self.b, self.c])
    }

    /// Returns a mutable reference to register pair `BC`.
    pub fn bc_mut(&mut self) -> RegisterPairMut<'_> {
        RegisterPairMut {
            hi: &mut self.b,
            lo: &mut self.c,
        }
    }

    /// Returns register pair `DE`.
    pub fn de(&self) -> u16 {
        BigEndian::read_u16(&[self.d, self.e])
    }

    /// Returns a mutable reference to register pair `DE`.
    pub fn de_mut(&mut self) -> RegisterPairMut<'_> {
        RegisterPairMut {
            hi: &mut self.d,
            lo: &mut self.e,
        }
    }

    /// Returns register pair `HL`.
    pub fn hl(&self) -> u16 {
        BigEndian::read_u16(&[self.h, self.l])
    }

    /// Returns a mutable reference to register pair `HL`.
    pub fn hl_mut(&mut self) -> RegisterPairMut<'_> {
        RegisterPairMut {
            hi: &mut self.h,
            lo: &mut self.l,
        }
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "A {:#04x}  {} F", self.a, self.f)?;
        writeln!(f, "B {:#04x}  {:#04x} C", self.b, self.c)?;
        writeln!(f, "D {:#04x}  {:#04x} E", self.d, self.e)?;
        writeln!(f, "H {:#04x}  {:#04x} L", self.h, self.l)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ops::SubAssign;

    use quickcheck::quickcheck;

    use super::{Flags, Register, RegisterPair, Registers};

    #[test]
    fn bc() {
        let mut registers = Registers::new();
        registers.b = 10;
        registers.c = 10;

        assert_eq!(registers.bc(), 2570);
        assert_eq!(registers.get_pair(RegisterPair::BC), 0x0A0A);
    }

    #[test]
    fn set_bc() {
        let mut registers = Registers::new();

        registers.set_pair(RegisterPair::BC, 10);

        assert_eq!(registers.b, 0);
        assert_eq!(registers.c, 10);
    }

    #[test]
    fn named_access() {
        let mut registers = Registers::new();

        let all = [
            Register::A,
            Register::B,
            Register::C,
            Register::D,
            Register::E,
            Register::H,
            Register::L,
        ];

        for (i, &register) in all.iter().enumerate() {
            registers.set(register, i as u8 + 1);
        }

        assert_eq!(
            [
                registers.a,
                registers.b,
                registers.c,
                registers.d,
                registers.e,
                registers.h,
                registers.l
            ],
            [1, 2, 3, 4, 5, 6, 7]
        );
        assert_eq!(registers.f, Flags::empty());

        for (i, &register) in all.iter().enumerate() {
            assert_eq!(registers.get(register), i as u8 + 1);
        }
    }

    #[test]
    fn parse() {
        assert_eq!("b".parse(), Ok(Register::B));
        assert_eq!("HL".parse(), Ok(RegisterPair::HL));
        assert!("F".parse::<Register>().is_err());
        assert!("AF".parse::<RegisterPair>().is_err());
    }

    #[test]
    fn af_masks_low_nibble() {
        let mut registers = Registers::new();

        registers.set_af(0x12FF);

        assert_eq!(registers.a, 0x12);
        assert_eq!(registers.f, Flags::all());
        assert_eq!(registers.af(), 0x12F0);
    }

    #[test]
    fn wrap_pair() {
        let mut registers = Registers::default();

        registers.hl_mut().sub_assign(1);

        assert_eq!(registers.h, 0xFF);
        assert_eq!(registers.l, 0xFF);
    }

    #[test]
    fn conversion_equals_immutable() {
        let mut registers = Registers::default();

        registers.hl_mut().write(0xBEEF);

        assert_eq!(0xBEEF, registers.hl_mut().as_word());
        assert_eq!(registers.hl_mut().as_word(), registers.hl());
    }

    #[test]
    fn display() {
        let mut registers = Registers::default();
        registers.a = 0x14;
        registers.f = Flags::ZERO | Flags::HALF_CARRY;
        registers.set_pair(RegisterPair::DE, 0xBEEF);

        assert_eq!(
            registers.to_string(),
            "A 0x14  Z-H- F\nB 0x00  0x00 C\nD 0xbe  0xef E\nH 0x00  0x00 L\n"
        );
    }

    quickcheck! {
        fn pair_round_trip(value: u16) -> bool {
            let mut registers = Registers::new();

            [RegisterPair::BC, RegisterPair::DE, RegisterPair::HL].iter().all(|&pair| {
                registers.set_pair(pair, value);
                registers.get_pair(pair) == value
            })
        }

        fn pair_is_big_endian(hi: u8, lo: u8) -> bool {
            let mut registers = Registers::new();
            registers.h = hi;
            registers.l = lo;

            registers.hl() == (u16::from(hi) << 8) | u16::from(lo)
        }
    }
}
