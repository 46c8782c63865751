//! Implementations of the ALU operations.
//!
//! Each operation computes a result from the current registers and an operand, rewrites the flags,
//! and hands the result back to the dispatcher. None of them write the result anywhere.

use log::*;

use crate::bytes::{ByteExt, WordExt};
use crate::cpu::arithmetic::{add16, add8, sub8};
use crate::cpu::Flags;

impl super::Cpu {
    /// Adds a byte to the accumulator.
    ///
    /// # Flags
    ///
    /// | Flag       | Result
    /// | ---------- | ---
    /// | Zero       | Set if the result is 0.
    /// | Subtract   | Reset.
    /// | Half-carry | Set if there is a carry from bit 3.
    /// | Carry      | Set if there is a carry from bit 7.
    pub fn add(&mut self, value: u8) -> u8 {
        let a = self.reg.a;

        let (sum, is_carry) = add8(a, value, self.config.carry_bound);
        let (_, is_half_carry) = a.half_carry_add(value);

        self.reg.f = Flags::empty();
        self.reg.f.set(Flags::ZERO, sum == 0);
        self.reg.f.set(Flags::HALF_CARRY, is_half_carry);
        self.reg.f.set(Flags::CARRY, is_carry);

        sum
    }

    /// Adds a byte and the carry flag to the accumulator.
    ///
    /// The carry is folded into the operand first, and the adjusted operand goes through
    /// [`add`](#method.add). If folding in the carry overflows the operand, the carry flag is set
    /// no matter what the addition itself reported.
    pub fn adc(&mut self, value: u8) -> u8 {
        let (operand, is_carry_in_overflow) =
            add8(value, self.reg.f.carry_bit(), self.config.carry_bound);

        let sum = self.add(operand);

        if is_carry_in_overflow {
            trace!("carry-in overflowed operand {:#04x}", value);
            self.reg.f.insert(Flags::CARRY);
        }

        sum
    }

    /// Subtracts a byte from the accumulator.
    ///
    /// # Flags
    ///
    /// | Flag       | Result
    /// | ---------- | ---
    /// | Zero       | Set if the result is 0.
    /// | Subtract   | Set.
    /// | Half-carry | Set if there is a borrow from bit 4.
    /// | Carry      | Set if there is a borrow, i.e. the operand is larger than `A`.
    pub fn sub(&mut self, value: u8) -> u8 {
        let a = self.reg.a;

        let (difference, is_carry) = sub8(a, value);
        let (_, is_half_carry) = a.half_carry_sub(value);

        self.reg.f = Flags::SUBTRACT;
        self.reg.f.set(Flags::ZERO, difference == 0);
        self.reg.f.set(Flags::HALF_CARRY, is_half_carry);
        self.reg.f.set(Flags::CARRY, is_carry);

        difference
    }

    /// Subtracts a byte and the carry flag from the accumulator.
    ///
    /// Like [`adc`](#method.adc), the carry is added to the operand before subtracting, and an
    /// overflow in that step sets the carry flag.
    pub fn sbc(&mut self, value: u8) -> u8 {
        let (operand, is_carry_in_overflow) =
            add8(value, self.reg.f.carry_bit(), self.config.carry_bound);

        let difference = self.sub(operand);

        if is_carry_in_overflow {
            trace!("carry-in overflowed operand {:#04x}", value);
            self.reg.f.insert(Flags::CARRY);
        }

        difference
    }

    /// Bitwise ANDs a byte with the accumulator. Half-carry is always set.
    pub fn and(&mut self, value: u8) -> u8 {
        let result = self.reg.a & value;

        self.reg.f = Flags::HALF_CARRY;
        self.reg.f.set(Flags::ZERO, result == 0);

        result
    }

    /// Bitwise ORs a byte with the accumulator. Only the zero flag may be set.
    pub fn or(&mut self, value: u8) -> u8 {
        let result = self.reg.a | value;

        self.reg.f = Flags::empty();
        self.reg.f.set(Flags::ZERO, result == 0);

        result
    }

    /// Performs an exclusive OR with the accumulator. Only the zero flag may be set.
    pub fn xor(&mut self, value: u8) -> u8 {
        let result = self.reg.a ^ value;

        self.reg.f = Flags::empty();
        self.reg.f.set(Flags::ZERO, result == 0);

        result
    }

    /// Compares a byte with the accumulator.
    ///
    /// Performs a subtraction with the accumulator and throws the difference away. Only the flags
    /// are set.
    pub fn cp(&mut self, value: u8) {
        self.sub(value);
    }

    /// Increments a byte by 1 (with overflow).
    ///
    /// # Flags
    ///
    /// | Flag       | Result
    /// | ---------- | ---
    /// | Zero       | Set if the result is 0.
    /// | Subtract   | Reset.
    /// | Half-carry | Set if the low nibbles of `A` and the byte sum past `0xF`.
    /// | Carry      | Set if the byte wrapped around.
    pub fn inc(&mut self, value: u8) -> u8 {
        let (sum, is_carry) = add8(value, 1, self.config.carry_bound);
        let (_, is_half_carry) = self.reg.a.half_carry_add(value);

        self.reg.f = Flags::empty();
        self.reg.f.set(Flags::ZERO, sum == 0);
        self.reg.f.set(Flags::HALF_CARRY, is_half_carry);
        self.reg.f.set(Flags::CARRY, is_carry);

        sum
    }

    /// Decrements a byte by 1 (with underflow).
    ///
    /// # Flags
    ///
    /// | Flag       | Result
    /// | ---------- | ---
    /// | Zero       | Set if the result is 0.
    /// | Subtract   | Set.
    /// | Half-carry | Set if the low nibble of `A` is below the byte's.
    /// | Carry      | Set if the byte wrapped around.
    pub fn dec(&mut self, value: u8) -> u8 {
        let (difference, is_carry) = sub8(value, 1);
        let (_, is_half_carry) = self.reg.a.half_carry_sub(value);

        self.reg.f = Flags::SUBTRACT;
        self.reg.f.set(Flags::ZERO, difference == 0);
        self.reg.f.set(Flags::HALF_CARRY, is_half_carry);
        self.reg.f.set(Flags::CARRY, is_carry);

        difference
    }

    /// Adds a 16-bit number to the `HL` register pair.
    ///
    /// Half-carry reports a carry out of the low eleven bits.
    pub fn add_hl(&mut self, value: u16) -> u16 {
        let hl = self.reg.hl();

        let (sum, is_carry) = add16(hl, value, self.config.carry_bound);
        let (_, is_half_carry) = hl.half_carry_add(value);

        self.reg.f = Flags::empty();
        self.reg.f.set(Flags::ZERO, sum == 0);
        self.reg.f.set(Flags::HALF_CARRY, is_half_carry);
        self.reg.f.set(Flags::CARRY, is_carry);

        sum
    }

    /// Complements the carry flag and resets subtract and half-carry. Zero is kept.
    pub fn ccf(&mut self) {
        let old_carry = self.reg.f.contains(Flags::CARRY);
        self.reg.f.remove(Flags::SUBTRACT | Flags::HALF_CARRY);
        self.reg.f.set(Flags::CARRY, !old_carry);
    }
}
