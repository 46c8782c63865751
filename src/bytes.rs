//! Additional functionality for working with bytes.

/// Extension trait for bit manipulation.
pub trait ByteExt {
    /// Returns whether the byte has its nth bit set.
    fn has_bit_set(&self, n: u8) -> bool;

    /// Wrapping addition that also reports whether the low nibbles carried into bit 4.
    fn half_carry_add(&self, rhs: u8) -> (u8, bool);

    /// Wrapping subtraction that also reports whether the low nibble had to borrow from bit 4.
    fn half_carry_sub(&self, rhs: u8) -> (u8, bool);
}

impl ByteExt for u8 {
    fn has_bit_set(&self, n: u8) -> bool {
        if n > 7 {
            panic!("bit {} is out of range for u8", n);
        }

        (self & (1 << n)) != 0
    }

    fn half_carry_add(&self, rhs: u8) -> (u8, bool) {
        let is_half_carry = (self & 0xF) + (rhs & 0xF) > 0xF;
        (self.wrapping_add(rhs), is_half_carry)
    }

    fn half_carry_sub(&self, rhs: u8) -> (u8, bool) {
        let is_half_carry = (self & 0xF) < (rhs & 0xF);
        (self.wrapping_sub(rhs), is_half_carry)
    }
}

/// Extension trait for 16-bit words.
pub trait WordExt {
    /// Wrapping addition that also reports whether the low eleven bits overflowed into bit 11.
    fn half_carry_add(&self, rhs: u16) -> (u16, bool);
}

impl WordExt for u16 {
    fn half_carry_add(&self, rhs: u16) -> (u16, bool) {
        const MASK: u16 = 0b111_1111_1111;

        let is_half_carry = (self & MASK) + (rhs & MASK) > MASK;
        (self.wrapping_add(rhs), is_half_carry)
    }
}

#[cfg(test)]
mod tests {
    use super::{ByteExt, WordExt};

    #[test]
    fn has_bit_set() {
        let byte = 0x80u8;
        assert!(byte.has_bit_set(7));
        assert!(!byte.has_bit_set(0));
    }

    #[test]
    #[should_panic(expected = "bit 8 is out of range for u8")]
    fn has_bit_out_of_range() {
        0xFFu8.has_bit_set(8);
    }

    #[test]
    fn half_carry_add() {
        assert_eq!(0x0Fu8.half_carry_add(0x01), (0x10, true));
        assert_eq!(0x37u8.half_carry_add(0x44), (0x7B, false));
        assert_eq!(0xFFu8.half_carry_add(0x01), (0x00, true));
        assert_eq!(0x0Au8.half_carry_add(0x0A), (0x14, true));
    }

    #[test]
    fn half_carry_sub() {
        assert_eq!(0xF0u8.half_carry_sub(0x01), (0xEF, true));
        assert_eq!(0xFFu8.half_carry_sub(0xF0), (0x0F, false));
        assert_eq!(0x14u8.half_carry_sub(0x1E), (0xF6, true));
    }

    #[test]
    fn half_carry_add_16() {
        assert_eq!(0x07FFu16.half_carry_add(0x0001), (0x0800, true));
        assert_eq!(0x0100u16.half_carry_add(0x0001), (0x0101, false));
        assert_eq!(0xFFFFu16.half_carry_add(0x0001), (0x0000, true));
        assert_eq!(0x0800u16.half_carry_add(0x0800), (0x1000, false));
    }
}
