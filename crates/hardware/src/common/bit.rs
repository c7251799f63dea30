//! The two-valued bit symbol.
//!
//! A [`Bit`] is one of exactly two symbols. Any other input character is
//! rejected at the string boundary with
//! [`LogicError::InvalidBitSymbol`](crate::common::error::LogicError::InvalidBitSymbol);
//! once a value is a `Bit`, invalid states are unrepresentable.

use std::fmt;

use crate::common::error::LogicError;

/// A single binary value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Bit {
    /// The `'0'` symbol.
    #[default]
    Zero,
    /// The `'1'` symbol.
    One,
}

impl Bit {
    /// Parses a bit from its character symbol.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::InvalidBitSymbol`] for anything other than
    /// `'0'` or `'1'`.
    pub const fn from_symbol(symbol: char) -> Result<Self, LogicError> {
        match symbol {
            '0' => Ok(Self::Zero),
            '1' => Ok(Self::One),
            other => Err(LogicError::InvalidBitSymbol(other)),
        }
    }

    /// Returns the character symbol for this bit.
    pub const fn symbol(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    /// Returns `true` when the bit is [`Bit::One`].
    pub const fn is_set(self) -> bool {
        matches!(self, Self::One)
    }

    /// Logical complement.
    pub const fn not(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }

    /// Logical AND of two bits.
    pub const fn and(self, other: Self) -> Self {
        match (self, other) {
            (Self::One, Self::One) => Self::One,
            _ => Self::Zero,
        }
    }

    /// Logical OR of two bits.
    pub const fn or(self, other: Self) -> Self {
        match (self, other) {
            (Self::Zero, Self::Zero) => Self::Zero,
            _ => Self::One,
        }
    }

    /// Logical XOR of two bits.
    pub const fn xor(self, other: Self) -> Self {
        // (a OR b) AND NOT (a AND b), collapsed.
        match (self, other) {
            (Self::Zero, Self::One) | (Self::One, Self::Zero) => Self::One,
            _ => Self::Zero,
        }
    }

    /// Logical NAND of two bits.
    pub const fn nand(self, other: Self) -> Self {
        self.and(other).not()
    }

    /// Logical NOR of two bits.
    pub const fn nor(self, other: Self) -> Self {
        self.or(other).not()
    }

    /// Logical XNOR of two bits.
    pub const fn xnor(self, other: Self) -> Self {
        self.xor(other).not()
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value { Self::One } else { Self::Zero }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_set()
    }
}

impl TryFrom<char> for Bit {
    type Error = LogicError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
