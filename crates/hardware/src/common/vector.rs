//! Fixed-width bit vectors.
//!
//! A [`BitVector`] is an ordered sequence of [`Bit`]s, most-significant bit
//! first, whose width is part of its value. The width never changes except
//! through the explicit resizing operations on this type
//! ([`pad_to`](BitVector::pad_to), [`sign_extend_to`](BitVector::sign_extend_to),
//! [`truncate_to`](BitVector::truncate_to), [`resized`](BitVector::resized)).
//!
//! Operations that combine two vectors adopt a single width policy, applied
//! uniformly across the engine: the shorter operand is zero-extended to the
//! longer operand's width (see [`BitVector::standardized`]).

use std::fmt;
use std::str::FromStr;

use crate::common::bit::Bit;
use crate::common::error::LogicError;

/// A fixed-width, MSB-first sequence of bits.
///
/// # Examples
///
/// ```
/// use gatesim_core::common::BitVector;
///
/// let v: BitVector = "0110".parse()?;
/// assert_eq!(v.width(), 4);
/// assert_eq!(v.to_unsigned(), 6);
/// assert_eq!(v.to_string(), "0110");
/// # Ok::<(), gatesim_core::common::LogicError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: Vec<Bit>,
}

impl BitVector {
    /// Creates an all-zero vector of the given width.
    pub fn zeros(width: usize) -> Self {
        Self {
            bits: vec![Bit::Zero; width],
        }
    }

    /// Creates an all-one vector of the given width.
    pub fn ones(width: usize) -> Self {
        Self {
            bits: vec![Bit::One; width],
        }
    }

    /// Creates a vector repeating `bit` across the given width.
    pub fn repeat(bit: Bit, width: usize) -> Self {
        Self {
            bits: vec![bit; width],
        }
    }

    /// Creates a vector from MSB-first bits.
    pub fn from_bits(bits: Vec<Bit>) -> Self {
        Self { bits }
    }

    /// Encodes an unsigned value as a vector of the given width.
    ///
    /// The value's low `width` bits are kept; anything above them is
    /// discarded, and values narrower than `width` are left-zero-padded.
    pub fn from_unsigned(value: u64, width: usize) -> Self {
        let bits = (0..width)
            .rev()
            .map(|position| {
                if position < u64::BITS as usize {
                    Bit::from((value >> position) & 1 == 1)
                } else {
                    Bit::Zero
                }
            })
            .collect();
        Self { bits }
    }

    /// Reads the vector as an unsigned binary integer, MSB first.
    ///
    /// Widths beyond 64 bits wrap modulo `2^64`.
    pub fn to_unsigned(&self) -> u64 {
        self.bits
            .iter()
            .fold(0u64, |acc, bit| (acc << 1) | u64::from(bit.is_set()))
    }

    /// Width of the vector in bits.
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` for the width-0 vector.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bit at `index`, counted from the MSB end.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.width()`.
    pub fn bit(&self, index: usize) -> Bit {
        self.bits[index]
    }

    /// The most significant bit, or [`Bit::Zero`] for an empty vector.
    pub fn msb(&self) -> Bit {
        self.bits.first().copied().unwrap_or_default()
    }

    /// The bits as a slice, MSB first.
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Iterates the bits, MSB first.
    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.bits.iter().copied()
    }

    /// Returns a copy with `bit` prepended as a new most significant bit.
    ///
    /// This is the one sanctioned way a combinational result grows: the
    /// ripple adder promotes its final carry to a new leading bit.
    pub fn with_msb(&self, bit: Bit) -> Self {
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.push(bit);
        bits.extend_from_slice(&self.bits);
        Self { bits }
    }

    /// Concatenates `self` (high bits) with `other` (low bits).
    pub fn concat(&self, other: &Self) -> Self {
        let mut bits = self.bits.clone();
        bits.extend_from_slice(&other.bits);
        Self { bits }
    }

    /// Zero-extends on the MSB side up to `width`.
    ///
    /// Vectors already at least `width` wide are returned unchanged.
    pub fn pad_to(&self, width: usize) -> Self {
        if self.bits.len() >= width {
            return self.clone();
        }
        let mut bits = vec![Bit::Zero; width - self.bits.len()];
        bits.extend_from_slice(&self.bits);
        Self { bits }
    }

    /// Sign-extends on the MSB side up to `width`, replicating the MSB.
    ///
    /// Vectors already at least `width` wide are returned unchanged.
    pub fn sign_extend_to(&self, width: usize) -> Self {
        if self.bits.len() >= width {
            return self.clone();
        }
        let mut bits = vec![self.msb(); width - self.bits.len()];
        bits.extend_from_slice(&self.bits);
        Self { bits }
    }

    /// Keeps the low `width` bits, dropping from the MSB side.
    ///
    /// Vectors at most `width` wide are returned unchanged.
    pub fn truncate_to(&self, width: usize) -> Self {
        if self.bits.len() <= width {
            return self.clone();
        }
        Self {
            bits: self.bits[self.bits.len() - width..].to_vec(),
        }
    }

    /// Resizes to exactly `width`: zero-extends when narrower, truncates
    /// from the MSB side when wider.
    pub fn resized(&self, width: usize) -> Self {
        if self.bits.len() < width {
            self.pad_to(width)
        } else {
            self.truncate_to(width)
        }
    }

    /// Applies the uniform width policy to a pair of operands: the shorter
    /// is zero-extended to the longer operand's width.
    pub fn standardized(a: &Self, b: &Self) -> (Self, Self) {
        let width = a.width().max(b.width());
        (a.pad_to(width), b.pad_to(width))
    }

    /// Extracts the field of `width` bits starting at `start` (counted from
    /// the MSB end).
    ///
    /// # Panics
    ///
    /// Panics if the field extends past the end of the vector.
    pub fn field(&self, start: usize, width: usize) -> Self {
        Self {
            bits: self.bits[start..start + width].to_vec(),
        }
    }

    /// Splits the vector into consecutive fields of the given widths.
    ///
    /// # Errors
    ///
    /// Returns [`LogicError::WidthMismatch`] when the widths do not sum to
    /// the vector's width.
    pub fn split_fields(&self, widths: &[usize]) -> Result<Vec<Self>, LogicError> {
        let expected: usize = widths.iter().sum();
        if expected != self.width() {
            return Err(LogicError::WidthMismatch {
                expected,
                actual: self.width(),
            });
        }
        let mut fields = Vec::with_capacity(widths.len());
        let mut start = 0;
        for &width in widths {
            fields.push(self.field(start, width));
            start += width;
        }
        Ok(fields)
    }

    /// Combines two vectors position-wise after standardizing their widths.
    pub(crate) fn zip_with(a: &Self, b: &Self, f: impl Fn(Bit, Bit) -> Bit) -> Self {
        let (a, b) = Self::standardized(a, b);
        let bits = a
            .bits
            .iter()
            .zip(b.bits.iter())
            .map(|(&x, &y)| f(x, y))
            .collect();
        Self { bits }
    }

    /// Maps every bit through `f`, preserving width.
    pub(crate) fn map(&self, f: impl Fn(Bit) -> Bit) -> Self {
        Self {
            bits: self.bits.iter().map(|&bit| f(bit)).collect(),
        }
    }
}

impl From<Bit> for BitVector {
    fn from(bit: Bit) -> Self {
        Self { bits: vec![bit] }
    }
}

impl FromStr for BitVector {
    type Err = LogicError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let bits = text
            .chars()
            .map(Bit::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { bits })
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit.symbol())?;
        }
        Ok(())
    }
}
