use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Symbol emitted by the classifier for a single difference value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    /// Adenine; the difference lies strictly between `c` and `b`.
    A,
    /// Cytosine; the difference lies in `[b, a]`.
    C,
    /// Guanine; the difference lies in `[d, c]`.
    G,
    /// Thymine; the difference lies above `a` or below `d`.
    T,
}

impl Nucleotide {
    pub const VALUES: [Nucleotide; 4] =
        [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    #[inline]
    #[must_use]
    pub const fn as_char(&self) -> char {
        self.as_byte() as char
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(&self) -> u8 {
        match self {
            Nucleotide::A => b'A',
            Nucleotide::C => b'C',
            Nucleotide::G => b'G',
            Nucleotide::T => b'T',
        }
    }

    /// Returns the nucleotide for given ASCII byte, or `None` if the byte is
    /// not one of `A`, `C`, `G`, `T`.
    ///
    /// # Examples
    /// ```
    /// use dbcode::nucleotide::Nucleotide;
    ///
    /// assert_eq!(Nucleotide::from_byte(b'G'), Some(Nucleotide::G));
    /// assert_eq!(Nucleotide::from_byte(b'N'), None);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'A' => Some(Nucleotide::A),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            b'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    /// Index in `0..4`, used to address the codon table.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for Nucleotide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use crate::nucleotide::Nucleotide;

    #[test]
    fn test_nucleotide_display() {
        assert_eq!(format!("{}", Nucleotide::A), "A");
        assert_eq!(format!("{}", Nucleotide::C), "C");
        assert_eq!(format!("{}", Nucleotide::G), "G");
        assert_eq!(format!("{}", Nucleotide::T), "T");
    }

    #[test]
    fn test_byte_conversion() {
        for nucleotide in Nucleotide::VALUES {
            assert_eq!(Nucleotide::from_byte(nucleotide.as_byte()), Some(nucleotide));
        }
        assert_eq!(Nucleotide::from_byte(b'a'), None);
        assert_eq!(Nucleotide::from_byte(b'U'), None);
    }

    #[test]
    fn test_index() {
        let indices: Vec<_> = Nucleotide::VALUES.iter().map(Nucleotide::index).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }
}
