//! Symbol sequences produced by the pipeline and the interleaving of the
//! three per-reference strands.

use std::fmt::{Display, Formatter};

use derive_more::Deref;
use itertools::izip;
use log::debug;

use crate::error::{EncodeError, EncodeResult};

macro_rules! symbol_sequence {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Deref, Debug, Eq, PartialEq, Hash, Clone, Default)]
        pub struct $name(String);

        impl $name {
            /// Returns this sequence as string.
            #[inline]
            #[must_use]
            pub fn str(&self) -> &str {
                &self.0
            }

            /// Consumes this sequence and returns the underlying string.
            #[inline]
            #[must_use]
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

symbol_sequence!(
    /// Nucleotide symbols for a single reference point, one per sample.
    Strand
);

symbol_sequence!(
    /// The three strands merged position by position (R1, R2, R3 for each
    /// sample index).
    Transcript
);

symbol_sequence!(
    /// One output symbol per complete codon of a [`Transcript`].
    Protein
);

/// Human-readable description of [`interleave`].
pub const INTERLEAVE_RULE: &str = "mRNA[i] = DNA1[i] + DNA2[i] + DNA3[i]";

/// Merges three equal-length strands into a single transcript of length
/// `3 × L`, taking one symbol from each strand per index.
///
/// # Examples
/// ```
/// use dbcode::strand::{interleave, Strand};
///
/// let strands = [Strand::from("AC"), Strand::from("GT"), Strand::from("CA")];
/// assert_eq!(interleave(&strands).unwrap().str(), "AGCCTA");
/// ```
pub fn interleave(strands: &[Strand; 3]) -> EncodeResult<Transcript> {
    let [s1, s2, s3] = strands;
    if s1.len() != s2.len() || s1.len() != s3.len() {
        return Err(EncodeError::LengthMismatch {
            lengths: [s1.len(), s2.len(), s3.len()],
        });
    }

    let mut transcript = String::with_capacity(s1.len() * 3);
    for (c1, c2, c3) in izip!(s1.chars(), s2.chars(), s3.chars()) {
        transcript.push(c1);
        transcript.push(c2);
        transcript.push(c3);
    }
    debug!("Interleaved transcript of length {}", transcript.len());

    Ok(Transcript(transcript))
}

#[cfg(test)]
mod tests {
    use crate::error::EncodeError;
    use crate::strand::{interleave, Strand, Transcript};

    #[test]
    fn test_interleave_order() {
        let strands = [
            Strand::from("AAAA"),
            Strand::from("CCCC"),
            Strand::from("GTGT"),
        ];
        let transcript = interleave(&strands).unwrap();

        assert_eq!(transcript, Transcript::from("ACGACTACGACT"));
        assert_eq!(transcript.len(), 3 * strands[0].len());
    }

    #[test]
    fn test_interleave_empty() {
        let strands = [Strand::default(), Strand::default(), Strand::default()];
        assert!(interleave(&strands).unwrap().is_empty());
    }

    #[test]
    fn test_interleave_length_mismatch() {
        let strands = [Strand::from("AC"), Strand::from("AC"), Strand::from("A")];

        assert_eq!(
            interleave(&strands).unwrap_err(),
            EncodeError::LengthMismatch {
                lengths: [2, 2, 1]
            }
        );
    }

    #[test]
    fn test_sequence_conversions() {
        let strand = Strand::from(String::from("TGCA"));
        assert_eq!(strand.str(), "TGCA");
        assert_eq!(format!("{}", strand), "TGCA");
        assert_eq!(strand.into_string(), "TGCA");
    }
}
