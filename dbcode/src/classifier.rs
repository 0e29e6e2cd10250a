//! Maps difference values onto nucleotides using a reference point's four
//! thresholds.
//!
//! | band                 | symbol |
//! |----------------------|--------|
//! | `c < x < b`          | `A`    |
//! | `b <= x <= a`        | `C`    |
//! | `d <= x <= c`        | `G`    |
//! | `x > a` or `x < d`   | `T`    |
//!
//! With `d < c < 0 < b < a` the bands are disjoint and cover every real
//! number; only NaN matches none of them.

use log::debug;

use crate::error::{EncodeError, EncodeResult};
use crate::nucleotide::Nucleotide;
use crate::params::{ReferencePoint, Thresholds};
use crate::strand::Strand;

/// Human-readable description of each classification band.
pub const BAND_RULES: [(Nucleotide, &str); 4] = [
    (Nucleotide::A, "c < x < b"),
    (Nucleotide::C, "b \u{2264} x \u{2264} a"),
    (Nucleotide::G, "d \u{2264} x \u{2264} c"),
    (Nucleotide::T, "x > a or x < d"),
];

/// Classifies a single difference value, or returns `None` if it falls in no
/// band.
///
/// # Examples
/// ```
/// use dbcode::classifier::classify;
/// use dbcode::nucleotide::Nucleotide;
/// use dbcode::params::Thresholds;
///
/// let thresholds = Thresholds::new(2.5, 1.5, -1.5, -2.5);
/// assert_eq!(classify(0.0, &thresholds), Some(Nucleotide::A));
/// assert_eq!(classify(1.5, &thresholds), Some(Nucleotide::C));
/// assert_eq!(classify(-1.5, &thresholds), Some(Nucleotide::G));
/// assert_eq!(classify(100.0, &thresholds), Some(Nucleotide::T));
/// assert_eq!(classify(f64::NAN, &thresholds), None);
/// ```
#[inline]
#[must_use]
pub fn classify(x: f64, thresholds: &Thresholds) -> Option<Nucleotide> {
    let Thresholds { a, b, c, d } = *thresholds;

    if c < x && x < b {
        Some(Nucleotide::A)
    } else if b <= x && x <= a {
        Some(Nucleotide::C)
    } else if d <= x && x <= c {
        Some(Nucleotide::G)
    } else if x > a || x < d {
        Some(Nucleotide::T)
    } else {
        None
    }
}

/// Classifies every difference against `reference`'s thresholds.
///
/// Fails with [`EncodeError::InvariantViolation`] at the first value that
/// matches no band.
pub fn classify_strand(differences: &[f64], reference: &ReferencePoint) -> EncodeResult<Strand> {
    let thresholds = reference.thresholds();
    let mut strand = String::with_capacity(differences.len());

    for (index, &value) in differences.iter().enumerate() {
        let nucleotide =
            classify(value, thresholds).ok_or(EncodeError::InvariantViolation {
                reference: reference.id(),
                index,
                value,
            })?;
        strand.push(nucleotide.as_char());
    }
    debug!("Classified {} values for {}", strand.len(), reference.id());

    Ok(Strand::from(strand))
}
