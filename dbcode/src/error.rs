use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::params::{ReferenceId, ThresholdCondition};

/// Error occurring while deriving parameters or running the encoding
/// pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// A raw parameter value could not be parsed as a number.
    Parse { field: String, value: String },
    /// A reference point's thresholds violate the band ordering.
    Validation {
        reference: ReferenceId,
        condition: ThresholdCondition,
    },
    /// A reference value or threshold is NaN or infinite.
    NonFinite {
        reference: ReferenceId,
        field: &'static str,
        value: f64,
    },
    /// The "default" input mode was given a zero μ or σ.
    ZeroBase { field: &'static str },
    /// A pipeline stage was invoked before parameters were derived.
    NotReady,
    /// The series contains no samples.
    EmptySeries,
    /// The three strands do not have equal lengths.
    LengthMismatch { lengths: [usize; 3] },
    /// A difference value fell outside all four classification bands.
    InvariantViolation {
        reference: ReferenceId,
        index: usize,
        value: f64,
    },
}

impl EncodeError {
    pub(crate) fn parse<T: Into<String>, U: Into<String>>(field: T, value: U) -> Self {
        Self::Parse {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl Display for EncodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::Parse { field, value } => {
                write!(f, "Invalid numerical value for {}: `{}`", field, value)
            }
            EncodeError::Validation {
                reference,
                condition,
            } => write!(
                f,
                "Invalid conversion boundaries for {}: {} does not hold",
                reference, condition
            ),
            EncodeError::NonFinite {
                reference,
                field,
                value,
            } => write!(
                f,
                "Invalid value of {} for {}: {} is not a finite number",
                field, reference, value
            ),
            EncodeError::ZeroBase { field } => {
                write!(f, "Value of {} must be non-zero", field)
            }
            EncodeError::NotReady => write!(f, "Parameters have not been set"),
            EncodeError::EmptySeries => write!(f, "The series contains no samples"),
            EncodeError::LengthMismatch { lengths } => write!(
                f,
                "Strand length mismatch (R1: {}, R2: {}, R3: {})",
                lengths[0], lengths[1], lengths[2]
            ),
            EncodeError::InvariantViolation {
                reference,
                index,
                value,
            } => write!(
                f,
                "Difference {} at index {} for {} matches no band",
                value, index, reference
            ),
        }
    }
}

impl Error for EncodeError {}

/// The result of a parameter derivation or encoding operation.
pub type EncodeResult<T> = Result<T, EncodeError>;
