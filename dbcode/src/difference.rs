use crate::error::{EncodeError, EncodeResult};
use crate::params::ReferencePoint;

/// Computes `sample[i] - R` for every sample, preserving order and length.
///
/// # Examples
/// ```
/// use dbcode::difference::differences;
/// use dbcode::params::{ReferenceId, ReferencePoint, Thresholds};
///
/// let reference =
///     ReferencePoint::new(ReferenceId::R1, 1.0, Thresholds::new(2.5, 1.5, -1.5, -2.5)).unwrap();
/// assert_eq!(differences(&[1.0, 3.5, -1.0], &reference).unwrap(), [0.0, 2.5, -2.0]);
/// ```
pub fn differences(samples: &[f64], reference: &ReferencePoint) -> EncodeResult<Vec<f64>> {
    if samples.is_empty() {
        return Err(EncodeError::EmptySeries);
    }

    let value = reference.value();
    Ok(samples.iter().map(|&sample| sample - value).collect())
}

#[cfg(test)]
mod tests {
    use crate::difference::differences;
    use crate::error::EncodeError;
    use crate::params::{ReferenceId, ReferencePoint, Thresholds};

    fn reference(value: f64) -> ReferencePoint {
        ReferencePoint::new(ReferenceId::R2, value, Thresholds::new(2.0, 1.0, -1.0, -2.0)).unwrap()
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(
            differences(&[], &reference(0.0)).unwrap_err(),
            EncodeError::EmptySeries
        );
    }

    #[test]
    fn test_keeps_order_and_length() {
        let samples = [5.0, 5.0, -3.0, 0.25];
        let result = differences(&samples, &reference(-1.0)).unwrap();

        assert_eq!(result, [6.0, 6.0, -2.0, 1.25]);
    }
}
