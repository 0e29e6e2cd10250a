use log::{debug, info};

use crate::error::{EncodeError, EncodeResult};
use crate::params::{ParameterSet, ReferenceId, Thresholds};

/// Parses a raw textual parameter value.
///
/// Surrounding whitespace is ignored. Empty, NaN and infinite values are
/// reported the same way as non-numeric ones.
///
/// # Examples
/// ```
/// use dbcode::params::parse_value;
///
/// assert_eq!(parse_value("mu", " 1.5 ").unwrap(), 1.5);
/// assert!(parse_value("mu", "abc").is_err());
/// assert!(parse_value("mu", "inf").is_err());
/// ```
pub fn parse_value(field: &str, raw: &str) -> EncodeResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| EncodeError::parse(field, raw))
}

/// Multipliers of σ used by the "modify" input mode.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Multipliers {
    /// `R2 = μ + m·σ`
    pub m: f64,
    /// `R3 = μ - n·σ`
    pub n: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
    pub delta: f64,
}

impl Multipliers {
    /// Multipliers equivalent to the "default" input mode.
    pub const DEFAULT: Multipliers = Multipliers {
        m: 4.0,
        n: 4.0,
        alpha: 2.5,
        beta: 1.5,
        gamma: -1.5,
        delta: -2.5,
    };

    fn derive(&self, mu: f64, sigma: f64) -> [(f64, Thresholds); 3] {
        let thresholds = Thresholds::new(
            self.alpha * sigma,
            self.beta * sigma,
            self.gamma * sigma,
            self.delta * sigma,
        );

        [
            (mu, thresholds),
            (mu + self.m * sigma, thresholds),
            (mu - self.n * sigma, thresholds),
        ]
    }
}

impl Default for Multipliers {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Reference value and thresholds entered directly, not yet validated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReferenceValues {
    pub value: f64,
    pub thresholds: Thresholds,
}

impl ReferenceValues {
    #[must_use]
    pub const fn new(value: f64, thresholds: Thresholds) -> Self {
        Self { value, thresholds }
    }

    /// Parses the five raw values `R, a, b, c, d`. Field names in parse
    /// errors are suffixed with `label`, e.g. `a (R2)`.
    pub fn from_raw(label: &str, raw: [&str; 5]) -> EncodeResult<Self> {
        let [r, a, b, c, d] = raw;
        let field = |name: &str| {
            if label.is_empty() {
                name.to_owned()
            } else {
                format!("{} ({})", name, label)
            }
        };

        Ok(Self::new(
            parse_value(&field("R"), r)?,
            Thresholds::new(
                parse_value(&field("a"), a)?,
                parse_value(&field("b"), b)?,
                parse_value(&field("c"), c)?,
                parse_value(&field("d"), d)?,
            ),
        ))
    }

    fn as_tuple(&self) -> (f64, Thresholds) {
        (self.value, self.thresholds)
    }
}

/// The ways a user can describe the three reference points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ParameterInput {
    /// `R1 = μ`, `R2 = μ + 4σ`, `R3 = μ - 4σ`, thresholds
    /// `2.5σ, 1.5σ, -1.5σ, -2.5σ` shared by all references.
    Default { mu: f64, sigma: f64 },
    /// Like `Default`, with every multiplier of σ chosen by the user.
    Modify {
        mu: f64,
        sigma: f64,
        multipliers: Multipliers,
    },
    /// A single reference value and threshold set used for all three
    /// references.
    DirectSame(ReferenceValues),
    /// Independent values for R1, R2 and R3.
    DirectDifferent([ReferenceValues; 3]),
}

impl ParameterInput {
    pub fn default_from_raw(mu: &str, sigma: &str) -> EncodeResult<Self> {
        Ok(Self::Default {
            mu: parse_value("mu", mu)?,
            sigma: parse_value("sigma", sigma)?,
        })
    }

    /// Parses `mu`, `sigma` and the multipliers `m, n, alpha, beta, gamma,
    /// delta`, in this order.
    pub fn modify_from_raw(mu: &str, sigma: &str, multipliers: [&str; 6]) -> EncodeResult<Self> {
        let mu = parse_value("mu", mu)?;
        let sigma = parse_value("sigma", sigma)?;
        let [m, n, alpha, beta, gamma, delta] = multipliers;
        let multipliers = Multipliers {
            m: parse_value("m", m)?,
            n: parse_value("n", n)?,
            alpha: parse_value("alpha", alpha)?,
            beta: parse_value("beta", beta)?,
            gamma: parse_value("gamma", gamma)?,
            delta: parse_value("delta", delta)?,
        };

        Ok(Self::Modify {
            mu,
            sigma,
            multipliers,
        })
    }

    pub fn direct_same_from_raw(raw: [&str; 5]) -> EncodeResult<Self> {
        Ok(Self::DirectSame(ReferenceValues::from_raw("", raw)?))
    }

    pub fn direct_different_from_raw(raw: [[&str; 5]; 3]) -> EncodeResult<Self> {
        let [r1, r2, r3] = raw;
        Ok(Self::DirectDifferent([
            ReferenceValues::from_raw(ReferenceId::R1.name(), r1)?,
            ReferenceValues::from_raw(ReferenceId::R2.name(), r2)?,
            ReferenceValues::from_raw(ReferenceId::R3.name(), r3)?,
        ]))
    }

    /// Derives and validates the three reference points.
    ///
    /// Every reference point is checked separately, even when the threshold
    /// set is shared, and the first failing one is reported.
    ///
    /// # Examples
    /// ```
    /// use dbcode::params::{ParameterInput, ReferenceId};
    ///
    /// let params = ParameterInput::Default { mu: 10.0, sigma: 2.0 }.derive().unwrap();
    /// assert_eq!(params.get(ReferenceId::R2).value(), 18.0);
    /// assert_eq!(params.get(ReferenceId::R3).thresholds().a, 5.0);
    /// ```
    pub fn derive(&self) -> EncodeResult<ParameterSet> {
        let values = match *self {
            ParameterInput::Default { mu, sigma } => {
                if mu == 0.0 {
                    return Err(EncodeError::ZeroBase { field: "mu" });
                }
                if sigma == 0.0 {
                    return Err(EncodeError::ZeroBase { field: "sigma" });
                }
                Multipliers::DEFAULT.derive(mu, sigma)
            }
            ParameterInput::Modify {
                mu,
                sigma,
                multipliers,
            } => multipliers.derive(mu, sigma),
            ParameterInput::DirectSame(values) => [values.as_tuple(); 3],
            ParameterInput::DirectDifferent([r1, r2, r3]) => {
                [r1.as_tuple(), r2.as_tuple(), r3.as_tuple()]
            }
        };
        debug!("Derived reference values: {:?}", values);

        let params = ParameterSet::new(values)?;
        info!(
            "Parameters set: R1 = {:.3}, R2 = {:.3}, R3 = {:.3}",
            params.get(ReferenceId::R1).value(),
            params.get(ReferenceId::R2).value(),
            params.get(ReferenceId::R3).value()
        );

        Ok(params)
    }
}
