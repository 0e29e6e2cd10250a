//! Reference points and the thresholds that split the difference axis into
//! four classification bands.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{EncodeError, EncodeResult};

mod derive;
pub mod serializer;

pub use derive::{parse_value, Multipliers, ParameterInput, ReferenceValues};

/// Identifier of one of the three reference points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReferenceId {
    R1,
    R2,
    R3,
}

impl ReferenceId {
    pub const VALUES: [ReferenceId; 3] = [ReferenceId::R1, ReferenceId::R2, ReferenceId::R3];

    #[inline]
    #[must_use]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ReferenceId::R1 => "R1",
            ReferenceId::R2 => "R2",
            ReferenceId::R3 => "R3",
        }
    }
}

impl Display for ReferenceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One of the six conditions every threshold set must satisfy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ThresholdCondition {
    APositive,
    BPositive,
    AGreaterThanB,
    CNegative,
    DNegative,
    CGreaterThanD,
}

impl ThresholdCondition {
    /// All conditions, in the order they are checked.
    pub const VALUES: [ThresholdCondition; 6] = [
        ThresholdCondition::APositive,
        ThresholdCondition::BPositive,
        ThresholdCondition::AGreaterThanB,
        ThresholdCondition::CNegative,
        ThresholdCondition::DNegative,
        ThresholdCondition::CGreaterThanD,
    ];

    #[must_use]
    pub fn holds(&self, thresholds: &Thresholds) -> bool {
        let Thresholds { a, b, c, d } = *thresholds;
        match self {
            ThresholdCondition::APositive => a > 0.0,
            ThresholdCondition::BPositive => b > 0.0,
            ThresholdCondition::AGreaterThanB => a > b,
            ThresholdCondition::CNegative => c < 0.0,
            ThresholdCondition::DNegative => d < 0.0,
            ThresholdCondition::CGreaterThanD => c > d,
        }
    }
}

impl Display for ThresholdCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            ThresholdCondition::APositive => "a > 0",
            ThresholdCondition::BPositive => "b > 0",
            ThresholdCondition::AGreaterThanB => "a > b",
            ThresholdCondition::CNegative => "c < 0",
            ThresholdCondition::DNegative => "d < 0",
            ThresholdCondition::CGreaterThanD => "c > d",
        };

        write!(f, "{}", str)
    }
}

/// The four boundaries on the difference axis, expected to be ordered as
/// `d < c < 0 < b < a`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Thresholds {
    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Returns the first condition these thresholds violate, if any.
    ///
    /// # Examples
    /// ```
    /// use dbcode::params::{ThresholdCondition, Thresholds};
    ///
    /// assert_eq!(Thresholds::new(2.5, 1.5, -1.5, -2.5).violated_condition(), None);
    /// assert_eq!(
    ///     Thresholds::new(1.0, 2.0, -1.5, -2.5).violated_condition(),
    ///     Some(ThresholdCondition::AGreaterThanB)
    /// );
    /// ```
    #[must_use]
    pub fn violated_condition(&self) -> Option<ThresholdCondition> {
        ThresholdCondition::VALUES
            .into_iter()
            .find(|condition| !condition.holds(self))
    }

    pub(crate) fn validate(&self, reference: ReferenceId) -> EncodeResult<()> {
        match self.violated_condition() {
            Some(condition) => Err(EncodeError::Validation {
                reference,
                condition,
            }),
            None => Ok(()),
        }
    }
}

/// A validated reference value together with its thresholds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReferencePoint {
    id: ReferenceId,
    value: f64,
    thresholds: Thresholds,
}

impl ReferencePoint {
    /// Creates a reference point, checking that all five numbers are finite
    /// and that `thresholds` satisfy `a > 0, b > 0, a > b, c < 0, d < 0,
    /// c > d`.
    pub fn new(id: ReferenceId, value: f64, thresholds: Thresholds) -> EncodeResult<Self> {
        let Thresholds { a, b, c, d } = thresholds;
        for (field, number) in [("R", value), ("a", a), ("b", b), ("c", c), ("d", d)] {
            if !number.is_finite() {
                return Err(EncodeError::NonFinite {
                    reference: id,
                    field,
                    value: number,
                });
            }
        }
        thresholds.validate(id)?;

        Ok(Self {
            id,
            value,
            thresholds,
        })
    }

    #[must_use]
    pub fn id(&self) -> ReferenceId {
        self.id
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Returns the thresholds moved onto the sample axis, i.e. `R + a`,
    /// `R + b`, `R + c` and `R + d`, in this order.
    #[must_use]
    pub fn levels(&self) -> [f64; 4] {
        let Thresholds { a, b, c, d } = self.thresholds;
        [self.value + a, self.value + b, self.value + c, self.value + d]
    }
}

/// Three validated reference points, one per [`ReferenceId`].
///
/// A `ParameterSet` can only be obtained through validation, so holding one
/// means the pipeline is ready to run.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterSet {
    references: [ReferencePoint; 3],
}

impl ParameterSet {
    /// Validates and commits three reference points at once. Nothing is
    /// returned unless every reference point is valid.
    pub fn new(values: [(f64, Thresholds); 3]) -> EncodeResult<Self> {
        let [(r1, t1), (r2, t2), (r3, t3)] = values;
        let references = [
            ReferencePoint::new(ReferenceId::R1, r1, t1)?,
            ReferencePoint::new(ReferenceId::R2, r2, t2)?,
            ReferencePoint::new(ReferenceId::R3, r3, t3)?,
        ];

        Ok(Self { references })
    }

    #[must_use]
    pub fn get(&self, id: ReferenceId) -> &ReferencePoint {
        &self.references[id.index()]
    }

    #[must_use]
    pub fn references(&self) -> &[ReferencePoint; 3] {
        &self.references
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferencePoint> {
        self.references.iter()
    }
}

impl Display for ParameterSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [r1, r2, r3] = &self.references;
        writeln!(
            f,
            "R1 = {:.3}, R2 = {:.3}, R3 = {:.3}",
            r1.value, r2.value, r3.value
        )?;
        writeln!(f)?;
        writeln!(f, "\u{2200}R \u{2208} {{R1, R2, R3}}")?;
        writeln!(f)?;

        let rows: [(&str, fn(&Thresholds) -> f64); 4] = [
            ("a", |t| t.a),
            ("b", |t| t.b),
            ("c", |t| t.c),
            ("d", |t| t.d),
        ];
        for (name, get) in rows {
            writeln!(
                f,
                "{} = {{{:.3}, {:.3}, {:.3}}}",
                name,
                get(&r1.thresholds),
                get(&r2.thresholds),
                get(&r3.thresholds)
            )?;
        }

        Ok(())
    }
}
