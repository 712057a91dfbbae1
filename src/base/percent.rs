use crate::base;

/// A percentage in integral hundredths of a percent, so `Percent(7872)` is
/// 78.72%.
///
/// Percentages are rounded half up to two decimal places. The computation is
/// done in integer arithmetic on cents, so the same inputs always round the
/// same way.
///
/// Each share is rounded on its own, so the shares of `n` parts sum to within
/// `n * 0.005` of 100.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Add,
    derive_more::Sum,
)]
pub struct Percent(pub i64);

impl Percent {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100_00);

    /// Returns `part / whole * 100`. A zero `whole` yields zero.
    pub fn of(part: base::Cents, whole: base::Cents) -> Self {
        if whole.0 == 0 {
            return Self::ZERO;
        }
        let num = part.0 as i128 * Self::HUNDRED.0 as i128;
        let den = whole.0 as i128;
        let q = (num.abs() * 2 + den.abs()) / (den.abs() * 2);
        let sign = num.signum() * den.signum();
        Self((q * sign) as i64)
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl std::fmt::Display for Percent {
    /// Formats with two decimal places and no percent sign.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl serde::Serialize for Percent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}
