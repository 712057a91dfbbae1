/// Integral representation of monetary quantities up to two decimal places.
/// Sums of cents are exact, which is what keeps category totals adding up to
/// the grand total.
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
    derive_more::From,
    derive_more::Into,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::Sub,
)]
pub struct Cents(pub i64);

impl Cents {
    pub const ZERO: Self = Self(0);

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Divides by `n`, rounding half away from zero to the nearest cent.
    /// Dividing by zero yields zero.
    pub fn div_round(self, n: usize) -> Self {
        if n == 0 {
            return Self::ZERO;
        }
        let n = n as i128;
        let x = self.0 as i128;
        let q = (x.abs() * 2 + n) / (n * 2);
        Self((q * x.signum()) as i64)
    }

    /// Value as a floating point quantity of whole currency units.
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Converts whole currency units to cents. Fails if `x` is out of range
    /// or carries a fraction of a cent beyond float noise.
    fn from_f64(x: f64) -> Result<Self, ParseError> {
        let scaled = x * 100.0;
        let cents = scaled.round();
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return Err(ParseError::Overflow);
        }
        if (scaled - cents).abs() > f64::max(1e-6, cents.abs() * 1e-12) {
            return Err(ParseError::TooManyDecimals);
        }
        Ok(Self(cents as i64))
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and thousands separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let abs = self.0.unsigned_abs();
        let whole = (abs / 100).to_string();
        let mut s = String::with_capacity(whole.len() * 4 / 3 + 4);
        if self.0 < 0 {
            s.push('-');
        }
        for (i, c) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                s.push(',');
            }
            s.push(c);
        }
        write!(f, "{}.{:02}", s, abs % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("invalid character '{0}'")]
    InvalidChar(char),
    #[error("more than two decimal places")]
    TooManyDecimals,
    #[error("amount is too large")]
    Overflow,
}

impl std::str::FromStr for Cents {
    type Err = ParseError;

    /// Parses a cents quantity from a human-readable string, which may have a
    /// leading sign, comma thousands separators, and up to two decimal places.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if frac.len() > 2 {
            return Err(ParseError::TooManyDecimals);
        }
        if whole.chars().all(|c| c == ',') && frac.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut cents: i64 = 0;
        let digits = whole
            .chars()
            .filter(|&c| c != ',')
            .chain(frac.chars())
            .chain(std::iter::repeat_n('0', 2 - frac.len()));
        for c in digits {
            let d = c.to_digit(10).ok_or(ParseError::InvalidChar(c))?;
            cents = cents
                .checked_mul(10)
                .and_then(|x| x.checked_add(d as i64))
                .ok_or(ParseError::Overflow)?;
        }
        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl TryFrom<&str> for Cents {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl serde::Serialize for Cents {
    /// Serializes as a decimal number of currency units, e.g. `45.5`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> serde::Deserialize<'de> for Cents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let x = f64::deserialize(deserializer)?;
        Self::from_f64(x).map_err(|e| serde::de::Error::custom(format!("amount {}: {}", x, e)))
    }
}
