/// A date type without time or timezone information. Values are guaranteed to
/// be between `0000-01-01` and `9999-12-31`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Date(time::Date);

impl Date {
    /// 0000-01-01
    pub const MIN: Self = match time::Date::from_ordinal_date(0, 1) {
        Ok(dt) => Self(dt),
        Err(_) => panic!("0000-01-01 should be a valid date"),
    };

    /// 9999-12-31
    pub const MAX: Self = match time::Date::from_calendar_date(9999, time::Month::December, 31) {
        Ok(dt) => Self(dt),
        Err(_) => panic!("9999-12-31 should be a valid date"),
    };

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        if dt >= Self::MIN && dt <= Self::MAX {
            Some(dt)
        } else {
            None
        }
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .and_then(Self::new)
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        self.0.month().into()
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    /// Returns the ISO 8601 week-numbering year and week. Weeks start on
    /// Monday and belong to the year containing their Thursday, so
    /// 2027-01-01 is in week 53 of 2026.
    pub fn iso_week(self) -> (i32, u8) {
        let (year, week, _) = self.0.to_iso_week_date();
        (year, week)
    }

    /// Returns the local date.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self::new(now.date()).unwrap_or(Self::MAX)
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2026, 2, 10).expect("'today' for tests should be valid")
    }

    pub fn first_of_month(self) -> Self {
        Self(self.0.replace_day(1).expect("first day of a month should be valid"))
    }

    pub fn last_of_month(self) -> Self {
        let last = (28..=31)
            .rev()
            .find_map(|day| self.0.replace_day(day).ok())
            .expect("every month should have at least 28 days");
        Self(last)
    }

    pub fn first_of_year(self) -> Self {
        Self::from_ymd(self.year(), 1, 1).expect("first day of a valid year should be valid")
    }

    pub fn last_of_year(self) -> Self {
        Self::from_ymd(self.year(), 12, 31).expect("final day of a valid year should be valid")
    }

    /// Offsets by whole days, returning `None` if the result is out of bounds.
    pub fn shift_days(self, offset: i64) -> Option<Self> {
        self.0
            .checked_add(time::Duration::days(offset))
            .and_then(Self::new)
    }

    /// Offsets by whole months, returning `None` if the result is out of
    /// bounds. The day is clamped to the resultant month's final day, so
    /// shifting 2024-01-31 by one month yields 2024-02-29.
    pub fn shift_months(self, offset: i32) -> Option<Self> {
        let index = (self.year() as i64) * 12 + (self.month() as i64 - 1) + offset as i64;
        let year = i32::try_from(index.div_euclid(12)).ok()?;
        let month = (index.rem_euclid(12) + 1) as u8;
        let first = Self::from_ymd(year, month, 1)?;
        let day = self.day().min(first.last_of_month().day());
        Self::from_ymd(year, month, day)
    }

    /// Offsets by whole years, clamping Feb 29 to Feb 28 where needed.
    pub fn shift_years(self, offset: i32) -> Option<Self> {
        self.shift_months(offset.checked_mul(12)?)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl From<Date> for String {
    fn from(value: Date) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected format yyyy-mm-dd")]
    BadFormat,
    #[error("not a real calendar date")]
    NotADate,
    #[error("date is before 0000-01-01 or after 9999-12-31")]
    OutOfRange,
    #[error("first character is not one of {{y, Y, m, M, d, D}}")]
    InvalidFirstChar,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
}

impl Date {
    fn parse_iso(s: &str) -> Result<Self, ParseError> {
        let parts = s.split('-').collect::<Vec<_>>();
        let well_formed = parts.len() == 3
            && [4, 2, 2]
                .iter()
                .zip(&parts)
                .all(|(&len, p)| p.len() == len && p.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(ParseError::BadFormat);
        }
        let num = |p: &str| p.parse::<u16>().map_err(|_| ParseError::BadFormat);
        let year = num(parts[0])? as i32;
        let month = num(parts[1])? as u8;
        let day = num(parts[2])? as u8;
        Self::from_ymd(year, month, day).ok_or(ParseError::NotADate)
    }
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the following formats:
    /// - `yyyy-mm-dd`
    /// - `xn` where `x` is one of `{y, Y, m, M, d, D}` and `n` is an optional
    ///   integer offset from today
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if s.as_bytes()[0].is_ascii_digit() {
            return Self::parse_iso(s);
        }

        let mut chars = s.chars();
        let first = chars.next().ok_or(Self::Err::Empty)?;
        let rest = chars.as_str();
        let offset: i32 = if rest.is_empty() { 0 } else { rest.parse()? };
        let today = Self::today();
        match first {
            'd' | 'D' => today.shift_days(offset as i64),
            'y' => today.first_of_year().shift_years(offset),
            'Y' => today.last_of_year().shift_years(offset),
            'm' => today.first_of_month().shift_months(offset),
            'M' => today.shift_months(offset).map(Self::last_of_month),
            _ => return Err(Self::Err::InvalidFirstChar),
        }
        .ok_or(Self::Err::OutOfRange)
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl TryFrom<String> for Date {
    type Error = ParseError;

    /// Accepts only `yyyy-mm-dd`. Relative dates are a command line
    /// convenience and never appear in stored data.
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_iso(&value)
    }
}
