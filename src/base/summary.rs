//! Time-bucketed summaries.
//!
//! Expenses are grouped into calendar years, calendar months, or ISO 8601
//! weeks. Only buckets holding at least one expense are reported, in
//! chronological order.

use crate::base;

/// A single time bucket. Ordering between periods of the same granularity is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Period {
    /// ISO week-numbering year and week.
    Week { year: i32, week: u8 },
    Month { year: i32, month: u8 },
    Year(i32),
}

impl Period {
    pub fn of(dt: base::Date, granularity: base::Granularity) -> Self {
        match granularity {
            base::Granularity::Week => {
                let (year, week) = dt.iso_week();
                Self::Week { year, week }
            }
            base::Granularity::Month => Self::Month {
                year: dt.year(),
                month: dt.month(),
            },
            base::Granularity::Year => Self::Year(dt.year()),
        }
    }
}

impl std::fmt::Display for Period {
    /// Formats as `2026-W06`, `2026-02`, or `2026`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Week { year, week } => write!(f, "{:04}-W{:02}", year, week),
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Year(year) => write!(f, "{:04}", year),
        }
    }
}

impl serde::Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PeriodSummary {
    pub period: base::Period,
    pub total: base::Cents,
    pub count: usize,
    /// `total / count`, rounded half up to the cent.
    pub average: base::Cents,
    /// Category with the highest subtotal in the period. Ties go to the name
    /// that sorts first.
    pub top_category: base::Category,
    /// Category breakdown with percentages relative to the period's total.
    pub categories: Vec<base::report::CategoryShare>,
}

/// Groups `expenses` by `granularity` and summarizes each non-empty bucket.
pub fn summarize<'a>(
    expenses: impl IntoIterator<Item = &'a base::Expense>,
    granularity: base::Granularity,
) -> Vec<PeriodSummary> {
    let mut buckets = std::collections::BTreeMap::<Period, Vec<&base::Expense>>::new();
    for e in expenses {
        buckets
            .entry(Period::of(e.date(), granularity))
            .or_default()
            .push(e);
    }
    let summaries = buckets
        .into_iter()
        .filter_map(|(period, bucket)| {
            let report = base::report::aggregate(bucket);
            let top_category = report.top()?.category.clone();
            Some(PeriodSummary {
                period,
                total: report.total,
                count: report.count,
                average: report.average,
                top_category,
                categories: report.categories,
            })
        })
        .collect::<Vec<_>>();
    tracing::debug!(%granularity, periods = summaries.len(), "summarized expenses");
    summaries
}

/// Summarizes only the store's expenses dated within `interval`.
pub fn summarize_range(
    store: &base::Store,
    interval: base::Interval,
    granularity: base::Granularity,
) -> Vec<PeriodSummary> {
    summarize(store.in_interval(interval).map(|(_, e)| e), granularity)
}
