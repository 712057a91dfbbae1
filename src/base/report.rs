//! Category breakdowns of a set of expenses.
//!
//! Categories in a [`Report`] are ordered by descending total, with ties
//! broken by ascending category name, so output is deterministic.

use crate::base;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CategoryShare {
    pub category: base::Category,
    pub total: base::Cents,
    pub count: usize,
    /// Share of the report's `whole`.
    pub percentage: base::Percent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    pub categories: Vec<CategoryShare>,
    /// Sum over the expenses reported on.
    pub total: base::Cents,
    pub count: usize,
    pub average: base::Cents,
    /// Amount the category percentages are relative to.
    pub whole: base::Cents,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Category with the highest total, if any.
    pub fn top(&self) -> Option<&CategoryShare> {
        self.categories.first()
    }

    /// Share of `whole` that `total` represents.
    pub fn percentage(&self) -> base::Percent {
        base::Percent::of(self.total, self.whole)
    }
}

/// Breaks `expenses` down by category, with percentages relative to their
/// own total. An empty input yields an all-zero report.
pub fn aggregate<'a>(expenses: impl IntoIterator<Item = &'a base::Expense>) -> Report {
    let agg = tally(expenses);
    let whole = agg.all().total;
    build(agg, whole)
}

/// Like [`aggregate`], but with percentages relative to `whole`. Use this to
/// express a subset's categories as shares of a larger set.
pub fn aggregate_against<'a>(
    expenses: impl IntoIterator<Item = &'a base::Expense>,
    whole: base::Cents,
) -> Report {
    build(tally(expenses), whole)
}

/// Category breakdown of the entire store. Its `total` equals
/// [`base::Store::total`] exactly.
pub fn grand_report(store: &base::Store) -> Report {
    aggregate(store.expenses())
}

/// Expenses whose category matches `query` case-insensitively, ignoring
/// surrounding whitespace, in ascending id order.
pub fn filter_by_category<'a>(
    store: &'a base::Store,
    query: &str,
) -> Vec<(base::ExpenseId, &'a base::Expense)> {
    store
        .iter()
        .filter(|(_, e)| e.category().matches(query))
        .collect()
}

/// Report scoped to one category, with its percentage expressed against the
/// whole store rather than against itself.
pub fn category_report(store: &base::Store, query: &str) -> Report {
    let matching = filter_by_category(store, query);
    aggregate_against(matching.into_iter().map(|(_, e)| e), store.total())
}

fn tally<'a>(
    expenses: impl IntoIterator<Item = &'a base::Expense>,
) -> base::Aggregate<&'a base::Category> {
    expenses
        .into_iter()
        .map(|e| (e.category(), e.amount()))
        .collect()
}

fn build(agg: base::Aggregate<&base::Category>, whole: base::Cents) -> Report {
    let all = agg.all();
    let mut categories = agg
        .into_tallies()
        .map(|(category, tally)| CategoryShare {
            category: category.clone(),
            total: tally.total,
            count: tally.count,
            percentage: base::Percent::of(tally.total, whole),
        })
        .collect::<Vec<_>>();
    categories.sort_unstable_by(|a, b| {
        b.total
            .cmp(&a.total)
            .then_with(|| a.category.cmp(&b.category))
    });
    Report {
        categories,
        total: all.total,
        count: all.count,
        average: all.average(),
        whole,
    }
}
