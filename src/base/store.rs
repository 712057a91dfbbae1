use crate::base;

/// In-memory set of expenses keyed by id, the single source of truth for
/// every report.
///
/// Ids are handed out from `counter`, which only ever grows, so a deleted id
/// is never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Store {
    expenses: std::collections::BTreeMap<base::ExpenseId, base::Expense>,
    #[serde(default = "Store::first_id")]
    counter: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            expenses: Default::default(),
            counter: Self::first_id(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expense {0} not found")]
pub struct NotFound(pub base::ExpenseId);

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    fn first_id() -> u64 {
        1
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Id the next inserted expense will receive.
    pub fn next_id(&self) -> base::ExpenseId {
        let after_max = self
            .expenses
            .last_key_value()
            .map_or(Self::first_id(), |(id, _)| id.0 + 1);
        base::ExpenseId(self.counter.max(after_max))
    }

    pub fn insert(&mut self, expense: base::Expense) -> base::ExpenseId {
        let id = self.next_id();
        tracing::debug!(
            %id,
            category = %expense.category(),
            amount = %expense.amount(),
            "inserting expense"
        );
        self.expenses.insert(id, expense);
        self.counter = id.0 + 1;
        id
    }

    /// Removes and returns the expense with the given id. If there is none,
    /// returns [`NotFound`] and leaves the store unmodified.
    pub fn remove(&mut self, id: base::ExpenseId) -> Result<base::Expense, NotFound> {
        let expense = self.expenses.remove(&id).ok_or(NotFound(id))?;
        tracing::debug!(%id, "removed expense");
        Ok(expense)
    }

    pub fn get(&self, id: base::ExpenseId) -> Option<&base::Expense> {
        self.expenses.get(&id)
    }

    /// Iterates in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (base::ExpenseId, &base::Expense)> {
        self.expenses.iter().map(|(&id, e)| (id, e))
    }

    pub fn expenses(&self) -> impl Iterator<Item = &base::Expense> {
        self.expenses.values()
    }

    /// Exact sum of every amount in the store.
    pub fn total(&self) -> base::Cents {
        self.expenses().map(base::Expense::amount).sum()
    }

    /// Expenses dated within `interval`, in ascending id order.
    pub fn in_interval(
        &self,
        interval: base::Interval,
    ) -> impl Iterator<Item = (base::ExpenseId, &base::Expense)> {
        self.iter().filter(move |(_, e)| interval.contains(e.date()))
    }

    /// Sorted, deduplicated categories.
    pub fn categories(&self) -> Vec<&base::Category> {
        let mut cats = self.expenses().map(base::Expense::category).collect::<Vec<_>>();
        cats.sort();
        cats.dedup();
        cats
    }
}

impl std::fmt::Display for Store {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Store {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut store = serde_json::from_str::<Self>(s)?;
        store.counter = store.next_id().0;
        Ok(store)
    }
}

impl TryFrom<&str> for Store {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl<'a> FromIterator<&'a base::Expense> for Store {
    fn from_iter<T: IntoIterator<Item = &'a base::Expense>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl FromIterator<base::Expense> for Store {
    fn from_iter<T: IntoIterator<Item = base::Expense>>(iter: T) -> Self {
        let mut store = Self::new();
        for expense in iter {
            store.insert(expense);
        }
        store
    }
}
