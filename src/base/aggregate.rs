use crate::base;

/// Running total and record count for one key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: base::Cents,
    pub count: usize,
}

impl Tally {
    pub fn add(&mut self, amount: base::Cents) {
        self.total += amount;
        self.count += 1;
    }

    /// `total / count`, rounded half up to the cent. Zero when empty.
    pub fn average(self) -> base::Cents {
        self.total.div_round(self.count)
    }
}

/// Per-key tallies plus a tally over everything added.
#[derive(Debug, Clone)]
pub struct Aggregate<K> {
    m: std::collections::HashMap<K, Tally>,
    all: Tally,
}

impl<K> Default for Aggregate<K> {
    fn default() -> Self {
        Self {
            m: Default::default(),
            all: Default::default(),
        }
    }
}

impl<K> PartialEq for Aggregate<K>
where
    K: Eq + std::hash::Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m && self.all == other.all
    }
}

impl<K> Eq for Aggregate<K> where K: Eq + std::hash::Hash {}

impl<K> Aggregate<K> {
    pub fn all(&self) -> Tally {
        self.all
    }

    pub fn add(&mut self, key: K, amount: base::Cents)
    where
        K: Eq + std::hash::Hash,
    {
        self.m.entry(key).or_default().add(amount);
        self.all.add(amount);
    }

    pub fn into_tallies(self) -> impl Iterator<Item = (K, Tally)> {
        self.m.into_iter()
    }
}

impl<K> FromIterator<(K, base::Cents)> for Aggregate<K>
where
    K: Eq + std::hash::Hash,
{
    fn from_iter<T: IntoIterator<Item = (K, base::Cents)>>(iter: T) -> Self {
        let mut agg = Aggregate::default();
        for (k, v) in iter {
            agg.add(k, v);
        }
        agg
    }
}
