use crate::base;

/// Renders period summaries, oldest period first.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub summaries: Vec<base::PeriodSummary>,
}

impl Config {
    /// Number of categories listed under a period's breakdown.
    pub const TOP_CATEGORIES: usize = 3;

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    pub fn to_tree(&self) -> base::Tree<'_> {
        let mut root = base::tree::Node::default();
        for summary in self.summaries.iter() {
            let period = root.push(summary.period.to_string());
            let rows = [
                ("Total", summary.total.to_string()),
                ("Count", summary.count.to_string()),
                ("Average", summary.average.to_string()),
                ("Top category", summary.top_category.to_string()),
            ];
            let rows = base::tree::fortotal::aligned_rows(
                rows.iter().map(|(l, v)| (*l, v)),
                self.charset.dash,
            );
            for row in rows {
                period.push(row);
            }
            if summary.categories.len() > 1 {
                let n = summary.categories.len().min(Self::TOP_CATEGORIES);
                let breakdown = period.push("Breakdown");
                let rows = base::tree::fortotal::category_rows(
                    &summary.categories[..n],
                    self.charset.dash,
                );
                for row in rows {
                    breakdown.push(row);
                }
            }
        }
        base::Tree {
            charset: &self.charset,
            root,
        }
    }
}
