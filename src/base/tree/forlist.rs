use crate::base;

/// Renders expenses as a year, month, day hierarchy with one leaf per
/// expense.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    /// Order dates descending instead of ascending. Expenses sharing a date
    /// are always in ascending id order.
    pub newest_first: bool,
    pub expenses: Vec<(base::ExpenseId, base::Expense)>,
    /// Expense to annotate, if any.
    pub mark: Option<(base::ExpenseId, Mark)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Added,
    WouldBeRemoved,
    Removed,
}

impl Mark {
    fn suffix(self, charset: &base::Charset) -> String {
        let (msg, color) = match self {
            Mark::Added => (" <- [ADDED]", colored::Color::Green),
            Mark::WouldBeRemoved => (" <- [WOULD BE REMOVED]", colored::Color::Yellow),
            Mark::Removed => (" <- [REMOVED]", colored::Color::Red),
        };
        charset.paint(msg, color)
    }
}

impl Config {
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn to_tree(&self) -> base::Tree<'_> {
        let mut sorted = self.expenses.iter().collect::<Vec<_>>();
        sorted.sort_by(|(id1, e1), (id2, e2)| {
            let by_date = if self.newest_first {
                e2.date().cmp(&e1.date())
            } else {
                e1.date().cmp(&e2.date())
            };
            by_date.then(id1.cmp(id2))
        });

        let width = self.alignment_width();
        let mut root = base::tree::Node::default();
        for (id, e) in sorted {
            let dt = e.date();
            root.last_or_push(&format!("{:04}", dt.year()))
                .last_or_push(MONTHS[dt.month() as usize])
                .last_or_push(DAYS[dt.day() as usize])
                .push(self.leaf_data(*id, e, width));
        }
        base::Tree {
            charset: &self.charset,
            root,
        }
    }

    fn alignment_width(&self) -> usize {
        let rows = self
            .expenses
            .iter()
            .map(|(id, e)| (id.to_string(), e.amount().to_string()))
            .collect::<Vec<_>>();
        base::util::row_width(rows.iter().map(|(a, b)| (a.as_str(), b.as_str())))
    }

    fn leaf_data(&self, id: base::ExpenseId, e: &base::Expense, width: usize) -> String {
        let mut s = base::util::dashed_row(
            &id.to_string(),
            &e.amount().to_string(),
            width,
            self.charset.dash,
        );
        s.push_str("  ");
        s.push_str(e.category().as_str());
        if !e.description().is_empty() {
            s.push_str(": ");
            s.push_str(e.description());
        }
        if let Some((marked, mark)) = self.mark {
            if marked == id {
                s.push_str(&mark.suffix(&self.charset));
            }
        }
        s
    }
}

#[rustfmt::skip]
const MONTHS: [&str; 13] = [
    "",
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[rustfmt::skip]
const DAYS: [&str; 32] = [
    "",
    "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th",
    "11th", "12th", "13th", "14th", "15th", "16th", "17th", "18th", "19th", "20th",
    "21st", "22nd", "23rd", "24th", "25th", "26th", "27th", "28th", "29th", "30th",
    "31st",
];

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::fixture;
    use rstest::rstest;

    use super::*;

    fn entry(
        id: u64,
        category: &str,
        amount: i64,
        date: &str,
        description: &str,
    ) -> (base::ExpenseId, base::Expense) {
        let e = base::Expense::new(
            category.parse().unwrap(),
            base::Cents(amount),
            date.parse().unwrap(),
            description,
        )
        .unwrap();
        (base::ExpenseId(id), e)
    }

    #[fixture]
    fn expenses() -> Vec<(base::ExpenseId, base::Expense)> {
        vec![
            entry(1, "food", 4550, "2026-02-05", "lunch"),
            entry(2, "transport", 1500, "2026-02-04", ""),
            entry(3, "food", 1000, "2026-02-10", ""),
            entry(12, "rent", 90000, "2026-01-01", ""),
        ]
    }

    #[test]
    fn test_empty() {
        let config = Config {
            charset: Default::default(),
            newest_first: false,
            expenses: vec![],
            mark: None,
        };
        assert!(config.is_empty());
        assert_eq!(config.to_tree().to_string(), "");
    }

    #[rstest]
    #[case(
        false,
        indoc!("
            2026
            |-- Jan
            |   `-- 1st
            |       `-- 12 -- 900.00  Rent
            `-- Feb
                |-- 4th
                |   `-- 2 ---- 15.00  Transport
                |-- 5th
                |   `-- 1 ---- 45.50  Food: lunch
                `-- 10th
                    `-- 3 ---- 10.00  Food
        "),
    )]
    #[case(
        true,
        indoc!("
            2026
            |-- Feb
            |   |-- 10th
            |   |   `-- 3 ---- 10.00  Food
            |   |-- 5th
            |   |   `-- 1 ---- 45.50  Food: lunch
            |   `-- 4th
            |       `-- 2 ---- 15.00  Transport
            `-- Jan
                `-- 1st
                    `-- 12 -- 900.00  Rent
        "),
    )]
    fn test_to_tree(
        expenses: Vec<(base::ExpenseId, base::Expense)>,
        #[case] newest_first: bool,
        #[case] want: &str,
    ) {
        let config = Config {
            charset: Default::default(),
            newest_first,
            expenses,
            mark: None,
        };
        assert_eq!(config.to_tree().to_string(), want);
    }

    #[test]
    fn test_same_day_keeps_id_order() {
        let config = Config {
            charset: Default::default(),
            newest_first: true,
            expenses: vec![
                entry(7, "b", 100, "2025-12-31", ""),
                entry(3, "a", 100, "2025-12-31", ""),
                entry(9, "c", 100, "2026-01-01", ""),
            ],
            mark: None,
        };
        assert_eq!(
            config.to_tree().to_string(),
            indoc!(
                "
                2026
                `-- Jan
                    `-- 1st
                        `-- 9 -- 1.00  C
                2025
                `-- Dec
                    `-- 31st
                        |-- 3 -- 1.00  A
                        `-- 7 -- 1.00  B
                "
            )
        );
    }

    #[rstest]
    #[case(Mark::Added, "2 ---- 15.00  Transport <- [ADDED]")]
    #[case(Mark::WouldBeRemoved, "2 ---- 15.00  Transport <- [WOULD BE REMOVED]")]
    #[case(Mark::Removed, "2 ---- 15.00  Transport <- [REMOVED]")]
    fn test_mark(
        expenses: Vec<(base::ExpenseId, base::Expense)>,
        #[case] mark: Mark,
        #[case] want_line: &str,
    ) {
        let config = Config {
            charset: Default::default(),
            newest_first: false,
            expenses,
            mark: Some((base::ExpenseId(2), mark)),
        };
        let got = config.to_tree().to_string();
        assert!(got.contains(want_line), "`{}` not found in `{}`", want_line, got);
        assert_eq!(got.matches("<- [").count(), 1);
    }
}
