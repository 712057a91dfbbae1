use crate::base;

/// Renders a [`base::Report`]: one row per category, then the overall
/// figures.
#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub report: base::Report,
}

impl Config {
    const CATEGORIES: &str = "Categories";
    const OVERALL: &str = "Overall";

    pub fn to_tree(&self) -> base::Tree<'_> {
        let mut root = base::tree::Node::default();
        let categories = root.push(Self::CATEGORIES);
        for row in category_rows(&self.report.categories, self.charset.dash) {
            categories.push(row);
        }
        let overall = root.push(Self::OVERALL);
        for row in overall_rows(&self.report, self.charset.dash) {
            overall.push(row);
        }
        base::Tree {
            charset: &self.charset,
            root,
        }
    }
}

/// Formats `Food -- 55.50  78.72%  (2)` rows. Amounts are right-aligned by
/// the dash run; percentages and counts are padded into columns.
pub fn category_rows(shares: &[base::report::CategoryShare], dash: char) -> Vec<String> {
    let percents = shares
        .iter()
        .map(|s| s.percentage.to_string())
        .collect::<Vec<_>>();
    let counts = shares
        .iter()
        .map(|s| format!("({})", s.count))
        .collect::<Vec<_>>();
    let pw = max_chars(&percents);
    let cw = max_chars(&counts);
    let values = shares
        .iter()
        .zip(percents.iter().zip(counts.iter()))
        .map(|(s, (p, c))| format!("{}  {:>pw$}%  {:>cw$}", s.total, p, c))
        .collect::<Vec<_>>();
    aligned_rows(
        shares.iter().map(|s| s.category.as_str()).zip(values.iter()),
        dash,
    )
}

fn overall_rows(report: &base::Report, dash: char) -> Vec<String> {
    let mut rows = vec![
        ("Total", report.total.to_string()),
        ("Count", report.count.to_string()),
        ("Average", report.average.to_string()),
    ];
    if report.whole != report.total {
        rows.push(("Share", format!("{}%", report.percentage())));
    }
    aligned_rows(rows.iter().map(|(l, v)| (*l, v)), dash)
}

/// Joins each `(label, value)` pair with a dash run so all rows share a width.
pub fn aligned_rows<'a>(
    rows: impl Iterator<Item = (&'a str, &'a String)> + Clone,
    dash: char,
) -> Vec<String> {
    let width = base::util::row_width(rows.clone().map(|(l, v)| (l, v.as_str())));
    rows.map(|(l, v)| base::util::dashed_row(l, v, width, dash))
        .collect()
}

fn max_chars(v: &[String]) -> usize {
    v.iter().map(|s| s.chars().count()).max().unwrap_or_default()
}
