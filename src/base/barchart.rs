use crate::base;

/// Horizontal bar chart of labeled amounts. Bar lengths are proportional to
/// the largest amount, which gets the longest bar the terminal fits.
pub struct Barchart<'a> {
    charset: &'a base::Charset,
    bars: &'a [(String, base::Cents)],
    label_charlen: usize,
    max_val: base::Cents,
    max_barlen: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub bars: Vec<(String, base::Cents)>,
    pub term_width: usize,
}

impl Config {
    /// One bar per category, largest first.
    pub fn by_category(charset: base::Charset, report: &base::Report, term_width: usize) -> Self {
        Self {
            charset,
            bars: report
                .categories
                .iter()
                .map(|s| (s.category.to_string(), s.total))
                .collect(),
            term_width,
        }
    }

    /// One bar per period, oldest first.
    pub fn by_period(
        charset: base::Charset,
        summaries: &[base::PeriodSummary],
        term_width: usize,
    ) -> Self {
        Self {
            charset,
            bars: summaries
                .iter()
                .map(|s| (s.period.to_string(), s.total))
                .collect(),
            term_width,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn to_barchart(&self) -> Barchart<'_> {
        let label_charlen = self
            .bars
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or_default();
        let val_charlen = self
            .bars
            .iter()
            .map(|(_, val)| val.to_string().chars().count())
            .max()
            .unwrap_or_default();
        let max_val = self
            .bars
            .iter()
            .map(|&(_, val)| val)
            .max()
            .unwrap_or_default();
        let max_barlen = self
            .term_width
            .max(base::util::MIN_TERM_WIDTH)
            .saturating_sub(
                label_charlen
                    + base::util::BOUNDING_SPACES_COUNT
                    + 1 // axis
                    + val_charlen,
            );
        Barchart {
            charset: &self.charset,
            bars: &self.bars,
            label_charlen,
            max_val,
            max_barlen,
        }
    }
}

impl Barchart<'_> {
    fn barlen(&self, val: base::Cents) -> usize {
        if !self.max_val.is_positive() || !val.is_positive() {
            return 0;
        }
        let x = (val.0 as f64) / (self.max_val.0 as f64) * (self.max_barlen as f64);
        self.max_barlen.min(x.round() as usize)
    }
}

impl std::fmt::Display for Barchart<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (label, val) in self.bars.iter() {
            write!(
                f,
                "{:<width$} {}",
                label,
                self.charset.chart_axis,
                width = self.label_charlen
            )?;
            let barlen = self.barlen(*val);
            if barlen > 0 {
                let bars = self.charset.chart_bar.to_string().repeat(barlen);
                f.write_str(&self.charset.paint(&bars, colored::Color::Green))?;
                f.write_str(" ")?;
            }
            writeln!(f, "{}", val)?;
        }
        Ok(())
    }
}
