use crate::base;
use crate::cli;

/// Plot spending as a horizontal bar chart
#[derive(clap::Parser)]
pub struct Chart {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,

    /// What each bar stands for: 'category', 'week', 'month', or 'year'
    #[arg(long, default_value = "category")]
    by: By,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum By {
    Category,
    Period(base::Granularity),
}

impl std::str::FromStr for By {
    type Err = base::granularity::UnsupportedGranularity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("category") {
            return Ok(Self::Category);
        }
        s.parse().map(Self::Period)
    }
}

impl Chart {
    pub fn run(self, store: base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let charset = cli::util::charset_from_config(config);
        let term_width = cli::util::term_width();
        let chart_config = match self.by {
            By::Category => {
                let report =
                    base::report::aggregate(store.in_interval(self.interval).map(|(_, e)| e));
                base::barchart::Config::by_category(charset, &report, term_width)
            }
            By::Period(granularity) => {
                let summaries = base::summary::summarize_range(&store, self.interval, granularity);
                base::barchart::Config::by_period(charset, &summaries, term_width)
            }
        };
        tracing::info!(by = ?self.by, bars = chart_config.bars.len(), "charted expenses");
        Ok(cli::Output::Barchart(chart_config))
    }
}
