use crate::base;
use crate::cli;

/// Summarize spending per week, month, or year
#[derive(clap::Parser)]
pub struct Summary {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,

    #[command(flatten)]
    units: Units,

    #[arg(long, help = cli::sharedopts::JSON_HELP)]
    json: bool,
}

/// Falls back to the repository's `defaultGranularity` when no flag is set.
#[derive(clap::Args)]
#[group(required = false, multiple = false)]
struct Units {
    /// Group expenses by ISO 8601 week
    #[arg(short)]
    w: bool,

    /// Group expenses by calendar month
    #[arg(short)]
    m: bool,

    /// Group expenses by calendar year
    #[arg(short)]
    y: bool,
}

impl Units {
    fn granularity(&self, config: &base::Config) -> base::Granularity {
        if self.w {
            base::Granularity::Week
        } else if self.m {
            base::Granularity::Month
        } else if self.y {
            base::Granularity::Year
        } else {
            config.default_granularity
        }
    }
}

impl Summary {
    pub fn run(self, store: base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let granularity = self.units.granularity(config);
        let summaries = base::summary::summarize_range(&store, self.interval, granularity);
        tracing::info!(%granularity, periods = summaries.len(), "summarized expenses");
        if self.json {
            return cli::util::to_json(&summaries);
        }
        let tr_config = base::tree::forsummary::Config {
            charset: cli::util::charset_from_config(config),
            summaries,
        };
        Ok(cli::Output::TreeForSummary(tr_config))
    }
}
