use crate::base;
use crate::cli;

/// Show spending per category with overall total, count, and average
#[derive(clap::Parser)]
pub struct Total {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,

    #[arg(long, help = cli::sharedopts::JSON_HELP)]
    json: bool,
}

impl Total {
    pub fn run(self, store: base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let report = if self.interval == base::Interval::MAX {
            base::report::grand_report(&store)
        } else {
            base::report::aggregate(store.in_interval(self.interval).map(|(_, e)| e))
        };
        if self.json {
            return cli::util::to_json(&report);
        }
        let tr_config = base::tree::fortotal::Config {
            charset: cli::util::charset_from_config(config),
            report,
        };
        Ok(cli::Output::TreeForTotal(tr_config))
    }
}
