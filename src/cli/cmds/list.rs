use crate::base;
use crate::cli;

/// List expenses grouped by date
#[derive(clap::Parser)]
pub struct List {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,

    #[command(flatten)]
    categories_opts: cli::sharedopts::CategoriesOpts,
}

impl List {
    pub fn run(self, store: base::Store, config: &base::Config) -> anyhow::Result<cli::Output> {
        let categories = cli::util::preprocess_categories(
            &self.categories_opts.categories,
            self.categories_opts.fullmatch,
        );
        let not_categories = cli::util::preprocess_categories(
            &self.categories_opts.not_categories,
            self.categories_opts.fullmatch,
        );
        let expenses =
            cli::util::filter_expenses(&store, self.interval, &categories, &not_categories)
                .into_iter()
                .map(|(id, e)| (id, e.clone()))
                .collect();
        let tr_config = base::tree::forlist::Config {
            charset: cli::util::charset_from_config(config),
            newest_first: config.newest_first,
            expenses,
            mark: None,
        };
        Ok(cli::Output::TreeForList(tr_config))
    }
}
