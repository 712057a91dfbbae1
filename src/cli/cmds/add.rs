use anyhow::Context;

use crate::base;
use crate::cli;

/// Record an expense
#[derive(clap::Parser)]
pub struct Add {
    /// Expense category, case-insensitive
    ///
    /// Categories are stored title-cased, so 'eating out' and 'Eating Out'
    /// are the same category.
    category: base::Category,

    /// Amount spent, with at most two decimal places
    #[arg(allow_negative_numbers = true)]
    amount: base::Cents,

    /// Expense date
    #[arg(default_value = "d")]
    date: base::Date,

    /// Optional description
    #[arg(short, long, default_value_t, hide_default_value = true)]
    description: String,
}

impl Add {
    pub fn run(
        self,
        mut store: base::Store,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let expense =
            base::Expense::new(self.category, self.amount, self.date, self.description)?;
        let id = store.insert(expense.clone());
        fs.write(&store)
            .with_context(|| format!("failed to write '{}'", fs.path::<base::Store>().display()))?;
        tracing::info!(%id, "added expense");

        let tr_config = base::tree::forlist::Config {
            charset: cli::util::charset_from_config(config),
            newest_first: config.newest_first,
            expenses: vec![(id, expense)],
            mark: Some((id, base::tree::forlist::Mark::Added)),
        };
        Ok(cli::Output::TreeForList(tr_config))
    }
}
