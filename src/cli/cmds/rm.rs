use anyhow::Context;

use crate::base;
use crate::cli;

/// Delete an expense
#[derive(clap::Parser)]
pub struct Rm {
    /// Id of the expense, as shown by 'list'
    id: base::ExpenseId,

    /// Execute the removal instead of displaying dry run changes
    #[arg(long)]
    confirm: bool,
}

impl Rm {
    pub fn run(
        self,
        mut store: base::Store,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let Some(expense) = store.get(self.id).cloned() else {
            anyhow::bail!("nonexistent expense");
        };

        let mark = if self.confirm {
            store.remove(self.id)?;
            fs.write(&store).with_context(|| {
                format!("failed to write '{}'", fs.path::<base::Store>().display())
            })?;
            tracing::info!(id = %self.id, "removed expense");
            base::tree::forlist::Mark::Removed
        } else {
            base::tree::forlist::Mark::WouldBeRemoved
        };

        let tr_config = base::tree::forlist::Config {
            charset: cli::util::charset_from_config(config),
            newest_first: config.newest_first,
            expenses: vec![(self.id, expense)],
            mark: Some((self.id, mark)),
        };
        Ok(cli::Output::TreeForList(tr_config))
    }
}
