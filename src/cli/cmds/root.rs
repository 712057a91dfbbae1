use anyhow::Context;

use crate::base;
use crate::cli;

/// Personal expense tracker
#[derive(clap::Parser)]
#[command(name = "spendlog", color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Add(cli::cmds::add::Add),
    List(cli::cmds::list::List),
    Rm(cli::cmds::rm::Rm),
    Total(cli::cmds::total::Total),
    Filter(cli::cmds::filter::Filter),
    Summary(cli::cmds::summary::Summary),
    Chart(cli::cmds::chart::Chart),
    Cats(cli::cmds::cats::Cats),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let store = fs
            .read::<base::Store>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Store>().display()))?;
        tracing::debug!(expenses = store.len(), "loaded store");

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Add(cmd) => cmd.run(store, &config, fs),
            Commands::List(cmd) => cmd.run(store, &config),
            Commands::Rm(cmd) => cmd.run(store, &config, fs),
            Commands::Total(cmd) => cmd.run(store, &config),
            Commands::Filter(cmd) => cmd.run(store, &config),
            Commands::Summary(cmd) => cmd.run(store, &config),
            Commands::Chart(cmd) => cmd.run(store, &config),
            Commands::Cats(cmd) => cmd.run(store),
        }
    }
}
