use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize an expense repository in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing repository's config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        newest_first: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let already_repo = fs.is_repo();

        let path = fs.path::<base::Config>();
        let config = if self.reset_config || !path.exists() {
            initial_config()
        } else {
            fs.read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        fs.write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        tracing::info!(dir = %fs.dir().display(), already_repo, "initialized repository");

        Ok(if !already_repo {
            cli::Output::Str(format!(
                "Repository initialized in '{}'",
                fs.dir().display()
            ))
        } else if self.reset_config {
            cli::Output::Str("Repository configuration reset to defaults.".to_string())
        } else {
            cli::Output::Str(format!(
                "Repository reinitialized in '{}'",
                fs.dir().display()
            ))
        })
    }
}
