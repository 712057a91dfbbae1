use crate::base;
use crate::cli;

/// View unique categories
#[derive(clap::Parser)]
pub struct Cats {
    #[arg(long, help = cli::sharedopts::FULLMATCH_HELP, long_help = cli::sharedopts::FULLMATCH_HELP_LONG)]
    fullmatch: bool,

    /// Wildcard patterns to match categories of interest
    ///
    /// If multiple patterns are provided, include categories that match any
    /// pattern.
    #[arg(default_value = "*")]
    patterns: Vec<String>,
}

impl Cats {
    pub fn run(self, store: base::Store) -> anyhow::Result<cli::Output> {
        let patterns = cli::util::preprocess_categories(&self.patterns, self.fullmatch);
        let patterns = cli::util::Patterns::new(&patterns);
        let cats = store
            .categories()
            .into_iter()
            .filter(|c| patterns.any_matches(c))
            .map(base::Category::as_str)
            .collect::<Vec<_>>();
        Ok(if cats.is_empty() {
            cli::Output::Str("No categories.".to_string())
        } else {
            cli::Output::Str(cats.join("\n"))
        })
    }
}
