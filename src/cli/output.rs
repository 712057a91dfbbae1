use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    /// Pretty-printed JSON document.
    Json(String),
    TreeForList(base::tree::forlist::Config),
    TreeForTotal(base::tree::fortotal::Config),
    TreeForSummary(base::tree::forsummary::Config),
    Barchart(base::barchart::Config),
    /// Several outputs printed one after another.
    Sections(Vec<Output>),
}

const NO_EXPENSES: &str = "No expenses.";

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) | Output::Json(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::TreeForList(config) => {
                if config.is_empty() {
                    writeln!(f, "{}", NO_EXPENSES)
                } else {
                    write!(f, "{}", config.to_tree())
                }
            }
            Output::TreeForTotal(config) => {
                if config.report.is_empty() {
                    writeln!(f, "{}", NO_EXPENSES)
                } else {
                    write!(f, "{}", config.to_tree())
                }
            }
            Output::TreeForSummary(config) => {
                if config.is_empty() {
                    writeln!(f, "{}", NO_EXPENSES)
                } else {
                    write!(f, "{}", config.to_tree())
                }
            }
            Output::Barchart(config) => {
                if config.is_empty() {
                    writeln!(f, "{}", NO_EXPENSES)
                } else {
                    write!(f, "{}", config.to_barchart())
                }
            }
            Output::Sections(outputs) => {
                for (i, output) in outputs.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", output)?;
                }
                Ok(())
            }
        }
    }
}
