pub const INTERVAL_HELP: &str = "Interval of interest";
pub const INTERVAL_HELP_LONG: &str = "Interval of interest

Written as 'START:END', both inclusive. Either side may be left out to leave that end open. Each side is an ISO 8601 date (yyyy-mm-dd) or one of the relative dates below, where 'n' is an optional signed offset:
dn: today shifted by n days
mn: first day of the month n months from now
Mn: last day of the month n months from now
yn: first day of the year n years from now
Yn: last day of the year n years from now

A lone date selects that one day. A lone 'mn' or 'Mn' selects that whole month, and a lone 'yn' or 'Yn' that whole year. For example, 'm' is the current month and 'y-1' is last year.";

pub const FULLMATCH_HELP: &str = "Match category patterns against whole category names";
pub const FULLMATCH_HELP_LONG: &str = "Match category patterns against whole category names

By default a pattern matches if it occurs anywhere in the category name, as if it were surrounded by '*'. Matching is case-insensitive either way.";

pub const JSON_HELP: &str = "Print machine-readable JSON instead of text";

#[derive(clap::Args)]
pub struct CategoriesOpts {
    /// Wildcard patterns to match categories of interest
    ///
    /// Use commas to separate multiple patterns. An expense is included if its
    /// category matches any pattern.
    #[arg(
        short,
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub categories: Vec<String>,

    /// Wildcard patterns to match categories to exclude
    ///
    /// Use commas to separate multiple patterns. An expense is excluded if its
    /// category matches any pattern. Takes precedence over '--categories'.
    #[arg(
        short = 'x',
        long,
        value_name = "PATTERNS",
        value_delimiter = ',',
        default_value = "",
        hide_default_value = true
    )]
    pub not_categories: Vec<String>,

    #[arg(long, help = FULLMATCH_HELP, long_help = FULLMATCH_HELP_LONG)]
    pub fullmatch: bool,
}
