use crate::base;
use crate::cli;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// If `fullmatch` is false, ensures all patterns start with and end with `*`,
/// except for empty patterns which are left alone. If `fullmatch` is true,
/// does not modify patterns.
pub fn preprocess_categories<'a>(
    categories: &'a [String],
    fullmatch: bool,
) -> std::borrow::Cow<'a, [String]> {
    if fullmatch {
        return categories.into();
    }
    categories
        .iter()
        .map(|s| {
            let mut s2 = s.clone();
            if s2.is_empty() {
                return s2;
            }
            if !s2.starts_with('*') {
                s2.insert(0, '*');
            }
            if !s2.ends_with('*') {
                s2.push('*');
            }
            s2
        })
        .collect::<Vec<_>>()
        .into()
}

/// Case-insensitive wildcard patterns.
pub struct Patterns(Vec<wildmatch::WildMatch>);

impl Patterns {
    pub fn new<T>(patterns: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        Self(
            patterns
                .iter()
                .map(|s| wildmatch::WildMatch::new(&s.as_ref().to_lowercase()))
                .collect(),
        )
    }

    pub fn any_matches(&self, category: &base::Category) -> bool {
        let lower = category.as_str().to_lowercase();
        self.0.iter().any(|p| p.matches(&lower))
    }
}

/// Returns the expenses in `store` that:
/// - Are dated in `interval`
/// - Match any wildcard pattern in `categories`
/// - Do not match any wildcard pattern in `not_categories`
pub fn filter_expenses<'a, T, U>(
    store: &'a base::Store,
    interval: base::Interval,
    categories: &[T],
    not_categories: &[U],
) -> Vec<(base::ExpenseId, &'a base::Expense)>
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    let incl = Patterns::new(categories);
    let excl = Patterns::new(not_categories);
    store
        .in_interval(interval)
        .filter(|(_, e)| incl.any_matches(e.category()) && !excl.any_matches(e.category()))
        .collect()
}

/// Terminal width in columns, or zero if stdout is not a terminal.
pub fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0)
        .unwrap_or_default() as usize
}

pub fn to_json<T>(value: &T) -> anyhow::Result<cli::Output>
where
    T: serde::Serialize,
{
    let s = serde_json::to_string_pretty(value)?;
    Ok(cli::Output::Json(s))
}
