/// Spaces on either side of a dash run in an aligned row.
pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;

/// Joins `label` and `value` with a run of `dash` so the returned string is
/// `width` characters wide. At least [`MIN_DASHES_COUNT`]
/// dashes are always written.
pub fn dashed_row(label: &str, value: &str, width: usize, dash: char) -> String {
    let used = label.chars().count() + BOUNDING_SPACES_COUNT + value.chars().count();
    let dash_count = width.saturating_sub(used).max(MIN_DASHES_COUNT);
    let mut s = String::with_capacity(width);
    s.push_str(label);
    s.push(' ');
    for _ in 0..dash_count {
        s.push(dash);
    }
    s.push(' ');
    s.push_str(value);
    s
}

/// Width that fits every `(label, value)` row with the minimum dash run.
pub fn row_width<'a>(rows: impl IntoIterator<Item = (&'a str, &'a str)>) -> usize {
    rows.into_iter()
        .map(|(label, value)| {
            label.chars().count()
                + BOUNDING_SPACES_COUNT
                + MIN_DASHES_COUNT
                + value.chars().count()
        })
        .max()
        .unwrap_or_default()
}
