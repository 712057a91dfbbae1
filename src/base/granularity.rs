/// Width of the time buckets a summary groups expenses into.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
    strum::VariantNames,
    serde::Serialize,
    serde::Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Granularity {
    /// ISO 8601 week.
    Week,
    #[default]
    Month,
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported granularity '{0}', expected one of: week, month, year")]
pub struct UnsupportedGranularity(pub String);

impl std::str::FromStr for Granularity {
    type Err = UnsupportedGranularity;

    /// Case-insensitive. Also accepts the adjectives `weekly`, `monthly`,
    /// and `yearly`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let t = t.strip_suffix("ly").unwrap_or(t);
        <Self as strum::IntoEnumIterator>::iter()
            .find(|g| g.as_ref().eq_ignore_ascii_case(t))
            .ok_or_else(|| UnsupportedGranularity(s.to_string()))
    }
}

impl TryFrom<String> for Granularity {
    type Error = UnsupportedGranularity;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
