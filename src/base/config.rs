use crate::base;

/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
    /// Bucket size used by `summary` when no granularity flag is given.
    pub default_granularity: base::Granularity,
    /// List expenses from the most recent date down.
    pub newest_first: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            use_colored_output: false,
            use_unicode_symbols: false,
            default_granularity: base::Granularity::Month,
            newest_first: false,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    /// Only a JSON object is accepted. Missing fields take their defaults.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = serde_json::from_str::<serde_json::Value>(s)?;
        if !value.is_object() {
            return Err(<serde_json::Error as serde::de::Error>::custom(
                "config must be a JSON object",
            ));
        }
        serde_json::from_value(value)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
