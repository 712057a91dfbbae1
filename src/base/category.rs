/// Expense category. Always trimmed and title-cased, so `" eating OUT"` and
/// `"Eating out"` group together as `"Eating Out"`.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String")]
pub struct Category(String);

impl Category {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cases every cased character that follows an uncased one and
    /// lower-cases the rest.
    pub fn normalize(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut prev_cased = false;
        for c in s.trim().chars() {
            let cased = c.is_lowercase() || c.is_uppercase();
            if cased && !prev_cased {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            prev_cased = cased;
        }
        out
    }

    /// Whether `query` names this category once normalized the same way.
    pub fn matches(&self, query: &str) -> bool {
        self.0 == Self::normalize(query)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.as_str().fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("category is empty")]
    Empty,
}

impl std::str::FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = Self::normalize(s);
        if normalized.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Self(normalized))
    }
}

impl TryFrom<String> for Category {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
