//! Dropdown Filters

/// Dropdown value meaning "no filtering"
pub const ALL: &str = "all";

/// Exact-match dropdown filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChoiceFilter {
    #[default]
    All,
    Only(String),
}

impl ChoiceFilter {
    /// Parse a `<select>` value
    pub fn from_choice(choice: &str) -> Self {
        if choice == ALL {
            ChoiceFilter::All
        } else {
            ChoiceFilter::Only(choice.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ChoiceFilter::All)
    }

    pub fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            ChoiceFilter::All => true,
            ChoiceFilter::Only(wanted) => value == Some(wanted.as_str()),
        }
    }
}

/// Distinct non-empty values in first-seen order
pub fn distinct_values<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut seen: Vec<String> = Vec::new();
    for value in values.into_iter().flatten() {
        if !value.is_empty() && !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
