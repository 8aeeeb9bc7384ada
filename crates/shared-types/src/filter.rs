use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Date format used by date and date-range filters (`yyyy-MM-dd`).
pub const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Filter values
// ---------------------------------------------------------------------------

/// Value of a single active filter.
///
/// On the wire every string is `Text`, so a `Date` filter reads back as its
/// `yyyy-MM-dd` text. Client-side matching treats the two alike for date
/// filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(NaiveDate),
    List(Vec<String>),
    DateRange {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<NaiveDate>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    pub fn text(s: impl Into<String>) -> Self {
        FilterValue::Text(s.into())
    }

    /// Whether this value counts as "no filter" and must not be stored.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Null => true,
            FilterValue::Text(s) => s.is_empty(),
            FilterValue::List(items) => items.is_empty(),
            FilterValue::DateRange { from, to } => from.is_none() && to.is_none(),
            FilterValue::Bool(_) | FilterValue::Number(_) | FilterValue::Date(_) => false,
        }
    }

    /// Truthiness used for the active-filter badge; `false` and `0` are stored
    /// but not counted.
    pub fn is_truthy(&self) -> bool {
        match self {
            FilterValue::Bool(b) => *b,
            FilterValue::Number(n) => *n != 0.0 && !n.is_nan(),
            other => !other.is_empty(),
        }
    }

    /// Date range parsed from the two `yyyy-MM-dd` inputs of a range filter.
    /// Returns `None` when both ends are cleared.
    pub fn date_range(from: &str, to: &str) -> Option<Self> {
        let from = parse_filter_date(from);
        let to = parse_filter_date(to);
        if from.is_none() && to.is_none() {
            None
        } else {
            Some(FilterValue::DateRange { from, to })
        }
    }

    /// Text shown back in a single-valued input.
    pub fn input_text(&self) -> String {
        match self {
            FilterValue::Null => String::new(),
            FilterValue::Bool(b) => b.to_string(),
            FilterValue::Number(n) => n.to_string(),
            FilterValue::Date(d) => d.format(FILTER_DATE_FORMAT).to_string(),
            FilterValue::Text(s) => s.clone(),
            FilterValue::List(items) => items.join(", "),
            FilterValue::DateRange { .. } => String::new(),
        }
    }
}

/// Parse a `yyyy-MM-dd` input value; blank or malformed input yields `None`.
pub fn parse_filter_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, FILTER_DATE_FORMAT).ok()
}

/// Active filter criteria keyed by column id.
///
/// Setting an empty value removes the key, so the map never holds entries
/// that would not filter anything.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, FilterValue>",
    into = "BTreeMap<String, FilterValue>"
)]
pub struct FilterValues(BTreeMap<String, FilterValue>);

impl FilterValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `value` under `id`, pruning it if empty.
    pub fn set(&mut self, id: impl Into<String>, value: Option<FilterValue>) {
        let id = id.into();
        match value {
            Some(v) if !v.is_empty() => {
                self.0.insert(id, v);
            }
            _ => {
                self.0.remove(&id);
            }
        }
    }

    /// Builder-style variant of [`FilterValues::set`].
    pub fn with(mut self, id: impl Into<String>, value: Option<FilterValue>) -> Self {
        self.set(id, value);
        self
    }

    pub fn get(&self, id: &str) -> Option<&FilterValue> {
        self.0.get(id)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries that should light up the active-filter badge.
    pub fn active_count(&self) -> usize {
        self.0.values().filter(|v| v.is_truthy()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.0.iter()
    }
}

impl From<BTreeMap<String, FilterValue>> for FilterValues {
    fn from(map: BTreeMap<String, FilterValue>) -> Self {
        map.into_iter().collect()
    }
}

impl From<FilterValues> for BTreeMap<String, FilterValue> {
    fn from(values: FilterValues) -> Self {
        values.0
    }
}

impl FromIterator<(String, FilterValue)> for FilterValues {
    fn from_iter<I: IntoIterator<Item = (String, FilterValue)>>(iter: I) -> Self {
        let mut values = FilterValues::new();
        for (id, value) in iter {
            values.set(id, Some(value));
        }
        values
    }
}

// ---------------------------------------------------------------------------
// Filter descriptors
// ---------------------------------------------------------------------------

/// Input control used for a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    Text,
    Number,
    Date,
    DateRange,
    Select,
    #[serde(rename = "multiselect", alias = "multiSelect")]
    MultiSelect,
    /// Any kind this version does not know how to render.
    #[serde(other)]
    Unsupported,
}

/// One choice of a select or multiselect filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Configuration of one filter control in the filter bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterDescriptor {
    pub id: String,
    pub label: String,
    #[serde(default, rename = "type")]
    pub kind: Option<FilterKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

impl FilterDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FilterKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: Some(kind),
            placeholder: None,
            options: Vec::new(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_options(mut self, options: Vec<FilterOption>) -> Self {
        self.options = options;
        self
    }
}
