//! Filter and sort criteria derived from the page controls.

use std::fmt;

/// Sentinel control value that disables the city or status filter.
pub const ALL: &str = "all";

/// Ordering applied to the filtered records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Ascending by score, missing scores as zero.
    ScoreAsc,
    /// Descending by score, missing scores as zero.
    #[default]
    ScoreDesc,
    /// Ascending by name using a locale-style comparison.
    NameAsc,
}

impl SortMode {
    /// Interpret a sort control value.
    ///
    /// Unrecognized values fall back to name order; an empty value means
    /// the control carries no choice and the default applies.
    pub fn from_control(value: &str) -> Self {
        match value.trim() {
            "" => Self::default(),
            "score-asc" => Self::ScoreAsc,
            "score-desc" => Self::ScoreDesc,
            _ => Self::NameAsc,
        }
    }

    /// The control value that selects this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScoreAsc => "score-asc",
            Self::ScoreDesc => "score-desc",
            Self::NameAsc => "name",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combined filter, sort and top-N configuration at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Free-text search against name or address.
    pub search: String,
    /// City to keep, or [`ALL`].
    pub city: String,
    /// Status to keep, or [`ALL`].
    pub status: String,
    pub sort: SortMode,
    /// Keep only the first N records after sorting.
    pub top_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            city: ALL.to_string(),
            status: ALL.to_string(),
            sort: SortMode::default(),
            top_only: false,
        }
    }
}

impl FilterCriteria {
    /// Normalized search term; `None` when the term is blank.
    pub fn search_term(&self) -> Option<String> {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() { None } else { Some(term) }
    }

    /// City to match, `None` when the city filter is disabled.
    pub fn city_filter(&self) -> Option<&str> {
        active_selection(&self.city)
    }

    /// Status to match, `None` when the status filter is disabled.
    pub fn status_filter(&self) -> Option<&str> {
        active_selection(&self.status)
    }
}

fn active_selection(value: &str) -> Option<&str> {
    if value.is_empty() || value == ALL {
        None
    } else {
        Some(value)
    }
}

/// Raw values read from the page controls.
///
/// A `None` field means the control is missing from the page; that
/// dimension then falls back to its default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlValues {
    pub search: Option<String>,
    pub city: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub top_only: Option<bool>,
}

impl ControlValues {
    pub fn to_criteria(&self) -> FilterCriteria {
        let selection = |value: &Option<String>| match value.as_deref() {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => ALL.to_string(),
        };

        FilterCriteria {
            search: self.search.clone().unwrap_or_default(),
            city: selection(&self.city),
            status: selection(&self.status),
            sort: self
                .sort
                .as_deref()
                .map(SortMode::from_control)
                .unwrap_or_default(),
            top_only: self.top_only.unwrap_or(false),
        }
    }
}

impl From<&ControlValues> for FilterCriteria {
    fn from(values: &ControlValues) -> Self {
        values.to_criteria()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_from_control() {
        assert_eq!(SortMode::from_control("score-asc"), SortMode::ScoreAsc);
        assert_eq!(SortMode::from_control("score-desc"), SortMode::ScoreDesc);
        assert_eq!(SortMode::from_control("name"), SortMode::NameAsc);
        assert_eq!(SortMode::from_control("whatever"), SortMode::NameAsc);
        assert_eq!(SortMode::from_control(""), SortMode::ScoreDesc);
    }

    #[test]
    fn test_sort_mode_round_trips_control_value() {
        for mode in [SortMode::ScoreAsc, SortMode::ScoreDesc, SortMode::NameAsc] {
            assert_eq!(SortMode::from_control(mode.as_str()), mode);
        }
    }

    #[test]
    fn test_default_criteria_disable_everything() {
        let c = FilterCriteria::default();
        assert_eq!(c.search_term(), None);
        assert_eq!(c.city_filter(), None);
        assert_eq!(c.status_filter(), None);
        assert_eq!(c.sort, SortMode::ScoreDesc);
        assert!(!c.top_only);
    }

    #[test]
    fn test_search_term_is_trimmed_and_lowercased() {
        let c = FilterCriteria {
            search: "  CaF  ".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(c.search_term().as_deref(), Some("caf"));

        let blank = FilterCriteria {
            search: " \t ".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(blank.search_term(), None);
    }

    #[test]
    fn test_missing_controls_use_defaults() {
        let c = ControlValues::default().to_criteria();
        assert_eq!(c, FilterCriteria::default());
    }

    #[test]
    fn test_empty_control_values_use_defaults() {
        let values = ControlValues {
            search: Some(String::new()),
            city: Some(String::new()),
            status: Some(String::new()),
            sort: Some(String::new()),
            top_only: Some(false),
        };
        assert_eq!(values.to_criteria(), FilterCriteria::default());
    }

    #[test]
    fn test_present_controls_carry_through() {
        let values = ControlValues {
            search: Some("luna".to_string()),
            city: Some("Austin".to_string()),
            status: Some("Pass".to_string()),
            sort: Some("score-asc".to_string()),
            top_only: Some(true),
        };
        let c = FilterCriteria::from(&values);
        assert_eq!(c.search, "luna");
        assert_eq!(c.city_filter(), Some("Austin"));
        assert_eq!(c.status_filter(), Some("Pass"));
        assert_eq!(c.sort, SortMode::ScoreAsc);
        assert!(c.top_only);
    }
}
