//! City options for the city selection control.

use crate::criteria::ALL;
use crate::pipeline::locale_cmp;
use crate::record::InspectionRecord;

/// Label of the synthetic option that disables the city filter.
pub const ALL_CITIES_LABEL: &str = "All cities";

/// How city values are deduplicated when building the option list.
///
/// Filtering always compares cities without regard to case. `Exact` keeps
/// spellings that differ only in case as separate options, so several
/// options select the same records. `IgnoreCase` collapses them and keeps
/// the first spelling seen in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CityDedup {
    #[default]
    IgnoreCase,
    Exact,
}

/// One entry of a selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Distinct, trimmed, non-empty city values in display order.
pub fn derive_cities(records: &[InspectionRecord], dedup: CityDedup) -> Vec<String> {
    let mut cities: Vec<String> = Vec::new();

    for city in records.iter().map(|r| r.city_or_empty().trim()) {
        if city.is_empty() {
            continue;
        }
        let seen = match dedup {
            CityDedup::Exact => cities.iter().any(|c| c == city),
            CityDedup::IgnoreCase => cities.iter().any(|c| c.to_lowercase() == city.to_lowercase()),
        };
        if !seen {
            cities.push(city.to_string());
        }
    }

    cities.sort_by(|a, b| locale_cmp(a, b));
    cities
}

/// City options with the "all cities" option first.
pub fn city_options(records: &[InspectionRecord], dedup: CityDedup) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(ALL, ALL_CITIES_LABEL))
        .chain(
            derive_cities(records, dedup)
                .into_iter()
                .map(|city| SelectOption::new(&city, &city)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_cities(cities: &[&str]) -> Vec<InspectionRecord> {
        cities
            .iter()
            .map(|c| InspectionRecord::default().with_city(c))
            .collect()
    }

    #[test]
    fn test_blank_cities_dropped_and_case_collapsed() {
        let records = with_cities(&["X", " ", "x", "Y", ""]);
        assert_eq!(derive_cities(&records, CityDedup::IgnoreCase), vec!["X", "Y"]);
    }

    #[test]
    fn test_exact_dedup_keeps_case_variants() {
        let records = with_cities(&["X", " ", "x", "Y", ""]);
        assert_eq!(derive_cities(&records, CityDedup::Exact), vec!["x", "X", "Y"]);
    }

    #[test]
    fn test_values_are_trimmed_before_dedup() {
        let records = with_cities(&[" Austin", "Austin ", "Dallas"]);
        assert_eq!(
            derive_cities(&records, CityDedup::Exact),
            vec!["Austin", "Dallas"]
        );
    }

    #[test]
    fn test_missing_city_is_skipped() {
        let mut records = with_cities(&["Waco"]);
        records.push(InspectionRecord::named("no city"));
        assert_eq!(derive_cities(&records, CityDedup::IgnoreCase), vec!["Waco"]);
    }

    #[test]
    fn test_sorted_without_regard_to_case() {
        let records = with_cities(&["dallas", "Austin", "El Paso", "amarillo"]);
        assert_eq!(
            derive_cities(&records, CityDedup::IgnoreCase),
            vec!["amarillo", "Austin", "dallas", "El Paso"]
        );
    }

    #[test]
    fn test_options_start_with_all() {
        let records = with_cities(&["Y", "X"]);
        let options = city_options(&records, CityDedup::IgnoreCase);
        assert_eq!(
            options,
            vec![
                SelectOption::new("all", "All cities"),
                SelectOption::new("X", "X"),
                SelectOption::new("Y", "Y"),
            ]
        );
    }

    #[test]
    fn test_options_for_empty_dataset() {
        let options = city_options(&[], CityDedup::default());
        assert_eq!(options, vec![SelectOption::new("all", "All cities")]);
    }
}
