//! Runtime settings and the fixed page element identifiers.

use crate::cities::CityDedup;

/// Location of the inspection data, relative to the page.
pub const DATA_URL: &str = "./data/inspection_data.json";

/// Size of the top-N cap.
pub const TOP_N: usize = 10;

/// Element identifiers shared between the page markup and the code that
/// reads controls and writes results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub search_input: &'static str,
    pub city_filter: &'static str,
    pub status_filter: &'static str,
    pub sort_select: &'static str,
    pub top_toggle: &'static str,
    pub results_container: &'static str,
    pub summary_text: &'static str,
    pub error_message: &'static str,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            search_input: "searchInput",
            city_filter: "cityFilter",
            status_filter: "statusFilter",
            sort_select: "sortSelect",
            top_toggle: "top10Toggle",
            results_container: "resultsContainer",
            summary_text: "summaryText",
            error_message: "errorMessage",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_url: String,
    pub top_n: usize,
    pub city_dedup: CityDedup,
    pub ids: ElementIds,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_url: DATA_URL.to_string(),
            top_n: TOP_N,
            city_dedup: CityDedup::default(),
            ids: ElementIds::default(),
        }
    }
}
