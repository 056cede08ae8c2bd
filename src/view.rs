//! View-model owning the loaded dataset and the current filtered view.

use std::rc::Rc;

use tracing::{debug, warn};

use crate::cities::{CityDedup, SelectOption, city_options};
use crate::config::Settings;
use crate::criteria::FilterCriteria;
use crate::error::LoadError;
use crate::pipeline::{self, StageTrace};
use crate::record::InspectionRecord;
use crate::render::{self, RenderedView};

/// The full dataset, written once at load time, and the view derived from it.
///
/// Records are shared, so cloning a view copies pointers, not the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectionView {
    settings: Settings,
    records: Rc<[InspectionRecord]>,
    cities: Vec<SelectOption>,
    criteria: FilterCriteria,
    filtered: Rc<[InspectionRecord]>,
    error: Option<String>,
}

impl InspectionView {
    /// Build a view from a loaded dataset with default criteria.
    pub fn new(records: Vec<InspectionRecord>, settings: Settings) -> Self {
        let cities = city_options(&records, settings.city_dedup);
        let criteria = FilterCriteria::default();
        let filtered = pipeline::run_with_limit(&records, &criteria, settings.top_n).into();
        Self {
            settings,
            records: records.into(),
            cities,
            criteria,
            filtered,
            error: None,
        }
    }

    /// Build a view from the outcome of a load.
    ///
    /// A failed load leaves the dataset empty and records the user-visible
    /// message.
    pub fn from_load(result: Result<Vec<InspectionRecord>, LoadError>, settings: Settings) -> Self {
        match result {
            Ok(records) => Self::new(records, settings),
            Err(e) => {
                warn!(error = %e, "inspection data unavailable");
                let mut view = Self::new(Vec::new(), settings);
                view.error = Some(e.user_message().to_string());
                view
            }
        }
    }

    /// Recompute the filtered view for new criteria.
    pub fn update(&mut self, criteria: FilterCriteria) {
        self.filtered =
            pipeline::run_with_limit(&self.records, &criteria, self.settings.top_n).into();
        debug!(
            matched = self.filtered.len(),
            total = self.records.len(),
            "filtered view updated"
        );
        self.criteria = criteria;
    }

    /// Recompute the filtered view and return per-stage counts.
    pub fn update_traced(&mut self, criteria: FilterCriteria) -> Vec<StageTrace> {
        let (filtered, traces) =
            pipeline::run_traced(&self.records, &criteria, self.settings.top_n);
        self.filtered = filtered.into();
        self.criteria = criteria;
        traces
    }

    /// Switch how the city list folds spellings and re-derive it.
    ///
    /// A city selection that no longer appears in the list is left as is; it
    /// simply matches nothing the list offers.
    pub fn set_city_dedup(&mut self, dedup: CityDedup) {
        if self.settings.city_dedup == dedup {
            return;
        }
        self.settings.city_dedup = dedup;
        self.cities = city_options(&self.records, dedup);
        debug!(?dedup, cities = self.cities.len(), "city list re-derived");
    }

    pub fn render(&self) -> RenderedView {
        render::render_results(&self.filtered)
    }

    pub fn records(&self) -> &[InspectionRecord] {
        &self.records
    }

    pub fn filtered(&self) -> &[InspectionRecord] {
        &self.filtered
    }

    pub fn cities(&self) -> &[SelectOption] {
        &self.cities
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// User-visible load error, if the data could not be loaded.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for InspectionView {
    fn default() -> Self {
        Self::new(Vec::new(), Settings::default())
    }
}
