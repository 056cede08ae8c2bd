//! Filter/sort pipeline.
//!
//! The criteria are turned into a chain of stages: up to three predicate
//! stages (search, city, status), one sort stage and an optional top-N
//! stage. Each stage consumes the previous stage's output. Stages work on
//! borrowed records so the loaded dataset is never mutated; the result is
//! copied out only once at the end.

use std::cmp::Ordering;

use tracing::debug;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::config::TOP_N;
use crate::criteria::{FilterCriteria, SortMode};
use crate::record::InspectionRecord;

/// A pipeline stage over borrowed records.
pub trait Stage {
    /// Transform the records produced by the previous stage.
    fn apply<'a>(&self, records: Vec<&'a InspectionRecord>) -> Vec<&'a InspectionRecord>;

    /// The display name of this stage.
    fn name(&self) -> &str;
}

/// Record counts around one executed stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageTrace {
    pub name: String,
    pub input_count: usize,
    pub output_count: usize,
}

// ---------------------------------------------------------------------------
// Stage implementations
// ---------------------------------------------------------------------------

/// SEARCH - keeps records whose name or address contains the term.
pub struct SearchStage {
    /// Already lowercased.
    term: String,
}

impl SearchStage {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
        }
    }

    fn matches(&self, record: &InspectionRecord) -> bool {
        record.name_or_empty().to_lowercase().contains(&self.term)
            || record.address_or_empty().to_lowercase().contains(&self.term)
    }
}

impl Stage for SearchStage {
    fn apply<'a>(&self, records: Vec<&'a InspectionRecord>) -> Vec<&'a InspectionRecord> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }

    fn name(&self) -> &str {
        "SEARCH"
    }
}

/// Record field compared by [`MatchStage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    City,
    Status,
}

impl Field {
    fn get(self, record: &InspectionRecord) -> &str {
        match self {
            Field::City => record.city_or_empty(),
            Field::Status => record.status_or_empty(),
        }
    }
}

/// CITY / STATUS - keeps records whose field equals the value, ignoring case.
pub struct MatchStage {
    field: Field,
    value: String,
}

impl MatchStage {
    pub fn new(field: Field, value: &str) -> Self {
        Self {
            field,
            value: value.to_lowercase(),
        }
    }
}

impl Stage for MatchStage {
    fn apply<'a>(&self, records: Vec<&'a InspectionRecord>) -> Vec<&'a InspectionRecord> {
        records
            .into_iter()
            .filter(|r| self.field.get(r).to_lowercase() == self.value)
            .collect()
    }

    fn name(&self) -> &str {
        match self.field {
            Field::City => "CITY",
            Field::Status => "STATUS",
        }
    }
}

/// SORT - stable sort by the active mode.
pub struct SortStage {
    mode: SortMode,
}

impl SortStage {
    pub fn new(mode: SortMode) -> Self {
        Self { mode }
    }

    fn compare(&self, a: &InspectionRecord, b: &InspectionRecord) -> Ordering {
        match self.mode {
            SortMode::ScoreAsc => a.score_or_zero().total_cmp(&b.score_or_zero()),
            SortMode::ScoreDesc => b.score_or_zero().total_cmp(&a.score_or_zero()),
            SortMode::NameAsc => locale_cmp(a.name_or_empty(), b.name_or_empty()),
        }
    }
}

impl Stage for SortStage {
    fn apply<'a>(&self, mut records: Vec<&'a InspectionRecord>) -> Vec<&'a InspectionRecord> {
        records.sort_by(|a, b| self.compare(a, b));
        records
    }

    fn name(&self) -> &str {
        "SORT"
    }
}

/// TOP n - keeps the first n records.
pub struct TopStage {
    n: usize,
}

impl TopStage {
    pub fn new(n: usize) -> Self {
        Self { n }
    }
}

impl Stage for TopStage {
    fn apply<'a>(&self, mut records: Vec<&'a InspectionRecord>) -> Vec<&'a InspectionRecord> {
        records.truncate(self.n);
        records
    }

    fn name(&self) -> &str {
        "TOP"
    }
}

/// Lowercased canonical decomposition; accents become separate combining marks.
fn decomposed_lower(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Compare two strings the way a user expects names to be ordered.
///
/// Base letters compare first, ignoring case and accents, so "Éclair" sorts
/// among the E's. Strings equal at that level put the unaccented form first,
/// then the lowercase form.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let base = decomposed_lower(a)
        .filter(|c| !is_combining_mark(*c))
        .cmp(decomposed_lower(b).filter(|c| !is_combining_mark(*c)));

    base.then_with(|| decomposed_lower(a).cmp(decomposed_lower(b)))
        .then_with(|| {
            a.nfd()
                .zip(b.nfd())
                .find(|(x, y)| x != y)
                .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Ordering::Less,
                    (false, true) => Ordering::Greater,
                    _ => x.cmp(&y),
                })
                .unwrap_or_else(|| a.nfd().count().cmp(&b.nfd().count()))
        })
}

/// Build the stage chain for a set of criteria.
///
/// Disabled predicates produce no stage. The sort stage is always present
/// and the top-N stage, when enabled, is always last.
pub fn build_stages(criteria: &FilterCriteria, top_n: usize) -> Vec<Box<dyn Stage>> {
    let mut stages: Vec<Box<dyn Stage>> = Vec::new();

    if let Some(term) = criteria.search_term() {
        stages.push(Box::new(SearchStage::new(&term)));
    }
    if let Some(city) = criteria.city_filter() {
        stages.push(Box::new(MatchStage::new(Field::City, city)));
    }
    if let Some(status) = criteria.status_filter() {
        stages.push(Box::new(MatchStage::new(Field::Status, status)));
    }

    stages.push(Box::new(SortStage::new(criteria.sort)));

    if criteria.top_only {
        stages.push(Box::new(TopStage::new(top_n)));
    }

    stages
}

/// Run the pipeline with the default top-N cap.
pub fn run(records: &[InspectionRecord], criteria: &FilterCriteria) -> Vec<InspectionRecord> {
    run_with_limit(records, criteria, TOP_N)
}

/// Run the pipeline, returning a fresh filtered view.
pub fn run_with_limit(
    records: &[InspectionRecord],
    criteria: &FilterCriteria,
    top_n: usize,
) -> Vec<InspectionRecord> {
    let mut current: Vec<&InspectionRecord> = records.iter().collect();
    for stage in build_stages(criteria, top_n) {
        current = stage.apply(current);
    }
    current.into_iter().cloned().collect()
}

/// Run the pipeline and capture record counts around every stage.
pub fn run_traced(
    records: &[InspectionRecord],
    criteria: &FilterCriteria,
    top_n: usize,
) -> (Vec<InspectionRecord>, Vec<StageTrace>) {
    let stages = build_stages(criteria, top_n);
    let mut traces = Vec::with_capacity(stages.len());
    let mut current: Vec<&InspectionRecord> = records.iter().collect();

    for stage in &stages {
        let input_count = current.len();
        current = stage.apply(current);
        debug!(
            stage = stage.name(),
            input_count,
            output_count = current.len(),
            "pipeline stage"
        );
        traces.push(StageTrace {
            name: stage.name().to_string(),
            input_count,
            output_count: current.len(),
        });
    }

    (current.into_iter().cloned().collect(), traces)
}
