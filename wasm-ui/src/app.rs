//! Main application component.

use std::rc::Rc;

use gloo::console;
use inspections_rs::{
    CityDedup, FilterCriteria, InspectionView, SelectOption, Settings, city_options,
};
use yew::prelude::*;

use crate::components::{ErrorBanner, FilterControls, ResultsPanel};
use crate::fetch::fetch_records;

/// Main application state.
#[derive(Clone, PartialEq, Default)]
pub struct AppState {
    /// Loaded dataset and current filtered view; `None` until the load finishes.
    pub view: Option<InspectionView>,
    /// Criteria shown in the controls.
    pub criteria: FilterCriteria,
    /// How the city list folds spellings that differ only in case.
    pub city_dedup: CityDedup,
}

impl AppState {
    fn cities(&self) -> Vec<SelectOption> {
        match &self.view {
            Some(view) => view.cities().to_vec(),
            None => city_options(&[], self.city_dedup),
        }
    }
}

pub enum AppAction {
    /// The one-shot load finished, successfully or not.
    Loaded(InspectionView),
    /// A control changed.
    CriteriaChanged(FilterCriteria),
    /// The case-sensitive cities toggle changed.
    CityDedupChanged(CityDedup),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new_state = (*self).clone();
        match action {
            AppAction::Loaded(mut view) => {
                // Controls may have changed while the fetch was pending
                view.set_city_dedup(new_state.city_dedup);
                view.update(new_state.criteria.clone());
                new_state.view = Some(view);
            }
            AppAction::CriteriaChanged(criteria) => {
                if let Some(view) = new_state.view.as_mut() {
                    view.update(criteria.clone());
                }
                new_state.criteria = criteria;
            }
            AppAction::CityDedupChanged(dedup) => {
                if let Some(view) = new_state.view.as_mut() {
                    view.set_city_dedup(dedup);
                }
                new_state.city_dedup = dedup;
            }
        }
        new_state.into()
    }
}

/// Main application component.
#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::default);

    // Load the data once when the page mounts
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let settings = Settings::default();
            wasm_bindgen_futures::spawn_local(async move {
                console::log!("Loading inspection data from:", settings.data_url.as_str());
                let result = fetch_records(&settings.data_url).await;
                match &result {
                    Ok(records) => console::log!("Loaded inspection records:", records.len()),
                    Err(e) => console::error!("Error loading inspection data:", e.to_string()),
                }
                state.dispatch(AppAction::Loaded(InspectionView::from_load(result, settings)));
            });
            || ()
        });
    }

    let on_criteria_change = {
        let state = state.clone();
        Callback::from(move |criteria: FilterCriteria| {
            state.dispatch(AppAction::CriteriaChanged(criteria));
        })
    };

    let on_dedup_change = {
        let state = state.clone();
        Callback::from(move |dedup: CityDedup| {
            state.dispatch(AppAction::CityDedupChanged(dedup));
        })
    };

    let rendered = state.view.as_ref().map(InspectionView::render);
    let error = state
        .view
        .as_ref()
        .and_then(|view| view.error())
        .map(str::to_string);

    html! {
        <div class="app">
            <header class="header">
                <h1>{ "Restaurant Inspections" }</h1>
            </header>
            <ErrorBanner message={error} />
            <FilterControls
                criteria={state.criteria.clone()}
                cities={state.cities()}
                city_dedup={state.city_dedup}
                on_change={on_criteria_change}
                on_dedup_change={on_dedup_change}
            />
            <ResultsPanel rendered={rendered} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inspections_rs::{DATA_UNAVAILABLE, LoadError, SortMode, parse_records};

    fn loaded_view() -> InspectionView {
        let records = parse_records(
            r#"[
                {"name": "Bistro", "city": "Austin", "score": 70},
                {"name": "Cafe", "city": "Dallas", "score": 95},
                {"name": "Diner", "city": "austin", "score": 88}
            ]"#,
        )
        .unwrap();
        InspectionView::new(records, Settings::default())
    }

    fn names(state: &AppState) -> Vec<String> {
        state
            .view
            .as_ref()
            .unwrap()
            .filtered()
            .iter()
            .map(|r| r.name_or_empty().to_string())
            .collect()
    }

    fn city_values(state: &AppState) -> Vec<String> {
        state.cities().into_iter().map(|o| o.value).collect()
    }

    #[test]
    fn test_criteria_before_load_are_kept_without_view() {
        let criteria = FilterCriteria {
            search: "cafe".to_string(),
            ..FilterCriteria::default()
        };
        let state = Rc::new(AppState::default()).reduce(AppAction::CriteriaChanged(criteria.clone()));
        assert!(state.view.is_none());
        assert_eq!(state.criteria, criteria);
        assert_eq!(city_values(&state), vec!["all"]);
    }

    #[test]
    fn test_criteria_changed_while_pending_apply_on_load() {
        let state = Rc::new(AppState::default()).reduce(AppAction::CriteriaChanged(FilterCriteria {
            sort: SortMode::NameAsc,
            city: "austin".to_string(),
            ..FilterCriteria::default()
        }));
        let state = state.reduce(AppAction::Loaded(loaded_view()));

        assert_eq!(names(&state), vec!["Bistro", "Diner"]);
        let view = state.view.as_ref().unwrap();
        assert_eq!(view.criteria(), &state.criteria);
        assert_eq!(view.error(), None);
    }

    #[test]
    fn test_criteria_changed_after_load_refilter() {
        let state = Rc::new(AppState::default()).reduce(AppAction::Loaded(loaded_view()));
        assert_eq!(names(&state), vec!["Cafe", "Diner", "Bistro"]);

        let state = state.reduce(AppAction::CriteriaChanged(FilterCriteria {
            sort: SortMode::ScoreAsc,
            ..FilterCriteria::default()
        }));
        assert_eq!(names(&state), vec!["Bistro", "Diner", "Cafe"]);
    }

    #[test]
    fn test_failed_load_shows_message_and_no_results() {
        let view = InspectionView::from_load(
            Err(LoadError::Network("offline".to_string())),
            Settings::default(),
        );
        let state = Rc::new(AppState::default()).reduce(AppAction::Loaded(view));

        let view = state.view.as_ref().unwrap();
        assert_eq!(view.error(), Some(DATA_UNAVAILABLE));
        let rendered = view.render();
        assert!(rendered.is_empty);
        assert_eq!(rendered.summary, "No results.");
        assert_eq!(city_values(&state), vec!["all"]);
    }

    #[test]
    fn test_city_dedup_toggle_before_and_after_load() {
        let state =
            Rc::new(AppState::default()).reduce(AppAction::CityDedupChanged(CityDedup::Exact));
        let state = state.reduce(AppAction::Loaded(loaded_view()));
        assert_eq!(city_values(&state), vec!["all", "austin", "Austin", "Dallas"]);

        let state = state.reduce(AppAction::CityDedupChanged(CityDedup::IgnoreCase));
        assert_eq!(city_values(&state), vec!["all", "Austin", "Dallas"]);
        assert_eq!(state.city_dedup, CityDedup::IgnoreCase);
    }
}
