//! UI Components for the inspection page.

use inspections_rs::{
    CityDedup, ElementIds, FilterCriteria, Node, RenderedView, SelectOption, SortMode,
};
use yew::prelude::*;

/// Status choices offered by the status control.
const STATUS_OPTIONS: &[(&str, &str)] = &[
    ("all", "All statuses"),
    ("Pass", "Pass"),
    ("Fail", "Fail"),
    ("Unknown", "Unknown"),
];

/// Sort choices offered by the sort control.
const SORT_OPTIONS: &[(SortMode, &str)] = &[
    (SortMode::ScoreDesc, "Score: high to low"),
    (SortMode::ScoreAsc, "Score: low to high"),
    (SortMode::NameAsc, "Name: A to Z"),
];

/// Convert a rendered node into Yew DOM nodes.
///
/// Text becomes DOM text nodes, so nothing in a record is parsed as markup.
pub fn node_to_html(node: &Node) -> Html {
    match node {
        Node::Text(text) => html! { { text.clone() } },
        Node::Element(el) => html! {
            <@{el.tag} class={classes!(el.class.clone())}>
                { for el.children.iter().map(node_to_html) }
            </@>
        },
    }
}

/// Search, city, status, sort and top-10 controls.
#[derive(Properties, PartialEq)]
pub struct FilterControlsProps {
    pub criteria: FilterCriteria,
    pub cities: Vec<SelectOption>,
    pub city_dedup: CityDedup,
    pub on_change: Callback<FilterCriteria>,
    pub on_dedup_change: Callback<CityDedup>,
}

#[function_component(FilterControls)]
pub fn filter_controls(props: &FilterControlsProps) -> Html {
    let ids = ElementIds::default();

    // Each handler starts from the current criteria and changes one field.
    let update = |apply: fn(&mut FilterCriteria, String)| {
        let criteria = props.criteria.clone();
        let on_change = props.on_change.clone();
        move |value: String| {
            let mut next = criteria.clone();
            apply(&mut next, value);
            on_change.emit(next);
        }
    };

    let on_search = {
        let update = update(|c, v| c.search = v);
        Callback::from(move |e: InputEvent| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            update(target.value());
        })
    };

    let on_city = {
        let update = update(|c, v| c.city = v);
        Callback::from(move |e: Event| {
            let target: web_sys::HtmlSelectElement = e.target_unchecked_into();
            update(target.value());
        })
    };

    let on_status = {
        let update = update(|c, v| c.status = v);
        Callback::from(move |e: Event| {
            let target: web_sys::HtmlSelectElement = e.target_unchecked_into();
            update(target.value());
        })
    };

    let on_sort = {
        let update = update(|c, v| c.sort = SortMode::from_control(&v));
        Callback::from(move |e: Event| {
            let target: web_sys::HtmlSelectElement = e.target_unchecked_into();
            update(target.value());
        })
    };

    let on_top = {
        let criteria = props.criteria.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut next = criteria.clone();
            next.top_only = target.checked();
            on_change.emit(next);
        })
    };

    let on_exact_cities = {
        let on_dedup_change = props.on_dedup_change.clone();
        Callback::from(move |e: Event| {
            let target: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_dedup_change.emit(if target.checked() {
                CityDedup::Exact
            } else {
                CityDedup::IgnoreCase
            });
        })
    };

    let criteria = &props.criteria;

    html! {
        <div class="controls">
            <input
                id={ids.search_input}
                type="search"
                placeholder="Search by name or address"
                value={criteria.search.clone()}
                oninput={on_search}
            />
            <select id={ids.city_filter} onchange={on_city}>
                { for props.cities.iter().map(|opt| html! {
                    <option value={opt.value.clone()} selected={opt.value == criteria.city}>
                        { &opt.label }
                    </option>
                }) }
            </select>
            <select id={ids.status_filter} onchange={on_status}>
                { for STATUS_OPTIONS.iter().map(|(value, label)| html! {
                    <option value={*value} selected={*value == criteria.status}>
                        { *label }
                    </option>
                }) }
            </select>
            <select id={ids.sort_select} onchange={on_sort}>
                { for SORT_OPTIONS.iter().map(|(mode, label)| html! {
                    <option value={mode.as_str()} selected={*mode == criteria.sort}>
                        { *label }
                    </option>
                }) }
            </select>
            <label class="top-toggle">
                <input
                    id={ids.top_toggle}
                    type="checkbox"
                    checked={criteria.top_only}
                    onchange={on_top}
                />
                { "Top 10 only" }
            </label>
            <label class="city-case-toggle">
                <input
                    type="checkbox"
                    checked={props.city_dedup == CityDedup::Exact}
                    onchange={on_exact_cities}
                />
                { "Case-sensitive cities" }
            </label>
        </div>
    }
}

/// Summary line and result cards.
#[derive(Properties, PartialEq)]
pub struct ResultsPanelProps {
    /// `None` until the data has been loaded.
    pub rendered: Option<RenderedView>,
}

#[function_component(ResultsPanel)]
pub fn results_panel(props: &ResultsPanelProps) -> Html {
    let ids = ElementIds::default();
    let (summary, cards) = match &props.rendered {
        Some(view) => (
            view.summary.clone(),
            view.nodes.iter().map(node_to_html).collect::<Html>(),
        ),
        None => (String::new(), Html::default()),
    };

    html! {
        <div class="results">
            <p id={ids.summary_text} class="summary">{ summary }</p>
            <div id={ids.results_container}>
                { cards }
            </div>
        </div>
    }
}

/// Load error banner.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let ids = ElementIds::default();
    match &props.message {
        Some(message) => html! {
            <div id={ids.error_message} class="error" style="display: block">
                { message }
            </div>
        },
        None => html! {},
    }
}
