//! # inspections-rs
//!
//! Filter, sort and render a static list of restaurant inspection records.
//!
//! The data flows in one direction:
//! - **Loader**: a JSON array of records is parsed once into an immutable dataset
//! - **Pipeline**: search, city and status predicates narrow the dataset, a
//!   sort orders it and an optional top-N cap truncates it
//! - **Renderer**: the filtered view becomes a tree of cards plus a summary
//!   line, serializable to escaped markup
//!
//! ## Example
//!
//! ```
//! use inspections_rs::{FilterCriteria, SortMode, parse_records, pipeline, render};
//!
//! let records = parse_records(
//!     r#"[
//!         {"name": "Cafe Luna", "city": "Austin", "status": "Pass", "score": 96},
//!         {"name": "Taco Shack", "city": "Austin", "status": "Fail", "score": 71},
//!         {"name": "Noodle Bar", "city": "Dallas", "status": "Pass"}
//!     ]"#,
//! )
//! .unwrap();
//!
//! let criteria = FilterCriteria {
//!     city: "austin".to_string(),
//!     sort: SortMode::ScoreDesc,
//!     ..FilterCriteria::default()
//! };
//!
//! let view = pipeline::run(&records, &criteria);
//! assert_eq!(view.len(), 2);
//! assert_eq!(view[0].name.as_deref(), Some("Cafe Luna"));
//!
//! let rendered = render::render_results(&view);
//! assert_eq!(rendered.summary, "2 locations shown");
//! ```

pub mod cities;
pub mod config;
pub mod criteria;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod view;

pub use cities::{CityDedup, SelectOption, city_options, derive_cities};
pub use config::{ElementIds, Settings};
pub use criteria::{ALL, ControlValues, FilterCriteria, SortMode};
pub use error::{DATA_UNAVAILABLE, LoadError};
pub use loader::{load_path, parse_records};
pub use pipeline::{Stage, StageTrace, build_stages, locale_cmp};
pub use record::InspectionRecord;
pub use render::{Element, Node, RenderedView, ScoreBadge, escape_html};
pub use view::InspectionView;
