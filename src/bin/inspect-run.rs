//! CLI tool to filter inspection data and render it as an HTML page.
//!
//! Usage:
//!   inspect-run <inspection_data.json> [--search TEXT] [--city CITY] [--status STATUS]
//!               [--sort score-asc|score-desc|name] [--top10] [-o results.html]
//!   inspect-run <inspection_data.json> --cities
//!
//! If no output file is specified, writes the page to stdout.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use inspections_rs::{CityDedup, ControlValues, InspectionView, Settings, load_path, render};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "inspect-run", about = "Filter, sort and render inspection records")]
struct Args {
    /// Inspection data file (JSON array of records)
    input: PathBuf,

    /// Case-insensitive text matched against name or address
    #[arg(short, long)]
    search: Option<String>,

    /// City to keep ("all" for every city)
    #[arg(short, long)]
    city: Option<String>,

    /// Status to keep ("all" for every status)
    #[arg(long)]
    status: Option<String>,

    /// Sort order: score-asc, score-desc or name
    #[arg(long)]
    sort: Option<String>,

    /// Keep only the first records after sorting
    #[arg(long)]
    top10: bool,

    /// Size of the top cap
    #[arg(long, default_value_t = inspections_rs::config::TOP_N)]
    top_n: usize,

    /// Keep city spellings that differ only in case as separate options
    #[arg(long)]
    exact_cities: bool,

    /// Print the city options instead of rendering
    #[arg(long)]
    cities: bool,

    /// Print record counts around every pipeline stage
    #[arg(long)]
    trace: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Args {
    fn controls(&self) -> ControlValues {
        ControlValues {
            search: self.search.clone(),
            city: self.city.clone(),
            status: self.status.clone(),
            sort: self.sort.clone(),
            top_only: Some(self.top10),
        }
    }

    fn settings(&self) -> Settings {
        Settings {
            top_n: self.top_n,
            city_dedup: if self.exact_cities {
                CityDedup::Exact
            } else {
                CityDedup::IgnoreCase
            },
            ..Settings::default()
        }
    }
}

fn write_output(output: Option<&Path>, page: &str) -> io::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, page)
        }
        None => io::stdout().write_all(page.as_bytes()),
    }
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();

    let mut view = InspectionView::from_load(load_path(&args.input), args.settings());

    if args.cities {
        for option in view.cities() {
            println!("{}\t{}", option.value, option.label);
        }
        if view.error().is_some() {
            process::exit(1);
        }
        return;
    }

    let criteria = args.controls().to_criteria();
    if args.trace {
        for trace in view.update_traced(criteria) {
            eprintln!(
                "{:<8} {:>6} -> {:>6}",
                trace.name, trace.input_count, trace.output_count
            );
        }
    } else {
        view.update(criteria);
    }

    let rendered = view.render();
    let page = render::render_page(&rendered, view.error());

    if let Err(e) = write_output(args.output.as_deref(), &page) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }

    match view.error() {
        Some(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
        None => match &args.output {
            Some(path) => eprintln!("{}, output: {}", rendered.summary, path.display()),
            None => eprintln!("{}", rendered.summary),
        },
    }
}
