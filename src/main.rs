use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use folio_core::{
    catalog_document_schema, filters_document_schema, validate_against_schema, Language, SortMode,
};

mod errors;
mod render;
mod state;

use errors::map_document_load_error;
use state::AppState;

/// Folio - browse a bilingual portfolio catalog with faceted filtering
///
/// Examples:
///   # Display all projects
///   folio catalog.json
///
///   # Filter by option values (OR within a category, AND across categories)
///   folio catalog.json --filters filters.json -s PLA -s FDM
///
///   # Sort by recency and render the Czech side
///   folio catalog.json --sort date-newest --lang cs
///
///   # Use the store's default sort mode
///   folio catalog.json --settings settings.json
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Selected values of the SAME category are combined with OR\n  \
    - Different categories are combined with AND\n  \
    - Values no category owns are ignored\n\n\
Sort Modes:\n  \
    featured, date-newest, date-oldest, difficulty-easy, difficulty-hard,\n  \
    alphabetically-az, alphabetically-za, none\n\n\
Languages:\n  \
    en (primary), cs (secondary; untranslated fields render blank)")]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Path to the filter metadata JSON file
    #[arg(short, long = "filters", value_name = "FILE")]
    filters: Option<PathBuf>,

    /// Path to the listing settings JSON file (default sort mode)
    #[arg(long = "settings", value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Toggle a filter option value (can be specified multiple times)
    #[arg(short, long = "select", value_name = "VALUE")]
    select: Vec<String>,

    /// Sort mode (overrides the settings default)
    #[arg(short = 'o', long = "sort", value_name = "MODE")]
    sort_by: Option<String>,

    /// Display language
    #[arg(short, long = "lang", value_name = "LANG", default_value = "en")]
    lang: String,

    /// Validate the documents against the built-in schemas and exit
    #[arg(long)]
    check: bool,
}

fn main() {
    let cli = Cli::parse();

    let language = Language::from_str(&cli.lang).unwrap_or_else(|err| {
        eprintln!("Error: {}", err);
        process::exit(2);
    });

    let sort_override = cli.sort_by.as_deref().map(|raw| {
        SortMode::from_str(raw).unwrap_or_else(|err| {
            eprintln!("Error: {}", err);
            process::exit(2);
        })
    });

    if cli.check {
        check_documents(&cli);
        return;
    }

    let mut state = AppState::new();

    // Filter metadata first: catalog validation cross-checks against it
    if let Some(ref path) = cli.filters {
        if let Err(err) = state.load_filters_file(path.clone()) {
            let (title, message, details) = map_document_load_error(&*err, path);
            render::print_error(&title, &message, &details);
            process::exit(1);
        }
    }

    if let Some(ref path) = cli.settings {
        if let Err(err) = state.load_settings_file(path.clone()) {
            let (title, message, details) = map_document_load_error(&*err, path);
            render::print_error(&title, &message, &details);
            process::exit(1);
        }
    }

    if let Err(err) = state.load_catalog_file(cli.file.clone()) {
        let (title, message, details) = map_document_load_error(&*err, &cli.file);
        render::print_error(&title, &message, &details);
        process::exit(1);
    }

    for warning in state.warnings() {
        render::print_warning(&warning);
    }

    for value in &cli.select {
        state.toggle_filter(value);
    }

    // The user's choice beats the settings default for the session
    if let Some(mode) = sort_override {
        state.set_sort_mode(mode);
    }

    let total = state
        .catalog
        .as_ref()
        .map(|catalog| catalog.projects.len())
        .unwrap_or(0);
    let visible = state.visible_projects();

    if let Some(ref path) = state.current_file {
        println!("{} {}\n", "Catalog:".bold(), path.display());
    }
    render::print_filter_panel(&state.categories, &state.selection, language);
    render::print_listing_header(&state.selection, state.sort_mode, visible.len(), total);

    if visible.is_empty() {
        println!("No projects match the active filters.");
        return;
    }

    for project in &visible {
        render::print_project(project, &state.categories, language);
    }
}

/// Validate the raw documents against the built-in JSON Schemas
fn check_documents(cli: &Cli) {
    let mut failed = false;

    failed |= !check_one(&cli.file, &catalog_document_schema(), "catalog");
    if let Some(ref path) = cli.filters {
        failed |= !check_one(path, &filters_document_schema(), "filters");
    }

    if failed {
        process::exit(1);
    }
}

fn check_one(path: &PathBuf, schema: &serde_json::Value, kind: &str) -> bool {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            let (title, message, details) = map_document_load_error(&err, path);
            render::print_error(&title, &message, &details);
            return false;
        }
    };

    let data: serde_json::Value = match serde_json::from_str(&contents) {
        Ok(data) => data,
        Err(err) => {
            let (title, message, details) = map_document_load_error(&err, path);
            render::print_error(&title, &message, &details);
            return false;
        }
    };

    match validate_against_schema(schema, &data) {
        Ok(()) => {
            println!("{}: {} document is valid", path.display(), kind);
            true
        }
        Err(errors) => {
            render::print_error(
                "Schema Validation Failed",
                &format!("{} ({} document)", path.display(), kind),
                &errors.join("\n"),
            );
            false
        }
    }
}
