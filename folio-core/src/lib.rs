// Public modules
pub mod filtering;
pub mod io;
pub mod listing;
pub mod localize;
pub mod models;
pub mod schema;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use filtering::{apply_selection, group_selection_by_category, has_selection, matches_selection};
pub use io::{load_catalog, load_filter_categories, load_settings, save_catalog};
pub use listing::filtered_and_sorted;
pub use localize::{resolve_list, resolve_text};
pub use models::{
    CatalogDocument, Difficulty, FilterCategory, FilterOption, FiltersDocument, Language, Project,
    Reference, Selection, Settings, SettingsDocument, SortMode, SpecRow,
};
pub use schema::{catalog_document_schema, filters_document_schema, validate_against_schema};
pub use sorting::{compare_projects, normalize_for_sorting, sort_projects, strip_leading_articles};
pub use validation::{catalog_warnings, validate_catalog};
