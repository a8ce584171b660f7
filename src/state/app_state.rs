use std::path::PathBuf;

use folio_core::{
    catalog_warnings, filtered_and_sorted, load_catalog, load_filter_categories, load_settings,
    validate_catalog, CatalogDocument, FilterCategory, Project, Selection, SortMode,
};

/// Listing session state - domain state only.
///
/// The filter/sort/resolve pipeline itself stays pure; this struct owns the
/// mutable pieces (selection, sort mode, loaded documents) and hands
/// snapshots to the pure functions.
#[derive(Debug, Default)]
pub struct AppState {
    /// Last successfully loaded catalog
    pub catalog: Option<CatalogDocument>,
    /// Filter category metadata
    pub categories: Vec<FilterCategory>,
    /// Path of the current catalog file
    pub current_file: Option<PathBuf>,
    /// Active filter selection
    pub selection: Selection,
    /// Active sort mode
    pub sort_mode: SortMode,
    /// Sequence number handed to the most recently started refresh
    refresh_seq: u64,
    /// Sequence number of the most recently applied refresh
    applied_seq: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog file, validating hard invariants before accepting it.
    /// On failure the previously loaded catalog is left untouched.
    pub fn load_catalog_file(&mut self, path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let catalog = load_catalog(&path)?;

        validate_catalog(&catalog, &self.categories)
            .map_err(|errors| format!("Validation failed:\n{}", errors.join("\n")))?;

        self.catalog = Some(catalog);
        self.current_file = Some(path);

        Ok(())
    }

    /// Load filter category metadata
    pub fn load_filters_file(&mut self, path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let document = load_filter_categories(&path)?;
        self.categories = document.filters;
        Ok(())
    }

    /// Load listing settings and apply the default sort mode. Called once at
    /// session start; later `set_sort_mode` calls override the default.
    pub fn load_settings_file(&mut self, path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
        let document = load_settings(&path)?;
        if let Some(default_mode) = document.settings.web_default_sort_order {
            self.sort_mode = default_mode;
        }
        Ok(())
    }

    /// Toggle one filter option value in the active selection
    pub fn toggle_filter(&mut self, value: &str) {
        self.selection.toggle(value);
    }

    /// Drop every active filter
    #[allow(dead_code)]
    pub fn clear_filters(&mut self) {
        self.selection.clear();
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    /// The projects the listing should display, filtered and ordered
    pub fn visible_projects(&self) -> Vec<Project> {
        match self.catalog {
            Some(ref catalog) => filtered_and_sorted(
                &catalog.projects,
                &self.selection,
                self.sort_mode,
                &self.categories,
            ),
            None => Vec::new(),
        }
    }

    /// Soft-invariant warnings for the loaded documents
    pub fn warnings(&self) -> Vec<String> {
        match self.catalog {
            Some(ref catalog) => catalog_warnings(catalog, &self.categories),
            None => Vec::new(),
        }
    }

    /// Start a catalog refresh, returning its sequence number
    #[allow(dead_code)]
    pub fn begin_refresh(&mut self) -> u64 {
        self.refresh_seq += 1;
        self.refresh_seq
    }

    /// Apply a completed refresh. Completions are applied monotonically: a
    /// fetch that started before the most recently applied one is dropped,
    /// so overlapping refreshes can never roll the catalog back.
    #[allow(dead_code)]
    pub fn complete_refresh(&mut self, seq: u64, catalog: CatalogDocument) -> bool {
        if seq <= self.applied_seq {
            return false;
        }

        self.applied_seq = seq;
        self.catalog = Some(catalog);
        true
    }
}
