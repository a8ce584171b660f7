use crate::models::{CatalogDocument, FiltersDocument, SettingsDocument};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Load a catalog document (the content store's projects envelope) from a
/// JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CatalogDocument, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let catalog: CatalogDocument = serde_json::from_str(&contents)?;
    Ok(catalog)
}

/// Save a catalog document to a JSON file with pretty printing
pub fn save_catalog<P: AsRef<Path>>(
    catalog: &CatalogDocument,
    path: P,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load filter category metadata from a JSON file
pub fn load_filter_categories<P: AsRef<Path>>(path: P) -> Result<FiltersDocument, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let filters: FiltersDocument = serde_json::from_str(&contents)?;
    Ok(filters)
}

/// Load listing settings (default sort mode) from a JSON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<SettingsDocument, Box<dyn Error>> {
    let contents = fs::read_to_string(path)?;
    let settings: SettingsDocument = serde_json::from_str(&contents)?;
    Ok(settings)
}
