use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Display language for bilingual fields. English is the primary locale,
/// Czech the secondary one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Cs,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "cs" => Ok(Language::Cs),
            other => Err(format!("Unknown language '{}', expected 'en' or 'cs'", other)),
        }
    }
}

/// Project difficulty level, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Numeric rank used by the difficulty sort modes (Beginner=1 .. Advanced=3)
    pub fn rank(&self) -> u8 {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Beginner
    }
}

/// Active ordering strategy for the listing. Exactly one mode is active at a
/// time; `Featured` and `None` both fall back to the manual-priority chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    Featured,
    DateNewest,
    DateOldest,
    DifficultyEasy,
    DifficultyHard,
    AlphabeticallyAz,
    AlphabeticallyZa,
    None,
}

impl SortMode {
    /// Whether the user picked a concrete comparator, as opposed to the
    /// featured/none fallback chain
    pub fn is_explicit(&self) -> bool {
        !matches!(self, SortMode::Featured | SortMode::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Featured => "featured",
            SortMode::DateNewest => "date-newest",
            SortMode::DateOldest => "date-oldest",
            SortMode::DifficultyEasy => "difficulty-easy",
            SortMode::DifficultyHard => "difficulty-hard",
            SortMode::AlphabeticallyAz => "alphabetically-az",
            SortMode::AlphabeticallyZa => "alphabetically-za",
            SortMode::None => "none",
        }
    }
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::None
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortMode::Featured),
            "date-newest" => Ok(SortMode::DateNewest),
            "date-oldest" => Ok(SortMode::DateOldest),
            "difficulty-easy" => Ok(SortMode::DifficultyEasy),
            "difficulty-hard" => Ok(SortMode::DifficultyHard),
            "alphabetically-az" => Ok(SortMode::AlphabeticallyAz),
            "alphabetically-za" => Ok(SortMode::AlphabeticallyZa),
            "none" => Ok(SortMode::None),
            other => Err(format!("Unknown sort mode '{}'", other)),
        }
    }
}

/// One label/value row in a project's spec table, bilingual on both sides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SpecRow {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub label_cs: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub value_cs: Option<String>,
}

/// External reference attached to a project (model source, article, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    pub url: String,
}

/// A catalog item. Bilingual fields carry the English value plus an optional
/// Czech counterpart; the Czech side renders blank when missing rather than
/// falling back to English.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub title_cs: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_cs: Option<String>,
    #[serde(default)]
    pub full_description: Option<String>,
    #[serde(default)]
    pub full_description_cs: Option<String>,
    /// Human-readable date label, e.g. "March 2024"
    #[serde(default)]
    pub date: String,
    /// Numeric recency key in YYYYMM form, used for date sorting
    #[serde(default)]
    pub date_value: i64,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub difficulty_cs: Option<String>,
    /// Filter-option values this project is tagged with
    #[serde(default)]
    pub filters: Vec<String>,
    /// Manual priority rank; projects carrying one sort before the rest
    /// under the featured ordering
    #[serde(default)]
    pub sort_order: Option<i64>,
    #[serde(default)]
    pub award: Option<String>,
    #[serde(default)]
    pub award_cs: Option<String>,
    #[serde(default)]
    pub software: Vec<String>,
    #[serde(default)]
    pub software_cs: Option<Vec<String>>,
    #[serde(default)]
    pub specs: Vec<SpecRow>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub thumbnail_index: Option<usize>,
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One selectable tag value within a filter category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOption {
    pub value: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub label_cs: Option<String>,
}

/// A named grouping of mutually-related filter options (e.g. "Material").
/// Category order matters: an option value appearing in more than one
/// category is attributed to the first category that lists it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCategory {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub name_cs: Option<String>,
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

/// The user's currently active set of chosen filter-option values.
/// Unordered, no duplicates; owned by the listing session, never persisted.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the value if absent, remove it if present
    pub fn toggle(&mut self, value: &str) {
        if let Some(pos) = self.values.iter().position(|v| v == value) {
            self.values.remove(pos);
        } else {
            self.values.push(value.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for value in iter {
            let value = value.into();
            if !selection.contains(&value) {
                selection.values.push(value);
            }
        }
        selection
    }
}

/// Server-provided listing defaults, applied once at session start
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub web_default_sort_order: Option<SortMode>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Wire envelope of the content store's projects response
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogDocument {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Wire envelope of the content store's filters response
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FiltersDocument {
    #[serde(default)]
    pub filters: Vec<FilterCategory>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Wire envelope of the content store's settings response
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SettingsDocument {
    #[serde(default)]
    pub settings: Settings,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}
