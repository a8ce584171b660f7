use crate::models::{CatalogDocument, FilterCategory};
use std::collections::HashSet;

/// Validate hard catalog invariants.
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_catalog(
    catalog: &CatalogDocument,
    categories: &[FilterCategory],
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_categories(categories, &mut errors);
    validate_projects(catalog, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_categories(categories: &[FilterCategory], errors: &mut Vec<String>) {
    let mut category_ids = HashSet::new();

    for category in categories {
        if category.id.trim().is_empty() {
            errors.push("Filter category id cannot be empty".to_string());
        }

        if !category_ids.insert(&category.id) {
            errors.push(format!("Duplicate filter category id: '{}'", category.id));
        }

        // Option values must be unique within their category
        let mut seen = HashSet::new();
        for option in &category.options {
            if option.value.trim().is_empty() {
                errors.push(format!("Category '{}' contains an empty option value", category.id));
            }
            if !seen.insert(&option.value) {
                errors.push(format!(
                    "Category '{}' has duplicate option value: '{}'",
                    category.id, option.value
                ));
            }
        }
    }
}

fn validate_projects(catalog: &CatalogDocument, errors: &mut Vec<String>) {
    let mut project_ids = HashSet::new();

    for (idx, project) in catalog.projects.iter().enumerate() {
        let project_ref = format!("Project #{} ('{}')", idx + 1, project.id);

        if project.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", project_ref));
        }

        if !project_ids.insert(&project.id) {
            errors.push(format!("{}: duplicate project id", project_ref));
        }

        if project.title.trim().is_empty() {
            errors.push(format!("{}: title cannot be empty", project_ref));
        }

        if let Some(thumbnail) = project.thumbnail_index {
            if thumbnail >= project.images.len() {
                errors.push(format!(
                    "{}: thumbnailIndex {} is out of range for {} image(s)",
                    project_ref,
                    thumbnail,
                    project.images.len()
                ));
            }
        }
    }
}

/// Report soft invariants the matcher tolerates at runtime: stale filter
/// tags and option values shared between categories (which the matcher
/// attributes to the first category in list order).
pub fn catalog_warnings(catalog: &CatalogDocument, categories: &[FilterCategory]) -> Vec<String> {
    let mut warnings = Vec::new();

    let mut known_values = HashSet::new();
    for category in categories {
        for option in &category.options {
            if !known_values.insert(option.value.clone()) {
                warnings.push(format!(
                    "Option value '{}' appears in more than one category; \
                     it is attributed to the first category listing it",
                    option.value
                ));
            }
        }
    }

    for project in &catalog.projects {
        for tag in &project.filters {
            if !known_values.contains(tag) {
                warnings.push(format!(
                    "Project '{}' is tagged with unknown filter value '{}' \
                     (it will never match a selection of it)",
                    project.id, tag
                ));
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FilterOption, Project};

    fn option(value: &str) -> FilterOption {
        FilterOption {
            value: value.to_string(),
            label: value.to_string(),
            label_cs: None,
        }
    }

    fn category(id: &str, values: &[&str]) -> FilterCategory {
        FilterCategory {
            id: id.to_string(),
            name: id.to_string(),
            name_cs: None,
            options: values.iter().map(|v| option(v)).collect(),
        }
    }

    fn project(id: &str, filters: &[&str]) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Title {}", id),
            filters: filters.iter().map(|f| f.to_string()).collect(),
            ..Project::default()
        }
    }

    #[test]
    fn valid_catalog_passes() {
        let catalog = CatalogDocument {
            projects: vec![project("a", &["pla"]), project("b", &[])],
            ..CatalogDocument::default()
        };
        let categories = vec![category("material", &["pla", "petg"])];

        assert!(validate_catalog(&catalog, &categories).is_ok());
        assert!(catalog_warnings(&catalog, &categories).is_empty());
    }

    #[test]
    fn duplicate_ids_are_errors() {
        let catalog = CatalogDocument {
            projects: vec![project("a", &[]), project("a", &[])],
            ..CatalogDocument::default()
        };
        let categories = vec![
            category("material", &["pla", "pla"]),
            category("material", &[]),
        ];

        let errors = validate_catalog(&catalog, &categories).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("duplicate project id")));
        assert!(errors.iter().any(|e| e.contains("duplicate option value")));
        assert!(errors.iter().any(|e| e.contains("Duplicate filter category id")));
    }

    #[test]
    fn empty_title_is_an_error() {
        let mut bad = project("a", &[]);
        bad.title = "  ".into();
        let catalog = CatalogDocument {
            projects: vec![bad],
            ..CatalogDocument::default()
        };

        let errors = validate_catalog(&catalog, &[]).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("title cannot be empty")));
    }

    #[test]
    fn thumbnail_out_of_range_is_an_error() {
        let mut bad = project("a", &[]);
        bad.images = vec!["one.png".into()];
        bad.thumbnail_index = Some(3);
        let catalog = CatalogDocument {
            projects: vec![bad],
            ..CatalogDocument::default()
        };

        let errors = validate_catalog(&catalog, &[]).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("thumbnailIndex 3 is out of range")));
    }

    #[test]
    fn stale_tags_and_shared_values_are_warnings_only() {
        let catalog = CatalogDocument {
            projects: vec![project("a", &["gone"])],
            ..CatalogDocument::default()
        };
        let categories = vec![
            category("material", &["shared"]),
            category("technology", &["shared"]),
        ];

        assert!(validate_catalog(&catalog, &categories).is_ok());

        let warnings = catalog_warnings(&catalog, &categories);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().any(|w| w.contains("more than one category")));
        assert!(warnings.iter().any(|w| w.contains("unknown filter value 'gone'")));
    }
}
