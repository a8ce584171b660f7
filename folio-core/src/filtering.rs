use crate::models::{FilterCategory, Project, Selection};
use std::collections::HashMap;

/// Partition the selected option values by their owning category.
/// Each value is attributed to the first category (in list order) whose
/// options contain it; values no category owns are dropped.
pub fn group_selection_by_category(
    selection: &Selection,
    categories: &[FilterCategory],
) -> HashMap<String, Vec<String>> {
    let mut grouped: HashMap<String, Vec<String>> = HashMap::new();

    for value in selection.values() {
        let owner = categories
            .iter()
            .find(|category| category.options.iter().any(|opt| &opt.value == value));

        if let Some(category) = owner {
            grouped
                .entry(category.id.clone())
                .or_default()
                .push(value.clone());
        }
    }

    grouped
}

/// Check if a project satisfies the current selection.
/// OR between selected values of the same category, AND across categories.
pub fn matches_selection(
    project: &Project,
    selection: &Selection,
    categories: &[FilterCategory],
) -> bool {
    // No active filtering: everything matches
    if selection.is_empty() {
        return true;
    }

    let grouped = group_selection_by_category(selection, categories);

    for selected_values in grouped.values() {
        let has_match = selected_values
            .iter()
            .any(|value| project.filters.iter().any(|tag| tag == value));

        if !has_match {
            return false;
        }
    }

    true
}

/// Apply the selection to a list of projects, keeping only those that match
pub fn apply_selection(
    projects: &[Project],
    selection: &Selection,
    categories: &[FilterCategory],
) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| matches_selection(project, selection, categories))
        .cloned()
        .collect()
}

/// Check if any filter is active
pub fn has_selection(selection: &Selection) -> bool {
    !selection.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilterOption;

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
            title: id.to_string(),
            filters: filters.iter().map(|f| f.to_string()).collect(),
            ..Project::default()
        }
    }

    fn materials_and_tech() -> Vec<FilterCategory> {
        vec![
            category("material", &["pla", "petg", "resin"]),
            category("technology", &["fdm", "sla"]),
        ]
    }

    #[test]
    fn empty_selection_matches_everything() {
        let categories = materials_and_tech();
        let selection = Selection::new();

        assert!(matches_selection(&project("a", &["pla"]), &selection, &categories));
        assert!(matches_selection(&project("b", &[]), &selection, &categories));
    }

    #[test]
    fn or_within_a_category() {
        let categories = materials_and_tech();
        let selection: Selection = ["pla", "petg"].into_iter().collect();

        // Tagged with only one of the two selected materials: still a match
        assert!(matches_selection(&project("a", &["petg"]), &selection, &categories));
        assert!(!matches_selection(&project("b", &["resin"]), &selection, &categories));
    }

    #[test]
    fn and_across_categories() {
        let categories = materials_and_tech();
        let selection: Selection = ["pla", "fdm"].into_iter().collect();

        assert!(matches_selection(&project("a", &["pla", "fdm"]), &selection, &categories));
        // Matches the material but not the technology
        assert!(!matches_selection(&project("b", &["pla", "sla"]), &selection, &categories));
    }

    #[test]
    fn untagged_project_fails_any_active_selection() {
        let categories = materials_and_tech();
        let selection: Selection = ["pla"].into_iter().collect();

        assert!(!matches_selection(&project("a", &[]), &selection, &categories));
    }

    #[test]
    fn unknown_selected_values_are_ignored() {
        let categories = materials_and_tech();
        let selection: Selection = ["pla", "stale-option"].into_iter().collect();

        assert!(matches_selection(&project("a", &["pla"]), &selection, &categories));

        // A selection made up entirely of stale values constrains nothing
        let stale: Selection = ["gone"].into_iter().collect();
        assert!(matches_selection(&project("b", &[]), &stale, &categories));
    }

    #[test]
    fn duplicate_value_attributed_to_first_category() {
        let categories = vec![
            category("material", &["shared", "pla"]),
            category("technology", &["shared", "fdm"]),
        ];
        let selection: Selection = ["shared"].into_iter().collect();

        let grouped = group_selection_by_category(&selection, &categories);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped.get("material"), Some(&vec!["shared".to_string()]));
    }

    #[test]
    fn apply_selection_keeps_only_matches() {
        let categories = materials_and_tech();
        let projects = vec![
            project("a", &["pla"]),
            project("b", &["petg"]),
            project("c", &["pla", "sla"]),
        ];
        let selection: Selection = ["pla"].into_iter().collect();

        let kept = apply_selection(&projects, &selection, &categories);
        let ids: Vec<&str> = kept.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
