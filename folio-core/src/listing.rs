use crate::filtering::apply_selection;
use crate::models::{FilterCategory, Project, Selection, SortMode};
use crate::sorting::sort_projects;

/// The composed listing pipeline: filter by the active selection, then
/// stable-sort under the active mode. Pure; the caller owns all state.
pub fn filtered_and_sorted(
    projects: &[Project],
    selection: &Selection,
    mode: SortMode,
    categories: &[FilterCategory],
) -> Vec<Project> {
    let mut visible = apply_selection(projects, selection, categories);
    sort_projects(&mut visible, mode);
    visible
}
