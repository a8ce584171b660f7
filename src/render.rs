use colored::Colorize;
use folio_core::{FilterCategory, Language, Project, Selection, SortMode};

/// Print the filter panel: every category with its options, marking the
/// ones the active selection contains
pub fn print_filter_panel(categories: &[FilterCategory], selection: &Selection, language: Language) {
    if categories.is_empty() {
        return;
    }

    println!("{}", "Filters".bold());

    for category in categories {
        println!("  {}", category.name(language).cyan());

        for option in &category.options {
            let marker = if selection.contains(&option.value) {
                "[x]".green().to_string()
            } else {
                "[ ]".dimmed().to_string()
            };
            println!("    {} {} ({})", marker, option.label(language), option.value.as_str().dimmed());
        }
    }

    println!();
}

/// Print the listing header: active selection, sort mode and match count
pub fn print_listing_header(
    selection: &Selection,
    mode: SortMode,
    matching: usize,
    total: usize,
) {
    if !selection.is_empty() {
        println!(
            "{} {}",
            "Active filters:".bold(),
            selection.values().join(", ")
        );
    }
    println!("{} {}", "Sorted by:".bold(), mode);
    println!("{} {} of {}\n", "Matching projects:".bold(), matching, total);
}

/// Print one project card with every bilingual field resolved for the
/// active language
pub fn print_project(project: &Project, categories: &[FilterCategory], language: Language) {
    println!("{}", project.title(language).bold());

    let mut meta = vec![project.date.clone(), project.difficulty_label(language).to_string()];
    if let Some(rank) = project.sort_order {
        meta.push(format!("featured #{}", rank));
    }
    println!("  {}", meta.join(" • ").dimmed());

    let award = project.award(language);
    if !award.is_empty() {
        println!("  {} {}", "Award:".yellow(), award);
    }

    let description = project.description(language);
    if !description.is_empty() {
        println!("  {}", description);
    }

    let software = project.software(language);
    if !software.is_empty() {
        println!("  {} {}", "Software:".cyan(), software.join(", "));
    }

    for row in &project.specs {
        let label = row.label(language);
        let value = row.value(language);
        if !label.is_empty() || !value.is_empty() {
            println!("  • {}: {}", label, value);
        }
    }

    let tags = tag_labels(project, categories, language);
    if !tags.is_empty() {
        println!("  {} {}", "Tags:".cyan(), tags.join(", "));
    }

    for reference in &project.references {
        println!("  {} {} <{}>", "Ref:".dimmed(), reference.name, reference.url);
    }

    println!();
}

/// Resolve a project's filter tags to their localized option labels.
/// A tag owned by more than one category takes the label of the first
/// category listing it; unknown tags fall back to the raw value.
fn tag_labels(project: &Project, categories: &[FilterCategory], language: Language) -> Vec<String> {
    project
        .filters
        .iter()
        .map(|tag| {
            categories
                .iter()
                .find_map(|category| {
                    category
                        .options
                        .iter()
                        .find(|opt| &opt.value == tag)
                        .map(|opt| opt.label(language).to_string())
                })
                .unwrap_or_else(|| tag.clone())
        })
        .collect()
}

/// Print a warning line
pub fn print_warning(warning: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), warning);
}

/// Print a mapped error triple
pub fn print_error(title: &str, message: &str, details: &str) {
    eprintln!("{} {}", title.red().bold(), message);
    if !details.is_empty() {
        eprintln!("{}", details);
    }
}
