use crate::models::{Project, SortMode};
use regex::Regex;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Sort projects in place under the given mode. The sort is stable: items
/// the comparator considers equal keep their input order, so re-renders of
/// an unchanged catalog never jitter.
pub fn sort_projects(projects: &mut [Project], mode: SortMode) {
    projects.sort_by(|a, b| compare_projects(a, b, mode));
}

/// The composite comparator. An explicit user-chosen mode compares solely by
/// that mode's key; featured/none fall back to the manual-priority chain:
/// sortOrder presence, then ascending sortOrder, then newest dateValue.
pub fn compare_projects(a: &Project, b: &Project, mode: SortMode) -> Ordering {
    match mode {
        SortMode::DateNewest => b.date_value.cmp(&a.date_value),
        SortMode::DateOldest => a.date_value.cmp(&b.date_value),
        SortMode::DifficultyEasy => a.difficulty.rank().cmp(&b.difficulty.rank()),
        SortMode::DifficultyHard => b.difficulty.rank().cmp(&a.difficulty.rank()),
        SortMode::AlphabeticallyAz => compare_titles(a, b),
        SortMode::AlphabeticallyZa => compare_titles(b, a),
        SortMode::Featured | SortMode::None => compare_featured(a, b),
    }
}

fn compare_titles(a: &Project, b: &Project) -> Ordering {
    let a_key = normalize_for_sorting(&a.title);
    let b_key = normalize_for_sorting(&b.title);

    match a_key.cmp(&b_key) {
        // Secondary sort: original title for ties
        Ordering::Equal => a.title.cmp(&b.title),
        other => other,
    }
}

fn compare_featured(a: &Project, b: &Project) -> Ordering {
    match (a.sort_order, b.sort_order) {
        // Manually ranked projects come first, in ascending rank order
        (Some(a_rank), Some(b_rank)) => a_rank.cmp(&b_rank),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        // Neither is ranked: newest first
        (None, None) => b.date_value.cmp(&a.date_value),
    }
}

/// Normalize a title for alphabetical sorting
/// - Strip leading English articles (Czech has none)
/// - Normalize unicode (NFD) and lowercase, so accented letters collate
///   next to their base letter
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);

    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip a leading "the", "a" or "an" so titles sort by their first
/// significant word
pub fn strip_leading_articles(s: &str) -> String {
    let re = Regex::new(r"^(?i)(the|a|an)\s+").unwrap();
    re.replace(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn project(id: &str, date_value: i64, sort_order: Option<i64>) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_string(),
            date_value,
            sort_order,
            ..Project::default()
        }
    }

    fn ids(projects: &[Project]) -> Vec<&str> {
        projects.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn date_modes_order_by_recency() {
        let mut projects = vec![
            project("a", 202401, Some(2)),
            project("b", 202403, Some(1)),
            project("c", 202402, None),
        ];

        sort_projects(&mut projects, SortMode::DateNewest);
        assert_eq!(ids(&projects), vec!["b", "c", "a"]);

        sort_projects(&mut projects, SortMode::DateOldest);
        assert_eq!(ids(&projects), vec!["a", "c", "b"]);
    }

    #[test]
    fn difficulty_modes_order_by_rank() {
        let advanced = Project {
            difficulty: Difficulty::Advanced,
            ..project("a", 202401, None)
        };
        let beginner = Project {
            difficulty: Difficulty::Beginner,
            ..project("b", 202402, None)
        };
        let intermediate = Project {
            difficulty: Difficulty::Intermediate,
            ..project("c", 202403, None)
        };

        let mut projects = vec![advanced.clone(), beginner.clone(), intermediate.clone()];
        sort_projects(&mut projects, SortMode::DifficultyEasy);
        assert_eq!(ids(&projects), vec!["b", "c", "a"]);

        let mut projects = vec![advanced, beginner, intermediate];
        sort_projects(&mut projects, SortMode::DifficultyHard);
        assert_eq!(ids(&projects), vec!["a", "c", "b"]);
    }

    #[test]
    fn alphabetical_ignores_case_accents_and_articles() {
        let mut projects = vec![
            Project { title: "Zahradní model".into(), ..project("z", 0, None) },
            Project { title: "The Battery Organizer".into(), ..project("b", 0, None) },
            Project { title: "árt deco lamp".into(), ..project("a", 0, None) },
        ];

        sort_projects(&mut projects, SortMode::AlphabeticallyAz);
        assert_eq!(ids(&projects), vec!["a", "b", "z"]);

        sort_projects(&mut projects, SortMode::AlphabeticallyZa);
        assert_eq!(ids(&projects), vec!["z", "b", "a"]);
    }

    #[test]
    fn featured_puts_ranked_projects_first() {
        // The unranked project is the newest, but manual ranks still win
        let mut projects = vec![
            project("unranked", 202412, None),
            project("second", 202401, Some(5)),
            project("first", 202301, Some(1)),
        ];

        sort_projects(&mut projects, SortMode::Featured);
        assert_eq!(ids(&projects), vec!["first", "second", "unranked"]);
    }

    #[test]
    fn featured_falls_back_to_recency_among_unranked() {
        let mut projects = vec![
            project("old", 202401, None),
            project("new", 202403, None),
            project("mid", 202402, None),
        ];

        sort_projects(&mut projects, SortMode::None);
        assert_eq!(ids(&projects), vec!["new", "mid", "old"]);
    }

    #[test]
    fn sorting_is_stable_for_equal_keys() {
        let mut projects = vec![
            project("a", 202401, None),
            project("b", 202401, None),
            project("c", 202401, None),
        ];

        sort_projects(&mut projects, SortMode::DateNewest);
        assert_eq!(ids(&projects), vec!["a", "b", "c"]);

        // Re-sorting an already-sorted list must not reorder anything
        sort_projects(&mut projects, SortMode::DateNewest);
        assert_eq!(ids(&projects), vec!["a", "b", "c"]);
    }

    #[test]
    fn normalize_strips_articles_and_accents() {
        assert_eq!(normalize_for_sorting("The  Kite Parts"), "kite parts");
        assert_eq!(strip_leading_articles("An Organizer"), "Organizer");
        // NFD splits the accent off the base letter, so "Š" sorts near "s"
        assert!(normalize_for_sorting("Šablona").starts_with('s'));
    }
}
