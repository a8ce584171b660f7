use crate::models::{FilterCategory, FilterOption, Language, Project, SpecRow};

/// Resolve a bilingual text field for the given language.
///
/// The Czech side never borrows the English value: a missing or empty Czech
/// translation renders blank rather than leaking English into a Czech page.
/// The English side is returned as-is, even when empty.
pub fn resolve_text<'a>(primary: &'a str, secondary: Option<&'a str>, language: Language) -> &'a str {
    match language {
        Language::En => primary,
        Language::Cs => match secondary {
            Some(text) if !text.is_empty() => text,
            _ => "",
        },
    }
}

/// Resolve a bilingual list field. The Czech list is used wholesale when
/// present and non-empty, otherwise the list renders empty; there is no
/// per-element fallback.
pub fn resolve_list<'a>(
    primary: &'a [String],
    secondary: Option<&'a [String]>,
    language: Language,
) -> &'a [String] {
    match language {
        Language::En => primary,
        Language::Cs => match secondary {
            Some(list) if !list.is_empty() => list,
            _ => &[],
        },
    }
}

impl Project {
    pub fn title(&self, language: Language) -> &str {
        resolve_text(&self.title, self.title_cs.as_deref(), language)
    }

    pub fn description(&self, language: Language) -> &str {
        resolve_text(&self.description, self.description_cs.as_deref(), language)
    }

    pub fn full_description(&self, language: Language) -> &str {
        resolve_text(
            self.full_description.as_deref().unwrap_or(""),
            self.full_description_cs.as_deref(),
            language,
        )
    }

    pub fn award(&self, language: Language) -> &str {
        resolve_text(
            self.award.as_deref().unwrap_or(""),
            self.award_cs.as_deref(),
            language,
        )
    }

    /// Difficulty label; the Czech label is an optional per-project field
    pub fn difficulty_label(&self, language: Language) -> &str {
        resolve_text(self.difficulty.as_str(), self.difficulty_cs.as_deref(), language)
    }

    pub fn software(&self, language: Language) -> &[String] {
        resolve_list(&self.software, self.software_cs.as_deref(), language)
    }
}

impl SpecRow {
    pub fn label(&self, language: Language) -> &str {
        resolve_text(&self.label, self.label_cs.as_deref(), language)
    }

    pub fn value(&self, language: Language) -> &str {
        resolve_text(&self.value, self.value_cs.as_deref(), language)
    }
}

impl FilterCategory {
    pub fn name(&self, language: Language) -> &str {
        resolve_text(&self.name, self.name_cs.as_deref(), language)
    }
}

impl FilterOption {
    pub fn label(&self, language: Language) -> &str {
        resolve_text(&self.label, self.label_cs.as_deref(), language)
    }
}
