use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::text::normalize;

/// Fixed top-level grouping a card belongs to.
///
/// The two vocabulary decks are distinct variants even though their
/// display names are a translation pair: the Portuguese deck teaches
/// European-Portuguese words to visitors, the English deck teaches
/// English phrases to locals, and their card sets never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    Monuments,
    Nature,
    Gastronomy,
    Popular,
    Churches,
    Museums,
    Sintra,
    VocabularyPt,
    VocabularyEn,
}

/// Alias table keyed by normalized spellings. Built once; covers the
/// English/Portuguese name pairs plus spelling variants that have
/// accumulated in content and deep links over time.
static ALIASES: Lazy<HashMap<String, Category>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for (alias, category) in [
        ("Monuments", Category::Monuments),
        ("Monumentos", Category::Monuments),
        ("Nature", Category::Nature),
        ("Natureza", Category::Nature),
        ("Gastronomy", Category::Gastronomy),
        ("Gastronomia", Category::Gastronomy),
        ("Popular", Category::Popular),
        ("Churches", Category::Churches),
        ("Igrejas", Category::Churches),
        ("Museums", Category::Museums),
        ("Museus", Category::Museums),
        ("Sintra", Category::Sintra),
        // The vocabulary decks must never collapse into one entry;
        // their normalized names ("vocabulario" / "vocabulary") stay
        // distinct keys by construction.
        ("Vocabulário", Category::VocabularyPt),
        ("Vocabulary", Category::VocabularyEn),
    ] {
        table.insert(normalize(alias), category);
    }
    table
});

impl Category {
    /// Declaration order; the catalog builder assigns global card ids
    /// by walking decks in this order.
    pub const ALL: [Category; 9] = [
        Category::Monuments,
        Category::Nature,
        Category::Gastronomy,
        Category::Popular,
        Category::Churches,
        Category::Museums,
        Category::Sintra,
        Category::VocabularyPt,
        Category::VocabularyEn,
    ];

    /// The single canonical spelling stored with every card.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Category::Monuments => "Monuments",
            Category::Nature => "Nature",
            Category::Gastronomy => "Gastronomy",
            Category::Popular => "Popular",
            Category::Churches => "Churches",
            Category::Museums => "Museums",
            Category::Sintra => "Sintra",
            Category::VocabularyPt => "Vocabulário",
            Category::VocabularyEn => "Vocabulary",
        }
    }

    /// Resolves a category name in either language, any casing, with
    /// or without diacritics. Unknown names resolve to `None`.
    pub fn from_alias(name: &str) -> Option<Category> {
        ALIASES.get(normalize(name).as_str()).copied()
    }

    /// Vocabulary cards have no physical site to show on a map.
    pub fn shows_map(&self) -> bool {
        !matches!(self, Category::VocabularyPt | Category::VocabularyEn)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_name())
    }
}
