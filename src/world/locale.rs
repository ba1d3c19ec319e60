use serde::{Deserialize, Serialize};

/// Session locale index. Zero is the base language; override tables store
/// their variants from locale 1 upward, at vector position `index - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Locale(pub u8);

impl Locale {
    pub const DEFAULT: Locale = Locale(0);

    pub fn is_default(self) -> bool {
        self.0 == 0
    }

    fn table_index(self) -> Option<usize> {
        if self.is_default() {
            None
        } else {
            Some(usize::from(self.0) - 1)
        }
    }
}

/// Locale-indexed string variants for one field of one resource.
pub type LocaleStrings = Vec<String>;

/// Fallback order: default locale, missing table, short vector, or empty
/// variant all resolve to the base string.
pub fn resolve<'a>(base: &'a str, table: Option<&'a LocaleStrings>, locale: Locale) -> &'a str {
    let Some(index) = locale.table_index() else {
        return base;
    };
    match table.and_then(|table| table.get(index)) {
        Some(value) if !value.is_empty() => value,
        _ => base,
    }
}

/// Gendered cross-fill: an empty variant borrows the other gender's text.
pub fn cross_fill<'a>(male: &'a str, female: &'a str) -> (&'a str, &'a str) {
    let first = if male.is_empty() { female } else { male };
    let second = if female.is_empty() { male } else { female };
    (first, second)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatureLocale {
    #[serde(default)]
    pub name: LocaleStrings,
    #[serde(default)]
    pub subname: LocaleStrings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameObjectLocale {
    #[serde(default)]
    pub name: LocaleStrings,
    #[serde(default)]
    pub cast_bar_caption: LocaleStrings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageTextLocale {
    #[serde(default)]
    pub text: LocaleStrings,
}

/// Per-option override tables for one npc text record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcTextLocale {
    #[serde(default)]
    pub text_male: [LocaleStrings; crate::entities::text::MAX_NPC_TEXT_OPTIONS],
    #[serde(default)]
    pub text_female: [LocaleStrings; crate::entities::text::MAX_NPC_TEXT_OPTIONS],
}
