use crate::world::locale::Locale;
use serde::{Deserialize, Serialize};

pub const MAX_NPC_TEXT_OPTIONS: usize = 8;
pub const MAX_NPC_TEXT_EMOTES: usize = 3;

/// Greeting emitted for every slot when a text id has no stored record.
pub const DEFAULT_GREETING: &str = "Greetings $N";
/// Terminal text emitted when a page chain references a missing page.
pub const MISSING_PAGE_TEXT: &str = "Item page missing.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

pub const GENDER_MALE: u8 = 0;

/// One node of a book/sign text chain. `next_page` of zero ends the chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageText {
    pub id: u32,
    pub text: String,
    #[serde(default)]
    pub next_page: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEmote {
    pub delay: u32,
    pub emote: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcTextOption {
    #[serde(default)]
    pub probability: f32,
    #[serde(default)]
    pub text_male: String,
    #[serde(default)]
    pub text_female: String,
    #[serde(default)]
    pub language: u32,
    /// Non-zero id routes both gendered texts through the broadcast record,
    /// bypassing the npc text locale table.
    #[serde(default)]
    pub broadcast_text_id: u32,
    #[serde(default)]
    pub emotes: [TextEmote; MAX_NPC_TEXT_EMOTES],
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcText {
    pub id: u32,
    #[serde(default)]
    pub options: [NpcTextOption; MAX_NPC_TEXT_OPTIONS],
}

/// Gendered, locale-indexed text record. Unlike override tables, the vectors
/// here include the base language at position zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BroadcastText {
    pub id: u32,
    #[serde(default)]
    pub male_text: Vec<String>,
    #[serde(default)]
    pub female_text: Vec<String>,
}

impl BroadcastText {
    pub fn text(&self, locale: Locale, gender: Gender) -> &str {
        let table = if gender == Gender::Female && self.female_text.iter().any(|t| !t.is_empty()) {
            &self.female_text
        } else {
            &self.male_text
        };
        let index = usize::from(locale.0);
        match table.get(index) {
            Some(value) if !value.is_empty() => value,
            _ => table.first().map(String::as_str).unwrap_or(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn broadcast() -> BroadcastText {
        BroadcastText {
            id: 1,
            male_text: vec!["Hail".to_string(), "Heil".to_string()],
            female_text: vec!["Hail, sister".to_string()],
        }
    }

    #[test]
    fn gendered_selection() {
        let bct = broadcast();
        assert_eq!(bct.text(Locale::DEFAULT, Gender::Male), "Hail");
        assert_eq!(bct.text(Locale::DEFAULT, Gender::Female), "Hail, sister");
    }

    #[test]
    fn locale_falls_back_to_base() {
        let bct = broadcast();
        assert_eq!(bct.text(Locale(1), Gender::Male), "Heil");
        // female table has no locale 1 entry
        assert_eq!(bct.text(Locale(1), Gender::Female), "Hail, sister");
        assert_eq!(bct.text(Locale(5), Gender::Male), "Hail");
    }

    #[test]
    fn empty_female_table_uses_male() {
        let bct = BroadcastText {
            id: 2,
            male_text: vec!["Well met".to_string()],
            female_text: Vec::new(),
        };
        assert_eq!(bct.text(Locale::DEFAULT, Gender::Female), "Well met");
    }
}
