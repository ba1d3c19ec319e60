use crate::entities::quest::QuestPoi;
use crate::entities::template::{BotAppearance, BotExtras, CreatureTemplate, GameObjectTemplate};
use crate::entities::text::{BroadcastText, NpcText, PageText};
use crate::world::locale::{CreatureLocale, GameObjectLocale, NpcTextLocale, PageTextLocale};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Authoritative in-memory content store. Populated once by an external
/// loader (or a test fixture); the query layer only ever reads it. Every
/// lookup returns `Option` — absence is business logic, not a failure.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ContentStore {
    #[serde(default)]
    creature_templates: HashMap<u32, CreatureTemplate>,
    #[serde(default)]
    game_object_templates: HashMap<u32, GameObjectTemplate>,
    #[serde(default)]
    creature_locales: HashMap<u32, CreatureLocale>,
    #[serde(default)]
    game_object_locales: HashMap<u32, GameObjectLocale>,
    #[serde(default)]
    page_texts: HashMap<u32, PageText>,
    #[serde(default)]
    page_text_locales: HashMap<u32, PageTextLocale>,
    #[serde(default)]
    npc_texts: HashMap<u32, NpcText>,
    #[serde(default)]
    npc_text_locales: HashMap<u32, NpcTextLocale>,
    #[serde(default)]
    broadcast_texts: HashMap<u32, BroadcastText>,
    #[serde(default)]
    quest_pois: HashMap<u32, QuestPoi>,
    #[serde(default)]
    bot_extras: HashMap<u32, BotExtras>,
    #[serde(default)]
    bot_appearances: HashMap<u32, BotAppearance>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml(source: &str) -> Result<Self, String> {
        serde_yaml::from_str(source).map_err(|err| format!("content parse failed: {}", err))
    }

    pub fn insert_creature_template(&mut self, template: CreatureTemplate) {
        self.creature_templates.insert(template.entry, template);
    }

    pub fn insert_game_object_template(&mut self, template: GameObjectTemplate) {
        self.game_object_templates.insert(template.entry, template);
    }

    pub fn insert_creature_locale(&mut self, entry: u32, locale: CreatureLocale) {
        self.creature_locales.insert(entry, locale);
    }

    pub fn insert_game_object_locale(&mut self, entry: u32, locale: GameObjectLocale) {
        self.game_object_locales.insert(entry, locale);
    }

    pub fn insert_page_text(&mut self, page: PageText) {
        self.page_texts.insert(page.id, page);
    }

    pub fn insert_page_text_locale(&mut self, id: u32, locale: PageTextLocale) {
        self.page_text_locales.insert(id, locale);
    }

    pub fn insert_npc_text(&mut self, text: NpcText) {
        self.npc_texts.insert(text.id, text);
    }

    pub fn insert_npc_text_locale(&mut self, id: u32, locale: NpcTextLocale) {
        self.npc_text_locales.insert(id, locale);
    }

    pub fn insert_broadcast_text(&mut self, text: BroadcastText) {
        self.broadcast_texts.insert(text.id, text);
    }

    pub fn insert_quest_poi(&mut self, poi: QuestPoi) {
        self.quest_pois.insert(poi.quest_id, poi);
    }

    pub fn insert_bot_extras(&mut self, entry: u32, extras: BotExtras) {
        self.bot_extras.insert(entry, extras);
    }

    pub fn insert_bot_appearance(&mut self, entry: u32, appearance: BotAppearance) {
        self.bot_appearances.insert(entry, appearance);
    }

    pub fn creature_template(&self, entry: u32) -> Option<&CreatureTemplate> {
        self.creature_templates.get(&entry)
    }

    pub fn game_object_template(&self, entry: u32) -> Option<&GameObjectTemplate> {
        self.game_object_templates.get(&entry)
    }

    pub fn creature_locale(&self, entry: u32) -> Option<&CreatureLocale> {
        self.creature_locales.get(&entry)
    }

    pub fn game_object_locale(&self, entry: u32) -> Option<&GameObjectLocale> {
        self.game_object_locales.get(&entry)
    }

    pub fn page_text(&self, id: u32) -> Option<&PageText> {
        self.page_texts.get(&id)
    }

    pub fn page_text_locale(&self, id: u32) -> Option<&PageTextLocale> {
        self.page_text_locales.get(&id)
    }

    pub fn npc_text(&self, id: u32) -> Option<&NpcText> {
        self.npc_texts.get(&id)
    }

    pub fn npc_text_locale(&self, id: u32) -> Option<&NpcTextLocale> {
        self.npc_text_locales.get(&id)
    }

    pub fn broadcast_text(&self, id: u32) -> Option<&BroadcastText> {
        if id == 0 {
            return None;
        }
        self.broadcast_texts.get(&id)
    }

    pub fn quest_poi(&self, quest_id: u32) -> Option<&QuestPoi> {
        self.quest_pois.get(&quest_id)
    }

    pub fn bot_extras(&self, entry: u32) -> Option<&BotExtras> {
        self.bot_extras.get(&entry)
    }

    pub fn bot_appearance(&self, entry: u32) -> Option<&BotAppearance> {
        self.bot_appearances.get(&entry)
    }
}
