use serde::{Deserialize, Serialize};

pub const MAX_CREATURE_QUEST_ITEMS: usize = 6;
pub const MAX_GAMEOBJECT_QUEST_ITEMS: usize = 6;
/// Fixed width of the game object type-specific payload, in 32-bit words.
pub const GAMEOBJECT_DATA_WORDS: usize = 24;

pub const MAX_PLAYER_CLASS: u8 = 11;

/// Static creature description, keyed by entry id. Owned by the content
/// store; queries only ever borrow it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatureTemplate {
    pub entry: u32,
    pub name: String,
    #[serde(default)]
    pub subname: String,
    #[serde(default)]
    pub icon_name: String,
    #[serde(default)]
    pub type_flags: u32,
    #[serde(default)]
    pub creature_type: u32,
    #[serde(default)]
    pub family: u32,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub kill_credit: [u32; 2],
    #[serde(default)]
    pub model_ids: [u32; 4],
    #[serde(default)]
    pub health_mod: f32,
    #[serde(default)]
    pub mana_mod: f32,
    #[serde(default)]
    pub racial_leader: bool,
    #[serde(default)]
    pub movement_id: u32,
    /// Emitted zero-padded to MAX_CREATURE_QUEST_ITEMS slots.
    #[serde(default)]
    pub quest_items: Vec<u32>,
    /// Actor simulated like a player; name queries answer from the template
    /// instead of the character cache.
    #[serde(default)]
    pub npc_bot: bool,
}

/// Static game object description, keyed by entry id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameObjectTemplate {
    pub entry: u32,
    #[serde(default)]
    pub go_type: u32,
    #[serde(default)]
    pub display_id: u32,
    pub name: String,
    #[serde(default)]
    pub icon_name: String,
    #[serde(default)]
    pub cast_bar_caption: String,
    #[serde(default)]
    pub aux_text: String,
    /// Type-specific payload, emitted as exactly GAMEOBJECT_DATA_WORDS words.
    #[serde(default)]
    pub data: Vec<u32>,
    #[serde(default)]
    pub size: f32,
    #[serde(default)]
    pub quest_items: Vec<u32>,
}

/// Combat identity of a simulated-player actor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BotExtras {
    pub race: u8,
    pub class: u8,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BotAppearance {
    pub gender: u8,
}

/// Extended bot classes sit past the last player class and are shown to
/// clients as a stand-in player class.
pub fn bot_display_class(class: u8) -> u8 {
    if (1..=MAX_PLAYER_CLASS).contains(&class) {
        class
    } else {
        match class {
            12 => 1,  // blademaster -> warrior
            13 => 8,  // archmage -> mage
            14 => 11, // spiritwalker -> druid
            _ => 1,
        }
    }
}

pub fn bot_display_race(class: u8, race: u8) -> u8 {
    if (1..=MAX_PLAYER_CLASS).contains(&class) {
        race
    } else {
        match class {
            12 => 2,  // orc
            13 => 10, // blood elf
            14 => 6,  // tauren
            _ => 1,
        }
    }
}
