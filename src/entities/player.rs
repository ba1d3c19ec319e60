use crate::entities::guid::ObjectGuid;
use crate::entities::quest::MAX_QUEST_LOG_SIZE;
use crate::world::locale::Locale;
use std::collections::HashMap;

/// Fixed-slot active quest log. Slot value zero means empty.
#[derive(Debug, Clone)]
pub struct QuestLog {
    slots: [u32; MAX_QUEST_LOG_SIZE],
}

impl Default for QuestLog {
    fn default() -> Self {
        Self {
            slots: [0; MAX_QUEST_LOG_SIZE],
        }
    }
}

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_slot(&mut self, slot: usize, quest_id: u32) {
        if slot < MAX_QUEST_LOG_SIZE {
            self.slots[slot] = quest_id;
        }
    }

    pub fn accept(&mut self, quest_id: u32) -> bool {
        for slot in self.slots.iter_mut() {
            if *slot == 0 {
                *slot = quest_id;
                return true;
            }
        }
        false
    }

    pub fn find_quest_slot(&self, quest_id: u32) -> Option<usize> {
        self.slots.iter().position(|&slot| slot == quest_id)
    }

    pub fn has_quest(&self, quest_id: u32) -> bool {
        quest_id != 0 && self.find_quest_slot(quest_id).is_some()
    }
}

/// Where a requester's corpse currently lies. Transient; owned by session
/// state, never by the query layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorpseLocation {
    pub map_id: u32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Per-requester view the query layer needs: locale, current whereabouts,
/// quest log and corpse record.
#[derive(Debug, Clone, Default)]
pub struct PlayerSession {
    pub locale: Locale,
    pub map_id: u32,
    pub phase_mask: u32,
    pub quest_log: QuestLog,
    pub corpse: Option<CorpseLocation>,
}

#[derive(Debug, Clone, Copy)]
pub struct LivePlayer {
    pub race: u8,
}

/// Live-actor directory: stable identifier to currently-connected actor.
#[derive(Debug, Default)]
pub struct PlayerDirectory {
    players: HashMap<ObjectGuid, LivePlayer>,
}

impl PlayerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self, guid: ObjectGuid, player: LivePlayer) {
        self.players.insert(guid, player);
    }

    pub fn disconnect(&mut self, guid: ObjectGuid) {
        self.players.remove(&guid);
    }

    pub fn find(&self, guid: ObjectGuid) -> Option<&LivePlayer> {
        self.players.get(&guid)
    }

    /// Live race beats the cached race when the actor is connected.
    pub fn connected_race(&self, guid: ObjectGuid) -> Option<u8> {
        self.players.get(&guid).map(|player| player.race)
    }
}
