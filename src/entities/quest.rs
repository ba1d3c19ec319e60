use serde::{Deserialize, Serialize};

/// Quest log slot count; also the wholesale-reject bound for POI requests.
pub const MAX_QUEST_LOG_SIZE: usize = 25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestPoiPoint {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestPoiGroup {
    pub id: u32,
    #[serde(default)]
    pub objective_index: i32,
    #[serde(default)]
    pub map_id: u32,
    #[serde(default)]
    pub area_id: u32,
    #[serde(default)]
    pub floor_id: u32,
    #[serde(default)]
    pub unk3: u32,
    #[serde(default)]
    pub unk4: u32,
    #[serde(default)]
    pub points: Vec<QuestPoiPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestPoi {
    pub quest_id: u32,
    #[serde(default)]
    pub groups: Vec<QuestPoiGroup>,
}
