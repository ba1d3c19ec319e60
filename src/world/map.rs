use crate::entities::player::CorpseLocation;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ceiling passed to terrain sampling when searching down for ground.
pub const MAX_HEIGHT: f32 = 100_000.0;

/// Static partition metadata. Instanced partitions may name an entrance
/// partition with fixed entrance coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapEntry {
    pub id: u32,
    #[serde(default)]
    pub instanced: bool,
    #[serde(default)]
    pub entrance_map: Option<u32>,
    #[serde(default)]
    pub entrance_x: f32,
    #[serde(default)]
    pub entrance_y: f32,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MapIndex {
    #[serde(default)]
    entries: HashMap<u32, MapEntry>,
}

impl MapIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: MapEntry) {
        self.entries.insert(entry.id, entry);
    }

    pub fn entry(&self, map_id: u32) -> Option<&MapEntry> {
        self.entries.get(&map_id)
    }
}

/// Synchronous terrain height lookup, provided by the world service.
pub trait TerrainSampler {
    fn height_at(&self, map_id: u32, phase_mask: u32, x: f32, y: f32, ceiling: f32) -> f32;
}

/// Display location for a corpse as seen by a requester on `current_map`.
///
/// A corpse in a different, instanced partition with entrance metadata is
/// shown at the entrance, with the height sampled there; otherwise the stored
/// coordinates pass through untouched. Returns (map, x, y, z).
pub fn corpse_display_location(
    corpse: CorpseLocation,
    current_map: u32,
    phase_mask: u32,
    maps: &MapIndex,
    terrain: &dyn TerrainSampler,
) -> (u32, f32, f32, f32) {
    if corpse.map_id == current_map {
        return (corpse.map_id, corpse.x, corpse.y, corpse.z);
    }
    if let Some(entry) = maps.entry(corpse.map_id) {
        if entry.instanced {
            if let Some(entrance_map) = entry.entrance_map {
                let x = entry.entrance_x;
                let y = entry.entrance_y;
                let z = terrain.height_at(entrance_map, phase_mask, x, y, MAX_HEIGHT);
                return (entrance_map, x, y, z);
            }
        }
    }
    (corpse.map_id, corpse.x, corpse.y, corpse.z)
}
