pub mod config;
pub mod entities;
pub mod net;
pub mod telemetry;
pub mod world;

pub use config::QueryLimits;
pub use entities::guid::{GuidKind, ObjectGuid};
pub use entities::player::{CorpseLocation, LivePlayer, PlayerDirectory, PlayerSession, QuestLog};
pub use net::packet::{PacketReader, PacketWriter};
pub use net::query::{
    corpse_map_position_response, corpse_response, creature_response, game_object_response,
    handle_corpse_map_position_query, handle_corpse_query, handle_creature_query,
    handle_game_object_query, handle_name_query, handle_npc_text_query, handle_page_text_query,
    handle_quest_poi_query, handle_time_query, name_response, npc_text_response,
    page_text_responses, quest_poi_response, time_response, QueryContext, Reply,
};
pub use world::clock::WorldClock;
pub use world::content::ContentStore;
pub use world::locale::Locale;
pub use world::map::{MapEntry, MapIndex, TerrainSampler};
pub use world::names::{CharacterInfo, NameCache};
