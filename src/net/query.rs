use crate::config::QueryLimits;
use crate::entities::guid::ObjectGuid;
use crate::entities::player::{PlayerDirectory, PlayerSession};
use crate::entities::template::{
    bot_display_class, bot_display_race, MAX_CREATURE_QUEST_ITEMS, GAMEOBJECT_DATA_WORDS,
    MAX_GAMEOBJECT_QUEST_ITEMS,
};
use crate::entities::text::{
    Gender, DEFAULT_GREETING, GENDER_MALE, MAX_NPC_TEXT_OPTIONS, MISSING_PAGE_TEXT,
};
use crate::net::packet::{PacketReader, PacketWriter};
use crate::telemetry::logging;
use crate::world::clock::{self, WorldClock};
use crate::world::content::ContentStore;
use crate::world::locale::{self, Locale};
use crate::world::map::{corpse_display_location, MapIndex, TerrainSampler};
use crate::world::names::NameCache;
use std::collections::BTreeSet;

pub const OPCODE_NAME_QUERY: u16 = 0x0050;
pub const OPCODE_NAME_QUERY_RESPONSE: u16 = 0x0051;
pub const OPCODE_PAGE_TEXT_QUERY: u16 = 0x005a;
pub const OPCODE_PAGE_TEXT_RESPONSE: u16 = 0x005b;
pub const OPCODE_GAME_OBJECT_QUERY: u16 = 0x005e;
pub const OPCODE_GAME_OBJECT_RESPONSE: u16 = 0x005f;
pub const OPCODE_CREATURE_QUERY: u16 = 0x0060;
pub const OPCODE_CREATURE_RESPONSE: u16 = 0x0061;
pub const OPCODE_NPC_TEXT_QUERY: u16 = 0x017f;
pub const OPCODE_NPC_TEXT_UPDATE: u16 = 0x0180;
pub const OPCODE_QUERY_TIME: u16 = 0x01ce;
pub const OPCODE_QUERY_TIME_RESPONSE: u16 = 0x01cf;
pub const OPCODE_QUEST_POI_QUERY: u16 = 0x01e3;
pub const OPCODE_QUEST_POI_RESPONSE: u16 = 0x01e4;
pub const OPCODE_CORPSE_QUERY: u16 = 0x0216;
pub const OPCODE_CORPSE_MAP_POSITION_QUERY: u16 = 0x04b0;
pub const OPCODE_CORPSE_MAP_POSITION_RESPONSE: u16 = 0x04b1;

/// "Unknown entry" sentinel: the queried entry echoed with its high bit set,
/// no further fields. Compatibility requires this exact shape.
pub const ENTRY_UNKNOWN_BIT: u32 = 0x8000_0000;

/// Zero words an npc text option slot carries after its two texts:
/// language plus three delay/emote pairs.
const NPC_TEXT_TRAILER_WORDS: usize = 7;

/// One logical reply: the body is the byte-exact wire shape, the opcode is
/// for the external dispatch layer that frames and sends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub opcode: u16,
    pub body: Vec<u8>,
}

impl Reply {
    fn new(opcode: u16, writer: PacketWriter) -> Self {
        Self {
            opcode,
            body: writer.into_vec(),
        }
    }
}

/// Shared read-only handles a query runs against. No ambient globals; the
/// dispatch layer owns one of these and lends it per request.
pub struct QueryContext<'a> {
    pub content: &'a ContentStore,
    pub maps: &'a MapIndex,
    pub terrain: &'a dyn TerrainSampler,
    pub players: &'a PlayerDirectory,
    pub clock: &'a WorldClock,
    pub limits: QueryLimits,
}

pub fn handle_name_query(
    ctx: &QueryContext<'_>,
    names: &mut NameCache,
    session: &PlayerSession,
    payload: &[u8],
) -> Option<Reply> {
    let mut reader = PacketReader::new(payload);
    let guid = reader.read_guid()?;
    Some(name_response(ctx, names, session.locale, guid))
}

pub fn name_response(
    ctx: &QueryContext<'_>,
    names: &mut NameCache,
    locale: Locale,
    guid: ObjectGuid,
) -> Reply {
    if guid.is_creature() {
        if let Some(reply) = bot_name_response(ctx.content, locale, guid) {
            return reply;
        }
    }

    let mut writer = PacketWriter::with_capacity(8 + 1 + 1 + 1 + 1 + 1 + 10);
    writer.write_packed_guid(guid);
    let Some(info) = names.get(guid) else {
        writer.write_u8(1); // name unknown
        return Reply::new(OPCODE_NAME_QUERY_RESPONSE, writer);
    };
    writer.write_u8(0); // name known
    writer.write_cstring(&info.name);
    writer.write_u8(0); // realm name, only set for cross-realm interaction
    writer.write_u8(ctx.players.connected_race(guid).unwrap_or(info.race));
    writer.write_u8(info.sex);
    writer.write_u8(info.class);
    writer.write_u8(0); // name is not declined
    Reply::new(OPCODE_NAME_QUERY_RESPONSE, writer)
}

/// Simulated-player actors answer from their template and bot records,
/// bypassing the character cache entirely.
fn bot_name_response(content: &ContentStore, locale: Locale, guid: ObjectGuid) -> Option<Reply> {
    let entry = guid.entry()?;
    let template = content.creature_template(entry)?;
    if !template.npc_bot {
        return None;
    }
    let extras = content.bot_extras(entry)?;
    let name = locale::resolve(
        &template.name,
        content.creature_locale(entry).map(|l| &l.name),
        locale,
    );
    let gender = content
        .bot_appearance(entry)
        .map(|a| a.gender)
        .unwrap_or(GENDER_MALE);

    let mut writer = PacketWriter::with_capacity(8 + 1 + name.len() + 1 + 5);
    writer.write_packed_guid(guid);
    writer.write_u8(0);
    writer.write_cstring(name);
    writer.write_u8(0);
    writer.write_u8(bot_display_race(extras.class, extras.race));
    writer.write_u8(gender);
    writer.write_u8(bot_display_class(extras.class));
    writer.write_u8(0);
    Some(Reply::new(OPCODE_NAME_QUERY_RESPONSE, writer))
}

pub fn handle_time_query(ctx: &QueryContext<'_>) -> Reply {
    time_response(ctx.clock, clock::unix_now())
}

pub fn time_response(clock: &WorldClock, now: u64) -> Reply {
    let mut writer = PacketWriter::with_capacity(4 + 4);
    writer.write_u32_le(now as u32);
    writer.write_u32_le(clock.seconds_until_reset(now));
    Reply::new(OPCODE_QUERY_TIME_RESPONSE, writer)
}

pub fn handle_creature_query(
    ctx: &QueryContext<'_>,
    session: &PlayerSession,
    payload: &[u8],
) -> Option<Reply> {
    let mut reader = PacketReader::new(payload);
    let entry = reader.read_u32_le()?;
    let _guid = reader.read_guid()?;
    Some(creature_response(ctx.content, session.locale, entry))
}

pub fn creature_response(content: &ContentStore, locale: Locale, entry: u32) -> Reply {
    let Some(template) = content.creature_template(entry) else {
        logging::log_query(&format!("creature query: no template for entry {}", entry));
        let mut writer = PacketWriter::with_capacity(4);
        writer.write_u32_le(entry | ENTRY_UNKNOWN_BIT);
        return Reply::new(OPCODE_CREATURE_RESPONSE, writer);
    };

    let locale_table = content.creature_locale(entry);
    let name = locale::resolve(&template.name, locale_table.map(|l| &l.name), locale);
    let subname = locale::resolve(&template.subname, locale_table.map(|l| &l.subname), locale);

    let mut writer = PacketWriter::with_capacity(100);
    writer.write_u32_le(entry);
    writer.write_cstring(name);
    writer.write_cstring(""); // name2
    writer.write_cstring(""); // name3
    writer.write_cstring(""); // name4
    writer.write_cstring(subname);
    writer.write_cstring(&template.icon_name);
    writer.write_u32_le(template.type_flags);
    writer.write_u32_le(template.creature_type);
    writer.write_u32_le(template.family);
    writer.write_u32_le(template.rank);
    writer.write_u32_le(template.kill_credit[0]);
    writer.write_u32_le(template.kill_credit[1]);
    for model_id in template.model_ids {
        writer.write_u32_le(model_id);
    }
    writer.write_f32_le(template.health_mod);
    writer.write_f32_le(template.mana_mod);
    writer.write_u8(u8::from(template.racial_leader));
    writer.write_u32_padded(&template.quest_items, MAX_CREATURE_QUEST_ITEMS);
    writer.write_u32_le(template.movement_id);
    Reply::new(OPCODE_CREATURE_RESPONSE, writer)
}

pub fn handle_game_object_query(
    ctx: &QueryContext<'_>,
    session: &PlayerSession,
    payload: &[u8],
) -> Option<Reply> {
    let mut reader = PacketReader::new(payload);
    let entry = reader.read_u32_le()?;
    let _guid = reader.read_guid()?;
    Some(game_object_response(ctx.content, session.locale, entry))
}

pub fn game_object_response(content: &ContentStore, locale: Locale, entry: u32) -> Reply {
    let Some(template) = content.game_object_template(entry) else {
        logging::log_query(&format!(
            "game object query: no template for entry {}",
            entry
        ));
        let mut writer = PacketWriter::with_capacity(4);
        writer.write_u32_le(entry | ENTRY_UNKNOWN_BIT);
        return Reply::new(OPCODE_GAME_OBJECT_RESPONSE, writer);
    };

    let locale_table = content.game_object_locale(entry);
    let name = locale::resolve(&template.name, locale_table.map(|l| &l.name), locale);
    let caption = locale::resolve(
        &template.cast_bar_caption,
        locale_table.map(|l| &l.cast_bar_caption),
        locale,
    );

    let mut writer = PacketWriter::with_capacity(150);
    writer.write_u32_le(entry);
    writer.write_u32_le(template.go_type);
    writer.write_u32_le(template.display_id);
    writer.write_cstring(name);
    writer.write_cstring(""); // name2
    writer.write_cstring(""); // name3
    writer.write_cstring(""); // name4
    writer.write_cstring(&template.icon_name);
    writer.write_cstring(caption);
    writer.write_cstring(&template.aux_text);
    writer.write_u32_padded(&template.data, GAMEOBJECT_DATA_WORDS);
    writer.write_f32_le(template.size);
    writer.write_u32_padded(&template.quest_items, MAX_GAMEOBJECT_QUEST_ITEMS);
    Reply::new(OPCODE_GAME_OBJECT_RESPONSE, writer)
}

pub fn handle_corpse_query(ctx: &QueryContext<'_>, session: &PlayerSession) -> Reply {
    corpse_response(ctx, session)
}

pub fn corpse_response(ctx: &QueryContext<'_>, session: &PlayerSession) -> Reply {
    let Some(corpse) = session.corpse else {
        let mut writer = PacketWriter::with_capacity(1);
        writer.write_u8(0); // corpse not found
        return Reply::new(OPCODE_CORPSE_QUERY, writer);
    };

    let (map_id, x, y, z) = corpse_display_location(
        corpse,
        session.map_id,
        session.phase_mask,
        ctx.maps,
        ctx.terrain,
    );

    let mut writer = PacketWriter::with_capacity(1 + 6 * 4);
    writer.write_u8(1); // corpse found
    writer.write_i32_le(map_id as i32);
    writer.write_f32_le(x);
    writer.write_f32_le(y);
    writer.write_f32_le(z);
    writer.write_i32_le(corpse.map_id as i32);
    writer.write_u32_le(0); // reserved
    Reply::new(OPCODE_CORPSE_QUERY, writer)
}

pub fn handle_npc_text_query(
    ctx: &QueryContext<'_>,
    session: &PlayerSession,
    payload: &[u8],
) -> Option<Reply> {
    let mut reader = PacketReader::new(payload);
    let text_id = reader.read_u32_le()?;
    let _guid = reader.read_guid()?;
    Some(npc_text_response(ctx.content, session.locale, text_id))
}

pub fn npc_text_response(content: &ContentStore, locale: Locale, text_id: u32) -> Reply {
    let mut writer = PacketWriter::with_capacity(100);
    writer.write_u32_le(text_id);

    let Some(text) = content.npc_text(text_id) else {
        for _ in 0..MAX_NPC_TEXT_OPTIONS {
            writer.write_f32_le(0.0);
            writer.write_cstring(DEFAULT_GREETING);
            writer.write_cstring(DEFAULT_GREETING);
            for _ in 0..NPC_TEXT_TRAILER_WORDS {
                writer.write_u32_le(0);
            }
        }
        return Reply::new(OPCODE_NPC_TEXT_UPDATE, writer);
    };

    let locale_table = content.npc_text_locale(text_id);
    for (i, option) in text.options.iter().enumerate() {
        // Broadcast text wins; the locale table is only consulted without it.
        let (male, female) = match content.broadcast_text(option.broadcast_text_id) {
            Some(bct) => (bct.text(locale, Gender::Male), bct.text(locale, Gender::Female)),
            None => (
                locale::resolve(
                    &option.text_male,
                    locale_table.map(|l| &l.text_male[i]),
                    locale,
                ),
                locale::resolve(
                    &option.text_female,
                    locale_table.map(|l| &l.text_female[i]),
                    locale,
                ),
            ),
        };
        let (first, second) = locale::cross_fill(male, female);

        writer.write_f32_le(option.probability);
        writer.write_cstring(first);
        writer.write_cstring(second);
        writer.write_u32_le(option.language);
        for emote in &option.emotes {
            writer.write_u32_le(emote.delay);
            writer.write_u32_le(emote.emote);
        }
    }
    Reply::new(OPCODE_NPC_TEXT_UPDATE, writer)
}

pub fn handle_page_text_query(
    ctx: &QueryContext<'_>,
    session: &PlayerSession,
    payload: &[u8],
) -> Vec<Reply> {
    let mut reader = PacketReader::new(payload);
    let Some(page_id) = reader.read_u32_le() else {
        return Vec::new();
    };
    let _ = reader.skip(8); // guid, unused
    page_text_responses(
        ctx.content,
        session.locale,
        page_id,
        ctx.limits.max_page_chain,
    )
}

/// Walks the page chain from `first_page`, one reply per visited page. A
/// missing page yields a terminal placeholder reply; `max_hops` bounds
/// traversal so a cyclic chain cannot emit forever.
pub fn page_text_responses(
    content: &ContentStore,
    locale: Locale,
    first_page: u32,
    max_hops: usize,
) -> Vec<Reply> {
    let mut replies = Vec::new();
    let mut page_id = first_page;
    while page_id != 0 && replies.len() < max_hops {
        let mut writer = PacketWriter::with_capacity(50);
        writer.write_u32_le(page_id);
        match content.page_text(page_id) {
            None => {
                writer.write_cstring(MISSING_PAGE_TEXT);
                writer.write_u32_le(0);
                page_id = 0;
            }
            Some(page) => {
                let text = locale::resolve(
                    &page.text,
                    content.page_text_locale(page.id).map(|l| &l.text),
                    locale,
                );
                writer.write_cstring(text);
                writer.write_u32_le(page.next_page);
                page_id = page.next_page;
            }
        }
        replies.push(Reply::new(OPCODE_PAGE_TEXT_RESPONSE, writer));
    }
    replies
}

pub fn handle_corpse_map_position_query(payload: &[u8]) -> Option<Reply> {
    let mut reader = PacketReader::new(payload);
    let _transport_guid = reader.read_u32_le()?;
    Some(corpse_map_position_response())
}

/// Protocol completeness stub: four zero floats, always.
pub fn corpse_map_position_response() -> Reply {
    let mut writer = PacketWriter::with_capacity(4 * 4);
    for _ in 0..4 {
        writer.write_f32_le(0.0);
    }
    Reply::new(OPCODE_CORPSE_MAP_POSITION_RESPONSE, writer)
}

pub fn handle_quest_poi_query(
    ctx: &QueryContext<'_>,
    session: &PlayerSession,
    payload: &[u8],
) -> Option<Reply> {
    let mut reader = PacketReader::new(payload);
    let count = reader.read_u32_le()? as usize;
    if count > ctx.limits.max_poi_quests {
        // whole request discarded; input stays consumed to preserve framing
        reader.finish();
        logging::log_query(&format!("quest poi query rejected: {} quests", count));
        return None;
    }
    let mut quest_ids = Vec::with_capacity(count);
    for _ in 0..count {
        quest_ids.push(reader.read_u32_le()?);
    }
    Some(quest_poi_response(ctx.content, session, &quest_ids))
}

/// Deduplicates the requested set, echoes every quest id, and attaches POI
/// groups only when the requester has the quest active and a record exists.
pub fn quest_poi_response(
    content: &ContentStore,
    session: &PlayerSession,
    quest_ids: &[u32],
) -> Reply {
    let unique: BTreeSet<u32> = quest_ids.iter().copied().collect();

    let mut writer = PacketWriter::with_capacity(4 + (4 + 4) * unique.len());
    writer.write_u32_le(unique.len() as u32);
    for quest_id in unique {
        writer.write_u32_le(quest_id);
        let poi = if session.quest_log.has_quest(quest_id) {
            content.quest_poi(quest_id)
        } else {
            None
        };
        match poi {
            None => writer.write_u32_le(0),
            Some(poi) => {
                writer.write_u32_le(poi.groups.len() as u32);
                for group in &poi.groups {
                    writer.write_u32_le(group.id);
                    writer.write_i32_le(group.objective_index);
                    writer.write_u32_le(group.map_id);
                    writer.write_u32_le(group.area_id);
                    writer.write_u32_le(group.floor_id);
                    writer.write_u32_le(group.unk3);
                    writer.write_u32_le(group.unk4);
                    writer.write_u32_le(group.points.len() as u32);
                    for point in &group.points {
                        writer.write_i32_le(point.x);
                        writer.write_i32_le(point.y);
                    }
                }
            }
        }
    }
    Reply::new(OPCODE_QUEST_POI_RESPONSE, writer)
}
