use crate::entities::quest::MAX_QUEST_LOG_SIZE;

const DEFAULT_MAX_PAGE_CHAIN: usize = 64;
const DEFAULT_NAME_CACHE_CAPACITY: usize = 1024;

/// Tunable bounds for the query layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryLimits {
    /// POI requests naming more quests than this are discarded wholesale.
    pub max_poi_quests: usize,
    /// Hop bound for page chain traversal; cuts off cyclic chains.
    pub max_page_chain: usize,
    pub name_cache_capacity: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            max_poi_quests: MAX_QUEST_LOG_SIZE,
            max_page_chain: DEFAULT_MAX_PAGE_CHAIN,
            name_cache_capacity: DEFAULT_NAME_CACHE_CAPACITY,
        }
    }
}

impl QueryLimits {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_poi_quests: env_limit("EMBERFALL_MAX_POI_QUESTS", defaults.max_poi_quests),
            max_page_chain: env_limit("EMBERFALL_MAX_PAGE_CHAIN", defaults.max_page_chain),
            name_cache_capacity: env_limit("EMBERFALL_NAME_CACHE", defaults.name_cache_capacity),
        }
    }
}

fn env_limit(name: &str, default: usize) -> usize {
    match std::env::var(name) {
        Ok(value) => parse_limit(name, &value, default),
        Err(_) => default,
    }
}

fn parse_limit(name: &str, value: &str, default: usize) -> usize {
    match value.trim().parse::<usize>() {
        Ok(parsed) if parsed > 0 => parsed,
        _ => {
            eprintln!("emberfall: invalid {} '{}', using {}", name, value, default);
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_protocol_bounds() {
        let limits = QueryLimits::default();
        assert_eq!(limits.max_poi_quests, MAX_QUEST_LOG_SIZE);
        assert_eq!(limits.max_page_chain, 64);
    }

    #[test]
    fn parse_limit_accepts_trimmed_numbers() {
        assert_eq!(parse_limit("X", " 12 ", 5), 12);
    }

    #[test]
    fn parse_limit_rejects_garbage_and_zero() {
        assert_eq!(parse_limit("X", "abc", 5), 5);
        assert_eq!(parse_limit("X", "0", 5), 5);
        assert_eq!(parse_limit("X", "", 5), 5);
    }
}
