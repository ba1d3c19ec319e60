/// World clock for time queries: unix-epoch now plus the next scheduled
/// daily reset instant.
#[derive(Debug, Clone, Copy)]
pub struct WorldClock {
    next_daily_reset: u64,
}

impl WorldClock {
    pub fn new(next_daily_reset: u64) -> Self {
        Self { next_daily_reset }
    }

    pub fn next_daily_reset(&self) -> u64 {
        self.next_daily_reset
    }

    /// Zero once the reset instant has passed.
    pub fn seconds_until_reset(&self, now: u64) -> u32 {
        self.next_daily_reset
            .saturating_sub(now)
            .min(u64::from(u32::MAX)) as u32
    }
}

pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
