const HIGH_PLAYER: u16 = 0x0000;
const HIGH_GAME_OBJECT: u16 = 0xf110;
const HIGH_CREATURE: u16 = 0xf130;
const HIGH_PET: u16 = 0xf140;
const HIGH_CORPSE: u16 = 0xf101;

const LOW_MASK: u64 = 0x00ff_ffff;
const ENTRY_SHIFT: u32 = 24;
const HIGH_SHIFT: u32 = 48;

/// Tagged 64-bit object identifier. The high 16 bits carry the kind
/// discriminant, creature-like guids carry the template entry in bits 24..48.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectGuid(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidKind {
    Player,
    Creature,
    Pet,
    GameObject,
    Corpse,
    Other,
}

impl ObjectGuid {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }

    pub fn player(low: u32) -> Self {
        Self(u64::from(low) & LOW_MASK | (u64::from(HIGH_PLAYER) << HIGH_SHIFT))
    }

    pub fn creature(entry: u32, low: u32) -> Self {
        Self::with_entry(HIGH_CREATURE, entry, low)
    }

    pub fn game_object(entry: u32, low: u32) -> Self {
        Self::with_entry(HIGH_GAME_OBJECT, entry, low)
    }

    fn with_entry(high: u16, entry: u32, low: u32) -> Self {
        Self(
            (u64::from(low) & LOW_MASK)
                | ((u64::from(entry) & LOW_MASK) << ENTRY_SHIFT)
                | (u64::from(high) << HIGH_SHIFT),
        )
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn kind(self) -> GuidKind {
        match (self.0 >> HIGH_SHIFT) as u16 {
            HIGH_PLAYER => GuidKind::Player,
            HIGH_CREATURE => GuidKind::Creature,
            HIGH_PET => GuidKind::Pet,
            HIGH_GAME_OBJECT => GuidKind::GameObject,
            HIGH_CORPSE => GuidKind::Corpse,
            _ => GuidKind::Other,
        }
    }

    pub fn is_creature(self) -> bool {
        self.kind() == GuidKind::Creature
    }

    pub fn is_player(self) -> bool {
        self.kind() == GuidKind::Player
    }

    /// Template entry for creature-like guids; players and corpses carry none.
    pub fn entry(self) -> Option<u32> {
        match self.kind() {
            GuidKind::Creature | GuidKind::Pet | GuidKind::GameObject => {
                Some(((self.0 >> ENTRY_SHIFT) & LOW_MASK) as u32)
            }
            _ => None,
        }
    }
}
