// Timing contract owned by the presentation layer
pub const TICK_INTERVAL_MS: u32 = 1000;
pub const MONSTER_ACTION_DELAY_MS: u32 = 750;

// Damage roll: variance is uniform in [0, total * DAMAGE_VARIANCE)
pub const DAMAGE_VARIANCE: f64 = 0.5;

// Leveling: threshold is level * XP_PER_LEVEL; stats grow by LEVEL_UP_GROWTH
pub const XP_PER_LEVEL: u32 = 100;
pub const LEVEL_UP_GROWTH: f64 = 1.1;

// Poison never drops HP below this on its own
pub const POISON_HP_FLOOR: u32 = 1;

// Achievement thresholds
pub const TREASURE_HUNTER_ITEM_COUNT: u32 = 10;
pub const DRAGON_SLAYER_LEVEL: u32 = 10;

// Game log keeps only the most recent lines
pub const GAME_LOG_CAPACITY: usize = 50;
