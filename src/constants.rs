// All values are per-tick at 60 Hz unless noted.

// Tick rate
pub const TICK_RATE: u32 = 60;

// Stage
pub const STAGE_WIDTH: f64 = 640.0;
pub const STAGE_HEIGHT: f64 = 480.0;
/// Top of the floor band; fighters' feet rest exactly on this line.
pub const FLOOR_Y: f64 = STAGE_HEIGHT - 50.0;

// Physics
pub const GRAVITY: f64 = 0.7;
pub const JUMP_IMPULSE: f64 = -15.0;
pub const PLAYER_SPEED: f64 = 5.0;
pub const OPPONENT_SPEED: f64 = 3.0;

// Fighter hitbox
pub const FIGHTER_WIDTH: f64 = 50.0;
pub const FIGHTER_HEIGHT: f64 = 150.0;

// Strike box — fixed size regardless of fighter dimensions
pub const STRIKE_WIDTH: f64 = 100.0;
pub const STRIKE_HEIGHT: f64 = 50.0;

// Health / combat
pub const MAX_HEALTH: i32 = 100;
pub const STRIKE_DAMAGE: i32 = 20;

/// Attack stays armed for 100 ms of wall-clock time; at a fixed timestep
/// that is a tick count, keeping the duration stable across frame rates.
pub const ATTACK_DURATION_MS: u32 = 100;

// Opponent policy
pub const ATTACK_RANGE: f64 = 100.0;
pub const TOO_CLOSE_RANGE: f64 = 50.0;
pub const ATTACK_CHANCE: f64 = 0.05;
pub const JUMP_CHANCE: f64 = 0.005;

// Round flow
pub const COUNTDOWN_FROM: u32 = 3;
/// How long the "GO!" banner holds before simulation begins.
pub const GO_BANNER_TICKS: u32 = 60;
pub const ROUND_SECS: u32 = 60;

// Spawns
pub const PLAYER_SPAWN_X: f64 = 100.0;
pub const OPPONENT_SPAWN_X: f64 = STAGE_WIDTH - 100.0 - FIGHTER_WIDTH;
/// Fighters spawn airborne and drop onto the floor.
pub const SPAWN_Y: f64 = 200.0;
