use serde::{Deserialize, Serialize};

use crate::constants::{ATTACK_DURATION_MS, MAX_HEALTH};

pub type Tick = u32;
pub type Seed = u32;

/// Button bitmask for one frame of sampled input.
pub mod button {
    pub const LEFT: u8 = 1;
    pub const RIGHT: u8 = 2;
    pub const JUMP: u8 = 4;
    pub const ATTACK: u8 = 8;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub buttons: u8,
}

pub const NULL_INPUT: FrameInput = FrameInput { buttons: 0 };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Inclusive AABB overlap: touching edges count as contact.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x <= other.x + other.width
            && self.x + self.width >= other.x
            && self.y <= other.y + other.height
            && self.y + self.height >= other.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub side: Side,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub width: f64,
    pub height: f64,
    /// May go negative internally; UI reads `display_health`.
    pub health: i32,
    pub attacking: bool,
    pub jumping: bool,
}

impl Fighter {
    pub fn body_box(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Health clamped to the displayable 0..=100 band.
    pub fn display_health(&self) -> i32 {
        self.health.clamp(0, MAX_HEALTH)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Waiting,
    Countdown,
    Playing,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Player,
    Opponent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: Phase,
    /// Seconds left on the pre-round countdown; 0 means the GO! banner.
    pub countdown: u32,
    /// Ticks the GO! banner still holds before play begins.
    pub go_banner_ticks: u32,
    pub remaining_secs: u32,
    /// Per-second accumulator for the countdown and round clocks.
    pub second_ticks: u32,
    pub winner: Option<Winner>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tick: Tick,
    pub player: Fighter,
    pub opponent: Fighter,
    pub round: RoundState,
    pub rng_state: u32,
    /// Buttons from the previous frame, for edge-triggered actions.
    pub prev_buttons: u8,
    /// Bumped on every reset; delayed effects from older rounds are stale.
    pub generation: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub seed: Seed,
    pub tick_rate: u32,
    pub round_secs: u32,
    pub countdown_from: u32,
}

impl MatchConfig {
    /// Attack window in ticks, derived from its wall-clock definition.
    pub fn attack_duration_ticks(&self) -> u32 {
        ATTACK_DURATION_MS * self.tick_rate / 1000
    }
}
