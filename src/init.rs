use crate::constants::{
    COUNTDOWN_FROM, FIGHTER_HEIGHT, FIGHTER_WIDTH, MAX_HEALTH, OPPONENT_SPAWN_X, PLAYER_SPAWN_X,
    ROUND_SECS, SPAWN_Y, TICK_RATE,
};
use crate::round;
use crate::types::{Fighter, GameState, MatchConfig, Seed, Side};

pub fn spawn_fighter(side: Side) -> Fighter {
    let x = match side {
        Side::Left => PLAYER_SPAWN_X,
        Side::Right => OPPONENT_SPAWN_X,
    };
    Fighter {
        side,
        x,
        y: SPAWN_Y,
        vx: 0.0,
        vy: 0.0,
        width: FIGHTER_WIDTH,
        height: FIGHTER_HEIGHT,
        health: MAX_HEALTH,
        attacking: false,
        jumping: false,
    }
}

pub fn create_initial_state(config: &MatchConfig) -> GameState {
    GameState {
        tick: 0,
        player: spawn_fighter(Side::Left),
        opponent: spawn_fighter(Side::Right),
        round: round::initial_round(config),
        rng_state: config.seed,
        prev_buttons: 0,
        generation: 0,
    }
}

pub fn default_config(seed: Seed) -> MatchConfig {
    MatchConfig {
        seed,
        tick_rate: TICK_RATE,
        round_secs: ROUND_SECS,
        countdown_from: COUNTDOWN_FROM,
    }
}
