use crate::ai;
use crate::combat;
use crate::events::{Effect, EffectQueue};
use crate::init;
use crate::physics;
use crate::round;
use crate::types::{button, Fighter, FrameInput, GameState, MatchConfig, Phase, Side, Winner};

/// Advance exactly one frame. Returns whether the host should schedule
/// another frame; `false` once the round is over.
///
/// Playing-phase order:
///  1. fire due delayed effects (attack clears)
///  2. player velocity from held input
///  3. edge-triggered player jump / attack
///  4. opponent controller
///  5. integrate both fighters
///  6. resolve both strike directions, player's first
///  7. terminal health check
///  8. round timer
///
/// Outside Playing the driver only advances phase bookkeeping.
pub fn step(
    state: &mut GameState,
    effects: &mut EffectQueue,
    input: FrameInput,
    config: &MatchConfig,
) -> bool {
    state.tick += 1;

    for effect in effects.fire_due(state.tick, state.generation) {
        apply_effect(state, effect);
    }

    match state.round.phase {
        Phase::Waiting | Phase::Over => {}
        Phase::Countdown => round::tick_countdown(&mut state.round, config),
        Phase::Playing => {
            let pressed = input.buttons & !state.prev_buttons;

            state.player = physics::apply_player_input(&state.player, input);
            if pressed & button::JUMP != 0 {
                state.player = physics::begin_jump(&state.player);
            }
            if pressed & button::ATTACK != 0 {
                combat::begin_attack(
                    &mut state.player,
                    state.tick,
                    state.generation,
                    effects,
                    config.attack_duration_ticks(),
                );
            }

            let (cmd, rng) = ai::decide(&state.opponent, &state.player, state.rng_state);
            state.rng_state = rng;
            state.opponent.vx = cmd.vx;
            if cmd.jump {
                state.opponent = physics::begin_jump(&state.opponent);
            }
            if cmd.attack {
                combat::begin_attack(
                    &mut state.opponent,
                    state.tick,
                    state.generation,
                    effects,
                    config.attack_duration_ticks(),
                );
            }

            state.player = physics::integrate(&state.player);
            state.opponent = physics::integrate(&state.opponent);

            combat::resolve_strike(&mut state.player, &mut state.opponent);
            combat::resolve_strike(&mut state.opponent, &mut state.player);

            round::check_health_terminal(state);
            if state.round.phase == Phase::Playing {
                round::tick_round_timer(&mut state.round, config);
            }
        }
    }

    state.prev_buttons = input.buttons;
    state.round.phase != Phase::Over
}

fn apply_effect(state: &mut GameState, effect: Effect) {
    match effect {
        // Inert when the strike already landed; the flag is simply false.
        Effect::ClearAttack { side } => fighter_mut(state, side).attacking = false,
    }
}

fn fighter_mut(state: &mut GameState, side: Side) -> &mut Fighter {
    match side {
        Side::Left => &mut state.player,
        Side::Right => &mut state.opponent,
    }
}

/// Owns everything one match needs: state, the delayed-effect queue, and
/// the config. Hosts drive it with `advance_frame` from their frame
/// callback and stop rescheduling when it returns false.
#[derive(Clone, Debug)]
pub struct Session {
    pub state: GameState,
    pub effects: EffectQueue,
    pub config: MatchConfig,
}

impl Session {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            state: init::create_initial_state(&config),
            effects: EffectQueue::new(),
            config,
        }
    }

    /// Start trigger: Waiting -> Countdown.
    pub fn request_start(&mut self) {
        round::begin_countdown(&mut self.state.round, &self.config);
    }

    /// Re-enter Waiting with fresh fighters and timers. Pending delayed
    /// effects are not cancelled; the generation bump makes them stale
    /// and they drop unfired.
    pub fn request_reset(&mut self) {
        let generation = self.state.generation + 1;
        let rng_state = self.state.rng_state;
        self.state = init::create_initial_state(&self.config);
        self.state.generation = generation;
        self.state.rng_state = rng_state;
    }

    /// Frame callback body. False means stop rescheduling.
    pub fn advance_frame(&mut self, input: FrameInput) -> bool {
        step(&mut self.state, &mut self.effects, input, &self.config)
    }

    // Outputs the host UI reads each frame.

    pub fn player_health(&self) -> i32 {
        self.state.player.display_health()
    }

    pub fn opponent_health(&self) -> i32 {
        self.state.opponent.display_health()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.state.round.remaining_secs
    }

    pub fn countdown_label(&self) -> Option<String> {
        round::countdown_label(&self.state.round)
    }

    pub fn round_message(&self) -> Option<&'static str> {
        round::round_message(&self.state.round)
    }

    pub fn winner(&self) -> Option<Winner> {
        self.state.round.winner
    }
}
