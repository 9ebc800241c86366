use crate::constants::GO_BANNER_TICKS;
use crate::types::{GameState, MatchConfig, Phase, RoundState, Winner};

pub fn initial_round(config: &MatchConfig) -> RoundState {
    RoundState {
        phase: Phase::Waiting,
        countdown: config.countdown_from,
        go_banner_ticks: 0,
        remaining_secs: config.round_secs,
        second_ticks: 0,
        winner: None,
    }
}

/// External start trigger. Only meaningful from Waiting.
pub fn begin_countdown(round: &mut RoundState, config: &MatchConfig) {
    if round.phase != Phase::Waiting {
        return;
    }
    round.phase = Phase::Countdown;
    round.countdown = config.countdown_from;
    round.go_banner_ticks = 0;
    round.second_ticks = 0;
}

/// One tick of the pre-round sequence: the count steps down once per
/// second, then the GO! banner holds for a fixed delay before play.
pub fn tick_countdown(round: &mut RoundState, config: &MatchConfig) {
    if round.countdown > 0 {
        round.second_ticks += 1;
        if round.second_ticks >= config.tick_rate {
            round.second_ticks = 0;
            round.countdown -= 1;
            if round.countdown == 0 {
                round.go_banner_ticks = GO_BANNER_TICKS;
            }
        }
    } else if round.go_banner_ticks > 0 {
        round.go_banner_ticks -= 1;
        if round.go_banner_ticks == 0 {
            round.phase = Phase::Playing;
            round.remaining_secs = config.round_secs;
            round.second_ticks = 0;
            tracing::debug!(secs = round.remaining_secs, "round started");
        }
    }
}

/// One tick of the playing clock. Exhaustion ends the round with no
/// health-based winner.
pub fn tick_round_timer(round: &mut RoundState, config: &MatchConfig) {
    round.second_ticks += 1;
    if round.second_ticks >= config.tick_rate {
        round.second_ticks = 0;
        round.remaining_secs = round.remaining_secs.saturating_sub(1);
        if round.remaining_secs == 0 {
            round.phase = Phase::Over;
            round.winner = None;
            tracing::debug!("round timed out");
        }
    }
}

/// KO check. The opponent is tested first, so a same-frame double KO
/// resolves to the player.
pub fn check_health_terminal(state: &mut GameState) {
    if state.round.phase != Phase::Playing {
        return;
    }
    if state.opponent.health <= 0 {
        state.round.phase = Phase::Over;
        state.round.winner = Some(Winner::Player);
        tracing::debug!(winner = "player", "knockout");
    } else if state.player.health <= 0 {
        state.round.phase = Phase::Over;
        state.round.winner = Some(Winner::Opponent);
        tracing::debug!(winner = "opponent", "knockout");
    }
}

/// Overlay label for the pre-round sequence, or None outside it.
pub fn countdown_label(round: &RoundState) -> Option<String> {
    if round.phase != Phase::Countdown {
        return None;
    }
    if round.countdown > 0 {
        Some(round.countdown.to_string())
    } else {
        Some("GO!".to_string())
    }
}

/// Terminal overlay message, present only once the round is over.
pub fn round_message(round: &RoundState) -> Option<&'static str> {
    if round.phase != Phase::Over {
        return None;
    }
    Some(match round.winner {
        Some(Winner::Player) => "PLAYER WINS",
        Some(Winner::Opponent) => "OPPONENT WINS",
        None => "TIME UP",
    })
}
