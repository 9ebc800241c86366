use crate::constants::{ATTACK_CHANCE, ATTACK_RANGE, JUMP_CHANCE, OPPONENT_SPEED, TOO_CLOSE_RANGE};
use crate::prng::prng_chance;
use crate::types::Fighter;

/// One frame's worth of opponent intent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpponentCommand {
    pub vx: f64,
    pub attack: bool,
    pub jump: bool,
}

/// Memoryless reactive policy, evaluated once per playing frame on the
/// signed distance `opponent.x - player.x`. The only state consulted
/// beyond position is the already-attacking / already-jumping guards,
/// so no randomness is burned while an action is still in flight.
pub fn decide(opponent: &Fighter, player: &Fighter, rng_state: u32) -> (OpponentCommand, u32) {
    let distance = opponent.x - player.x;
    let mut rng = rng_state;

    let vx = if distance.abs() > ATTACK_RANGE {
        if distance > 0.0 {
            -OPPONENT_SPEED
        } else {
            OPPONENT_SPEED
        }
    } else if distance > 0.0 && distance < TOO_CLOSE_RANGE {
        OPPONENT_SPEED
    } else {
        0.0
    };

    let mut attack = false;
    if distance > 0.0 && distance <= ATTACK_RANGE && !opponent.attacking {
        let (roll, next) = prng_chance(rng, ATTACK_CHANCE);
        rng = next;
        attack = roll;
    }

    let mut jump = false;
    if !opponent.jumping {
        let (roll, next) = prng_chance(rng, JUMP_CHANCE);
        rng = next;
        jump = roll;
    }

    (OpponentCommand { vx, attack, jump }, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::spawn_fighter;
    use crate::types::Side;

    fn pair(opponent_x: f64, player_x: f64) -> (Fighter, Fighter) {
        let mut opponent = spawn_fighter(Side::Right);
        let mut player = spawn_fighter(Side::Left);
        opponent.x = opponent_x;
        player.x = player_x;
        (opponent, player)
    }

    #[test]
    fn approaches_from_far_right() {
        let (opponent, player) = pair(500.0, 100.0);
        let (cmd, _) = decide(&opponent, &player, 1);
        assert_eq!(cmd.vx, -OPPONENT_SPEED);
    }

    #[test]
    fn approaches_from_far_left() {
        let (opponent, player) = pair(10.0, 400.0);
        let (cmd, _) = decide(&opponent, &player, 1);
        assert_eq!(cmd.vx, OPPONENT_SPEED);
    }

    #[test]
    fn backs_off_when_crowded() {
        let (opponent, player) = pair(130.0, 100.0);
        let (cmd, _) = decide(&opponent, &player, 1);
        assert_eq!(cmd.vx, OPPONENT_SPEED);
    }

    #[test]
    fn holds_ground_in_the_sweet_spot() {
        let (opponent, player) = pair(180.0, 100.0);
        let (cmd, _) = decide(&opponent, &player, 1);
        assert_eq!(cmd.vx, 0.0);
    }

    #[test]
    fn eventually_attacks_in_range() {
        let (opponent, player) = pair(180.0, 100.0);
        let mut rng = 42;
        let mut attacked = false;
        for _ in 0..2000 {
            let (cmd, next) = decide(&opponent, &player, rng);
            rng = next;
            attacked |= cmd.attack;
        }
        assert!(attacked);
    }

    #[test]
    fn never_attacks_while_armed_or_out_of_range() {
        let (mut opponent, player) = pair(180.0, 100.0);
        opponent.attacking = true;
        let mut rng = 42;
        for _ in 0..2000 {
            let (cmd, next) = decide(&opponent, &player, rng);
            rng = next;
            assert!(!cmd.attack);
        }

        let (far, player) = pair(500.0, 100.0);
        let mut rng = 42;
        for _ in 0..2000 {
            let (cmd, next) = decide(&far, &player, rng);
            rng = next;
            assert!(!cmd.attack);
        }
    }

    #[test]
    fn decision_is_deterministic_in_state() {
        let (opponent, player) = pair(180.0, 100.0);
        let (a, ra) = decide(&opponent, &player, 777);
        let (b, rb) = decide(&opponent, &player, 777);
        assert_eq!(a, b);
        assert_eq!(ra, rb);
    }
}
