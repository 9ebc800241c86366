use crate::constants::{FLOOR_Y, GRAVITY, JUMP_IMPULSE, PLAYER_SPEED, STAGE_WIDTH};
use crate::types::{button, Fighter, FrameInput};

/// Horizontal velocity is set fresh each frame from held buttons, never
/// accumulated. Opposing buttons cancel.
pub fn apply_player_input(f: &Fighter, input: FrameInput) -> Fighter {
    let mut vx = 0.0;
    if input.buttons & button::LEFT != 0 {
        vx -= PLAYER_SPEED;
    }
    if input.buttons & button::RIGHT != 0 {
        vx += PLAYER_SPEED;
    }
    Fighter { vx, ..*f }
}

/// Fixed upward impulse. No-op while airborne: no double jumps.
pub fn begin_jump(f: &Fighter) -> Fighter {
    if f.jumping {
        return *f;
    }
    Fighter {
        vy: JUMP_IMPULSE,
        jumping: true,
        ..*f
    }
}

/// Integrate one frame: move by velocity, clamp x to the stage, then
/// either keep falling under gravity or land with feet exactly on the
/// floor line and vertical velocity zeroed.
pub fn integrate(f: &Fighter) -> Fighter {
    let mut x = f.x + f.vx;
    if x < 0.0 {
        x = 0.0;
    }
    if x + f.width > STAGE_WIDTH {
        x = STAGE_WIDTH - f.width;
    }

    let mut y = f.y + f.vy;
    let mut vy = f.vy;
    let mut jumping = f.jumping;
    if y + f.height + vy >= FLOOR_Y {
        y = FLOOR_Y - f.height;
        vy = 0.0;
        jumping = false;
    } else {
        vy += GRAVITY;
    }

    Fighter {
        x,
        y,
        vy,
        jumping,
        ..*f
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FIGHTER_HEIGHT, FIGHTER_WIDTH};
    use crate::types::Side;

    fn grounded(x: f64) -> Fighter {
        Fighter {
            side: Side::Left,
            x,
            y: FLOOR_Y - FIGHTER_HEIGHT,
            vx: 0.0,
            vy: 0.0,
            width: FIGHTER_WIDTH,
            height: FIGHTER_HEIGHT,
            health: 100,
            attacking: false,
            jumping: false,
        }
    }

    #[test]
    fn held_left_and_right_cancel() {
        let f = grounded(100.0);
        let moved = apply_player_input(
            &f,
            FrameInput {
                buttons: button::LEFT | button::RIGHT,
            },
        );
        assert_eq!(moved.vx, 0.0);
    }

    #[test]
    fn held_right_sets_full_speed() {
        let f = grounded(100.0);
        let moved = apply_player_input(
            &f,
            FrameInput {
                buttons: button::RIGHT,
            },
        );
        assert_eq!(moved.vx, PLAYER_SPEED);
    }

    #[test]
    fn standing_fighter_stays_on_floor() {
        let f = grounded(100.0);
        let after = integrate(&f);
        assert_eq!(after.y + after.height, FLOOR_Y);
        assert_eq!(after.vy, 0.0);
        assert!(!after.jumping);
    }

    #[test]
    fn jump_is_refused_while_airborne() {
        let jumped = begin_jump(&grounded(100.0));
        assert!(jumped.jumping);
        assert_eq!(jumped.vy, JUMP_IMPULSE);
        let again = begin_jump(&jumped);
        assert_eq!(again.vy, JUMP_IMPULSE);
    }

    #[test]
    fn jump_returns_to_floor_deterministically() {
        let mut f = begin_jump(&grounded(100.0));
        let mut frames = 0;
        while f.jumping {
            f = integrate(&f);
            frames += 1;
            assert!(f.y + f.height <= FLOOR_Y);
            assert!(frames < 200, "never landed");
        }
        assert_eq!(f.y + f.height, FLOOR_Y);
        assert_eq!(f.vy, 0.0);
        // 2 * impulse / gravity, give or take the discrete step
        assert!((40..=46).contains(&frames), "landed after {frames} frames");
        // same jump again lands on the same frame
        let mut g = begin_jump(&grounded(100.0));
        let mut frames2 = 0;
        while g.jumping {
            g = integrate(&g);
            frames2 += 1;
        }
        assert_eq!(frames, frames2);
    }

    #[test]
    fn x_is_clamped_to_stage_bounds() {
        let mut left = grounded(2.0);
        left.vx = -PLAYER_SPEED;
        assert_eq!(integrate(&left).x, 0.0);

        let mut right = grounded(STAGE_WIDTH - FIGHTER_WIDTH - 2.0);
        right.vx = PLAYER_SPEED;
        assert_eq!(integrate(&right).x, STAGE_WIDTH - FIGHTER_WIDTH);
    }
}
