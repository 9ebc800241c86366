use crate::constants::{STRIKE_DAMAGE, STRIKE_HEIGHT, STRIKE_WIDTH};
use crate::events::{Effect, EffectQueue};
use crate::types::{Fighter, Rect, Side, Tick};

/// Strike rectangle, derived fresh every frame it is used: flush against
/// the attacker's leading edge, tracking the body vertically. Fixed size
/// regardless of the fighter's own hitbox.
pub fn strike_box(f: &Fighter) -> Rect {
    let x = match f.side {
        Side::Left => f.x + f.width,
        Side::Right => f.x - STRIKE_WIDTH,
    };
    Rect {
        x,
        y: f.y,
        width: STRIKE_WIDTH,
        height: STRIKE_HEIGHT,
    }
}

/// Arm an attack and schedule its clear. No-op while one is already
/// active: no queuing, no interrupting, no second timer.
pub fn begin_attack(
    f: &mut Fighter,
    tick: Tick,
    generation: u32,
    effects: &mut EffectQueue,
    duration_ticks: u32,
) {
    if f.attacking {
        return;
    }
    f.attacking = true;
    effects.schedule(
        tick + duration_ticks,
        generation,
        Effect::ClearAttack { side: f.side },
    );
}

/// Single-hit resolution: an active strike overlapping the defender's
/// body lands once, then the activation is spent. The scheduled clear
/// still fires later as a harmless no-op.
pub fn resolve_strike(attacker: &mut Fighter, defender: &mut Fighter) -> bool {
    if !attacker.attacking {
        return false;
    }
    if !strike_box(attacker).overlaps(&defender.body_box()) {
        return false;
    }
    defender.health -= STRIKE_DAMAGE;
    attacker.attacking = false;
    true
}
