use serde::{Deserialize, Serialize};

use crate::types::{Side, Tick};

/// Effects that fire some ticks after they were caused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    ClearAttack { side: Side },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayedEffect {
    pub due_tick: Tick,
    pub generation: u32,
    pub effect: Effect,
}

/// Tick-counted replacement for one-shot wall-clock timers. Effects are
/// tagged with the round generation they were scheduled under; a reset
/// bumps the generation instead of cancelling, and stale effects are
/// dropped unfired.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectQueue {
    pending: Vec<DelayedEffect>,
}

impl EffectQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_tick: Tick, generation: u32, effect: Effect) {
        self.pending.push(DelayedEffect {
            due_tick,
            generation,
            effect,
        });
    }

    /// Remove and return every effect due at `tick` under the live
    /// generation. Effects from older generations are discarded.
    pub fn fire_due(&mut self, tick: Tick, generation: u32) -> Vec<Effect> {
        let mut fired = Vec::new();
        self.pending.retain(|e| {
            if e.generation != generation {
                return false;
            }
            if e.due_tick <= tick {
                fired.push(e.effect);
                return false;
            }
            true
        });
        fired
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_at_due_tick_not_before() {
        let mut q = EffectQueue::new();
        q.schedule(10, 0, Effect::ClearAttack { side: Side::Left });
        assert!(q.fire_due(9, 0).is_empty());
        assert_eq!(
            q.fire_due(10, 0),
            vec![Effect::ClearAttack { side: Side::Left }]
        );
        assert_eq!(q.pending_len(), 0);
    }

    #[test]
    fn late_fire_still_delivers() {
        let mut q = EffectQueue::new();
        q.schedule(5, 0, Effect::ClearAttack { side: Side::Right });
        assert_eq!(q.fire_due(20, 0).len(), 1);
    }

    #[test]
    fn stale_generation_is_dropped_unfired() {
        let mut q = EffectQueue::new();
        q.schedule(10, 0, Effect::ClearAttack { side: Side::Left });
        let fired = q.fire_due(10, 1);
        assert!(fired.is_empty());
        assert_eq!(q.pending_len(), 0);
    }

    #[test]
    fn undue_effects_survive_a_fire() {
        let mut q = EffectQueue::new();
        q.schedule(10, 0, Effect::ClearAttack { side: Side::Left });
        q.schedule(20, 0, Effect::ClearAttack { side: Side::Right });
        assert_eq!(q.fire_due(10, 0).len(), 1);
        assert_eq!(q.pending_len(), 1);
    }
}
