/// Mulberry32 step. Returns a value in [0, 1) and the next state.
///
/// Pure function so state threads through `GameState` explicitly and
/// replays stay deterministic.
pub fn prng_next(state: u32) -> (f64, u32) {
    let mut t = state.wrapping_add(0x6d2b79f5);
    let next_state = t;
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    let value = (t ^ (t >> 14)) as f64 / 4294967296.0;
    (value, next_state)
}

/// Bernoulli draw with probability `p`.
pub fn prng_chance(state: u32, p: f64) -> (bool, u32) {
    let (value, next_state) = prng_next(state);
    (value < p, next_state)
}
