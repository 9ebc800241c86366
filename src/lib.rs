//! Deterministic two-fighter round simulation.
//!
//! The core advances in fixed 60 Hz ticks driven by a host frame
//! callback. Rendering surfaces, keyboards, and UI widgets live in the
//! host: it feeds a `FrameInput` bitmask into `Session::advance_frame`
//! each frame, reads health, timer, and overlay labels back out, and
//! executes the retained draw list from `draw_frame`. Every source of
//! nondeterminism is folded into `GameState` (a seeded PRNG, a tick
//! counter, tick-counted delayed effects), so identical inputs replay
//! to identical states.

pub mod ai;
pub mod assets;
pub mod combat;
pub mod constants;
pub mod events;
pub mod init;
pub mod physics;
pub mod prng;
pub mod render;
pub mod round;
pub mod step;
pub mod types;

pub use assets::{AssetCatalog, SpriteKey};
pub use combat::{begin_attack, resolve_strike, strike_box};
pub use constants::*;
pub use events::{Effect, EffectQueue};
pub use init::{create_initial_state, default_config, spawn_fighter};
pub use physics::{apply_player_input, begin_jump, integrate};
pub use prng::{prng_chance, prng_next};
pub use render::{draw_frame, Color, DrawOp};
pub use round::{countdown_label, round_message};
pub use step::{step, Session};
pub use types::*;
