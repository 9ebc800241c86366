use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Logical sprite slots the renderer understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKey {
    Background,
    PlayerIdle,
    PlayerAttack,
    OpponentIdle,
    OpponentAttack,
}

pub const ALL_SPRITES: [SpriteKey; 5] = [
    SpriteKey::Background,
    SpriteKey::PlayerIdle,
    SpriteKey::PlayerAttack,
    SpriteKey::OpponentIdle,
    SpriteKey::OpponentAttack,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoadState {
    Pending,
    Ready,
    Failed,
}

/// Tracks the host's sprite loads. A failed load is never an error
/// state; rendering falls back to flat colors for that key.
#[derive(Clone, Debug)]
pub struct AssetCatalog {
    states: HashMap<SpriteKey, LoadState>,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetCatalog {
    pub fn new() -> Self {
        Self {
            states: ALL_SPRITES
                .iter()
                .map(|&k| (k, LoadState::Pending))
                .collect(),
        }
    }

    /// Catalog for hosts that never load sprites (headless runs, tests).
    pub fn none() -> Self {
        Self {
            states: ALL_SPRITES
                .iter()
                .map(|&k| (k, LoadState::Failed))
                .collect(),
        }
    }

    pub fn mark_ready(&mut self, key: SpriteKey) {
        self.states.insert(key, LoadState::Ready);
    }

    pub fn mark_failed(&mut self, key: SpriteKey) {
        tracing::warn!(?key, "sprite load failed, falling back to flat color");
        self.states.insert(key, LoadState::Failed);
    }

    pub fn is_ready(&self, key: SpriteKey) -> bool {
        self.states.get(&key) == Some(&LoadState::Ready)
    }

    /// True once every sprite has settled, success or failure. The host
    /// waits for this before the initial paint.
    pub fn all_settled(&self) -> bool {
        self.states.values().all(|&s| s != LoadState::Pending)
    }
}
