use serde::{Deserialize, Serialize};

use crate::assets::{AssetCatalog, SpriteKey};
use crate::combat;
use crate::constants::{STAGE_HEIGHT, STAGE_WIDTH};
use crate::types::{Fighter, GameState, Rect, Side};

/// Packed RGBA, 0xRRGGBBAA.
pub type Color = u32;

pub const BACKGROUND_FALLBACK: Color = 0x000000ff;
pub const PLAYER_FALLBACK: Color = 0xff0000ff;
pub const OPPONENT_FALLBACK: Color = 0x0000ffff;
/// Translucent white, so active strike boxes read over any sprite.
pub const STRIKE_OVERLAY: Color = 0xffffff80;

/// One retained-mode drawing command. The core owns no surface; the
/// host executes these in order against whatever it draws on.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    Clear { color: Color },
    FillRect { rect: Rect, color: Color },
    Sprite { key: SpriteKey, rect: Rect },
}

fn stage_rect() -> Rect {
    Rect {
        x: 0.0,
        y: 0.0,
        width: STAGE_WIDTH,
        height: STAGE_HEIGHT,
    }
}

/// Build the draw list for one frame: background, then both fighters
/// back to front, each followed by its strike overlay while attacking.
pub fn draw_frame(state: &GameState, assets: &AssetCatalog) -> Vec<DrawOp> {
    let mut ops = Vec::with_capacity(6);

    if assets.is_ready(SpriteKey::Background) {
        ops.push(DrawOp::Sprite {
            key: SpriteKey::Background,
            rect: stage_rect(),
        });
    } else {
        ops.push(DrawOp::Clear {
            color: BACKGROUND_FALLBACK,
        });
    }

    push_fighter(&mut ops, &state.player, assets);
    push_fighter(&mut ops, &state.opponent, assets);
    ops
}

fn push_fighter(ops: &mut Vec<DrawOp>, f: &Fighter, assets: &AssetCatalog) {
    let (idle, attack, fallback) = match f.side {
        Side::Left => (SpriteKey::PlayerIdle, SpriteKey::PlayerAttack, PLAYER_FALLBACK),
        Side::Right => (
            SpriteKey::OpponentIdle,
            SpriteKey::OpponentAttack,
            OPPONENT_FALLBACK,
        ),
    };
    let key = if f.attacking { attack } else { idle };

    if assets.is_ready(key) {
        ops.push(DrawOp::Sprite {
            key,
            rect: f.body_box(),
        });
    } else {
        ops.push(DrawOp::FillRect {
            rect: f.body_box(),
            color: fallback,
        });
    }

    if f.attacking {
        ops.push(DrawOp::FillRect {
            rect: combat::strike_box(f),
            color: STRIKE_OVERLAY,
        });
    }
}
