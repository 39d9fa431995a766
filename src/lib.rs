#![warn(rust_2018_idioms)]
// 構造的な意味合いや一貫性を保つために以下の警告は無効化
#![allow(clippy::unnecessary_map_or)]
#![allow(clippy::len_without_is_empty)]

pub mod app;
pub mod engine;
pub mod error;
pub mod hand;
pub mod model;
pub mod util;

use std::sync::Arc;

pub use engine::{Engine, EngineConfig};
pub use error::Error;
pub use model::{Meld, MeldKind, MeldList, Tile, TileGroup, VariantSet};

// 共有エンジンで手牌を分解
pub fn decompose(tiles: &[Tile]) -> Result<Arc<VariantSet>, Error> {
    Engine::global().decompose(tiles)
}

pub fn decompose_str(exp: &str) -> Result<Arc<VariantSet>, Error> {
    Engine::global().decompose_str(exp)
}
