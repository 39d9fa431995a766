// 牌・面子・分解結果のデータモデル
mod define;
mod meld;
mod tile;
mod variant;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use define::*;
pub use meld::*;
pub use tile::*;
pub use variant::*;
