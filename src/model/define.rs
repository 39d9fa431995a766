// 型エイリアス
pub type Value = u8; // 牌の数字部分 (数牌:1~9, 風牌:1~4, 三元牌:1~3, 花牌・季節牌:1~4)

// Number
pub const TILE: usize = 4; // 同種の牌の数
pub const NUMERIC_MAX: Value = 9;
pub const CHOW_MAX: Value = 7; // 順子の先頭になれる最大の数字

// Wind
pub const WE: Value = 1; // East
pub const WS: Value = 2; // South
pub const WW: Value = 3; // West
pub const WN: Value = 4; // North

// Dragon
pub const DB: Value = 1; // Blue (White)
pub const DG: Value = 2; // Green
pub const DR: Value = 3; // Red
