// 手牌を面子へ分解するモジュール
//   partition: 数牌1色の数字の組の分解 (すべての方法)
//   useful:    分解のうち有用なものへの絞り込み
//   suit:      数牌1色を連続区間に分けて分解
//   compose:   字牌・花牌を含む手牌全体の分解
mod compose;
mod partition;
mod suit;
mod useful;

pub use self::{
    compose::{bonus_melds, honour_melds},
    partition::{is_pung, is_single, Partition, Partitions, Shape},
    suit::split_runs,
    useful::select_useful,
};
