use std::collections::BTreeSet;
use std::sync::Arc;

use crate::debug;
use crate::engine::Engine;
use crate::error::Error;
use crate::model::*;
use crate::util::misc::cartesian_product;

// 字牌は選択の余地がないので枚数から面子を決定
// 4枚: 単独 + 刻子 (槓子は単独 + 刻子として扱う)
// 一般には count / 3 個の刻子と余り(1: 単独, 2: 対子)
pub fn honour_melds(tiles: &[Tile]) -> Vec<Meld> {
    let mut res = vec![];
    let kinds: BTreeSet<Tile> = tiles.iter().copied().filter(|t| t.is_honour()).collect();
    for t in kinds {
        let count = tiles.iter().filter(|&&x| x == t).count();
        match count % 3 {
            1 => res.push(Meld::single(t)),
            2 => res.push(Meld::pair(t)),
            _ => {}
        }
        for _ in 0..count / 3 {
            res.push(Meld::pung(t));
        }
    }
    res
}

// 花牌・季節牌は常に単独
pub fn bonus_melds(tiles: &[Tile]) -> Vec<Meld> {
    tiles
        .iter()
        .filter(|t| t.is_bonus())
        .map(|&t| Meld::single(t))
        .collect()
}

impl Engine {
    // 手牌を面子に分解する方法の一覧を返却 (牌の順序は問わない)
    pub fn decompose(&self, tiles: &[Tile]) -> Result<Arc<VariantSet>, Error> {
        let mut key = tiles.to_vec();
        key.sort();
        self.memoize("compose", &self.compose_cache, key, |ts| self.compose(ts))
    }

    pub fn decompose_str(&self, exp: &str) -> Result<Arc<VariantSet>, Error> {
        self.decompose(&tiles_from_string(exp)?)
    }

    fn compose(&self, tiles: &[Tile]) -> Result<VariantSet, Error> {
        let honours = honour_melds(tiles);
        let bonuses = bonus_melds(tiles);

        let mut suits = vec![];
        for group in TileGroup::NUMERIC {
            let values: Vec<Value> = tiles
                .iter()
                .filter(|t| t.group() == group)
                .map(|t| t.value())
                .collect();
            if !values.is_empty() {
                suits.push(self.suit_variants(group, &values)?);
            }
        }

        let mut res = BTreeSet::new();
        for combo in cartesian_product(&suits) {
            let mut melds = honours.clone();
            for suit_melds in combo {
                melds.extend(suit_melds.iter().copied());
            }
            melds.extend(bonuses.iter().copied());
            res.insert(MeldList::new(melds));
        }

        debug!("{} tiles -> {} variants", tiles.len(), res.len());
        Ok(VariantSet::from(res))
    }
}
