use rand::prelude::*;

use crate::model::*;

// 牌一式 (数牌・字牌は各4枚, 花牌・季節牌は各1枚 計144枚)
pub fn full_tile_set() -> Vec<Tile> {
    let mut tiles = Vec::new();
    for group in TileGroup::ALL {
        let n = if group.is_bonus() { 1 } else { TILE };
        for value in 1..=group.max_value() {
            if let Ok(t) = Tile::new(group, value) {
                tiles.extend(std::iter::repeat(t).take(n));
            }
        }
    }
    tiles
}

pub fn create_wall(seed: u64) -> Vec<Tile> {
    let mut wall = full_tile_set();
    let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(seed);
    wall.shuffle(&mut rng);
    wall
}

// 牌山からn_tiles枚ずつ手牌を配る 牌山が足りなくなったら次の牌山を作る
pub fn draw_hands(seed: u64, n_hands: usize, n_tiles: usize) -> Vec<Vec<Tile>> {
    let n_tiles = n_tiles.min(full_tile_set().len());
    let mut hands = vec![];
    let mut wall = vec![];
    let mut round = 0;
    while hands.len() < n_hands {
        if wall.len() < n_tiles {
            wall = create_wall(seed.wrapping_add(round));
            round += 1;
        }
        let mut hand = wall.split_off(wall.len() - n_tiles);
        hand.sort();
        hands.push(hand);
    }
    hands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::misc::vec_count;

    #[test]
    fn test_full_tile_set() {
        let tiles = full_tile_set();
        assert_eq!(tiles.len(), 144);
        let t = Tile::from_symbol("c5").unwrap();
        assert_eq!(vec_count(&tiles, &t), 4);
        let t = Tile::from_symbol("fe").unwrap();
        assert_eq!(vec_count(&tiles, &t), 1);
    }

    #[test]
    fn test_create_wall() {
        let w1 = create_wall(1);
        assert_eq!(w1, create_wall(1));
        let mut w2 = w1.clone();
        w2.sort();
        assert_eq!(w2, full_tile_set());
    }

    #[test]
    fn test_draw_hands() {
        let hands = draw_hands(7, 20, 14);
        assert_eq!(hands.len(), 20);
        for h in &hands {
            assert_eq!(h.len(), 14);
            assert!(h.windows(2).all(|w| w[0] <= w[1]));
        }
        assert_eq!(hands, draw_hands(7, 20, 14));
    }
}
