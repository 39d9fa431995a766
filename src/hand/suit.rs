use std::sync::Arc;

use super::partition::{sorted_values, Partitions, Shape};
use crate::engine::Engine;
use crate::error::Error;
use crate::model::*;
use crate::util::misc::cartesian_product;

// ソート済みの数字の組を連続した区間ごとに分割
// 例: [1,1,2,3,5,6,7] -> [[1,1,2,3], [5,6,7]]
pub fn split_runs(values: &[Value]) -> Vec<Vec<Value>> {
    let mut runs: Vec<Vec<Value>> = vec![];
    for &v in values {
        match runs.last_mut() {
            Some(run) if run.last().map_or(false, |&l| v <= l + 1) => run.push(v),
            _ => runs.push(vec![v]),
        }
    }
    runs
}

fn shape_to_meld(group: TileGroup, shape: &Shape) -> Result<Meld, Error> {
    let tiles = shape
        .iter()
        .map(|&v| Tile::new(group, v))
        .collect::<Result<Vec<Tile>, Error>>()?;
    Meld::from_tiles(&tiles)
}

impl Engine {
    // 数牌1色の分解の一覧
    // 区間ごとに独立に分解してから直積をとる (順子は区間をまたがない)
    pub fn suit_variants(&self, group: TileGroup, values: &[Value]) -> Result<Vec<Vec<Meld>>, Error> {
        if !group.is_numeric() {
            return Err(Error::NotNumeric(group));
        }
        let values = sorted_values(values)?;

        let mut run_variants: Vec<Arc<Partitions>> = vec![];
        for run in split_runs(&values) {
            run_variants.push(if self.config().prune_useful {
                self.useful_sorted(run)?
            } else {
                self.partition_sorted(run)?
            });
        }
        let run_variants: Vec<Partitions> = run_variants.iter().map(|p| p.to_vec()).collect();

        let mut res = vec![];
        for combo in cartesian_product(&run_variants) {
            let mut melds = vec![];
            for partition in combo {
                for shape in partition {
                    melds.push(shape_to_meld(group, shape)?);
                }
            }
            res.push(melds);
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_runs() {
        assert_eq!(
            split_runs(&[1, 1, 2, 3, 5, 6, 7]),
            vec![vec![1, 1, 2, 3], vec![5, 6, 7]]
        );
        assert_eq!(split_runs(&[2, 4, 6]), vec![vec![2], vec![4], vec![6]]);
        assert_eq!(split_runs(&[9, 9, 9, 9]), vec![vec![9, 9, 9, 9]]);
        assert!(split_runs(&[]).is_empty());
    }

    #[test]
    fn test_suit_variants_two_runs() {
        let engine = Engine::default();
        let vs = engine.suit_variants(TileGroup::Stone, &[1, 1, 2, 3, 5, 6, 7]).unwrap();
        let expected: Vec<Meld> = ["s1", "s1s2s3", "s5s6s7"]
            .iter()
            .map(|s| Meld::from_symbol(s).unwrap())
            .collect();
        assert_eq!(vs, vec![expected]);
    }

    #[test]
    fn test_suit_variants_group() {
        let engine = Engine::default();
        let vs = engine.suit_variants(TileGroup::Character, &[4, 5, 6]).unwrap();
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0][0].to_string(), "c4c5c6");

        assert_eq!(
            engine.suit_variants(TileGroup::Wind, &[1, 1]),
            Err(Error::NotNumeric(TileGroup::Wind))
        );
        assert!(engine.suit_variants(TileGroup::Bamboo, &[10]).is_err());
    }

    #[test]
    fn test_suit_variants_empty() {
        let engine = Engine::default();
        assert_eq!(engine.suit_variants(TileGroup::Stone, &[]).unwrap(), vec![vec![]]);
    }
}
