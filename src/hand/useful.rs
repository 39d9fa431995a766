use std::collections::BTreeSet;
use std::sync::Arc;

use super::partition::{is_pung, is_single, sorted_values, Partition, Partitions};
use crate::engine::Engine;
use crate::error::Error;
use crate::model::Value;

fn pung_count(p: &Partition) -> usize {
    p.iter().filter(|s| is_pung(s)).count()
}

// 分解の集合から以降の組み合わせに有用なものだけを残す
//   1. 単独牌を含まない分解 (4面子1雀頭の一部になりうる)
//   2. 面子数が最少の分解
//   3. 刻子数が最多の分解 (刻子が1つ以上の場合のみ)
// 2,3で同数の場合はソート順で最初のもの
// 何も残らない場合は元の集合をそのまま返却
pub fn select_useful(variants: &Partitions) -> Partitions {
    let mut res = BTreeSet::new();

    for p in variants {
        if !p.iter().any(|s| is_single(s)) {
            res.insert(p);
        }
    }

    // min_by_keyは同数の場合に最初の要素を返す
    if let Some(p) = variants.iter().min_by_key(|p| p.len()) {
        res.insert(p);
    }

    let mut max_pungs: Option<(usize, &Partition)> = None;
    for p in variants {
        let n = pung_count(p);
        if n > 0 && max_pungs.map_or(true, |(m, _)| n > m) {
            max_pungs = Some((n, p));
        }
    }
    if let Some((_, p)) = max_pungs {
        res.insert(p);
    }

    if res.is_empty() {
        return variants.clone();
    }
    res.into_iter().cloned().collect()
}

impl Engine {
    pub fn useful_partitions(&self, values: &[Value]) -> Result<Arc<Partitions>, Error> {
        self.useful_sorted(sorted_values(values)?)
    }

    pub(crate) fn useful_sorted(&self, values: Vec<Value>) -> Result<Arc<Partitions>, Error> {
        self.memoize("useful", &self.useful_cache, values, |vs| {
            let all = self.partition_sorted(vs.clone())?;
            Ok(select_useful(&all))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn useful(values: &[Value]) -> Partitions {
        Engine::default().useful_partitions(values).unwrap().to_vec()
    }

    #[test]
    fn test_useful_fewest_melds() {
        // どちらも単独牌を含むので面子数が少ない方のみ
        assert_eq!(useful(&[1, 1, 2, 3]), vec![vec![vec![1], vec![1, 2, 3]]]);
    }

    #[test]
    fn test_useful_no_singles() {
        assert_eq!(useful(&[5, 5, 5]), vec![vec![vec![5, 5, 5]]]);
        assert_eq!(useful(&[7, 7]), vec![vec![vec![7, 7]]]);
    }

    #[test]
    fn test_useful_three_consecutive_pungs() {
        // 刻子x3と順子x3の両方が残る
        let ps = useful(&[1, 1, 1, 2, 2, 2, 3, 3, 3]);
        assert!(ps.contains(&vec![vec![1, 1, 1], vec![2, 2, 2], vec![3, 3, 3]]));
        assert!(ps.contains(&vec![vec![1, 2, 3], vec![1, 2, 3], vec![1, 2, 3]]));
        for p in &ps {
            assert!(!p.iter().any(|s| is_single(s)));
        }
    }

    #[test]
    fn test_useful_most_pungs() {
        // 単独牌なしの分解が存在しない場合でも刻子最多の分解は残る
        let all = Engine::default().partition(&[1, 1, 1, 2, 4]).unwrap();
        let ps = select_useful(&all);
        assert!(ps.contains(&vec![vec![1, 1, 1], vec![2], vec![4]]));
    }

    #[test]
    fn test_useful_subset() {
        let engine = Engine::default();
        let values = [2, 3, 3, 4, 4, 5, 5, 6, 7, 7];
        let all = engine.partition(&values).unwrap();
        let ps = engine.useful_partitions(&values).unwrap();
        assert!(!ps.is_empty());
        assert!(ps.iter().all(|p| all.contains(p)));
        // ソート済みかつ重複なし
        assert!(ps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_useful_empty() {
        assert_eq!(useful(&[]), vec![Partition::new()]);
    }
}
