use std::collections::BTreeSet;
use std::sync::Arc;

use crate::engine::Engine;
use crate::error::Error;
use crate::model::*;

// 数牌1色の数字の組 (対子 (v,v), 刻子 (v,v,v), 順子 (v,v+1,v+2), 単独 (v,))
pub type Shape = Vec<Value>;
// 分解1通り 各Shapeおよびその並びはソート済み
pub type Partition = Vec<Shape>;
// 分解の集合 ソート済みかつ重複なし
pub type Partitions = Vec<Partition>;

type ValueRow = [usize; NUMERIC_MAX as usize + 2];

pub fn check_values(values: &[Value]) -> Result<(), Error> {
    if values.iter().any(|&v| v == 0 || v > NUMERIC_MAX) {
        return Err(Error::InvalidValues(values.to_vec()));
    }
    Ok(())
}

pub fn sorted_values(values: &[Value]) -> Result<Vec<Value>, Error> {
    check_values(values)?;
    let mut vs = values.to_vec();
    vs.sort_unstable();
    Ok(vs)
}

fn count_values(values: &[Value]) -> ValueRow {
    let mut row = ValueRow::default();
    for &v in values {
        row[v as usize] += 1;
    }
    row
}

// 現在の数字の組から取り出せる面子候補 (数字の昇順)
// 槓子(4枚)は候補にしない
fn meld_candidates(values: &[Value]) -> Vec<Shape> {
    let row = count_values(values);
    let mut res = vec![];
    for v in 1..=NUMERIC_MAX {
        let n = row[v as usize];
        if n >= 2 {
            res.push(vec![v, v]);
        }
        if n >= 3 {
            res.push(vec![v, v, v]);
        }
        if v <= CHOW_MAX && n >= 1 && row[v as usize + 1] >= 1 && row[v as usize + 2] >= 1 {
            res.push(vec![v, v + 1, v + 2]);
        }
    }
    res
}

// ソート済みのvaluesからshapeの数字を1つずつ取り除く
fn remove_shape(values: &[Value], shape: &[Value]) -> Vec<Value> {
    let mut rest = values.to_vec();
    for v in shape {
        if let Some(i) = rest.iter().position(|x| x == v) {
            rest.remove(i);
        }
    }
    rest
}

pub fn is_single(shape: &[Value]) -> bool {
    shape.len() == 1
}

pub fn is_pung(shape: &[Value]) -> bool {
    shape.len() == 3 && shape[0] == shape[1] && shape[1] == shape[2]
}

impl Engine {
    // 数牌1色の数字の組を面子と単独牌へ分解するすべての方法を返却
    pub fn partition(&self, values: &[Value]) -> Result<Arc<Partitions>, Error> {
        self.partition_sorted(sorted_values(values)?)
    }

    pub(crate) fn partition_sorted(&self, values: Vec<Value>) -> Result<Arc<Partitions>, Error> {
        self.memoize("partition", &self.partition_cache, values, |vs| {
            self.compute_partitions(vs)
        })
    }

    fn compute_partitions(&self, values: &[Value]) -> Result<Partitions, Error> {
        if values.is_empty() {
            return Ok(vec![vec![]]);
        }

        let candidates = meld_candidates(values);
        if candidates.is_empty() {
            // 面子を作れない場合はすべて単独
            return Ok(vec![values.iter().map(|&v| vec![v]).collect()]);
        }

        // 取り出す順序が違うだけの同じ分解はここで1つにまとまる
        let mut res = BTreeSet::new();
        for shape in candidates {
            let rest = remove_shape(values, &shape);
            for p in self.partition_sorted(rest)?.iter() {
                let mut p2 = p.clone();
                p2.push(shape.clone());
                p2.sort();
                res.insert(p2);
            }
        }
        Ok(res.into_iter().collect())
    }
}
