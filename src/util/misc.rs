use std::fmt;

use crate::error_exit;

pub type Res<T = ()> = Result<T, Box<dyn std::error::Error>>;

// コマンドライン引数のオプション値を取得 (取得できない場合は終了)
pub fn next_value<T>(it: &mut std::slice::Iter<'_, String>, opt: &str) -> T
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let n = match it.next() {
        Some(n) => n,
        None => error_exit!("{}: value missing", opt),
    };
    match n.parse() {
        Ok(v) => v,
        Err(e) => error_exit!("{}: {} '{}'", opt, e, n),
    }
}

pub fn vec_count<T: PartialEq>(v: &[T], e: &T) -> usize {
    v.iter().filter(|&n| n == e).count()
}

// 各リストから1つずつ選んだ組み合わせ(直積)をすべて返却
// 空のリストが1つでもあれば組み合わせは存在しない
// リスト自体が空の場合は空の組み合わせ1つ
pub fn cartesian_product<T>(vv: &[Vec<T>]) -> Vec<Vec<&T>> {
    if vv.is_empty() {
        return vec![vec![]];
    }
    if vv.iter().any(|l| l.is_empty()) {
        return vec![];
    }

    let lens: Vec<usize> = vv.iter().map(|l| l.len()).collect();
    let mut idxs = vec![0; vv.len()];
    let mut res = vec![];
    loop {
        res.push(idxs.iter().enumerate().map(|(i1, &i2)| &vv[i1][i2]).collect());

        // 末尾の添字から繰り上げ
        let mut i = idxs.len();
        loop {
            if i == 0 {
                return res;
            }
            i -= 1;
            if idxs[i] < lens[i] - 1 {
                idxs[i] += 1;
                break;
            }
            idxs[i] = 0;
        }
    }
}

#[test]
fn test_cartesian_product() {
    let vv = vec![vec![1, 2], vec![3], vec![4, 5]];
    let res: Vec<Vec<i32>> = cartesian_product(&vv)
        .into_iter()
        .map(|v| v.into_iter().copied().collect())
        .collect();
    assert_eq!(
        res,
        vec![vec![1, 3, 4], vec![1, 3, 5], vec![2, 3, 4], vec![2, 3, 5]]
    );

    let empty: Vec<Vec<i32>> = vec![];
    assert_eq!(cartesian_product(&empty).len(), 1);
    assert!(cartesian_product(&[vec![1], vec![]]).is_empty());
}

#[test]
fn test_vec_count() {
    assert_eq!(vec_count(&[1, 1, 2, 1], &1), 3);
    assert_eq!(vec_count(&[1, 1, 2, 1], &3), 0);
}
