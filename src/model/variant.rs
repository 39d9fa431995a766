use std::collections::BTreeSet;

use super::*;

// 手牌の分解1通り 常にソート済み
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MeldList(Vec<Meld>);

impl MeldList {
    pub fn new(mut melds: Vec<Meld>) -> Self {
        melds.sort();
        Self(melds)
    }

    pub fn melds(&self) -> &[Meld] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Meld> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // 構成する牌をソートして返却
    pub fn tiles(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self.0.iter().flat_map(|m| m.tiles()).collect();
        tiles.sort();
        tiles
    }

    pub fn pung_count(&self) -> usize {
        self.0.iter().filter(|m| m.is_pung()).count()
    }

    pub fn single_count(&self) -> usize {
        self.0.iter().filter(|m| m.is_single()).count()
    }
}

impl From<Vec<Meld>> for MeldList {
    fn from(melds: Vec<Meld>) -> Self {
        Self::new(melds)
    }
}

impl<'a> IntoIterator for &'a MeldList {
    type Item = &'a Meld;
    type IntoIter = std::slice::Iter<'a, Meld>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for MeldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v: Vec<String> = self.0.iter().map(|m| m.to_string()).collect();
        write!(f, "{}", v.join(" "))
    }
}

impl fmt::Debug for MeldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

impl<'de> Deserialize<'de> for MeldList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<Meld>::deserialize(deserializer).map(Self::new)
    }
}

// 手牌の分解の集合 ソート済みかつ重複なし
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VariantSet(Vec<MeldList>);

impl VariantSet {
    pub fn iter(&self) -> std::slice::Iter<'_, MeldList> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, ml: &MeldList) -> bool {
        self.0.binary_search(ml).is_ok()
    }

    pub fn variants(&self) -> &[MeldList] {
        &self.0
    }
}

impl FromIterator<MeldList> for VariantSet {
    fn from_iter<I: IntoIterator<Item = MeldList>>(iter: I) -> Self {
        let set: BTreeSet<MeldList> = iter.into_iter().collect();
        Self(set.into_iter().collect())
    }
}

impl From<BTreeSet<MeldList>> for VariantSet {
    fn from(set: BTreeSet<MeldList>) -> Self {
        Self(set.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a MeldList;
    type IntoIter = std::slice::Iter<'a, MeldList>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for VariantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v: Vec<String> = self.0.iter().map(|ml| ml.to_string()).collect();
        write!(f, "{}", v.join("\n"))
    }
}

impl<'de> Deserialize<'de> for VariantSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<MeldList>::deserialize(deserializer).map(|v| v.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meld_list(s: &str) -> MeldList {
        s.split_whitespace()
            .map(|m| Meld::from_symbol(m).unwrap())
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_meld_list_canonical() {
        let a = meld_list("s1s2s3 we wewewe");
        let b = meld_list("wewewe s1s2s3 we");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "we s1s2s3 wewewe");
        assert_eq!(tiles_to_string(&a.tiles()), "s1 s2 s3 we we we we");
        assert_eq!(a.pung_count(), 1);
        assert_eq!(a.single_count(), 1);
    }

    #[test]
    fn test_variant_set_sorted_unique() {
        let vs: VariantSet = vec![
            meld_list("s1s1 s2 s3"),
            meld_list("s1 s1s2s3"),
            meld_list("s2 s3 s1s1"),
        ]
        .into_iter()
        .collect();
        assert_eq!(vs.len(), 2);
        assert_eq!(vs.to_string(), "s1 s1s2s3\ns2 s3 s1s1");
        assert!(vs.contains(&meld_list("s1s2s3 s1")));
        assert!(!vs.contains(&meld_list("s1s2s3")));
    }

    #[test]
    fn test_variant_set_serde() {
        let vs: VariantSet = vec![meld_list("we wewewe"), meld_list("s1s2s3")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&vs).unwrap();
        assert_eq!(json, r#"[["we","wewewe"],["s1s2s3"]]"#);
        assert_eq!(serde_json::from_str::<VariantSet>(&json).unwrap(), vs);
    }
}
