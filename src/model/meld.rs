use serde::{de, ser};

use super::*;
use crate::error::Error;

// 宣言順がそのまま面子の順序になる
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MeldKind {
    Single,
    Pair,
    Chow,
    Pung,
}

use MeldKind::*;

// 槓子は存在しない (暗槓・明槓は single + pung として扱う)
// tileは順子の場合は先頭の牌
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Meld {
    kind: MeldKind,
    tile: Tile,
}

impl Meld {
    pub fn single(tile: Tile) -> Self {
        Self { kind: Single, tile }
    }

    pub fn pair(tile: Tile) -> Self {
        Self { kind: Pair, tile }
    }

    pub fn pung(tile: Tile) -> Self {
        Self { kind: Pung, tile }
    }

    pub fn chow(tile: Tile) -> Result<Self, Error> {
        if !tile.is_numeric() || tile.value() > CHOW_MAX {
            let tiles: Vec<Tile> = (0..3).filter_map(|d| tile.shifted(d)).collect();
            return Err(Error::InvalidMeld(tiles));
        }
        Ok(Self { kind: Chow, tile })
    }

    // 牌の並びは問わない
    pub fn from_tiles(tiles: &[Tile]) -> Result<Self, Error> {
        let invalid = || Error::InvalidMeld(tiles.to_vec());
        let mut ts = tiles.to_vec();
        ts.sort();
        match ts.len() {
            1 => Ok(Self::single(ts[0])),
            2 if ts[0] == ts[1] => Ok(Self::pair(ts[0])),
            3 if ts[0] == ts[1] && ts[1] == ts[2] => Ok(Self::pung(ts[0])),
            3 if ts[0].shifted(1) == Some(ts[1]) && ts[0].shifted(2) == Some(ts[2]) => {
                Self::chow(ts[0]).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }

    // 例: "s1s2s3", "wewewe"
    pub fn from_symbol(s: &str) -> Result<Self, Error> {
        Self::from_tiles(&tiles_from_string(s)?)
    }

    #[inline]
    pub fn kind(&self) -> MeldKind {
        self.kind
    }

    #[inline]
    pub fn first(&self) -> Tile {
        self.tile
    }

    pub fn len(&self) -> usize {
        match self.kind {
            Single => 1,
            Pair => 2,
            Chow | Pung => 3,
        }
    }

    pub fn tiles(&self) -> Vec<Tile> {
        match self.kind {
            // 順子は生成時に範囲を確認済み
            Chow => (0..3).filter_map(|d| self.tile.shifted(d)).collect(),
            _ => vec![self.tile; self.len()],
        }
    }

    #[inline]
    pub fn is_single(&self) -> bool {
        self.kind == Single
    }

    #[inline]
    pub fn is_pung(&self) -> bool {
        self.kind == Pung
    }
}

impl fmt::Display for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in self.tiles() {
            write!(f, "{}", t)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Meld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::str::FromStr for Meld {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl ser::Serialize for Meld {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct MeldVisitor;

impl<'de> de::Visitor<'de> for MeldVisitor {
    type Value = Meld;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("meld symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Meld::from_symbol(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Meld {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(MeldVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::MeldKind::*;
    use super::*;

    fn meld(s: &str) -> Meld {
        Meld::from_symbol(s).unwrap()
    }

    #[test]
    fn test_meld_kind() {
        assert_eq!(meld("s5").kind(), Single);
        assert_eq!(meld("dgdg").kind(), Pair);
        assert_eq!(meld("wewewe").kind(), Pung);
        assert_eq!(meld("b7b8b9").kind(), Chow);
        // 並びは正規化される
        assert_eq!(meld("c4c2c3"), meld("c2c3c4"));
        assert_eq!(meld("c4c2c3").to_string(), "c2c3c4");
    }

    #[test]
    fn test_invalid_meld() {
        for s in ["", "s1s2", "s1s1s1s1", "s1s2s4", "s8s9s1", "s1b2c3", "wewswwn", "dbdgdr"] {
            assert!(Meld::from_symbol(s).is_err(), "{}", s);
        }
        let t = Tile::from_symbol("s8").unwrap();
        assert!(Meld::chow(t).is_err());
        let t = Tile::from_symbol("we").unwrap();
        assert!(Meld::chow(t).is_err());
        assert_eq!(
            Meld::from_symbol("s1s1s1s1"),
            Err(Error::InvalidMeld(tiles_from_string("s1s1s1s1").unwrap()))
        );
    }

    #[test]
    fn test_meld_tiles() {
        let m = meld("s5s3s4");
        assert_eq!(m.len(), 3);
        assert_eq!(m.first(), Tile::from_symbol("s3").unwrap());
        assert_eq!(tiles_to_string(&m.tiles()), "s3 s4 s5");
        assert_eq!(tiles_to_string(&meld("drdr").tiles()), "dr dr");
        assert!(meld("b2").is_single());
        assert!(meld("b2b2b2").is_pung());
    }

    #[test]
    fn test_meld_order() {
        // 種別 -> 牌 の順
        let mut ms = vec![meld("s1s1s1"), meld("s2s3s4"), meld("s1s1"), meld("c9"), meld("s1")];
        ms.sort();
        let v: Vec<String> = ms.iter().map(|m| m.to_string()).collect();
        assert_eq!(v, vec!["s1", "c9", "s1s1", "s2s3s4", "s1s1s1"]);
    }

    #[test]
    fn test_meld_serde() {
        let m = meld("b1b2b3");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"b1b2b3\"");
        assert_eq!(serde_json::from_str::<Meld>(&json).unwrap(), m);
        assert!(serde_json::from_str::<Meld>("\"b1b2b4\"").is_err());
    }
}
