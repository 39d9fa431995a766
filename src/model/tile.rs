use serde::{de, ser};

use super::*;
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileGroup {
    Stone,
    Bamboo,
    Character,
    Wind,
    Dragon,
    Flower,
    Season,
}

use TileGroup::*;

impl TileGroup {
    pub const ALL: [TileGroup; 7] = [Stone, Bamboo, Character, Wind, Dragon, Flower, Season];
    pub const NUMERIC: [TileGroup; 3] = [Stone, Bamboo, Character];

    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            's' => Stone,
            'b' => Bamboo,
            'c' => Character,
            'w' => Wind,
            'd' => Dragon,
            'f' => Flower,
            'y' => Season,
            _ => return None,
        })
    }

    pub fn to_char(self) -> char {
        match self {
            Stone => 's',
            Bamboo => 'b',
            Character => 'c',
            Wind => 'w',
            Dragon => 'd',
            Flower => 'f',
            Season => 'y',
        }
    }

    pub fn max_value(self) -> Value {
        match self {
            Stone | Bamboo | Character => NUMERIC_MAX,
            Wind | Flower | Season => 4,
            Dragon => 3,
        }
    }

    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, Stone | Bamboo | Character)
    }

    #[inline]
    pub fn is_honour(self) -> bool {
        matches!(self, Wind | Dragon)
    }

    #[inline]
    pub fn is_bonus(self) -> bool {
        matches!(self, Flower | Season)
    }

    // 数字部分の文字 (数牌以外は英字)
    fn value_from_char(self, c: char) -> Option<Value> {
        match self {
            Stone | Bamboo | Character => match c {
                '1'..='9' => c.to_digit(10).map(|d| d as Value),
                _ => None,
            },
            Wind | Flower | Season => match c {
                'e' => Some(WE),
                's' => Some(WS),
                'w' => Some(WW),
                'n' => Some(WN),
                _ => None,
            },
            Dragon => match c {
                'b' => Some(DB),
                'g' => Some(DG),
                'r' => Some(DR),
                _ => None,
            },
        }
    }

    fn value_to_char(self, value: Value) -> char {
        const WINDS: [char; 4] = ['e', 's', 'w', 'n'];
        const DRAGONS: [char; 3] = ['b', 'g', 'r'];
        let i = value as usize - 1;
        match self {
            Stone | Bamboo | Character => (b'0' + value) as char,
            Wind | Flower | Season => WINDS[i],
            Dragon => DRAGONS[i],
        }
    }
}

impl fmt::Display for TileGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stone => "stone",
            Bamboo => "bamboo",
            Character => "character",
            Wind => "wind",
            Dragon => "dragon",
            Flower => "flower",
            Season => "season",
        };
        write!(f, "{}", name)
    }
}

// 順序は (牌種, 数字) の辞書順
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile {
    group: TileGroup,
    value: Value,
}

impl Tile {
    pub fn new(group: TileGroup, value: Value) -> Result<Self, Error> {
        if value == 0 || value > group.max_value() {
            return Err(Error::InvalidTile { group, value });
        }
        Ok(Self { group, value })
    }

    pub fn from_symbol(s: &str) -> Result<Self, Error> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(Error::InvalidSymbol(s.to_string()));
        }
        let group =
            TileGroup::from_char(chars[0]).ok_or_else(|| Error::InvalidSymbol(s.to_string()))?;
        let value = group
            .value_from_char(chars[1])
            .ok_or_else(|| Error::InvalidSymbol(s.to_string()))?;
        Self::new(group, value)
    }

    #[inline]
    pub fn group(&self) -> TileGroup {
        self.group
    }

    #[inline]
    pub fn value(&self) -> Value {
        self.value
    }

    // 数牌
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.group.is_numeric()
    }

    // 字牌 (風牌, 三元牌)
    #[inline]
    pub fn is_honour(&self) -> bool {
        self.group.is_honour()
    }

    // 花牌, 季節牌
    #[inline]
    pub fn is_bonus(&self) -> bool {
        self.group.is_bonus()
    }

    // 1,9牌
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.is_numeric() && (self.value == 1 || self.value == NUMERIC_MAX)
    }

    // 么九牌
    #[inline]
    pub fn is_major(&self) -> bool {
        self.is_terminal() || self.is_honour()
    }

    // 同じ牌種で数字をdだけずらした牌 (範囲外はNone)
    pub fn shifted(&self, d: Value) -> Option<Self> {
        Self::new(self.group, self.value.checked_add(d)?).ok()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.group.to_char(),
            self.group.value_to_char(self.value)
        )
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl std::str::FromStr for Tile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

impl ser::Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

struct TileVisitor;

impl<'de> de::Visitor<'de> for TileVisitor {
    type Value = Tile;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("tile symbol")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Tile::from_symbol(v).map_err(E::custom)
    }
}

impl<'de> de::Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_str(TileVisitor)
    }
}

// 牌の文字列表現をパース 空白は無視
// 例: "s1 s2 s3 we we", "s1s2s3wewe"
pub fn tiles_from_string(exp: &str) -> Result<Vec<Tile>, Error> {
    let chars: Vec<char> = exp.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.len() % 2 != 0 {
        return Err(Error::InvalidSymbol(exp.to_string()));
    }
    chars
        .chunks(2)
        .map(|c| Tile::from_symbol(&c.iter().collect::<String>()))
        .collect()
}

pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let v: Vec<String> = tiles.iter().map(|t| t.to_string()).collect();
    v.join(" ")
}

#[cfg(test)]
mod tests {
    use super::TileGroup::*;
    use super::*;

    #[test]
    fn test_tile_symbol() {
        for s in ["s1", "b9", "c5", "we", "wn", "db", "dr", "fe", "yn"] {
            assert_eq!(Tile::from_symbol(s).unwrap().to_string(), s);
        }
        let t = Tile::from_symbol("dg").unwrap();
        assert_eq!(t.group(), Dragon);
        assert_eq!(t.value(), DG);
    }

    #[test]
    fn test_invalid_tile() {
        assert_eq!(
            Tile::new(Dragon, 4),
            Err(Error::InvalidTile {
                group: Dragon,
                value: 4
            })
        );
        assert!(Tile::new(Stone, 0).is_err());
        assert!(Tile::new(Bamboo, 10).is_err());
        assert!(Tile::new(Wind, 5).is_err());
        assert!(Tile::from_symbol("x1").is_err());
        assert!(Tile::from_symbol("s0").is_err());
        assert!(Tile::from_symbol("wb").is_err());
        assert!(Tile::from_symbol("s12").is_err());
    }

    #[test]
    fn test_predicates() {
        let t = |s| Tile::from_symbol(s).unwrap();
        assert!(t("s1").is_terminal() && t("s1").is_major());
        assert!(!t("c5").is_terminal() && !t("c5").is_major());
        assert!(t("we").is_honour() && t("we").is_major() && !t("we").is_terminal());
        assert!(t("fe").is_bonus() && !t("fe").is_honour() && !t("fe").is_major());
        assert!(t("b3").is_numeric() && !t("dr").is_numeric());
        assert_eq!(t("s8").shifted(1), Some(t("s9")));
        assert_eq!(t("s8").shifted(2), None);
    }

    #[test]
    fn test_tile_order() {
        let mut tiles = tiles_from_string("yn fe dr we c1 b9 s2 s1").unwrap();
        tiles.sort();
        assert_eq!(tiles_to_string(&tiles), "s1 s2 b9 c1 we dr fe yn");
    }

    #[test]
    fn test_tiles_from_string() {
        let a = tiles_from_string("s1 s2 s3 we").unwrap();
        let b = tiles_from_string("s1s2s3we").unwrap();
        assert_eq!(a, b);
        assert!(tiles_from_string("").unwrap().is_empty());
        assert!(tiles_from_string("s1 s").is_err());
    }

    #[test]
    fn test_tile_serde() {
        let t = Tile::from_symbol("dr").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"dr\"");
        assert_eq!(serde_json::from_str::<Tile>(&json).unwrap(), t);
        assert!(serde_json::from_str::<Tile>("\"d9\"").is_err());
    }
}
