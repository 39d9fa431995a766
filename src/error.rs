use std::fmt;

use crate::model::{Tile, TileGroup, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InvalidTile { group: TileGroup, value: Value },
    InvalidSymbol(String),
    InvalidMeld(Vec<Tile>),
    InvalidValues(Vec<Value>),
    NotNumeric(TileGroup),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTile { group, value } => {
                write!(f, "invalid tile: value {} is out of range for {}", value, group)
            }
            Error::InvalidSymbol(s) => write!(f, "invalid symbol: '{}'", s),
            Error::InvalidMeld(tiles) => {
                let s: Vec<String> = tiles.iter().map(|t| t.to_string()).collect();
                write!(f, "invalid meld: [{}]", s.join(", "))
            }
            Error::InvalidValues(values) => write!(f, "invalid values: {:?}", values),
            Error::NotNumeric(group) => write!(f, "not a numeric group: {}", group),
            Error::Config(msg) => write!(f, "config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
