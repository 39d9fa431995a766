use super::{print_stats, print_variants, CommonOptions};
use crate::model::tiles_to_string;
use crate::util::misc::*;
use crate::util::wall::{draw_hands, full_tile_set};
use crate::{error, info};

// ランダムな手牌を生成して分解 (動作確認・計測用)
#[derive(Debug)]
pub struct RandomApp {
    args: Vec<String>,
    seed: u64,
    n_hands: usize,
    n_tiles: usize,
    opts: CommonOptions,
}

impl RandomApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            seed: 0,
            n_hands: 1,
            n_tiles: 14,
            opts: CommonOptions::default(),
        }
    }

    pub fn run(&mut self) {
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            if self.opts.parse(s, &mut it) {
                continue;
            }
            match s.as_str() {
                "-n" => self.n_hands = next_value(&mut it, s),
                "-s" => self.seed = next_value(&mut it, s),
                "-t" => self.n_tiles = next_value(&mut it, s),
                _ => {
                    error!("unknown option: {}", s);
                    print_usage();
                    return;
                }
            }
        }

        if self.n_tiles == 0 || self.n_tiles > full_tile_set().len() {
            error!("invalid number of tiles: {}", self.n_tiles);
            return;
        }

        let engine = match self.opts.load_engine() {
            Ok(engine) => engine,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };
        info!(
            "seed: {}, hands: {}, tiles: {}",
            self.seed, self.n_hands, self.n_tiles
        );

        for hand in draw_hands(self.seed, self.n_hands, self.n_tiles) {
            if !self.opts.json {
                println!("> {}", tiles_to_string(&hand));
            }
            if let Err(e) = print_variants(&engine, &hand, self.opts.json) {
                error!("{}", e);
            }
            if !self.opts.json {
                println!();
            }
        }

        if self.opts.stats {
            if let Err(e) = print_stats(&engine) {
                error!("{}", e);
            }
        }
    }
}

fn print_usage() {
    error!(
        r"Usage
    $ cargo run R [-n COUNT] [-s SEED] [-t TILES] [-c CONFIG] [-j] [-p] [-S] [-v]
Options
    -n: number of hands (default: 1)
    -s: random seed (default: 0)
    -t: number of tiles per hand (default: 14)
    -c: load engine config (json)
    -j: print variants as json
    -p: disable useful variant filter
    -S: print cache statistics
    -v: print debug log
"
    );
}
