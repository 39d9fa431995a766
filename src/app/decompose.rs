use std::fs::File;
use std::io::{self, BufRead};

use super::{print_stats, print_variants, CommonOptions};
use crate::engine::Engine;
use crate::model::*;
use crate::util::misc::*;
use crate::{error, info};

#[derive(Debug)]
pub struct DecomposeApp {
    args: Vec<String>,
    opts: CommonOptions,
}

impl DecomposeApp {
    pub fn new(args: Vec<String>) -> Self {
        Self {
            args,
            opts: CommonOptions::default(),
        }
    }

    pub fn run(&mut self) {
        let mut file_path = "".to_string();
        let mut exp = "".to_string();
        let mut it = self.args.iter();
        while let Some(s) = it.next() {
            if self.opts.parse(s, &mut it) {
                continue;
            }
            match s.as_str() {
                "-f" => file_path = next_value(&mut it, s),
                _ => {
                    if s.starts_with('-') {
                        error!("unknown option: {}", s);
                        return;
                    }
                    // 空白区切りで複数の引数に分かれた手牌は連結
                    if !exp.is_empty() {
                        exp.push(' ');
                    }
                    exp.push_str(s);
                }
            }
        }

        if file_path.is_empty() == exp.is_empty() {
            print_usage();
            return;
        }

        let engine = match self.opts.load_engine() {
            Ok(engine) => engine,
            Err(e) => {
                error!("{}", e);
                return;
            }
        };
        info!("{:?}", engine.config());

        if !exp.is_empty() {
            if let Err(e) = self.process_expression(&engine, &exp) {
                error!("{}", e);
            }
        } else if let Err(e) = self.run_from_file(&engine, &file_path) {
            error!("{}", e);
        }

        if self.opts.stats {
            if let Err(e) = print_stats(&engine) {
                error!("{}", e);
            }
        }
    }

    fn run_from_file(&self, engine: &Engine, file_path: &str) -> Res {
        let file = File::open(file_path)?;
        let lines = io::BufReader::new(file).lines();
        for exp in lines.map_while(Result::ok) {
            let e = exp.trim();
            if e.is_empty() || e.starts_with('#') {
                // 空行とコメント行はスキップ
                println!("> {}", exp);
            } else if let Err(e) = self.process_expression(engine, e) {
                error!("{}", e);
            }
            println!();
        }
        Ok(())
    }

    fn process_expression(&self, engine: &Engine, exp: &str) -> Res {
        let exp = exp.split('#').next().unwrap_or_default(); // コメント削除
        let exp = exp.split("=>").next().unwrap_or_default(); // 期待値は無視
        if !self.opts.json {
            println!("> {}", exp.trim());
        }
        let tiles = tiles_from_string(exp)?;
        print_variants(engine, &tiles, self.opts.json)
    }
}

fn print_usage() {
    error!(
        r"invalid input
Usage
    $ cargo run D EXPRESSION [-j] [-p] [-S] [-c CONFIG] [-v]
    $ cargo run D -f FILE [-j] [-p] [-S] [-c CONFIG] [-v]
Options
    -f: read expressions from file instead of a commandline expression
    -c: load engine config (json)
    -j: print variants as json
    -p: disable useful variant filter
    -S: print cache statistics
    -v: print debug log
"
    );
}

#[test]
fn test_decompose_file() {
    let engine = Engine::default();
    let app = DecomposeApp::new(vec![]);
    let file = File::open("tests/hands.txt").unwrap();
    let lines = io::BufReader::new(file).lines();
    for exp in lines.map_while(Result::ok) {
        let e = exp.trim();
        if e.is_empty() || e.starts_with('#') {
            continue;
        }
        app.process_expression(&engine, e).unwrap();

        // "手牌 => 含まれるべき分解" の形式
        if let Some((hand, expected)) = e.split_once("=>") {
            let ml: MeldList = expected
                .split_whitespace()
                .map(|m| Meld::from_symbol(m).unwrap())
                .collect::<Vec<_>>()
                .into();
            let mut tiles = tiles_from_string(hand).unwrap();
            tiles.sort();
            assert_eq!(ml.tiles(), tiles, "{}", e);

            let vs = engine.decompose(&tiles).unwrap();
            assert!(vs.contains(&ml), "{}", e);
        }
    }
}
