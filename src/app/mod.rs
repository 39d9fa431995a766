mod decompose;
mod random;

pub use self::{decompose::DecomposeApp, random::RandomApp};

use crate::engine::{Engine, EngineConfig};
use crate::model::{tiles_to_string, Tile};
use crate::util::log::{set_level, Level};
use crate::util::misc::{next_value, Res};

// 両モード共通のオプション (同じ文字は同じ意味)
#[derive(Debug, Default, PartialEq, Eq)]
struct CommonOptions {
    config_path: String,
    json: bool,
    no_prune: bool,
    stats: bool,
}

impl CommonOptions {
    // 共通オプションだった場合はtrueを返却
    fn parse(&mut self, s: &str, it: &mut std::slice::Iter<'_, String>) -> bool {
        match s {
            "-c" => self.config_path = next_value(it, s),
            "-j" => self.json = true,
            "-p" => self.no_prune = true,
            "-S" => self.stats = true,
            "-v" => set_level(Level::Debug),
            _ => return false,
        }
        true
    }

    fn load_engine(&self) -> Res<Engine> {
        let mut config = if self.config_path.is_empty() {
            EngineConfig::default()
        } else {
            EngineConfig::load(&self.config_path)?
        };
        if self.no_prune {
            config.prune_useful = false;
        }
        Ok(Engine::new(config))
    }
}

// 分解結果の出力 (テキストまたはJSON)
fn print_variants(engine: &Engine, tiles: &[Tile], json: bool) -> Res {
    let vs = engine.decompose(tiles)?;
    if json {
        let v = serde_json::json!({
            "hand": tiles_to_string(tiles),
            "variants": &*vs,
        });
        println!("{}", serde_json::to_string(&v)?);
    } else {
        println!("{}", vs);
    }
    Ok(())
}

fn print_stats(engine: &Engine) -> Res {
    println!("{}", serde_json::to_string_pretty(&engine.stats())?);
    Ok(())
}

#[test]
fn test_common_options() {
    let parse = |args: &[&str]| -> (CommonOptions, Vec<String>) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut opts = CommonOptions::default();
        let mut rest = vec![];
        let mut it = args.iter();
        while let Some(s) = it.next() {
            if !opts.parse(s, &mut it) {
                rest.push(s.clone());
            }
        }
        (opts, rest)
    };

    // Dモード
    let (opts, rest) = parse(&["s1s2s3", "-p", "-S", "-j"]);
    assert!(opts.no_prune && opts.stats && opts.json);
    assert_eq!(rest, vec!["s1s2s3"]);
    assert!(!opts.load_engine().unwrap().config().prune_useful);

    // Rモード 手牌数・シードは共通オプションではない
    let (opts, rest) = parse(&["-n", "3", "-s", "5", "-p", "-S"]);
    assert!(opts.no_prune && opts.stats && !opts.json);
    assert_eq!(rest, vec!["-n", "3", "-s", "5"]);

    let (opts, _) = parse(&["-c", "no/such/config.json"]);
    assert_eq!(opts.config_path, "no/such/config.json");
    assert!(opts.load_engine().is_err());

    let (opts, rest) = parse(&[]);
    assert_eq!(opts, CommonOptions::default());
    assert!(rest.is_empty());
    assert!(opts.load_engine().unwrap().config().prune_useful);
}
