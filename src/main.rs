#![warn(rust_2018_idioms)]

use mahjong_meld::app;
use mahjong_meld::error;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        error!("mode not specified");
        return;
    }

    let args2 = args[2..].to_vec();
    match args[1].as_str() {
        "D" => {
            // Decompose (手牌分解モード)
            app::DecomposeApp::new(args2).run();
        }
        "R" => {
            // Random (ランダム手牌分解モード)
            app::RandomApp::new(args2).run();
        }
        m => {
            error!("unknown mode: {}", m)
        }
    }
}
