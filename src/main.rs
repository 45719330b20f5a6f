use skewer::engine::RandomEngine;
use skewer::uci;

fn main() {
    if let Err(e) = uci::run(RandomEngine::new()) {
        eprintln!("fatal I/O error: {e}");
        std::process::exit(1);
    }
}
