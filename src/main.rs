mod cli;
mod config;
mod dial;
mod model;
mod puzzle;
mod reducer;
mod storage;
mod store;
mod tui;

use std::process;

use config::Config;

fn main() {
    let config = match Config::load_or_default() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
