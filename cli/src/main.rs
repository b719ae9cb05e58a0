use std::io::{self, IsTerminal};
use std::process;

use log::LevelFilter;

use mazer::{args, run};

fn main() {
    let args = args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let stdout = io::stdout();
    let colored = stdout.is_terminal();
    let mut out = stdout.lock();

    if let Err(e) = run::run(&args, &mut out, colored) {
        eprintln!("Error: {}.", e);
        if let run::RunError::InvalidCell { .. } = e {
            eprintln!("Cells are given as X,Y with 0,0 in the top-left corner.");
        }
        process::exit(1);
    }
}
