use std::path::PathBuf;

use anyhow::{Context, Result};
use tilde::{app::App, logging};

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init_logging().context("initialize logging failed")?;
    let file_path = std::env::args().nth(1).map(PathBuf::from);
    let app = App::new().context("initialize app failed")?;
    app.run(file_path).context("run app failed")
}
