use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bst_queue::menu::Session;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bst_queue")]
#[command(about = "Load integers into a binary search tree and convert it to a queue.", long_about = None)]
struct Cli {
    /// File of whitespace separated integers to load.
    #[arg(long, env = "BST_QUEUE_FILE", default_value = "numbers.txt")]
    file: PathBuf,
    /// Load, display, report, and convert once instead of showing the menu.
    #[arg(long)]
    batch: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting with {:?}", cli);

    let stdin = io::stdin();
    let mut session = Session::<i64, _, _>::new(&cli.file, stdin.lock(), io::stdout().lock());
    if cli.batch {
        session
            .run_batch()
            .with_context(|| format!("batch run over {}", session.source().display()))
    } else {
        session.run().context("interactive session")
    }
}
