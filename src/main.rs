use anyhow::Result;
use clap::Parser;
use std::io;
use subenum::{Args, Settings, SubenumEngine, SystemRunner};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let engine = SubenumEngine::new(Settings::default(), SystemRunner);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    engine
        .run(&args, &mut input, &mut out)
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    Ok(())
}
