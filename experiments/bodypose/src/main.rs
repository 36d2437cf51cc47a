mod args;

use anyhow::Context as _;
use args::Args;
use clap::Parser;
use inference::{Engine, VaalEngine, report, run_batch};
use std::{
    io::{self, Write},
    process::ExitCode,
};

fn main() -> ExitCode {
    base::init_stderr_logger();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.version {
        let engine = VaalEngine::load().context("failed to load the VAAL library")?;
        println!("{}", report::version_line(&engine.version()));
        return Ok(());
    }

    let config = args.into_config()?;
    let engine = VaalEngine::load().context("failed to load the VAAL library")?;
    log::info!(
        "VAAL {} engine={} norm={} images={}",
        engine.version(),
        config.engine(),
        config.run().normalization,
        config.images().len()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let processed = run_batch(&engine, &config, &mut out);
    out.flush()?;
    let processed = processed?;
    log::debug!("processed {} images", processed);
    Ok(())
}
