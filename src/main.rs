use anyhow::Result;
use clap::Parser;
use std::io;

use bmi_log::{run, Args};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // clap exits with usage and code 2 on bad arguments
    let args = Args::parse();
    log::debug!("Arguments: {:?}", args);

    let stdout = io::stdout();
    run(&args, &mut stdout.lock())?;

    Ok(())
}
