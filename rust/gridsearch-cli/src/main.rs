use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use gridsearch_cli::{run, Args, Config};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);
    if json {
        builder.with_ansi(false).json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json);

    let cfg = Config::from_env().merge_args(&args);
    info!(?args, ?cfg, core_version = %gridsearch_core::version(), "starting gridsearch");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&args, &cfg, &mut out) {
        Ok(summary) => {
            out.flush()?;
            info!(written = summary.written.len(), "done");
            Ok(())
        }
        Err(e) => {
            error!(error = ?e, "run failed");
            Err(e)
        }
    }
}
