mod cli;
mod modules;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{Level, info};

use cli::{Args, Settings};
use kubepeek_k8s::ClusterClient;
use kubepeek_report::Report;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse_normalized();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(args.into_settings()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(settings: Settings) -> Result<()> {
    info!(source = %settings.source, timeout = ?settings.timeout, "connecting");

    let client = kubepeek_k8s::connect(&settings.source)
        .await
        .context("unable to create kubernetes client")?;
    let client = ClusterClient::new(client, settings.timeout);

    let mut report = Report::new(io::stdout(), settings.report);
    report.run(&client).await?;

    Ok(())
}
