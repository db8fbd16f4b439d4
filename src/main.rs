use anyhow::Context;
use clap::Parser;
use sinu_checker::{cli, client, config, render, runner};
use cli::{Cli, Commands};
use config::Config;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default = if verbose { "sinu_checker=debug,info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✖ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let renderer = render::Renderer::new(!cli.no_color && std::io::stdout().is_terminal());

    match cli.command {
        Commands::Analyze { photo, expand_all, expand, json } => {
            let config = Config::load().context("failed to load settings")?;
            let client = client::AnalyzeClient::new(&config)?;
            tracing::debug!(endpoint = client.endpoint(), "using analysis API");
            runner::run_analyze(&client, &renderer, &photo, &expand, expand_all, json).await?;
        }

        Commands::Check { photo } => {
            let config = Config::load().context("failed to load settings")?;
            let client = client::AnalyzeClient::new(&config)?;
            tracing::debug!(endpoint = client.endpoint(), "using analysis API");
            runner::run_check(&client, &renderer, photo).await?;
        }

        Commands::Config { set_api_url, set_timeout, show } => {
            // 保存するのはファイルの内容（環境変数の上書きは含めない）
            let mut stored = Config::load_for_update(&Config::config_path()?)?;
            let mut changed = false;

            if let Some(url) = set_api_url {
                stored.set_api_url(url)?;
                changed = true;
                println!("✔ API URL set to {}", stored.api_url);
            }

            if let Some(seconds) = set_timeout {
                stored.set_timeout(seconds);
                changed = true;
                println!("✔ Timeout set to {}", describe_timeout(stored.timeout_seconds));
            }

            if changed {
                stored.save()?;
            }

            if show || !changed {
                let config = stored.with_env_override();
                println!("Settings:");
                println!("  API URL: {}", config.api_url);
                println!("  Endpoint: {}", config.analyze_url());
                println!("  Timeout: {}", describe_timeout(config.timeout_seconds));
                println!("  File: {}", Config::config_path()?.display());
                if std::env::var(config::API_URL_ENV).is_ok() {
                    println!("  ({} is set and overrides the stored URL)", config::API_URL_ENV);
                }
            }
        }
    }

    Ok(())
}

fn describe_timeout(seconds: Option<u64>) -> String {
    match seconds {
        Some(s) => format!("{}s", s),
        None => "none".to_string(),
    }
}
