use anyhow::Result;
use clap::Parser;
use summarist::application::{ServerConfig, serve};
use summarist::infrastructure::client::SummaristClient;
use summarist::presentation::cli::{Cli, Commands, books};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();
    let request_timeout = cli.request_timeout();

    match cli.command {
        Commands::Serve(cmd) => {
            let config = ServerConfig {
                bind_address: cmd.bind_address,
                api_url: cli.api_url,
                request_timeout,
            };
            serve(config).await
        }
        Commands::Book { command } => {
            let client = SummaristClient::from_base_url(&cli.api_url, request_timeout)?;
            books::run(&client, command).await
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}
