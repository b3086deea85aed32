use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use pay_package_engine::api::{AppState, create_router};
use pay_package_engine::config::ConfigLoader;
use pay_package_engine::init_tracing;
use pay_package_engine::rates::{GsaRateClient, RateProvider, StaticRates};

#[derive(Parser, Debug)]
#[command(name = "pay-package-server", version, about = "Travel staffing pay package calculator")]
struct Cli {
    /// Directory containing the YAML configuration files
    #[arg(long, env = "PAY_PACKAGE_CONFIG_DIR", default_value = "config/standard")]
    config_dir: PathBuf,

    /// Address to listen on
    #[arg(long, env = "PAY_PACKAGE_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// Per-diem rate proxy URL, overriding per_diem.yaml
    #[arg(long, env = "PAY_PACKAGE_RATES_URL")]
    rates_url: Option<String>,

    /// Skip rate lookups and always use the standard rates
    #[arg(long, env = "PAY_PACKAGE_OFFLINE")]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing();

    let loader = ConfigLoader::load(&args.config_dir)
        .with_context(|| format!("loading configuration from {}", args.config_dir.display()))?;
    let config = loader.config().clone();

    info!(
        name = %config.calculator().metadata.name,
        version = %config.calculator().metadata.version,
        margins = config.margins().len(),
        "Configuration loaded"
    );

    let rates: RateProvider = if args.offline {
        info!("Offline mode, using standard per-diem rates");
        StaticRates::new(loader.fallback_rates()).into()
    } else {
        let mut client = GsaRateClient::new(config.per_diem())?;
        if let Some(url) = args.rates_url {
            client = client.with_base_url(url);
        }
        info!(rates_url = %client.base_url(), "Using per-diem rate proxy");
        client.into()
    };

    let router = create_router(AppState::new(config, rates));
    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;

    info!(address = %args.bind, "Pay package server listening");
    axum::serve(listener, router).await?;

    Ok(())
}
