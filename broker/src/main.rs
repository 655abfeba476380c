use broker::{Broker, BrokerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Broker - practice stock-broker REST service

USAGE:
    broker [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 8080)
    JWT_SECRET          HS256 secret used to validate bearer tokens
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with defaults
    broker

    # Run with config file
    broker --config broker.json

    # Run with custom port
    PORT=9000 broker
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "broker=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = if let Some(path) = config_path {
        tracing::info!("Loading configuration from: {}", path);
        let mut config = BrokerConfig::from_file(&path)?;
        config.apply_env_overrides();
        config
    } else {
        tracing::info!("Using default configuration");
        BrokerConfig::from_env()
    };

    tracing::info!("Markets: {}", config.markets.len());
    tracing::info!("Max watchlist symbols: {}", config.watchlist.max_symbols);

    let broker = Broker::new(config)?;

    tracing::info!("Starting Broker");
    tracing::info!("Available endpoints:");
    tracing::info!("  GET    /markets");
    tracing::info!("  GET    /quotes/{{symbol}}");
    for base in ["/account/watchlist", "/account/watchlist-reactive"] {
        tracing::info!("  GET    {}", base);
        tracing::info!("  PUT    {}", base);
        tracing::info!("  DELETE {}", base);
        tracing::info!("  DELETE {}/{{account_id}}", base);
    }

    broker.run().await
}
