//! Signup Form - CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use signup_form::{
    cli::{args::ConnectionArgs, Cli, Commands},
    commands,
    config::SignupConfig,
};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    let config = apply_overrides(SignupConfig::from_env(), cli.connection);
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args).await,
        Commands::Create(args) => commands::create::execute(args, config).await,
    };

    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

fn apply_overrides(mut config: SignupConfig, args: ConnectionArgs) -> SignupConfig {
    if let Some(endpoint) = args.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(token) = args.token {
        config = config.with_token(token);
    }
    if let Some(path) = args.token_file {
        config = config.with_token_file(path);
    }
    if let Some(secs) = args.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    config
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
