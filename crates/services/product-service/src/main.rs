//! Product Service - HTTP server for the product catalog.

use clap::{Parser, Subcommand};

use product_service_lib::config::ProductServiceConfig;

#[derive(Parser)]
#[command(name = "product-service")]
#[command(about = "Product catalog microservice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Bind address (defaults to HOST or 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Listen port (defaults to PORT or 5556)
        #[arg(long)]
        port: Option<u16>,
        /// Base URL of user-service (defaults to USER_SERVICE_URL)
        #[arg(long)]
        user_service_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    common::telemetry::init_tracing("info");

    let cli = Cli::parse();
    let config = ProductServiceConfig::from_env();

    match cli.command {
        Commands::Serve {
            host,
            port,
            user_service_url,
        } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            product_service_lib::run_embedded(&host, port, user_service_url).await?;
        }
    }

    Ok(())
}
