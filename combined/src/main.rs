//! Combined binary for development - runs both services in one process.

use clap::{Parser, Subcommand};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "microservices")]
#[command(about = "Combined microservices binary for development")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run both services in a single process (development mode)
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(long, default_value = "5555")]
        user_port: u16,
        #[arg(long, default_value = "5556")]
        product_port: u16,
    },
}

/// Address product-service uses to reach the in-process user-service.
fn loopback_url(host: &str, port: u16) -> String {
    let target = if host == "0.0.0.0" { "127.0.0.1" } else { host };
    format!("http://{}:{}", target, port)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    common::telemetry::init_tracing("info,tower_http=debug");

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            user_port,
            product_port,
        } => {
            info!("Starting combined services in development mode");
            info!("  User service:    http://{}:{}", host, user_port);
            info!("  Product service: http://{}:{}", host, product_port);

            // Spawn user-service first (product-service calls it)
            let user_host = host.clone();
            let user_handle = tokio::spawn(async move {
                if let Err(e) = user_service_lib::run_embedded(&user_host, user_port).await {
                    error!("User service failed: {}", e);
                }
            });

            // Wait a moment for user-service to start
            tokio::time::sleep(std::time::Duration::from_millis(500)).await;

            let user_service_url = loopback_url(&host, user_port);
            let product_host = host.clone();
            let product_handle = tokio::spawn(async move {
                if let Err(e) = product_service_lib::run_embedded(
                    &product_host,
                    product_port,
                    Some(user_service_url),
                )
                .await
                {
                    error!("Product service failed: {}", e);
                }
            });

            // Wait for either service to exit
            tokio::select! {
                _ = user_handle => {
                    info!("User service stopped");
                }
                _ = product_handle => {
                    info!("Product service stopped");
                }
            }
        }
    }

    Ok(())
}
