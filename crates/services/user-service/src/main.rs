//! User Service - HTTP server for the user directory.

use clap::{Parser, Subcommand};

use user_service_lib::config::UserServiceConfig;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User directory microservice")]
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
        /// Listen port (defaults to PORT or 5555)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    common::telemetry::init_tracing("info");

    let cli = Cli::parse();
    let config = UserServiceConfig::from_env();

    match cli.command {
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            user_service_lib::run_embedded(&host, port).await?;
        }
    }

    Ok(())
}
