use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod inventory {
        pub mod dto;
        pub mod routes;
    }
    pub mod session {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod shopping_list {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod suggestion {
        pub mod dto;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod pantry_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API entry point: wires the in-memory session store into the
/// pantry use cases and serves them over HTTP.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.pantry);

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
