/**
 * StaffDesk Server Entry Point
 *
 * Loads environment configuration, initializes tracing, builds the Axum
 * application, and serves it on the configured port.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Create the Axum app; this connects to MySQL and runs migrations
    let app = staffdesk::backend::server::init::create_app().await?;

    let port = staffdesk::backend::server::config::listen_port();
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server is running on port {}", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
