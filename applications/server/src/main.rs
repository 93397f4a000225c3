/// Roster Server - user directory REST API
use clap::{Parser, Subcommand};
use roster_core::{MemoryStore, SessionManager, UserRepository};
use roster_server::{api, config::ServerConfig, services::verifier::JwtVerifier, state::AppState};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user directory server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Print the demo user directory
    ListUsers,
    /// Mint a bearer token for trying the session endpoint
    MintToken {
        /// Subject to embed in the token
        #[arg(short, long)]
        subject: String,
        /// Token lifetime in hours
        #[arg(short, long, default_value_t = 24)]
        ttl_hours: i64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await?,
        Commands::ListUsers => list_users().await?,
        Commands::MintToken { subject, ttl_hours } => mint_token(&subject, ttl_hours)?,
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize the user store
    let users: Arc<dyn UserRepository> = if config.store.seed_demo_users {
        Arc::new(MemoryStore::seeded())
    } else {
        Arc::new(MemoryStore::new())
    };
    tracing::info!(
        "User store initialized (seeded: {})",
        config.store.seed_demo_users
    );

    // Initialize the session manager around the JWT verifier
    let verifier = Arc::new(JwtVerifier::new(config.auth.jwt_secret.clone()));
    let sessions = Arc::new(SessionManager::new(verifier));
    tracing::info!("Session manager initialized");

    // Build application state and router
    let app_state = AppState::new(users, sessions);
    let app = api::router(app_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive());

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let store = MemoryStore::seeded();
    let users = store.list().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} <{}>", user.id, user.name, user.email);
    }

    Ok(())
}

fn mint_token(subject: &str, ttl_hours: i64) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    let verifier = JwtVerifier::new(config.auth.jwt_secret);
    let token = verifier.mint(subject, ttl_hours)?;
    println!("{token}");

    Ok(())
}
