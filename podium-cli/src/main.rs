use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use podium_server::{BrokerConfig, TurnConfig, serve};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "podium", version, about = "Single-presenter WebRTC signaling broker")]
struct Cli {
    /// Address to listen on.
    #[arg(long, env = "PODIUM_BIND", default_value = "0.0.0.0:5555")]
    bind: SocketAddr,

    /// Directory with the browser frontend.
    #[arg(long, env = "PODIUM_STATIC_DIR", default_value = "./static")]
    static_dir: PathBuf,

    /// Do not serve any static files.
    #[arg(long)]
    no_static: bool,

    /// STUN server url handed to clients (repeatable).
    #[arg(long = "stun", env = "PODIUM_STUN_URLS", value_delimiter = ',')]
    stun_urls: Vec<String>,

    /// TURN server url handed to clients with minted credentials (repeatable).
    #[arg(long = "turn", env = "PODIUM_TURN_URLS", value_delimiter = ',')]
    turn_urls: Vec<String>,

    /// Secret shared with the TURN server for credential minting.
    #[arg(long, env = "PODIUM_TURN_SECRET", hide_env_values = true)]
    turn_secret: Option<String>,

    /// Lifetime of minted TURN credentials, in seconds.
    #[arg(long, env = "PODIUM_TURN_TTL", default_value_t = 3600)]
    turn_ttl: u64,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> Result<BrokerConfig> {
        let turn = TurnConfig::from_parts(self.turn_urls, self.turn_secret, self.turn_ttl)
            .context("Invalid TURN settings")?;

        let static_dir = if self.no_static {
            None
        } else if self.static_dir.is_dir() {
            Some(self.static_dir)
        } else {
            warn!(
                "Static directory {} not found, serving signaling only",
                self.static_dir.display()
            );
            None
        };

        Ok(BrokerConfig {
            bind_addr: self.bind,
            static_dir,
            stun_urls: self.stun_urls,
            turn,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("Invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.into_config()?;
    print_banner(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    serve(listener, &config, shutdown_signal()).await?;

    info!("Signaling server stopped");
    Ok(())
}

fn print_banner(config: &BrokerConfig) {
    println!("{}", "📡 Podium signaling broker".green().bold());
    println!("   🔌 WebSocket: ws://{}/ws", config.bind_addr);
    match &config.static_dir {
        Some(dir) => println!("   📂 Frontend:  {}", dir.display()),
        None => println!("   📂 Frontend:  {}", "disabled".dimmed()),
    }
    let relay = if config.turn.is_some() {
        "TURN credentials enabled".cyan()
    } else if config.stun_urls.is_empty() {
        "host candidates only".yellow()
    } else {
        "STUN only".normal()
    };
    println!("   🧊 ICE:       {}", relay);
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
