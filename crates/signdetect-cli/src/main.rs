use anyhow::Result;
use clap::{Parser, Subcommand};
use signdetect_core::config::ClientConfig;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "signdetect")]
#[command(about = "SignDetect - terminal client for the sign-language detection platform", long_about = None)]
struct Cli {
    /// Backend API base URL (overrides SIGNDETECT_API_URL and the default)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Log in, start a detection session and stream predictions until Ctrl-C
    Live {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Poll period in milliseconds (overrides SIGNDETECT_POLL_INTERVAL_MS)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// List completed detection sessions
    History {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Show platform-wide user counters
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match ClientConfig::default_path() {
        Some(path) if path.exists() => ClientConfig::load(&path)?,
        _ => ClientConfig::from_env(),
    };
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    match cli.command {
        Commands::Signup {
            email,
            password,
            name,
        } => commands::account::signup(&config, &email, &password, &name).await,
        Commands::Live {
            email,
            password,
            interval_ms,
        } => {
            if let Some(ms) = interval_ms
                && ms > 0
            {
                config.poll_interval_ms = ms;
            }
            commands::live::run(&config, &email, &password).await
        }
        Commands::History {
            email,
            password,
            page,
            limit,
        } => commands::history::run(&config, &email, &password, page, limit).await,
        Commands::Stats => commands::stats::run(&config).await,
    }
}
