use clap::Parser;
use mergington_activities::{self, server::ServerConfig};
use std::path::PathBuf;

/// Mergington High School activities API server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "MERGINGTON_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8000, env = "MERGINGTON_PORT")]
    port: u16,

    /// Directory holding index.html and the other static assets
    #[arg(long, default_value = "static", env = "MERGINGTON_STATIC_DIR")]
    static_dir: PathBuf,

    /// JSON file with the activities to start with, instead of the built-in set
    #[arg(long, env = "MERGINGTON_SEED_FILE")]
    seed_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() {
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        static_dir: cli.static_dir,
        seed_file: cli.seed_file,
    };

    if let Err(e) = mergington_activities::start_with_config(config, &cli.log_level).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
