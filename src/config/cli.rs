use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "laptop-tiers")]
#[command(about = "Classify laptop hardware into performance tiers and recommend activities")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Allowed CORS origins; omit to allow any origin
    #[arg(long, value_delimiter = ',')]
    pub allowed_origins: Vec<String>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
