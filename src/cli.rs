//! Command-line interface for `skymap-server`.

use clap::{Args, Parser, Subcommand};

/// SkyMap: map annotation server
#[derive(Debug, Parser)]
#[command(name = "skymap-server", version, about, long_about = None)]
pub struct Cli {
    /// Configuration overlay to load (`config/{env}.toml`); falls back to
    /// `SKYMAP_ENV`, then `development`
    #[arg(short, long)]
    pub env: Option<String>,

    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the PBKDF2 hash of a password for `ADMIN_PASSWORD_HASH`
    HashPassword(HashPasswordArgs),
}

/// Arguments for the serve command
#[derive(Debug, Default, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Arguments for the hash-password command
#[derive(Debug, Args)]
pub struct HashPasswordArgs {
    /// Password to hash
    pub password: String,

    /// Salt (the same value goes into `ADMIN_PASSWORD_SALT`)
    #[arg(short, long)]
    pub salt: String,

    /// PBKDF2 iteration count
    #[arg(short, long, default_value_t = 200_000)]
    pub iterations: u32,
}

impl Cli {
    /// The selected configuration environment.
    pub fn environment(&self) -> String {
        self.env
            .clone()
            .or_else(|| std::env::var("SKYMAP_ENV").ok())
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| "development".to_string())
    }
}
