pub mod init;
pub mod migrate;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "atelier")]
#[command(version)]
#[command(about = "Personal blog & portfolio backend", long_about = None)]
pub struct Cli {
    #[arg(short, long, default_value = "atelier.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a config file, database, and first admin token
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Run the API server
    Serve {
        #[arg(short = 'H', long)]
        host: Option<String>,
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Apply pending database migrations
    Migrate,
    /// Manage admin API tokens
    Token {
        #[command(subcommand)]
        command: TokenCommand,
    },
}

#[derive(Subcommand)]
pub enum TokenCommand {
    /// Mint a new token; the raw value is printed once
    New {
        #[arg(long, default_value = "admin")]
        user: String,
        #[arg(long, default_value = "cli")]
        name: String,
        /// RFC 3339 expiry; omit for a non-expiring token
        #[arg(long)]
        expires: Option<String>,
    },
    List,
    Revoke {
        id: i64,
    },
}
