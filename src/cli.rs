use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::CorruptionPolicy;

#[derive(Parser, Debug)]
#[command(author, version, about = "darts scoreboard backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ServeArgs {
    /// Port number
    #[arg(short, long, env = "DARTS_PORT", default_value_t = 5001)]
    pub port: u16,

    /// Directory holding players.json and matches.json
    #[arg(short, long, env = "DARTS_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Shared secret required for write requests (falls back to a development key)
    #[arg(long, env = "DARTS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// How to treat a data file that cannot be parsed
    #[arg(long, env = "DARTS_ON_CORRUPT", value_enum, default_value_t = CorruptionPolicy::Fail)]
    pub on_corrupt: CorruptionPolicy,
}
