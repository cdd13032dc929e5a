//! Command-line surface of the `expertdb` probe.

use clap::{Parser, Subcommand};
use expertdb_core::types::DbId;

/// Probe an ExpertDB API from the command line.
///
/// Connection settings come from `EXPERTDB_*` environment variables (or a
/// `.env` file). Set `EXPERTDB_TOKEN` to call protected endpoints.
#[derive(Debug, Parser)]
#[command(name = "expertdb", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Check that the API is reachable
    Health,
    /// Overall expert statistics
    Stats,
    /// List experts
    Experts {
        #[arg(default_value_t = 10)]
        limit: u32,
        #[arg(default_value_t = 0)]
        offset: u32,
    },
    /// Show one expert
    Expert { id: DbId },
    /// Log in and show the user profile
    Login { email: String, password: String },
}
