//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::app_config::LogLevel;
use crate::application::ConcurrencyPolicy;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "brewcard",
    version,
    about = "Loyalty-program member session client",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Handling of a request made while another is pending.
    #[arg(long, value_enum, global = true)]
    pub concurrency: Option<ConcurrencyPolicy>,

    /// Sign in right after a successful registration.
    #[arg(long, global = true)]
    pub sign_in_after_register: Option<bool>,

    /// Skip simulated backend latency.
    #[arg(long, global = true)]
    pub no_latency: bool,

    /// Print the member summary as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Action to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and print the member summary.
    Login {
        /// Sign-in email.
        #[arg(long, env = "BREWCARD_EMAIL")]
        email: String,

        /// Sign-in password.
        #[arg(long, env = "BREWCARD_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create a new member account.
    Register {
        /// Display name.
        #[arg(long)]
        name: String,

        /// Sign-in email.
        #[arg(long)]
        email: String,

        /// Password, at least 8 characters.
        #[arg(long)]
        password: String,

        /// Password typed a second time.
        #[arg(long)]
        confirm_password: String,
    },

    /// Walk through restore, a failed sign-in, the demo sign-in and sign-out.
    Demo,
}
