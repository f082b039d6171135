//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Signup Form - create an account on the signup endpoint
#[derive(Parser, Debug)]
#[command(name = "signup-form")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Endpoint and credential overrides (fall back to SIGNUP_* variables)
#[derive(Args, Debug, Default)]
pub struct ConnectionArgs {
    /// Signup endpoint URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Bearer token
    #[arg(long, global = true, conflicts_with = "token_file")]
    pub token: Option<String>,

    /// File containing the bearer token
    #[arg(long, global = true)]
    pub token_file: Option<PathBuf>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a password against the policy
    Check(CheckArgs),

    /// Fill in and submit the signup form
    Create(CreateArgs),
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Password to check
    pub password: String,
}

/// Arguments for the create command
///
/// Missing fields are prompted for, and the form can be resubmitted after a
/// failure. With both fields given the form is submitted once.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Username
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password (prompted with masked input when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}
