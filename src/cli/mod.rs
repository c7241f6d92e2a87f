//! CLI argument parsing
//!
//! Defines the command-line interface using clap.

use clap::{Parser, Subcommand};

/// oVirt system-test suite support tool
#[derive(Parser, Debug)]
#[command(name = "ost-suite")]
#[command(version)]
#[command(about = "Inspect suite configuration and wait for services")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the suite configuration resolved from the environment
    Env(EnvArgs),

    /// Compare two version tokens
    Compare(CompareArgs),

    /// Wait until a TCP endpoint accepts connections
    WaitTcp(WaitTcpArgs),
}

/// Arguments for the env command
#[derive(Parser, Debug)]
pub struct EnvArgs {
    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Left-hand version token
    pub left: String,

    /// Right-hand version token
    pub right: String,
}

/// Arguments for the wait-tcp command
#[derive(Parser, Debug)]
pub struct WaitTcpArgs {
    /// Endpoint to probe, host:port
    #[arg(short, long)]
    pub addr: String,

    /// Overall timeout in seconds
    #[arg(short, long, default_value = "120")]
    pub timeout: u64,

    /// Interval between attempts in seconds
    #[arg(short, long, default_value = "3")]
    pub interval: u64,
}
