//! ost-suite - suite support tool for oVirt system-test runs
//!
//! Companion binary to the `ost_suite` library: inspect the resolved
//! suite configuration, compare version tokens the way the test gates
//! do, and wait for services to come up.
//!
//! ## Usage
//!
//! ```bash
//! # Show the configuration resolved from SUITE / IP_VERSION / OST_REPO_ROOT
//! ost-suite env --format json
//!
//! # Three-way version comparison, prints -1 / 0 / 1
//! ost-suite compare 4.10 4.9
//!
//! # Block until the engine API port accepts connections
//! ost-suite wait-tcp --addr engine.example.com:443 --timeout 600
//! ```

use std::cmp::Ordering;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ost_suite::config::SuiteConfig;
use ost_suite::sync::{ErrorPolicy, SyncConfig};
use ost_suite::utils::logger::{init_logger, LogLevel};
use ost_suite::version;

mod cli;

use cli::{Args, Command, CompareArgs, EnvArgs, WaitTcpArgs};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(LogLevel::from_verbosity(args.verbose));

    match args.command {
        Command::Env(env_args) => show_env(env_args),
        Command::Compare(compare_args) => compare(compare_args),
        Command::WaitTcp(wait_args) => wait_tcp(wait_args),
    }
}

fn show_env(args: EnvArgs) -> Result<()> {
    let config = SuiteConfig::from_env().context("Failed to resolve suite configuration")?;

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&config)
                .context("Failed to serialize suite configuration")?;
            println!("{json}");
        }
        _ => {
            println!("Suite Configuration:");
            println!("  suite:          {}", config.suite);
            println!("  suite version:  {}", config.suite_version);
            println!("  address family: {}", config.address_family);
            match &config.repo_root {
                Some(root) => println!("  repo root:      {}", root.display()),
                None => println!("  repo root:      (not set)"),
            }
        }
    }
    Ok(())
}

fn compare(args: CompareArgs) -> Result<()> {
    let ordering = version::compare(&args.left, &args.right)
        .context("Failed to compare version tokens")?;
    let result = match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };
    println!("{result}");
    Ok(())
}

fn wait_tcp(args: WaitTcpArgs) -> Result<()> {
    let interval = Duration::from_secs(args.interval);
    let config = SyncConfig::new()
        .timeout(Duration::from_secs(args.timeout))
        .interval(interval)
        .error_policy(ErrorPolicy::Tolerate);

    info!(
        "Waiting for {} to accept connections (timeout: {}s)",
        args.addr, args.timeout
    );

    let addr = args.addr.clone();
    let stream = config
        .run(
            move || {
                let resolved = addr
                    .to_socket_addrs()
                    .map_err(|e| e.to_string())?
                    .next()
                    .ok_or_else(|| format!("no address resolved for {addr}"))?;
                TcpStream::connect_timeout(&resolved, interval).map_err(|e| e.to_string())
            },
            |_| true,
        )
        .with_context(|| format!("{} did not come up", args.addr))?;

    info!("{} is up (local side {:?})", args.addr, stream.local_addr());
    Ok(())
}
