// SPDX-FileCopyrightText: 2026 Relay Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Relay - index inbound messages, chat with long-term memory.
//!
//! This is the binary entry point for both demos.

mod chat;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;

/// Relay - webhook ingester and console chatbot.
#[derive(Parser, Debug)]
#[command(name = "relay", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the webhook ingester.
    Serve,
    /// Start an interactive chatbot session.
    Chat,
}

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Stdout,
    Stderr,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("{}: failed to load .env: {e}", "warning".yellow());
        }
    }

    let config = match relay_config::load_and_validate(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            relay_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Serve => {
            init_tracing(&config.log_level, LogOutput::Stdout);
            serve::run_serve(&config).await
        }
        Commands::Chat => {
            init_tracing(&config.log_level, LogOutput::Stderr);
            chat::run_chat(&config).await
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `relay*` crates log at `log_level`, others at warn.
fn init_tracing(log_level: &str, output: LogOutput) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("relay={log_level},warn")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false);

    match output {
        LogOutput::Stdout => builder.init(),
        LogOutput::Stderr => builder.with_writer(std::io::stderr).init(),
    }
}
