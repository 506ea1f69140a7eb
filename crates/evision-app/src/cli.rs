use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// EVision: a smart EV innovation analyzer backed by Gemini.
#[derive(Parser, Debug)]
#[command(name = "evision", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive override (e.g. `debug`, `evision=trace`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// Address to bind, overriding `server.host`.
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, overriding `server.port`.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the innovation analysis for one vehicle and exit.
    Score {
        #[arg(short, long)]
        brand: String,

        #[arg(short, long)]
        model: String,
    },
}

impl Args {
    pub fn command_or_serve(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }
}

pub fn parse() -> Args {
    Args::parse()
}
