mod analyze;
mod parameters;
mod solar;
mod usage;

use clap::{Parser, Subcommand};
use ecocampus::prelude::*;

use crate::cli::{analyze::AnalyzeArgs, solar::SolarArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: score the efficiency, estimate the emission and solar payoff, and advise.
    #[clap(name = "analyze")]
    Analyze(Box<AnalyzeArgs>),

    /// Estimate the solar system sizing and payoff only.
    #[clap(name = "solar")]
    Solar(Box<SolarArgs>),
}

impl Command {
    pub fn run(self) -> Result {
        match self {
            Self::Analyze(args) => (*args).run(),
            Self::Solar(args) => (*args).run(),
        }
    }
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    Table,

    /// Pretty-printed JSON.
    Json,
}
