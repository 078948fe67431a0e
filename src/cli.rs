use crate::dictionary::Difficulty;
use crate::quiz::session::DEFAULT_DURATION_SECS;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Name the capital of as many countries as you can before time runs out.
#[derive(Parser, Debug)]
#[command(name = "capital-guessr", version, about)]
pub struct Cli
{
    /// TOML dictionary to use instead of the built-in country list
    #[arg(long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Write tracing output to this file (filtered by RUST_LOG)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command
{
    /// Play a round (default)
    Play(PlayArgs),

    /// Print every tier with its countries and accepted capitals
    List
    {
        /// Only list one pool
        #[arg(long, value_enum)]
        difficulty: Option<PoolArg>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs
{
    /// Start straight away with this pool instead of showing the menu
    #[arg(long, value_enum)]
    pub difficulty: Option<PoolArg>,

    /// Countdown length in seconds
    #[arg(long, default_value_t = DEFAULT_DURATION_SECS, value_parser = clap::value_parser!(u32).range(1..=600))]
    pub duration: u32,

    /// Seed for reproducible country order
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for PlayArgs
{
    fn default() -> Self
    {
        Self {
            difficulty: None,
            duration: DEFAULT_DURATION_SECS,
            seed: None,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolArg
{
    Easy,
    Medium,
    Hard,
    All,
}

impl PoolArg
{
    pub fn difficulty(self) -> Option<Difficulty>
    {
        match self {
            PoolArg::Easy => Some(Difficulty::Easy),
            PoolArg::Medium => Some(Difficulty::Medium),
            PoolArg::Hard => Some(Difficulty::Hard),
            PoolArg::All => None,
        }
    }
}
