mod cli;
mod dictionary;
mod error;
mod game;
mod logging;
mod quiz;

use clap::Parser;
use cli::{Cli, Command, PlayArgs, PoolArg};
use dictionary::{Dictionary, Difficulty};
use error::Error;
use game::Launch;
use quiz::{Session, Settings};
use std::path::Path;

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error>
{
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }
    let dictionary = load_dictionary(cli.dictionary.as_deref())?;

    match cli.command {
        None => play(dictionary, PlayArgs::default()),
        Some(Command::Play(args)) => play(dictionary, args),
        Some(Command::List { difficulty }) => {
            for line in list_lines(&dictionary, difficulty) {
                println!("{line}");
            }
            Ok(())
        }
    }
}

fn load_dictionary(path: Option<&Path>) -> Result<Dictionary, Error>
{
    match path {
        Some(path) => Ok(Dictionary::load(path)?),
        None => Ok(Dictionary::builtin()),
    }
}

fn play(dictionary: Dictionary, args: PlayArgs) -> Result<(), Error>
{
    let settings = Settings {
        duration_secs: args.duration,
        seed: args.seed,
    };
    let launch = match args.difficulty {
        Some(pool) => Launch::Start(pool.difficulty()),
        None => Launch::Menu,
    };
    game::run(Session::new(dictionary, settings), launch)
}

/// `list` output: one section per pool, a header then one aligned row per
/// country.
fn list_lines(dictionary: &Dictionary, pool: Option<PoolArg>) -> Vec<String>
{
    let sections: Vec<(String, Vec<String>)> = match pool {
        Some(PoolArg::All) => vec![("All countries".to_string(), dictionary.countries())],
        Some(pool) => pool
            .difficulty()
            .map(|tier| vec![(tier.to_string(), dictionary.countries_for(tier).to_vec())])
            .unwrap_or_default(),
        None => Difficulty::ALL
            .iter()
            .map(|tier| (tier.to_string(), dictionary.countries_for(*tier).to_vec()))
            .collect(),
    };

    let mut lines = Vec::new();
    for (title, countries) in sections {
        lines.push(format!("{} ({} countries):", title, countries.len()));
        for country in countries {
            let capital = dictionary
                .capitals_of(&country)
                .map(|capital| capital.to_string())
                .unwrap_or_default();
            lines.push(format!("  {:<20} - {}", country, capital));
        }
        lines.push(String::new());
    }
    lines
}
