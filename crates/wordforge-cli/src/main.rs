#![doc = include_str!("../README.md")]

mod config;
mod form;
mod prompt;
mod telemetry;

use anyhow::Context;
use clap::Parser;
use config::{AppConfig, CliArgs};
use telemetry::init_telemetry;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = AppConfig::try_from(args)?;

    init_telemetry()?;

    let path = if config.interactive {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        prompt::session(&mut stdin.lock(), &mut stdout.lock(), |answers| {
            let options = config.clone().with_answers(answers.clone()).options();
            tracing::debug!(?options, "resolved options");
            wordforge::run(&options)
        })?
    } else {
        let options = config.options();
        tracing::debug!(?options, "resolved options");

        println!("Generating wordlist...");
        wordforge::run(&options).context("error generating wordlist")?
    };
    println!("Wordlist successfully generated at: {}", path.display());
    Ok(())
}
