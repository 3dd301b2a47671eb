mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Set => commands::set::run(&cli.service)?,
        Command::Show => commands::show::run(&cli.service)?,
        Command::Delete => commands::delete::run(&cli.service)?,
        Command::Status => commands::status::run(&cli.service)?,
    }

    Ok(())
}
