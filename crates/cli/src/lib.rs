pub mod commands;
pub mod session;

mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "shelfy",
    about = "Shelfy voice catalog CLI",
    long_about = "Interpret seller and buyer commands against a JSON product catalog, \
                  one-shot or as an interactive session.",
    after_help = "Examples:\n  shelfy say --role seller \"add 5 cotton saree for 500 and category clothing\"\n  shelfy say --role buyer \"search saree\"\n  shelfy repl --role buyer\n  shelfy seed --force\n  shelfy show"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Interpret one command for a role and print the spoken reply")]
    Say {
        #[arg(long, help = "Speaker role: seller or buyer")]
        role: String,
        #[arg(required = true, help = "Command text, quoted or as trailing words")]
        text: Vec<String>,
        #[arg(long, help = "Catalog snapshot path override")]
        catalog: Option<PathBuf>,
    },
    #[command(about = "Run an interactive session reading commands line by line")]
    Repl {
        #[arg(long, help = "Starting role: seller or buyer")]
        role: String,
        #[arg(long, help = "Catalog snapshot path override")]
        catalog: Option<PathBuf>,
    },
    #[command(about = "Write the starter catalog snapshot and return structured status output")]
    Seed {
        #[arg(long, help = "Overwrite an existing snapshot")]
        force: bool,
        #[arg(long, help = "Catalog snapshot path override")]
        catalog: Option<PathBuf>,
    },
    #[command(about = "Print the catalog snapshot with stock status per product")]
    Show {
        #[arg(long, help = "Catalog snapshot path override")]
        catalog: Option<PathBuf>,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Say { role, text, catalog } => commands::say::run(&role, &text.join(" "), catalog),
        Command::Repl { role, catalog } => commands::repl::run(&role, catalog),
        Command::Seed { force, catalog } => commands::seed::run(force, catalog),
        Command::Show { catalog } => commands::show::run(catalog),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
