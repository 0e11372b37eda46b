//! skillrepos - manage the repositories skills are discovered from

use clap::Parser;

use skillrepos::cli::{Cli, Commands};
use skillrepos::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Add(command) => commands::add::run(cli.home, command),
        Commands::Remove(args) => commands::remove::run(cli.home, args),
        Commands::List(args) => commands::list::run(cli.home, args),
        Commands::Open(args) => commands::open::run(cli.home, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", skillrepos::error::user_message(&e));
        std::process::exit(1);
    }
}
