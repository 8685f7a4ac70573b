mod cleaner;
mod cli;
mod error;
mod formats;
mod loader;
mod models;
mod settings;
mod writer;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage problems exit 1, like the tool this replaces.
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let result = match cli.command {
        Commands::Convert {
            file,
            output,
            format,
        } => cli::convert::run(&file, output.as_deref(), format.as_deref()),
        Commands::Formats => cli::formats::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
