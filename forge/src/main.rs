mod commands;
mod logging;
mod ops;
mod reports;

use clap::{Parser, error::ErrorKind};

use crate::commands::Cli;

fn main() {
    if let Err(err) = color_eyre::install() {
        exit_with(&err.to_string());
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => exit_with(&usage_error(&err)),
    };

    logging::init(cli.verbose);

    if let Err(err) = cli.run() {
        exit_with(&format!("{:#}", err));
    }
}

fn exit_with(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

/// Reduce a clap error to a single line.
fn usage_error(err: &clap::Error) -> String {
    if err.kind() == ErrorKind::MissingRequiredArgument {
        return "no project name given (usage: sdkforge <project-name>)".to_string();
    }

    let rendered = err.render().to_string();
    rendered
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}
