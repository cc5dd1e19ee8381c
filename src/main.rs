#![forbid(unsafe_code)]

use clap::Parser;
use mudnix_mgr::Error;
use mudnix_mgr::cli::{Cli, Dispatcher, prepare};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use termcolor::StandardStream;

/// Exit codes
const EXIT_ERROR: i32 = 1;
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::debug!("{:?}", e);
        eprintln!("Error: {}", e);
        let code = match e {
            Error::UnknownCommand => EXIT_USAGE,
            _ => EXIT_ERROR,
        };
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> mudnix_mgr::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (command, settings) = prepare(cli, &cwd)?;

    let color = settings.color.resolve(std::io::stdout().is_terminal());
    let mut stdout = StandardStream::stdout(color);
    let result = Dispatcher::new(&settings).run(&command, chrono::Utc::now(), &mut stdout);
    stdout.flush()?;
    result
}
