mod cli;
mod check;
mod runtime;
mod utils;

use clap::Parser;
use cli::Cli;
use runtime::DockerCli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let docker = DockerCli::new();
    let result = check::run_check(&docker, &cli.containers, cli.tail, use_color(cli.no_color));

    match result {
        Ok(summary) if summary.all_clear() => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn use_color(no_color: bool) -> bool {
    use std::io::IsTerminal;
    !no_color && std::io::stdout().is_terminal()
}
