mod cli;
mod commands;
mod config;
mod error;
mod output;
mod testbed;
mod vagrant;

use clap::Parser;
use cli::{Cli, Commands};
use commands::{handle_init_command, handle_lifecycle_command, handle_list_command};
use config::Settings;
use output::print_error;
use tracing_subscriber::EnvFilter;
use vagrant::VagrantCommand;

fn main() {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match &cli.command {
        Commands::Init { directory } => handle_init_command(directory),
        Commands::Provision { distros } => {
            handle_lifecycle_command(&settings, VagrantCommand::Provision, distros)
        }
        Commands::Start { distros } => {
            handle_lifecycle_command(&settings, VagrantCommand::Up, distros)
        }
        Commands::Stop { distros } => {
            handle_lifecycle_command(&settings, VagrantCommand::Halt, distros)
        }
        Commands::List { format } => handle_list_command(&settings, format),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
