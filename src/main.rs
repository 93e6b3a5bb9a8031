use clap::Parser;
use passvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => passvault::cli::commands::init::execute(&cli),
        Commands::Add { ref name, ref group } => {
            passvault::cli::commands::add::execute(&cli, name, group)
        }
        Commands::Show {
            ref name,
            ref group,
            reveal,
        } => passvault::cli::commands::show::execute(&cli, name, group, reveal),
        Commands::List => passvault::cli::commands::list::execute(&cli),
        Commands::Rm { ref name, ref group } => {
            passvault::cli::commands::rm::execute(&cli, name, group)
        }
        Commands::Group { ref action } => passvault::cli::commands::group::execute(&cli, action),
        Commands::Gen => passvault::cli::commands::gen::execute(),
        Commands::Passwd => passvault::cli::commands::passwd::execute(&cli),
    };

    if let Err(e) = result {
        passvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
