use clap::Parser;
use credvault::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Unlock => credvault::cli::commands::unlock::execute(&cli),
        Commands::Lock => credvault::cli::commands::lock::execute(&cli),
        Commands::Add {
            ref title,
            ref account,
            ref site,
            ref category,
            ref secret,
            generate,
            policy,
        } => credvault::cli::commands::add::execute(
            &cli,
            title,
            account,
            site,
            category,
            secret.as_deref(),
            generate,
            policy,
        ),
        Commands::List {
            ref query,
            show_secrets,
        } => credvault::cli::commands::list::execute(&cli, query.as_deref(), show_secrets),
        Commands::Delete { ref id, force } => {
            credvault::cli::commands::delete::execute(&cli, id, force)
        }
        Commands::Generate { policy, copy } => {
            credvault::cli::commands::generate::execute(policy, copy)
        }
        Commands::Completions { ref shell } => {
            credvault::cli::commands::completions::execute(shell)
        }
    };

    if let Err(e) = result {
        credvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
