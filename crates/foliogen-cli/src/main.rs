mod cli;
mod collect;
mod commands;
mod prompt;
mod ui;

use clap::Parser;

use cli::{Cli, Commands};
use commands::new::NewArgs;
use commands::showcase::ShowcaseArgs;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New {
            name,
            yes,
            theme,
            framework,
            deploy_ready,
            git,
            assets,
            skip_validation,
            fix,
            path,
        } => commands::new::run(NewArgs {
            name,
            yes,
            theme,
            framework,
            deploy_ready,
            git,
            assets,
            skip_validation,
            fix,
            path,
        }),
        Commands::Showcase {
            framework,
            skip_validation,
            path,
        } => commands::showcase::run(ShowcaseArgs {
            framework,
            skip_validation,
            path,
        }),
    };

    if let Err(e) = result {
        ui::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
