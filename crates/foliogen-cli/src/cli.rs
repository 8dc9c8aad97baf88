use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "foliogen", version, about = "foliogen portfolio site generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new portfolio project
    New {
        /// Project name (npm package-name rules)
        name: Option<String>,

        /// Skip all prompts and use theme defaults
        #[arg(short, long)]
        yes: bool,

        /// Theme key (see `foliogen showcase` output for the catalog)
        #[arg(long)]
        theme: Option<String>,

        /// Target framework (react-vite, nextjs, sveltekit)
        #[arg(long)]
        framework: Option<String>,

        /// Also write vercel.json and netlify.toml
        #[arg(long)]
        deploy_ready: bool,

        /// Initialize a git repository with an initial commit
        #[arg(long)]
        git: bool,

        /// Directory of custom assets to copy into src/assets
        #[arg(long)]
        assets: Option<PathBuf>,

        /// Skip the post-generation validation pipeline
        #[arg(long)]
        skip_validation: bool,

        /// Let eslint/prettier fix what they can during validation
        #[arg(long)]
        fix: bool,

        /// Parent directory for the project (defaults to the current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Generate a demo project for every catalog theme
    Showcase {
        /// Target framework for every generated project
        #[arg(long)]
        framework: Option<String>,

        /// Skip the post-generation validation pipeline
        #[arg(long)]
        skip_validation: bool,

        /// Parent directory for the showcase (defaults to the current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}
