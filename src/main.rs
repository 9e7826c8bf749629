use anyhow::Result;
use clap::Parser;
use pkgrepo::commands::{self, config::Config};
use std::path::PathBuf;

/// pkgrepo - inspect and prune package builds
///
/// Builds are stored as `<LOCATION>/packages/<PACKAGE>/builds/<VERSION>/`.
///
/// Examples:
///   pkgrepo list                   # List packages with their newest build
///   pkgrepo builds hello           # List builds of "hello", newest first
///   pkgrepo remove hello 1.0.0     # Delete one build
#[derive(Parser, Debug)]
#[command(author, version = env!("PKGREPO_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Repository location (overrides defaults; also via PKGREPO_LOCATION)
    #[arg(
        long = "location",
        short = 'l',
        env = "PKGREPO_LOCATION",
        value_name = "PATH",
        global = true
    )]
    location: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List packages in the repository
    List(ListArgs),

    /// List builds of a package, newest first
    Builds(BuildsArgs),

    /// Remove a build of a package
    Remove(RemoveArgs),
}

#[derive(clap::Args, Debug)]
struct ListArgs {
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct BuildsArgs {
    /// Package name
    #[arg(value_name = "PACKAGE")]
    package: String,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args, Debug)]
struct RemoveArgs {
    /// Package name
    #[arg(value_name = "PACKAGE")]
    package: String,

    /// Build version to remove
    #[arg(value_name = "VERSION")]
    version: String,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(pkgrepo::runtime::RealRuntime, cli.location)?;

    match cli.command {
        Commands::List(args) => commands::list(&config, args.json)?,
        Commands::Builds(args) => commands::builds(&config, &args.package, args.json)?,
        Commands::Remove(args) => {
            commands::remove(&config, &args.package, &args.version, args.yes)?
        }
    }
    Ok(())
}
