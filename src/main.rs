use anyhow::Result;
use clap::{Parser, Subcommand};
use portfolio::{build, show};
use tracing_subscriber::EnvFilter;

/// Loads the portfolio's data/*.json (authors, publications, education,
/// theses, courses) from a web host or a local checkout and renders the
/// home and per-co-author pages from it.
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "Render an academic portfolio from its static JSON data")]
#[command(after_help = "Examples:\n  \
    portfolio build --source ./public --output ./dist\n  \
    portfolio show --source https://example.org '/author/jdoe#publications'\n  \
    portfolio show --source ./public --toggle 1 /")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Log every fetch, route decision and scroll target (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write index.html plus author/<id>/index.html for every co-author
    /// found in the publications; the site's own id becomes a redirect to /
    Build(build::BuildArgs),
    /// Route one site path (self-author redirect included), print its HTML
    /// and report which #fragment it would scroll to
    Show(show::ShowArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "portfolio=debug" } else { "portfolio=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Build(args) => build::run(args),
        Commands::Show(args) => show::run(args),
    }
}
