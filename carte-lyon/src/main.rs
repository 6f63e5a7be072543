//! Point d'entrée CLI pour carte-lyon

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod prompt;
mod render;
mod report;
mod term;

use cli::{Commands, GenererArgs};

/// Générer une carte interactive des rues de Lyon colorées par type de voie
#[derive(Parser)]
#[command(name = "carte-lyon")]
#[command(author, version)]
#[command(about = "Générer une carte interactive des rues de Lyon colorées par type de voie")]
#[command(
    long_about = "Charge le réseau de rues et les limites de Lyon (GeoJSON), filtre les rues \
entièrement contenues dans la ville, les classe par préfixe de nom (Rue, Avenue, Quai, ...) \
et produit une carte Leaflet horodatée.\n\nPar défaut, génère la carte. Utilisez 'analyse' \
pour explorer les préfixes de noms de rues."
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Augmenter la verbosité (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Mode silencieux
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Sous-commande (défaut: génération de la carte)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments pour la génération de carte (commande par défaut)
    #[command(flatten)]
    generer: Option<GenererArgs>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Some(Commands::Analyse { rues, limites }) => {
            info!(rues = %rues.display(), limites = %limites.display(), "Analyse des préfixes");
            cli::cmd_analyse(&rues, &limites)?;
        }
        None => {
            let args = cli.generer.unwrap_or_default();
            info!(rues = %args.rues.display(), limites = %args.limites.display(), "Génération de la carte");
            cli::cmd_generer(&args)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (_, 0) => Level::INFO,
        (_, 1) => Level::DEBUG,
        (_, _) => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .init();
}
