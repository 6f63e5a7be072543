//! Définition et implémentation des commandes CLI
//!
//! Deux commandes:
//! - défaut: génération de la carte (Chargement → Filtrage → Rendu)
//! - `analyse`: fréquence des préfixes de noms de rues

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use tracing::{info, warn};

use voirie::{
    classify, excluded_by_category, load_boundary, load_collection, prefix_frequencies,
    within_boundary, StyleRule, Theme,
};

use crate::prompt;
use crate::render::{self, ExportFormat, LeafletMap, MapConfig};
use crate::report::RunReport;
use crate::term;

/// Arguments de la commande de génération (commande par défaut)
#[derive(Args)]
pub struct GenererArgs {
    /// Fichier GeoJSON du réseau de rues
    #[arg(long, default_value = "data/raw-lyon_street_source.geojson")]
    pub rues: PathBuf,

    /// Fichier GeoJSON des limites de la ville
    #[arg(long, default_value = "data/raw-lyon-limits.geojson")]
    pub limites: PathBuf,

    /// Répertoire de sortie des cartes générées
    #[arg(long, default_value = "results")]
    pub sortie: PathBuf,

    /// Thème de la carte (light/dark); demandé interactivement si absent
    #[arg(long)]
    pub theme: Option<String>,

    /// Format d'export (html/html-png); demandé interactivement si absent
    #[arg(long)]
    pub format: Option<String>,
}

impl Default for GenererArgs {
    fn default() -> Self {
        Self {
            rues: PathBuf::from("data/raw-lyon_street_source.geojson"),
            limites: PathBuf::from("data/raw-lyon-limits.geojson"),
            sortie: PathBuf::from("results"),
            theme: None,
            format: None,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyser les préfixes de noms de rues (aide à construire les tables)
    Analyse {
        /// Fichier GeoJSON du réseau de rues
        #[arg(long, default_value = "data/raw-lyon_street_source.geojson")]
        rues: PathBuf,

        /// Fichier GeoJSON des limites de la ville
        #[arg(long, default_value = "data/raw-lyon-limits.geojson")]
        limites: PathBuf,
    },
}

/// Exécute la génération de carte
pub fn cmd_generer(args: &GenererArgs) -> Result<()> {
    let started = Instant::now();

    // Préférences: flags CLI, sinon prompts interactifs
    let theme = resolve_theme(args.theme.as_deref())?;
    let format = resolve_format(args.format.as_deref())?;
    info!(theme = %theme, format = %format, "Préférences résolues");

    let mut report = RunReport::new(theme);

    // 1- Récupération des données
    term::section(1, "Récupération des données");
    term::step("Chargement des données des rues de Lyon...");
    let streets = load_collection(&args.rues)
        .context(format!("Chargement des rues: {}", args.rues.display()))?;
    report.set_loaded(streets.len());

    term::step("Chargement des limites de la ville...");
    let boundary = load_boundary(&args.limites)
        .context(format!("Chargement des limites: {}", args.limites.display()))?;
    term::success(&format!("{} features chargées", streets.len()));

    // 2- Filtrage des données
    term::section(2, "Filtrage des données");
    let progress = term::progress(streets.len() as u64, "Rues analysées");
    let mut retained = Vec::with_capacity(streets.len());
    for feature in streets.features {
        if excluded_by_category(&feature) {
            report.record_excluded_category();
        } else if !within_boundary(&feature, &boundary) {
            report.record_outside_boundary();
        } else {
            retained.push(feature);
        }
        progress.inc(1);
    }
    progress.finish();
    term::success(&format!("{} rues trouvées dans Lyon", retained.len()));

    // 3- Création de la carte
    term::section(3, "Création de la carte");
    std::fs::create_dir_all(&args.sortie).context(format!(
        "Création du répertoire de sortie: {}",
        args.sortie.display()
    ))?;
    let output = render::output_path(&args.sortie);
    let config = MapConfig::lyon(theme);
    let mut map = LeafletMap::create(&output, &config)?;

    // 4- Ajout des rues (classification et style dérivés à la volée)
    term::section(4, "Ajout des rues à la carte");
    let progress = term::progress(retained.len() as u64, "Rues ajoutées");
    for feature in &retained {
        let road_type = classify(feature.name());
        let style = StyleRule::derive(road_type, theme);
        map.add_street(feature, style)?;
        report.record_retained(road_type);
        progress.inc(1);
    }
    progress.finish();

    // 5- Finalisation
    term::section(5, "Finalisation");
    term::step("Sauvegarde de la carte...");
    map.finish()?;
    report.set_output(&output);
    report.set_duration(started.elapsed());

    if format == ExportFormat::HtmlPng {
        warn!("Export PNG demandé mais non implémenté");
        term::notice("L'export PNG n'est pas encore supporté: seule la carte HTML a été générée.");
    }

    term::success(&format!("Carte sauvegardée sous: {}", output.display()));
    info!("{}", report.summary());
    report.display();

    Ok(())
}

/// Exécute l'analyse des préfixes de noms de rues
pub fn cmd_analyse(rues: &Path, limites: &Path) -> Result<()> {
    // 1- Chargement
    term::section(1, "Chargement des données pour analyse");
    let streets =
        load_collection(rues).context(format!("Chargement des rues: {}", rues.display()))?;
    let boundary = load_boundary(limites)
        .context(format!("Chargement des limites: {}", limites.display()))?;
    println!("Total des features à analyser: {}", streets.len());

    // 2- Filtrage
    term::section(2, "Filtrage des rues dans Lyon");
    let filtered = voirie::filter_streets(streets, &boundary);
    term::success(&format!("{} rues trouvées dans Lyon", filtered.len()));

    // 3- Analyse
    term::section(3, "Analyse des préfixes de rues");
    let stats = prefix_frequencies(&filtered.features);
    let total = stats.total();

    println!("{:<20} | {:<11} | {:<11}", "Préfixe", "Occurrences", "Pourcentage");
    println!("{}", "-".repeat(48));
    for (word, count) in stats.counts.iter().take(20) {
        let percentage = if total > 0 {
            (*count as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        println!("{:<20} | {:<11} | {:.2}%", word, count, percentage);
    }

    if stats.unnamed > 0 {
        println!("\nRues sans nom: {}", stats.unnamed);
    }

    Ok(())
}

fn resolve_theme(flag: Option<&str>) -> Result<Theme> {
    match flag {
        Some(value) => value.parse::<Theme>().map_err(|e| anyhow::anyhow!(e)),
        None => prompt::ask_theme(),
    }
}

fn resolve_format(flag: Option<&str>) -> Result<ExportFormat> {
    match flag {
        Some(value) => value.parse::<ExportFormat>().map_err(|e| anyhow::anyhow!(e)),
        None => prompt::ask_format(),
    }
}
