//! Rapport de génération de carte
//!
//! Collecte les compteurs de chaque étape du pipeline et les affiche en
//! fin de run.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use serde::Serialize;
use voirie::{RoadType, Theme};

/// Rapport complet d'une génération de carte
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Thème utilisé
    pub theme: String,

    /// Durée du run
    pub duration_secs: f64,

    // Compteurs du filtrage
    /// Nombre de features chargées
    pub streets_loaded: usize,
    /// Exclues par catégorie (trottoirs, passages piétons)
    pub excluded_category: usize,
    /// Hors des limites de la ville (au moins partiellement)
    pub outside_boundary: usize,
    /// Retenues et dessinées sur la carte
    pub streets_retained: usize,

    /// Nombre de rues par type de voie
    pub by_type: HashMap<String, usize>,

    /// Fichier de sortie généré
    pub output_file: Option<String>,
}

impl RunReport {
    /// Crée un rapport pour un thème donné
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: theme.name().to_string(),
            duration_secs: 0.0,
            streets_loaded: 0,
            excluded_category: 0,
            outside_boundary: 0,
            streets_retained: 0,
            by_type: HashMap::new(),
            output_file: None,
        }
    }

    pub fn set_loaded(&mut self, count: usize) {
        self.streets_loaded = count;
    }

    /// Enregistre une rue exclue par catégorie
    pub fn record_excluded_category(&mut self) {
        self.excluded_category += 1;
    }

    /// Enregistre une rue hors limites
    pub fn record_outside_boundary(&mut self) {
        self.outside_boundary += 1;
    }

    /// Enregistre une rue retenue, classée par type
    pub fn record_retained(&mut self, road_type: RoadType) {
        self.streets_retained += 1;
        *self.by_type.entry(road_type.label().to_string()).or_insert(0) += 1;
    }

    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    pub fn set_output(&mut self, path: &Path) {
        self.output_file = Some(path.display().to_string());
    }

    /// Affiche le rapport sur la console
    pub fn display(&self) {
        println!("\n{}", "=".repeat(60));
        println!("RAPPORT - thème {}", self.theme);
        println!("{}", "=".repeat(60));

        println!("\nDurée: {:.2}s", self.duration_secs);
        println!(
            "Rues: {} chargées, {} exclues par catégorie, {} hors limites, {} retenues",
            self.streets_loaded,
            self.excluded_category,
            self.outside_boundary,
            self.streets_retained
        );

        if !self.by_type.is_empty() {
            println!("\n--- PAR TYPE DE VOIE ---");
            let mut types: Vec<_> = self.by_type.iter().collect();
            types.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
            for (label, count) in types {
                println!("  {}: {}", label, count);
            }
        }

        if let Some(ref output) = self.output_file {
            println!("\nCarte: {}", output);
        }

        println!("{}", "=".repeat(60));
    }

    /// Affichage compact pour les logs
    pub fn summary(&self) -> String {
        format!(
            "thème {}: {} chargées, {} retenues, {} exclues par catégorie, {} hors limites",
            self.theme,
            self.streets_loaded,
            self.streets_retained,
            self.excluded_category,
            self.outside_boundary
        )
    }
}
