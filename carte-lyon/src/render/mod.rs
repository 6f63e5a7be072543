//! Rendu de la carte et chemin de sortie horodaté

pub mod leaflet;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Local;
use voirie::Theme;

pub use leaflet::LeafletMap;

/// Libellé de la ville dans le nom du fichier de sortie
pub const CITY_LABEL: &str = "lyon";

/// Format d'export demandé par l'utilisateur
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Carte HTML interactive
    #[default]
    Html,

    /// Carte HTML + capture PNG. Déclaré mais non implémenté: la carte
    /// HTML est produite, un avertissement est émis pour le PNG.
    HtmlPng,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::HtmlPng => "html-png",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(ExportFormat::Html),
            "html-png" => Ok(ExportFormat::HtmlPng),
            other => Err(format!(
                "Unknown export format: {} (use: html, html-png)",
                other
            )),
        }
    }
}

/// Configuration de la carte de base
#[derive(Debug, Clone, Copy)]
pub struct MapConfig {
    /// Centre de la carte (latitude, longitude)
    pub center: (f64, f64),

    /// Niveau de zoom initial
    pub zoom: u8,

    /// Thème: pilote le fond de carte et la palette des rues
    pub theme: Theme,
}

impl MapConfig {
    /// Configuration centrée sur Lyon (place Bellecour)
    pub fn lyon(theme: Theme) -> Self {
        Self {
            center: (45.764043, 4.835659),
            zoom: 13,
            theme,
        }
    }

    /// URL du fond de carte CartoDB correspondant au thème
    pub fn tile_url(&self) -> &'static str {
        match self.theme {
            Theme::Light => "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
            Theme::Dark => "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
        }
    }

    /// Attribution du fond de carte
    pub fn tile_attribution(&self) -> &'static str {
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>"
    }
}

/// Chemin de sortie horodaté: `<dir>/YYYY-MM-DD_HH-MM-SS-lyon.html`
pub fn output_path(dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    dir.join(format!("{timestamp}-{CITY_LABEL}.html"))
}
