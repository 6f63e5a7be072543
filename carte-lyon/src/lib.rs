//! # carte-lyon
//!
//! Carte interactive des rues de Lyon, colorées par type de voie.
//!
//! ## Features
//!
//! - Pipeline séquentiel: Chargement → Filtrage → Style → Rendu → Sauvegarde
//! - Carte Leaflet autonome, fond clair ou sombre, fichier horodaté
//! - Préférences interactives (thème, format d'export) ou flags CLI
//! - Rapport de run avec compteurs par type de voie
//!
//! ## Usage CLI
//!
//! ```bash
//! # Génération de la carte (prompts interactifs)
//! carte-lyon
//!
//! # Sans prompt
//! carte-lyon --theme dark --format html
//!
//! # Analyse des préfixes de noms de rues
//! carte-lyon analyse
//! ```

pub mod prompt;
pub mod render;
pub mod report;
pub mod term;

pub use render::{ExportFormat, LeafletMap, MapConfig};
pub use report::RunReport;
