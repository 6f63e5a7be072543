//! Tables de style par type de voie
//!
//! Deux palettes IBM Carbon (claire et sombre) pour les dix types à
//! préfixe. `Autre` et tout type hors table prennent la couleur de repli
//! neutre; l'épaisseur de trait est indépendante du thème.

use crate::types::{RoadType, Theme};

/// Couleur de repli pour les types hors tables
pub const FALLBACK_COLOR: &str = "#D3D3D3";

/// Épaisseur de repli pour les types hors table
pub const FALLBACK_WEIGHT: f64 = 1.0;

/// Opacité de remplissage commune à toutes les rues
pub const FILL_OPACITY: f64 = 0.6;

/// Palette claire (fond CartoDB Positron)
const LIGHT_COLORS: &[(RoadType, &str)] = &[
    (RoadType::Rue, "#6929c4"),
    (RoadType::Place, "#1192e8"),
    (RoadType::Avenue, "#005d5d"),
    (RoadType::Quai, "#fa4d56"),
    (RoadType::Allee, "#198038"),
    (RoadType::Boulevard, "#002d9c"),
    (RoadType::Impasse, "#ee538b"),
    (RoadType::Cours, "#b28600"),
    (RoadType::Montee, "#8a3800"),
    (RoadType::Passage, "#009d9a"),
];

/// Palette sombre (fond CartoDB Dark Matter)
const DARK_COLORS: &[(RoadType, &str)] = &[
    (RoadType::Rue, "#8a3ffc"),
    (RoadType::Place, "#33b1ff"),
    (RoadType::Avenue, "#007d79"),
    (RoadType::Quai, "#fa4d56"),
    (RoadType::Allee, "#6fdc8c"),
    (RoadType::Boulevard, "#4589ff"),
    (RoadType::Impasse, "#d12771"),
    (RoadType::Cours, "#d2a106"),
    (RoadType::Montee, "#ba4e00"),
    (RoadType::Passage, "#bae6ff"),
];

/// Épaisseurs de trait (indépendantes du thème)
const WEIGHTS: &[(RoadType, f64)] = &[
    (RoadType::Rue, 1.0),
    (RoadType::Place, 1.0),
    (RoadType::Avenue, 1.0),
    (RoadType::Quai, 1.0),
    (RoadType::Allee, 1.0),
    (RoadType::Boulevard, 1.0),
    (RoadType::Impasse, 1.0),
    (RoadType::Cours, 1.0),
    (RoadType::Montee, 1.0),
    (RoadType::Passage, 1.0),
    (RoadType::Autre, 0.5),
];

/// Couleur d'un type de voie pour un thème donné.
///
/// Fonction pure: tout type absent de la table du thème (dont `Autre`)
/// retourne [`FALLBACK_COLOR`].
pub fn color(road_type: RoadType, theme: Theme) -> &'static str {
    let table = match theme {
        Theme::Light => LIGHT_COLORS,
        Theme::Dark => DARK_COLORS,
    };

    table
        .iter()
        .find(|(candidate, _)| *candidate == road_type)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Épaisseur de trait d'un type de voie.
///
/// Fonction pure: tout type absent de la table retourne
/// [`FALLBACK_WEIGHT`].
pub fn weight(road_type: RoadType) -> f64 {
    WEIGHTS
        .iter()
        .find(|(candidate, _)| *candidate == road_type)
        .map(|(_, weight)| *weight)
        .unwrap_or(FALLBACK_WEIGHT)
}

/// Style de rendu d'une rue, dérivé de son type et du thème
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleRule {
    /// Couleur de trait et de remplissage (hex `#rrggbb`)
    pub color: &'static str,

    /// Épaisseur de trait
    pub weight: f64,

    /// Opacité de remplissage
    pub fill_opacity: f64,
}

impl StyleRule {
    /// Dérive le style d'un type de voie pour un thème
    pub fn derive(road_type: RoadType, theme: Theme) -> Self {
        Self {
            color: color(road_type, theme),
            weight: weight(road_type),
            fill_opacity: FILL_OPACITY,
        }
    }
}
