//! Types de données pour le crate voirie

use std::fmt;
use std::str::FromStr;

use geo::Geometry;
use serde_json::{Map, Value};

/// Attributs d'une feature (clé -> valeur JSON, comme dans le GeoJSON source)
pub type Properties = Map<String, Value>;

/// Une rue (ou une limite de ville) avec sa géométrie et ses attributs
#[derive(Debug, Clone)]
pub struct Feature {
    /// Géométrie (LineString pour les rues, Polygon pour les limites)
    pub geometry: Geometry<f64>,

    /// Attributs OSM de la feature (name, highway, footway, ...)
    pub properties: Properties,
}

impl Feature {
    /// Valeur textuelle d'un attribut, `None` si absent ou non textuel
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// Nom de la rue, chaîne vide si absent
    pub fn name(&self) -> &str {
        self.tag("name").unwrap_or("")
    }
}

/// Collection ordonnée de features issue d'un même fichier source
#[derive(Debug, Clone, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.features.iter()
    }
}

/// Type de voie, dérivé du préfixe du nom de la rue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadType {
    Rue,
    Place,
    Avenue,
    Quai,
    Allee,
    Boulevard,
    Impasse,
    Cours,
    Montee,
    Passage,
    /// Nom vide ou préfixe non reconnu
    Autre,
}

impl RoadType {
    /// Les dix types à préfixe reconnu, dans l'ordre de priorité du classement
    pub const PREFIXED: [RoadType; 10] = [
        RoadType::Rue,
        RoadType::Place,
        RoadType::Avenue,
        RoadType::Quai,
        RoadType::Allee,
        RoadType::Boulevard,
        RoadType::Impasse,
        RoadType::Cours,
        RoadType::Montee,
        RoadType::Passage,
    ];

    /// Libellé français du type (le préfixe tel qu'il apparaît dans les noms)
    pub fn label(&self) -> &'static str {
        match self {
            RoadType::Rue => "Rue",
            RoadType::Place => "Place",
            RoadType::Avenue => "Avenue",
            RoadType::Quai => "Quai",
            RoadType::Allee => "Allée",
            RoadType::Boulevard => "Boulevard",
            RoadType::Impasse => "Impasse",
            RoadType::Cours => "Cours",
            RoadType::Montee => "Montée",
            RoadType::Passage => "Passage",
            RoadType::Autre => "Autre",
        }
    }
}

impl fmt::Display for RoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Thème de couleurs de la carte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {} (use: light, dark)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Geometry, Point};
    use serde_json::json;

    fn feature_with_props(props: Properties) -> Feature {
        Feature {
            geometry: Geometry::Point(Point::new(4.83, 45.76)),
            properties: props,
        }
    }

    #[test]
    fn test_tag_present() {
        let mut props = Properties::new();
        props.insert("highway".to_string(), json!("footway"));
        let feature = feature_with_props(props);
        assert_eq!(feature.tag("highway"), Some("footway"));
    }

    #[test]
    fn test_tag_absent_or_non_textual() {
        let mut props = Properties::new();
        props.insert("lanes".to_string(), json!(2));
        let feature = feature_with_props(props);
        assert_eq!(feature.tag("lanes"), None);
        assert_eq!(feature.tag("highway"), None);
    }

    #[test]
    fn test_name_defaults_to_empty() {
        let feature = feature_with_props(Properties::new());
        assert_eq!(feature.name(), "");
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_road_type_labels_accented() {
        assert_eq!(RoadType::Allee.label(), "Allée");
        assert_eq!(RoadType::Montee.label(), "Montée");
        assert_eq!(RoadType::Autre.to_string(), "Autre");
    }
}
