//! Classification des rues par préfixe de nom

use std::collections::HashMap;

use crate::types::{Feature, RoadType};

/// Classe un nom de rue par son préfixe.
///
/// Parcourt les préfixes reconnus dans un ordre fixe et retourne le
/// premier qui correspond au début du nom (comparaison exacte, sensible
/// à la casse, pas de tokenisation). Nom vide ou sans correspondance:
/// [`RoadType::Autre`]. Fonction pure et totale.
pub fn classify(name: &str) -> RoadType {
    for road_type in RoadType::PREFIXED {
        if name.starts_with(road_type.label()) {
            return road_type;
        }
    }
    RoadType::Autre
}

/// Résultat de l'analyse des préfixes de noms de rues
#[derive(Debug, Clone, Default)]
pub struct PrefixStats {
    /// Premier mot -> nombre d'occurrences, trié par fréquence décroissante
    pub counts: Vec<(String, usize)>,

    /// Nombre de rues sans nom
    pub unnamed: usize,
}

impl PrefixStats {
    /// Total des rues nommées comptées
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

/// Compte le premier mot de chaque nom de rue (outil d'exploration pour
/// construire la table de classification).
///
/// Le tri est par fréquence décroissante, puis alphabétique pour un
/// ordre stable.
pub fn prefix_frequencies(features: &[Feature]) -> PrefixStats {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut unnamed = 0;

    for feature in features {
        let name = feature.name();
        if name.is_empty() {
            unnamed += 1;
            continue;
        }

        if let Some(first_word) = name.split_whitespace().next() {
            *counts.entry(first_word.to_string()).or_insert(0) += 1;
        } else {
            // Nom composé uniquement d'espaces
            unnamed += 1;
        }
    }

    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|(word_a, count_a), (word_b, count_b)| {
        count_b.cmp(count_a).then_with(|| word_a.cmp(word_b))
    });

    PrefixStats { counts, unnamed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Properties;
    use geo::{Geometry, Point};
    use serde_json::json;

    #[test]
    fn test_classify_known_prefixes() {
        assert_eq!(classify("Rue de la République"), RoadType::Rue);
        assert_eq!(classify("Place Bellecour"), RoadType::Place);
        assert_eq!(classify("Avenue Jean Jaurès"), RoadType::Avenue);
        assert_eq!(classify("Quai Saint-Antoine"), RoadType::Quai);
        assert_eq!(classify("Allée de Fontenay"), RoadType::Allee);
        assert_eq!(classify("Boulevard de la Croix-Rousse"), RoadType::Boulevard);
        assert_eq!(classify("Impasse des Chartreux"), RoadType::Impasse);
        assert_eq!(classify("Cours Gambetta"), RoadType::Cours);
        assert_eq!(classify("Montée de la Grande-Côte"), RoadType::Montee);
        assert_eq!(classify("Passage Thiaffait"), RoadType::Passage);
    }

    #[test]
    fn test_classify_empty_name() {
        assert_eq!(classify(""), RoadType::Autre);
    }

    #[test]
    fn test_classify_unknown_prefix() {
        assert_eq!(classify("Chemin des Écoliers"), RoadType::Autre);
        assert_eq!(classify("Petite Rue des Feuillants"), RoadType::Autre);
    }

    #[test]
    fn test_classify_case_sensitive() {
        assert_eq!(classify("rue basse"), RoadType::Autre);
        assert_eq!(classify("AVENUE Foch"), RoadType::Autre);
    }

    #[test]
    fn test_classify_prefix_not_tokenized() {
        // Correspondance de préfixe brut, pas de découpage en mots
        assert_eq!(classify("Ruelle des Fantasques"), RoadType::Rue);
    }

    #[test]
    fn test_classify_deterministic() {
        let name = "Boulevard des Belges";
        assert_eq!(classify(name), classify(name));
    }

    fn named_street(name: Option<&str>) -> Feature {
        let mut properties = Properties::new();
        if let Some(name) = name {
            properties.insert("name".to_string(), json!(name));
        }
        Feature {
            geometry: Geometry::Point(Point::new(4.83, 45.76)),
            properties,
        }
    }

    #[test]
    fn test_prefix_frequencies() {
        let features = vec![
            named_street(Some("Rue A")),
            named_street(Some("Rue B")),
            named_street(Some("Quai C")),
            named_street(None),
            named_street(Some("")),
        ];

        let stats = prefix_frequencies(&features);
        assert_eq!(
            stats.counts,
            vec![("Rue".to_string(), 2), ("Quai".to_string(), 1)]
        );
        assert_eq!(stats.unnamed, 2);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_prefix_frequencies_stable_order_on_tie() {
        let features = vec![
            named_street(Some("Quai A")),
            named_street(Some("Rue B")),
            named_street(Some("Avenue C")),
        ];

        let stats = prefix_frequencies(&features);
        let words: Vec<&str> = stats.counts.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["Avenue", "Quai", "Rue"]);
    }
}
