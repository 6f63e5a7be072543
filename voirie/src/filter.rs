//! Filtrage spatial du réseau de rues
//!
//! Deux tests, dans cet ordre (le test de catégorie est très bon marché,
//! le test géométrique ne tourne que sur les features restantes):
//!
//! 1. Exclusion par catégorie: trottoirs et passages piétons tagués
//!    `highway`/`footway` dans OSM.
//! 2. Inclusion géométrique: la feature doit être entièrement contenue
//!    dans les limites de la ville (un simple chevauchement en bordure
//!    ne suffit pas).

use geo::{Contains, Geometry};
use tracing::debug;

use crate::types::{Feature, FeatureCollection};

/// Exclusion par catégorie, évaluée sur les attributs seuls.
///
/// Une clé absente ne correspond jamais. Exactement trois règles, chacune
/// indépendante du résultat géométrique:
/// - `highway=footway` + `footway=sidewalk`
/// - `highway=footway` + `footway=crossing`
/// - `highway=crossing`
pub fn excluded_by_category(feature: &Feature) -> bool {
    matches!(
        (feature.tag("highway"), feature.tag("footway")),
        (Some("footway"), Some("sidewalk"))
            | (Some("footway"), Some("crossing"))
            | (Some("crossing"), _)
    )
}

/// Test d'inclusion complète dans les limites (relation DE-9IM "contains")
pub fn within_boundary(feature: &Feature, boundary: &Geometry<f64>) -> bool {
    boundary.contains(&feature.geometry)
}

/// Prédicat de rétention d'une rue: non exclue par catégorie et
/// entièrement contenue dans les limites
pub fn keep_street(feature: &Feature, boundary: &Geometry<f64>) -> bool {
    !excluded_by_category(feature) && within_boundary(feature, boundary)
}

/// Filtre la collection de rues contre les limites de la ville.
///
/// Le résultat est une sous-séquence de l'entrée: l'ordre relatif est
/// préservé, aucune feature n'est modifiée ni dupliquée.
pub fn filter_streets(streets: FeatureCollection, boundary: &Geometry<f64>) -> FeatureCollection {
    let total = streets.len();
    let mut features = streets.features;
    features.retain(|feature| keep_street(feature, boundary));

    debug!(total, retained = features.len(), "Filtrage terminé");

    FeatureCollection { features }
}
