//! Chargement des fichiers GeoJSON en `FeatureCollection`

use std::path::Path;

use geo::Geometry;
use geojson::GeoJson;
use tracing::{debug, warn};

use crate::types::{Feature, FeatureCollection};
use crate::VoirieError;

/// Charge un fichier GeoJSON et convertit ses features en types `geo`.
///
/// Les features sans géométrie sont ignorées avec un warning (elles ne
/// peuvent ni être filtrées spatialement ni être dessinées).
///
/// # Errors
///
/// - [`VoirieError::NotFound`] si le fichier n'existe pas
/// - [`VoirieError::MalformedInput`] si le contenu n'est pas un GeoJSON
///   valide, n'est pas une FeatureCollection, ou contient une géométrie
///   non convertible
pub fn load_collection(path: &Path) -> Result<FeatureCollection, VoirieError> {
    if !path.exists() {
        return Err(VoirieError::not_found(path));
    }

    let content = std::fs::read_to_string(path)?;

    let geojson: GeoJson = content
        .parse()
        .map_err(|e: geojson::Error| VoirieError::malformed(path, e.to_string()))?;

    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => {
            return Err(VoirieError::malformed(
                path,
                "expected a FeatureCollection document",
            ))
        }
    };

    let mut features = Vec::with_capacity(collection.features.len());
    for gj_feature in collection.features {
        let Some(gj_geometry) = gj_feature.geometry else {
            warn!(path = %path.display(), "Feature sans géométrie ignorée");
            continue;
        };

        let geometry = Geometry::<f64>::try_from(gj_geometry)
            .map_err(|e| VoirieError::malformed(path, e.to_string()))?;

        features.push(Feature {
            geometry,
            properties: gj_feature.properties.unwrap_or_default(),
        });
    }

    debug!(path = %path.display(), count = features.len(), "GeoJSON chargé");

    Ok(FeatureCollection { features })
}

/// Charge les limites de la ville: la géométrie de la première feature
/// de la collection (comportement attendu des exports OSM de limites
/// administratives, une seule feature par fichier).
///
/// # Errors
///
/// Comme [`load_collection`], plus [`VoirieError::EmptyCollection`] si le
/// fichier ne contient aucune feature.
pub fn load_boundary(path: &Path) -> Result<Geometry<f64>, VoirieError> {
    let collection = load_collection(path)?;

    let first = collection
        .features
        .into_iter()
        .next()
        .ok_or_else(|| VoirieError::EmptyCollection {
            path: path.to_path_buf(),
        })?;

    Ok(first.geometry)
}
