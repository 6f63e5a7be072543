//! Tests d'intégration du pipeline chargement → filtrage → classification

use std::path::PathBuf;

use voirie::{
    classify, filter_streets, load_boundary, load_collection, RoadType, StyleRule, Theme,
    FALLBACK_COLOR,
};

/// Limites de test: carré autour du centre de Lyon
const LIMITS: &str = r#"{"type":"FeatureCollection","features":[
    {"type":"Feature","properties":{"name":"Lyon"},
     "geometry":{"type":"Polygon","coordinates":[[
        [4.70,45.70],[4.95,45.70],[4.95,45.85],[4.70,45.85],[4.70,45.70]
     ]]}}
]}"#;

const STREETS: &str = r#"{"type":"FeatureCollection","features":[
    {"type":"Feature","properties":{"name":"Rue de la République","highway":"pedestrian"},
     "geometry":{"type":"LineString","coordinates":[[4.834,45.760],[4.836,45.764]]}},
    {"type":"Feature","properties":{"highway":"footway","footway":"crossing"},
     "geometry":{"type":"LineString","coordinates":[[4.835,45.761],[4.8351,45.7611]]}},
    {"type":"Feature","properties":{"highway":"residential"},
     "geometry":{"type":"LineString","coordinates":[[4.840,45.762],[4.842,45.763]]}},
    {"type":"Feature","properties":{"name":"Route de Vienne","highway":"primary"},
     "geometry":{"type":"LineString","coordinates":[[4.85,45.72],[4.86,45.60]]}}
]}"#;

fn write_fixture(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_pipeline_rue_republique() {
    let streets_path = write_fixture("pipeline_streets.geojson", STREETS);
    let limits_path = write_fixture("pipeline_limits.geojson", LIMITS);

    let streets = load_collection(&streets_path).unwrap();
    let boundary = load_boundary(&limits_path).unwrap();
    assert_eq!(streets.len(), 4);

    let filtered = filter_streets(streets, &boundary);

    // Le passage piéton est exclu par catégorie, la route qui sort des
    // limites est exclue géométriquement
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered.features[0].name(), "Rue de la République");

    let road_type = classify(filtered.features[0].name());
    assert_eq!(road_type, RoadType::Rue);

    let style = StyleRule::derive(road_type, Theme::Light);
    assert_eq!(style.color, "#6929c4");
    assert_eq!(style.weight, 1.0);

    std::fs::remove_file(streets_path).ok();
    std::fs::remove_file(limits_path).ok();
}

#[test]
fn test_pipeline_unnamed_street_is_autre() {
    let streets_path = write_fixture("pipeline_streets_unnamed.geojson", STREETS);
    let limits_path = write_fixture("pipeline_limits_unnamed.geojson", LIMITS);

    let streets = load_collection(&streets_path).unwrap();
    let boundary = load_boundary(&limits_path).unwrap();
    let filtered = filter_streets(streets, &boundary);

    // La rue résidentielle sans nom est retenue et classée Autre
    let unnamed = &filtered.features[1];
    assert_eq!(unnamed.name(), "");

    let road_type = classify(unnamed.name());
    assert_eq!(road_type, RoadType::Autre);

    let style = StyleRule::derive(road_type, Theme::Light);
    assert_eq!(style.color, FALLBACK_COLOR);
    assert_eq!(style.weight, 0.5);

    std::fs::remove_file(streets_path).ok();
    std::fs::remove_file(limits_path).ok();
}

#[test]
fn test_pipeline_refiltering_is_stable() {
    let streets_path = write_fixture("pipeline_streets_stable.geojson", STREETS);
    let limits_path = write_fixture("pipeline_limits_stable.geojson", LIMITS);

    let streets = load_collection(&streets_path).unwrap();
    let boundary = load_boundary(&limits_path).unwrap();

    let once = filter_streets(streets, &boundary);
    let count = once.len();
    let twice = filter_streets(once, &boundary);
    assert_eq!(twice.len(), count);

    std::fs::remove_file(streets_path).ok();
    std::fs::remove_file(limits_path).ok();
}
