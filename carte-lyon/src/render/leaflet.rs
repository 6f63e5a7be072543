//! Écriture en streaming du document HTML Leaflet
//!
//! Le document est autonome (assets Leaflet depuis le CDN) et écrit
//! feature par feature: en-tête, une couche `L.geoJSON` stylée par rue,
//! pied de page.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use voirie::{Feature, StyleRule};

use super::MapConfig;

/// Writer de carte Leaflet, ouvert tant que des rues sont ajoutées
pub struct LeafletMap<W: Write> {
    writer: W,
    streets: usize,
}

impl LeafletMap<BufWriter<File>> {
    /// Crée le fichier de sortie et écrit l'en-tête du document
    pub fn create(path: &Path, config: &MapConfig) -> Result<Self> {
        let file = File::create(path)
            .context(format!("Failed to create file: {}", path.display()))?;
        Self::new(BufWriter::new(file), config)
    }
}

impl<W: Write> LeafletMap<W> {
    /// Écrit l'en-tête du document (HTML + initialisation de la carte)
    pub fn new(mut writer: W, config: &MapConfig) -> Result<Self> {
        let (lat, lon) = config.center;

        write!(
            writer,
            "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\">\n\
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
             <title>Rues de Lyon par type de voie</title>\n\
             <link rel=\"stylesheet\" href=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.css\">\n\
             <script src=\"https://unpkg.com/leaflet@1.9.4/dist/leaflet.js\"></script>\n\
             <style>html, body, #map {{ height: 100%; width: 100%; margin: 0; }}</style>\n\
             </head>\n<body>\n<div id=\"map\"></div>\n<script>\n"
        )?;

        write!(
            writer,
            "var map = L.map('map').setView([{lat}, {lon}], {zoom});\n\
             L.tileLayer('{url}', {{ attribution: '{attribution}', maxZoom: 20 }}).addTo(map);\n",
            zoom = config.zoom,
            url = config.tile_url(),
            attribution = config.tile_attribution(),
        )?;

        Ok(Self { writer, streets: 0 })
    }

    /// Ajoute une rue comme couche GeoJSON stylée
    pub fn add_street(&mut self, feature: &Feature, style: StyleRule) -> Result<()> {
        let geometry = geojson::Geometry::new(geojson::Value::from(&feature.geometry));
        let geometry_json = serde_json::to_string(&geometry)?;

        write!(
            self.writer,
            "L.geoJSON({geometry_json}, {{ style: {{ \"color\": \"{color}\", \
             \"fillColor\": \"{color}\", \"weight\": {weight}, \
             \"fillOpacity\": {opacity} }} }}).addTo(map);\n",
            color = style.color,
            weight = style.weight,
            opacity = style.fill_opacity,
        )?;

        self.streets += 1;
        Ok(())
    }

    /// Nombre de rues déjà ajoutées
    pub fn streets(&self) -> usize {
        self.streets
    }

    /// Écrit le pied de page et vide le buffer
    pub fn finish(mut self) -> Result<()> {
        write!(self.writer, "</script>\n</body>\n</html>\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Geometry;
    use std::io::Cursor;
    use voirie::{Properties, RoadType, Theme};

    fn sample_street() -> Feature {
        Feature {
            geometry: Geometry::LineString(
                vec![
                    geo::coord! { x: 4.834, y: 45.760 },
                    geo::coord! { x: 4.836, y: 45.764 },
                ]
                .into(),
            ),
            properties: Properties::new(),
        }
    }

    #[test]
    fn test_header_contains_map_setup() {
        let mut buffer = Cursor::new(Vec::new());
        let map = LeafletMap::new(&mut buffer, &MapConfig::lyon(Theme::Light)).unwrap();
        drop(map);

        let html = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(html.contains("L.map('map').setView([45.764043, 4.835659], 13)"));
        assert!(html.contains("light_all"));
        assert!(html.contains("leaflet@1.9.4"));
    }

    #[test]
    fn test_add_street_writes_styled_layer() {
        let mut buffer = Cursor::new(Vec::new());
        let mut map = LeafletMap::new(&mut buffer, &MapConfig::lyon(Theme::Light)).unwrap();

        let style = StyleRule::derive(RoadType::Rue, Theme::Light);
        map.add_street(&sample_street(), style).unwrap();
        assert_eq!(map.streets(), 1);
        drop(map);

        let html = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(html.contains(r##""color": "#6929c4""##));
        assert!(html.contains(r#""weight": 1"#));
        assert!(html.contains(r#""fillOpacity": 0.6"#));
        assert!(html.contains(r#""type":"LineString""#));
    }

    #[test]
    fn test_finish_closes_document() {
        let path = std::env::temp_dir().join("test_leaflet_finish.html");
        let config = MapConfig::lyon(Theme::Dark);

        let mut map = LeafletMap::create(&path, &config).unwrap();
        let style = StyleRule::derive(RoadType::Autre, Theme::Dark);
        map.add_street(&sample_street(), style).unwrap();
        map.finish().unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>\n"));
        assert!(html.contains("dark_all"));
        assert!(html.contains(r##""color": "#D3D3D3""##));
        assert!(html.contains(r#""weight": 0.5"#));

        std::fs::remove_file(path).ok();
    }
}
