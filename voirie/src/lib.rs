//! # voirie
//!
//! Filtrage spatial et classification du réseau de rues de Lyon.
//!
//! ## Features
//!
//! - Chargement GeoJSON (rues et limites de ville) vers les types `geo`
//! - Filtrage: exclusion par catégorie OSM puis inclusion géométrique
//!   complète dans les limites
//! - Classification des rues par préfixe de nom (Rue, Avenue, Quai, ...)
//! - Tables de style (couleur par thème, épaisseur de trait)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//! use voirie::{classify, filter_streets, load_boundary, load_collection};
//! use voirie::{StyleRule, Theme};
//!
//! let streets = load_collection(Path::new("data/raw-lyon_street_source.geojson"))?;
//! let boundary = load_boundary(Path::new("data/raw-lyon-limits.geojson"))?;
//!
//! for street in filter_streets(streets, &boundary).iter() {
//!     let road_type = classify(street.name());
//!     let style = StyleRule::derive(road_type, Theme::Light);
//!     println!("{}: {}", street.name(), style.color);
//! }
//! ```

pub mod classify;
pub mod error;
pub mod filter;
pub mod loader;
pub mod style;
pub mod types;

pub use classify::{classify, prefix_frequencies, PrefixStats};
pub use error::VoirieError;
pub use filter::{excluded_by_category, filter_streets, keep_street, within_boundary};
pub use loader::{load_boundary, load_collection};
pub use style::{color, weight, StyleRule, FALLBACK_COLOR, FILL_OPACITY};
pub use types::{Feature, FeatureCollection, Properties, RoadType, Theme};
