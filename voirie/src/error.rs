//! Types d'erreurs pour le crate voirie

use std::path::PathBuf;

use thiserror::Error;

/// Erreurs pouvant survenir lors du chargement des données géographiques
#[derive(Debug, Error)]
pub enum VoirieError {
    /// Erreur d'I/O lors de la lecture d'un fichier
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fichier d'entrée introuvable
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Document GeoJSON invalide ou géométrie non convertible
    #[error("Malformed GeoJSON in {}: {reason}", path.display())]
    MalformedInput { path: PathBuf, reason: String },

    /// Collection sans aucune feature (limites de ville attendues)
    #[error("Empty feature collection: {}", path.display())]
    EmptyCollection { path: PathBuf },
}

impl VoirieError {
    /// Crée une erreur de fichier introuvable
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Crée une erreur de document invalide avec contexte
    pub fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
