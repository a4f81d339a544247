//! # Module des modèles de données
//!
//! Définit la structure des incidents lus en base et les corps de réponse
//! JSON retournés par l'API.

use serde::Serialize;
use sqlx::FromRow;

/// Incident stocké dans la table `Event`
///
/// Projection en lecture seule d'une ligne écrite par un système externe.
/// Les colonnes nullables sont des `Option` : une valeur absente en base
/// est sérialisée en `null` JSON, distincte d'une chaîne vide présente.
/// Le décodage se fait par nom de colonne, pas par position.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Event {
    /// Identifiant unique de l'incident
    pub id: i64,

    /// Lieu de l'incident
    pub location: String,

    /// Service concerné
    pub department: String,

    /// Catégorie de l'incident
    pub category: String,

    /// Niveau de priorité
    pub priority: String,

    /// Description détaillée (nullable en base)
    pub description: Option<String>,

    /// Remarques complémentaires (nullable en base)
    pub remarks: Option<String>,

    /// Identifiant du déclarant
    pub reportedby: i64,

    /// Identifiant de l'opérateur assigné (nullable en base)
    pub operativeid: Option<i64>,
}

/// Réponse applicative codée retournée au client
///
/// L'API d'origine renvoie ses erreurs applicatives dans un HTTP 200 :
/// le code est porté par le corps JSON, pas par le statut HTTP.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub code: i32,
    pub message: String,
}

impl ApiMessage {
    /// Code 1 : le paramètre de chemin n'était pas un entier
    pub fn invalid_id() -> Self {
        Self {
            code: 1,
            message: "ID was not an Integer".to_string(),
        }
    }

    /// Code 2 : aucune ligne ne correspond à l'identifiant demandé
    pub fn no_results() -> Self {
        Self {
            code: 2,
            message: "No results".to_string(),
        }
    }
}

/// Réponse d'erreur interne retournée au client (HTTP 500)
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Crée une réponse d'erreur simple
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
