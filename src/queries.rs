//! # Module de requêtes SQL
//!
//! Centralise les requêtes SQL utilisées par le serveur d'incidents.
//!
//! ## Conventions
//!
//! - Toutes les requêtes sont des constantes publiques préfixées par `SQL_`
//! - Chaque constante documente son objectif, sa logique et ses paramètres
//! - Les colonnes sont toujours listées explicitement : le décodage se fait
//!   par nom, la position des colonnes dans la table externe n'importe pas

/// Liste tous les incidents de la table `Event`.
///
/// **Objectif** : Alimenter `GET /event`.
///
/// **Logique** :
/// - Aucun filtre, aucun tri imposé : l'ordre retourné est celui du moteur
/// - Un résultat vide est un cas normal (tableau JSON vide)
///
/// **Paramètres** : Aucun
///
/// **Utilisé dans** : `database.rs::list_events()`
pub const SQL_LIST_EVENTS: &str = r#"
    SELECT id, location, department, category, priority,
           description, remarks, reportedby, operativeid
    FROM Event
"#;

/// Recherche un incident par son identifiant.
///
/// **Objectif** : Alimenter `GET /event/{id}`.
///
/// **Logique** :
/// - Filtre d'égalité sur la clé primaire `id`
/// - Zéro ligne n'est pas une erreur : l'appelant reçoit `None`
///   et le traduit en réponse applicative "No results"
///
/// **Paramètres** :
/// - `?1` : id (BIGINT) - identifiant de l'incident recherché
///
/// **Utilisé dans** : `database.rs::find_event()`
pub const SQL_FIND_EVENT_BY_ID: &str = r#"
    SELECT id, location, department, category, priority,
           description, remarks, reportedby, operativeid
    FROM Event
    WHERE id = ?
"#;
