//! # Module de base de données
//!
//! Gère le pool de connexions MySQL et les requêtes de lecture sur la
//! table `Event`. Le pool est ouvert une seule fois au démarrage puis
//! partagé par tous les handlers ; aucune écriture n'est émise.
//!
//! Les requêtes SQL sont centralisées dans le module `queries`.

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::Connection;

use crate::config::DatabaseConfig;
use crate::models::Event;
use crate::queries;

/// Gestionnaire de base de données
#[derive(Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Construit le pool de connexions MySQL
    ///
    /// L'ouverture est différée : aucun trafic réseau n'est émis ici.
    /// La joignabilité du serveur est vérifiée par [`Database::ping`],
    /// appelé une fois au démarrage.
    ///
    /// Seul le transport TCP est supporté ; toute autre valeur du champ
    /// `protocol` est signalée puis ignorée.
    pub fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        if config.protocol != "tcp" {
            tracing::warn!(
                "Protocole '{}' non supporté, connexion en TCP",
                config.protocol
            );
        }

        let pool = MySqlPoolOptions::new().connect_lazy(&config.mysql_url())?;
        Ok(Self { pool })
    }

    /// Vérifie la joignabilité du serveur MySQL par un aller-retour léger
    ///
    /// # Erreurs
    /// Retourne une erreur si aucune connexion ne peut être établie,
    /// typiquement parce que `config.ini` contient encore les valeurs
    /// du gabarit par défaut.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await
    }

    /// Liste tous les incidents de la table `Event`
    ///
    /// L'ordre des lignes est celui retourné par le moteur ; une table
    /// vide produit un vecteur vide, pas une erreur.
    pub async fn list_events(&self) -> Result<Vec<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(queries::SQL_LIST_EVENTS)
            .fetch_all(&self.pool)
            .await
    }

    /// Recherche un incident par son identifiant
    ///
    /// # Retourne
    /// `Some(Event)` si une ligne correspond, `None` sinon. `None` est un
    /// résultat normal, distinct d'une panne de la base.
    pub async fn find_event(&self, id: i64) -> Result<Option<Event>, sqlx::Error> {
        sqlx::query_as::<_, Event>(queries::SQL_FIND_EVENT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Ferme le pool de connexions
    ///
    /// Appelé une seule fois, à l'arrêt du processus.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
