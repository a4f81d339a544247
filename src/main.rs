//! # Serveur d'incidents (Rust/Axum/MySQL)
//!
//! API HTTP en lecture seule exposant les incidents de la table `Event`
//! d'une base MySQL externe. Aucune écriture, aucune authentification :
//! la table est alimentée par un autre système, ce serveur ne fait que
//! la lire.
//!
//! ## Architecture
//! - **Framework Web** : Axum 0.7
//! - **Base de données** : MySQL via SQLx (pool partagé, lecture seule)
//! - **Sérialisation** : serde + serde_json
//! - **Logging** : tracing + tracing-subscriber
//!
//! ## Endpoints
//! - `GET /event` - Liste de tous les incidents
//! - `GET /event/:id` - Détail d'un incident par identifiant
//!
//! ## Configuration
//! Le serveur charge les paramètres MySQL depuis `config.ini` au démarrage.
//! Si le fichier est absent, un gabarit par défaut est généré et le
//! processus s'arrête (code 1) pour laisser l'opérateur le renseigner.

mod config;
mod database;
mod handlers;
mod models;
mod queries; // Module contenant toutes les requêtes SQL

use std::net::SocketAddr;
use std::process;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::{DatabaseConfig, CONFIG_NAME},
    database::Database,
    handlers::{build_router, AppState},
};

/// Port d'écoute HTTP, identique pour tous les déploiements
const LISTEN_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Chargement de la configuration (ou génération du gabarit)
    let (db_config, found) = DatabaseConfig::load_or_create(CONFIG_NAME)?;
    if !found {
        println!(
            "Gabarit de configuration généré dans {}. Renseignez les bonnes valeurs avant de relancer.",
            CONFIG_NAME
        );
        process::exit(1);
    }

    // 2. Initialisation du logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Démarrage du serveur d'incidents...");
    tracing::info!("Configuration chargée depuis {}", CONFIG_NAME);

    // 3. Ouverture du pool MySQL (différée) puis vérification par ping
    let db = Database::new(&db_config)?;
    if let Err(e) = db.ping().await {
        tracing::error!(
            "Connexion à la base impossible ({}). Vérifiez les valeurs de {}.",
            e,
            CONFIG_NAME
        );
        process::exit(1);
    }
    tracing::info!(
        "✓ Connexion MySQL établie ({}:{}/{})",
        db_config.hostname,
        db_config.port,
        db_config.database
    );

    // 4. Création de l'état partagé et des routes
    let state = AppState { db: db.clone() };
    let app = build_router(state)
        // Middleware de logging HTTP
        .layer(TraceLayer::new_for_http());

    // 5. Démarrage du serveur
    let addr = SocketAddr::from(([0, 0, 0, 0], LISTEN_PORT));
    tracing::info!("✓ Serveur démarré sur http://{}", addr);
    tracing::info!("  GET /event      - Liste des incidents");
    tracing::info!("  GET /event/:id  - Détail d'un incident");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    // Le pool est fermé une seule fois, à l'arrêt du serveur
    db.close().await;
    Ok(())
}
