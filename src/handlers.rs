//! # Module des handlers HTTP
//!
//! Définit les deux endpoints de lecture de l'API et le routeur associé.
//!
//! Compatibilité avec l'API d'origine : les erreurs applicatives (id non
//! entier, aucun résultat) sont renvoyées dans un HTTP 200 avec un corps
//! `{"code": N, "message": "..."}`. Seule une panne de la base pendant le
//! traitement produit un HTTP 500 ; le processus survit à la requête.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::{
    database::Database,
    models::{ApiMessage, ErrorResponse, Event},
};

/// État partagé de l'application
///
/// Le pool MySQL est la seule ressource partagée entre les requêtes,
/// en lecture seule, injectée ici plutôt que portée par un global.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Construit le routeur de l'API
///
/// Deux routes, toutes deux en GET uniquement :
/// - `GET /event` : liste de tous les incidents
/// - `GET /event/:id` : détail d'un incident
///
/// Toute autre route reçoit le 404 par défaut du routeur, toute autre
/// méthode sur ces chemins un 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/event", get(get_events))
        .route("/event/:id", get(get_event))
        .with_state(state)
}

/// Liste tous les incidents (GET /event)
///
/// Retourne un tableau JSON, vide si la table l'est.
pub async fn get_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<Event>>, (StatusCode, Json<ErrorResponse>)> {
    let events = state.db.list_events().await.map_err(database_error)?;
    Ok(Json(events))
}

/// Détail d'un incident (GET /event/:id)
///
/// Le segment de chemin est validé avant toute requête : s'il n'est pas
/// un entier, la base n'est pas interrogée et le client reçoit le code
/// applicatif 1. Un identifiant valide sans ligne correspondante produit
/// le code applicatif 2. Les deux cas sont des HTTP 200.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let id: i64 = match id.parse() {
        Ok(id) => id,
        Err(_) => return Ok(Json(ApiMessage::invalid_id()).into_response()),
    };

    match state.db.find_event(id).await.map_err(database_error)? {
        Some(event) => Ok(Json(event).into_response()),
        None => Ok(Json(ApiMessage::no_results()).into_response()),
    }
}

/// Traduit une panne de la base en réponse HTTP 500
///
/// La panne est journalisée côté serveur ; le client ne reçoit qu'un
/// libellé générique.
fn database_error(e: sqlx::Error) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("Database error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("Database error")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// Routeur de test avec un pool paresseux : tant qu'aucune requête SQL
    /// n'est émise, aucune connexion MySQL n'est tentée.
    fn test_app() -> Router {
        let db = Database::new(&DatabaseConfig::default()).expect("pool");
        build_router(AppState { db })
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("body JSON")
    }

    #[tokio::test]
    async fn non_integer_id_returns_code_1_with_http_200() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/event/abc")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("oneshot");

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({"code": 1, "message": "ID was not an Integer"})
        );
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/autre")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("oneshot");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_get_method_returns_405() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/event")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("oneshot");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
