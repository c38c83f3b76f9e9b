use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Activity;
use crate::store::Catalog;
use crate::web::error::ApiError;

pub async fn list_activities_handler(
    State(catalog): State<Arc<Catalog>>,
) -> Json<HashMap<String, Activity>> {
    Json(catalog.list().await)
}

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct ConfirmationMessage {
    pub message: String,
}

pub async fn signup_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<ConfirmationMessage>, ApiError> {
    catalog
        .signup(&activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!("Signup for {} failed: {}", activity_name, e);
            e
        })?;

    Ok(Json(ConfirmationMessage {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

pub async fn remove_handler(
    State(catalog): State<Arc<Catalog>>,
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
) -> Result<Json<ConfirmationMessage>, ApiError> {
    catalog
        .remove(&activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!("Removal from {} failed: {}", activity_name, e);
            e
        })?;

    Ok(Json(ConfirmationMessage {
        message: format!("Removed {} from {}", query.email, activity_name),
    }))
}
