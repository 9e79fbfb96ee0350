use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::database::activity_registry::ActivityRegistry;
use crate::services::activities_service::{self, SignupConfirmation};
use crate::web::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    pub email: Option<String>,
}

pub async fn activity_signup_handler(
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<SignupQuery>, QueryRejection>,
    State(registry): State<ActivityRegistry>,
) -> Result<Json<SignupConfirmation>, ApiError> {
    let Path(activity_name) = path?;
    let Query(query) = query?;

    // Presence check only; any non-empty string is accepted as-is.
    let Some(email) = query.email.filter(|e| !e.is_empty()) else {
        warn!(activity = %activity_name, "signup without email");
        return Err(ApiError::Unprocessable(
            "Query parameter 'email' is required".to_string(),
        ));
    };

    let confirmation = activities_service::signup(&registry, &activity_name, &email)?;
    Ok(Json(confirmation))
}
