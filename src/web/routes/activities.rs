use axum::{extract::State, Json};

use crate::database::activity_registry::ActivityRegistry;
use crate::models::ActivityMap;
use crate::services::activities_service;

pub async fn activities_handler(State(registry): State<ActivityRegistry>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&registry))
}
