use axum::Json;

use crate::models::{catalogue, ServiceInfo};

/// The service catalogue for the widget's select box, `Andet` last.
pub async fn list_services() -> Json<Vec<ServiceInfo>> {
    Json(catalogue())
}
