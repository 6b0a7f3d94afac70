// src/web/handlers/system_handlers.rs
use crate::core::{Resource, ResponseFormat};
use crate::web::types::{ApiResponse, HealthResponse, IndexResponse};
use crate::web::API_BASE;
use chrono::Utc;
use rocket::http::Status;
use tracing::{debug, error};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn health_handler(format: ResponseFormat) -> ApiResponse {
    debug!("Health check");
    let health = HealthResponse {
        status: "healthy".to_string(),
        message: "CV Portfolio API is running".to_string(),
        timestamp: Utc::now(),
        version: VERSION.to_string(),
    };
    plain(format, &health, "health")
}

pub fn index_handler(format: ResponseFormat) -> ApiResponse {
    let index = IndexResponse {
        message: "Welcome to my CV Portfolio API".to_string(),
        version: VERSION.to_string(),
        health: "/health".to_string(),
        endpoints: Resource::ALL
            .iter()
            .map(|r| format!("{}{}", API_BASE, r.path()))
            .collect(),
    };
    plain(format, &index, "api")
}

fn plain<T: rocket::serde::Serialize>(format: ResponseFormat, body: &T, root: &str) -> ApiResponse {
    ApiResponse::render(Status::Ok, format, body, root).unwrap_or_else(|e| {
        error!("Failed to render {} response: {:#}", root, e);
        ApiResponse::error(
            Status::InternalServerError,
            format,
            format!("Failed to render {}: {:#}", root, e),
            "INTERNAL_ERROR",
        )
    })
}
