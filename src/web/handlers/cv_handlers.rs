// src/web/handlers/cv_handlers.rs
use crate::core::{CvQueryService, Resource, ResponseFormat};
use crate::web::types::ApiResponse;
use rocket::http::Status;
use tracing::{debug, error, info_span};

/// Shape one resource and wrap it in the success envelope, or in a 500
/// envelope carrying the resource's error code when anything fails.
pub fn resource_handler(
    resource: Resource,
    format: ResponseFormat,
    cv: &CvQueryService,
) -> ApiResponse {
    let span = info_span!("cv_resource", resource = ?resource, format = ?format);
    let _enter = span.enter();

    let rendered = resource
        .payload(cv)
        .and_then(|payload| ApiResponse::data(format, payload.message, payload.data));

    match rendered {
        Ok(response) => {
            debug!("Served {} ({} bytes)", resource.path(), response.body.len());
            response
        }
        Err(e) => {
            error!("Failed to build {} response: {:#}", resource.path(), e);
            ApiResponse::error(
                Status::InternalServerError,
                format,
                resource.failure_message(&e),
                resource.error_code(),
            )
        }
    }
}
