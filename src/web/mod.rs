// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::config::AppConfig;
use crate::core::{CvQueryService, Resource, ResponseFormat};
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::{catchers, get, options, routes, Build, Request, Response, Rocket, State};
use std::path::PathBuf;
use tracing::info;

pub const API_BASE: &str = "/api/v1";

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new("Access-Control-Allow-Methods", "GET, OPTIONS"));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

// CV routes, mounted under API_BASE

#[get("/me")]
pub fn get_profile(format: ResponseFormat, cv: &State<CvQueryService>) -> ApiResponse {
    handlers::resource_handler(Resource::Profile, format, cv)
}

#[get("/experience")]
pub fn get_experience(format: ResponseFormat, cv: &State<CvQueryService>) -> ApiResponse {
    handlers::resource_handler(Resource::Experience, format, cv)
}

#[get("/education")]
pub fn get_education(format: ResponseFormat, cv: &State<CvQueryService>) -> ApiResponse {
    handlers::resource_handler(Resource::Education, format, cv)
}

#[get("/skills")]
pub fn get_skills(format: ResponseFormat, cv: &State<CvQueryService>) -> ApiResponse {
    handlers::resource_handler(Resource::Skills, format, cv)
}

#[get("/projects")]
pub fn get_projects(format: ResponseFormat, cv: &State<CvQueryService>) -> ApiResponse {
    handlers::resource_handler(Resource::Projects, format, cv)
}

#[get("/contact")]
pub fn get_contact(format: ResponseFormat, cv: &State<CvQueryService>) -> ApiResponse {
    handlers::resource_handler(Resource::Contact, format, cv)
}

#[get("/summary")]
pub fn get_summary(format: ResponseFormat, cv: &State<CvQueryService>) -> ApiResponse {
    handlers::resource_handler(Resource::Summary, format, cv)
}

// Root routes

#[get("/health")]
pub fn health(format: ResponseFormat) -> ApiResponse {
    handlers::health_handler(format)
}

#[get("/")]
pub fn index(format: ResponseFormat) -> ApiResponse {
    handlers::index_handler(format)
}

#[options("/<_..>")]
pub fn options() -> Status {
    Status::Ok
}

// Rocket answers unmatched methods with 404; known GET paths get a 405 instead.

fn reject_method(path: PathBuf) -> Status {
    if is_known_path(&path) {
        Status::MethodNotAllowed
    } else {
        Status::NotFound
    }
}

fn is_known_path(path: &std::path::Path) -> bool {
    let path = format!("/{}", path.display());
    let path = path.trim_end_matches('/');
    path.is_empty()
        || path == "/health"
        || Resource::ALL
            .iter()
            .any(|r| path == format!("{}{}", API_BASE, r.path()))
}

#[rocket::post("/<path..>", rank = 20)]
pub fn post_fallback(path: PathBuf) -> Status {
    reject_method(path)
}

#[rocket::put("/<path..>", rank = 20)]
pub fn put_fallback(path: PathBuf) -> Status {
    reject_method(path)
}

#[rocket::patch("/<path..>", rank = 20)]
pub fn patch_fallback(path: PathBuf) -> Status {
    reject_method(path)
}

#[rocket::delete("/<path..>", rank = 20)]
pub fn delete_fallback(path: PathBuf) -> Status {
    reject_method(path)
}

// Error catchers

#[rocket::catch(404)]
pub fn not_found(request: &Request<'_>) -> ApiResponse {
    ApiResponse::error(
        Status::NotFound,
        negotiate(request),
        format!("Resource not found: {}", request.uri().path()),
        "NOT_FOUND",
    )
}

#[rocket::catch(405)]
pub fn method_not_allowed(request: &Request<'_>) -> ApiResponse {
    ApiResponse::error(
        Status::MethodNotAllowed,
        negotiate(request),
        format!(
            "Method {} not allowed on {}",
            request.method(),
            request.uri().path()
        ),
        "METHOD_NOT_ALLOWED",
    )
}

#[rocket::catch(500)]
pub fn internal_error(request: &Request<'_>) -> ApiResponse {
    ApiResponse::error(
        Status::InternalServerError,
        negotiate(request),
        "Internal server error".to_string(),
        "INTERNAL_ERROR",
    )
}

/// Assemble the application around an already validated dataset
pub fn build_rocket(rocket: Rocket<Build>, cv: CvQueryService) -> Rocket<Build> {
    rocket
        .attach(Cors)
        .manage(cv)
        .register("/", catchers![not_found, method_not_allowed, internal_error])
        .mount(
            API_BASE,
            routes![
                get_profile,
                get_experience,
                get_education,
                get_skills,
                get_projects,
                get_contact,
                get_summary,
            ],
        )
        .mount(
            "/",
            routes![
                index,
                health,
                options,
                post_fallback,
                put_fallback,
                patch_fallback,
                delete_fallback,
            ],
        )
}

// Main server start function
pub async fn start_web_server(config: &AppConfig, cv: CvQueryService) -> Result<()> {
    let figment = rocket::Config::figment()
        .merge(("address", config.address.clone()))
        .merge(("port", config.port))
        .merge(("log_level", "off"));

    info!("Starting CV Portfolio API server");
    info!("Server: http://{}:{}", config.address, config.port);

    build_rocket(rocket::custom(figment), cv)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server failed: {}", e))?;

    info!("CV Portfolio API server stopped");
    Ok(())
}
