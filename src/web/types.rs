// src/web/types.rs
use crate::core::ResponseFormat;
use chrono::{DateTime, Utc};
use rocket::http::{ContentType, Status};
use rocket::request::{FromRequest, Outcome};
use rocket::response::{self, Responder};
use rocket::serde::Serialize;
use rocket::{Request, Response};
use serde_json::Value;
use std::convert::Infallible;
use std::io::Cursor;
use tracing::error;

/// Root element wrapping envelopes in XML
pub const ENVELOPE_ROOT: &str = "response";

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct DataResponse {
    pub success: bool,
    pub message: String,
    pub data: Value,
    pub timestamp: DateTime<Utc>,
}

impl DataResponse {
    pub fn success(message: String, data: Value) -> Self {
        Self {
            success: true,
            message,
            data,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct StandardErrorResponse {
    pub success: bool,
    pub message: String,
    pub error_code: String,
    pub data: Option<Value>,
    pub timestamp: DateTime<Utc>,
}

impl StandardErrorResponse {
    pub fn new(message: String, error_code: &str) -> Self {
        Self {
            success: false,
            message,
            error_code: error_code.to_string(),
            data: None,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct IndexResponse {
    pub message: String,
    pub version: String,
    pub health: String,
    pub endpoints: Vec<String>,
}

/// A rendered body plus the status and format it was produced for
#[derive(Debug)]
pub struct ApiResponse {
    pub status: Status,
    pub format: ResponseFormat,
    pub body: String,
}

impl ApiResponse {
    /// Encode any serializable body in the negotiated format
    pub fn render<T: Serialize>(
        status: Status,
        format: ResponseFormat,
        body: &T,
        root: &str,
    ) -> anyhow::Result<Self> {
        let value = serde_json::to_value(body)?;
        let body = format.render(&value, root)?;
        Ok(Self {
            status,
            format,
            body,
        })
    }

    pub fn data(format: ResponseFormat, message: String, data: Value) -> anyhow::Result<Self> {
        Self::render(
            Status::Ok,
            format,
            &DataResponse::success(message, data),
            ENVELOPE_ROOT,
        )
    }

    /// Error envelope. Never fails: falls back to a fixed body.
    pub fn error(status: Status, format: ResponseFormat, message: String, error_code: &str) -> Self {
        let envelope = StandardErrorResponse::new(message, error_code);
        Self::render(status, format, &envelope, ENVELOPE_ROOT).unwrap_or_else(|e| {
            error!("Failed to render error envelope: {:#}", e);
            Self {
                status,
                format,
                body: fallback_error_body(format).to_string(),
            }
        })
    }
}

fn fallback_error_body(format: ResponseFormat) -> &'static str {
    match format {
        ResponseFormat::Json => {
            r#"{"success":false,"message":"Internal server error","error_code":"INTERNAL_ERROR","data":null}"#
        }
        ResponseFormat::Xml => {
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<response>\n  <success>false</success>\n  <message>Internal server error</message>\n  <error_code>INTERNAL_ERROR</error_code>\n  <data/>\n</response>\n"
        }
    }
}

fn content_type(format: ResponseFormat) -> ContentType {
    match format {
        ResponseFormat::Json => ContentType::JSON,
        ResponseFormat::Xml => ContentType::new("application", "xml"),
    }
}

impl<'r> Responder<'r, 'static> for ApiResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        Response::build()
            .status(self.status)
            .header(content_type(self.format))
            .sized_body(self.body.len(), Cursor::new(self.body))
            .ok()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for ResponseFormat {
    type Error = Infallible;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        Outcome::Success(negotiate(request))
    }
}

/// Every `Accept` line counts, not just the first
pub fn negotiate(request: &Request<'_>) -> ResponseFormat {
    let accept: Vec<&str> = request.headers().get("Accept").collect();
    if accept.is_empty() {
        return ResponseFormat::Json;
    }
    ResponseFormat::from_accept(Some(&accept.join(",")))
}
