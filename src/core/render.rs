// src/core/render.rs
use crate::core::xml;
use anyhow::{Context, Result};
use serde_json::Value;

/// Output format negotiated once per request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// XML when any media range of the `Accept` header names an XML type, JSON otherwise.
    pub fn from_accept(accept: Option<&str>) -> Self {
        let Some(accept) = accept else {
            return ResponseFormat::Json;
        };

        let wants_xml = accept.split(',').any(|range| {
            let media = range.split(';').next().unwrap_or("").trim();
            media.eq_ignore_ascii_case("application/xml") || media.eq_ignore_ascii_case("text/xml")
        });

        if wants_xml {
            ResponseFormat::Xml
        } else {
            ResponseFormat::Json
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Xml => "application/xml",
        }
    }

    /// Encode `value`; `root` names the wrapper element in XML and is unused for JSON.
    pub fn render(self, value: &Value, root: &str) -> Result<String> {
        match self {
            ResponseFormat::Json => serde_json::to_string(value).context("JSON encoding failed"),
            ResponseFormat::Xml => Ok(xml::to_xml(value, root)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_accept() {
        assert_eq!(ResponseFormat::from_accept(None), ResponseFormat::Json);
        assert_eq!(ResponseFormat::from_accept(Some("")), ResponseFormat::Json);
        assert_eq!(
            ResponseFormat::from_accept(Some("application/json")),
            ResponseFormat::Json
        );
        assert_eq!(ResponseFormat::from_accept(Some("*/*")), ResponseFormat::Json);
        assert_eq!(
            ResponseFormat::from_accept(Some("application/xml")),
            ResponseFormat::Xml
        );
        assert_eq!(
            ResponseFormat::from_accept(Some("text/html, Text/XML;q=0.9")),
            ResponseFormat::Xml
        );
        assert_eq!(
            ResponseFormat::from_accept(Some("application/xhtml+xml")),
            ResponseFormat::Json
        );
    }

    #[test]
    fn test_render_json_keeps_key_order() {
        let value = json!({"success": true, "message": "ok", "data": [1, 2]});
        let body = ResponseFormat::Json.render(&value, "response").unwrap();
        assert_eq!(body, r#"{"success":true,"message":"ok","data":[1,2]}"#);
    }

    #[test]
    fn test_render_xml_uses_root() {
        let body = ResponseFormat::Xml
            .render(&json!({"status": "healthy"}), "health")
            .unwrap();
        assert!(body.contains("<health>\n  <status>healthy</status>\n</health>"));
    }
}
