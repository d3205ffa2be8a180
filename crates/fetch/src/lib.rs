//! Qatalog catalog retrieval: the HTTP loader and wire-format validation.

#![forbid(unsafe_code)]

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use qatalog_core::{wire, Catalog, LoadError, Tool};

/// Compiled-in location of the catalog document; the binary overrides it
/// from `QATALOG_DATA_URL`.
pub const DEFAULT_DATA_URL: &str = "http://127.0.0.1:8080/data/tools.json";

/// Where catalog bytes come from. The loader is the only fallible component;
/// everything downstream is total.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load(&self) -> Result<Catalog, LoadError>;
}

/// Fetches the catalog document from a fixed URL.
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn classify_transport(err: reqwest::Error) -> LoadError {
    if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
        LoadError::Network(err.to_string())
    } else {
        LoadError::Unknown(err.to_string())
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn load(&self) -> Result<Catalog, LoadError> {
        debug!(url = %self.url, "fetching catalog");
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(classify_transport)?;
        let status = resp.status();
        if !status.is_success() {
            // reqwest exposes no server-sent reason phrase; the canonical one
            // is what reaches the error banner.
            return Err(LoadError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }
        let body = resp.bytes().await.map_err(classify_transport)?;
        decode_catalog(&body)
    }
}

/// In-process source over a fixed body, for tests and offline wiring.
pub struct StaticSource {
    body: Vec<u8>,
}

impl StaticSource {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn load(&self) -> Result<Catalog, LoadError> {
        decode_catalog(&self.body)
    }
}

/// Decode and validate the raw catalog document.
///
/// Top-level shape is enforced (array, non-empty); entries are shaped
/// leniently and kept in document order. An entry without a textual name key
/// warns but is retained.
pub fn decode_catalog(bytes: &[u8]) -> Result<Catalog, LoadError> {
    let doc: Value = serde_json::from_slice(bytes).map_err(|e| LoadError::Parse(e.to_string()))?;
    let entries = doc
        .as_array()
        .ok_or_else(|| LoadError::Shape("expected array of tools".to_string()))?;
    if entries.is_empty() {
        return Err(LoadError::Empty);
    }
    for (index, entry) in entries.iter().enumerate() {
        if entry.get(wire::NAME).and_then(Value::as_str).is_none() {
            warn!(index, field = wire::NAME, "tool entry missing required field");
        }
    }
    let tools: Vec<Tool> = entries.iter().map(Tool::from_value).collect();
    info!(count = tools.len(), "catalog decoded");
    Ok(Catalog::new(tools))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_json_is_a_parse_failure() {
        let err = decode_catalog(b"not json {").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn non_array_document_is_a_shape_failure() {
        let err = decode_catalog(b"{}").unwrap_err();
        assert_eq!(err, LoadError::Shape("expected array of tools".into()));
        assert_eq!(
            err.user_message(),
            "Unable to load tools: Invalid data format: expected array of tools"
        );
    }

    #[test]
    fn empty_array_is_an_empty_failure() {
        assert_eq!(decode_catalog(b"[]").unwrap_err(), LoadError::Empty);
    }

    #[test]
    fn entries_are_kept_in_document_order() {
        let body = br#"[
            {"Tools": "SonarQube", "Familly": "SAST"},
            {"Tools": "Prettier", "Familly": "Formatting"}
        ]"#;
        let catalog = decode_catalog(body).unwrap();
        let names: Vec<&str> = catalog.tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["SonarQube", "Prettier"]);
    }

    #[test]
    fn nameless_entries_are_retained() {
        let body = br#"[{"Familly": "SAST"}, {"Tools": 42}, {"Tools": "Prettier"}]"#;
        let catalog = decode_catalog(body).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.tools[0].name, "");
        assert_eq!(catalog.tools[1].name, "");
        assert_eq!(catalog.tools[2].name, "Prettier");
    }

    #[tokio::test]
    async fn static_source_loads_through_the_same_validation() {
        let good = StaticSource::new(&br#"[{"Tools": "SonarQube"}]"#[..]);
        assert_eq!(good.load().await.unwrap().len(), 1);
        let bad = StaticSource::new(&b"[]"[..]);
        assert_eq!(bad.load().await.unwrap_err(), LoadError::Empty);
    }
}
