//! HTTP client for the Overpass map-data query service.
//!
//! Translates a category's tag predicates into an Overpass QL union query
//! over nodes, ways and relations within a bounding box, POSTs it as plain
//! text, and returns the raw matching elements. An empty element list is a
//! valid, non-error outcome.

use std::fmt::Write as _;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use townscout_core::Category;

use crate::error::OsmError;
use crate::types::{BoundingBox, RawElement};

/// Server-side evaluation timeout baked into the query header.
const QUERY_TIMEOUT_SECS: u32 = 25;

/// Client for the Overpass interpreter endpoint.
pub struct OverpassClient {
    client: Client,
    interpreter_url: Url,
    fetch_cap: usize,
}

#[derive(Debug, Deserialize)]
struct OverpassEnvelope {
    #[serde(default)]
    elements: Vec<RawElement>,
}

impl OverpassClient {
    /// Creates a new Overpass client. `fetch_cap` bounds how many raw
    /// elements are retained from one response; anything beyond it is
    /// dropped before normalization.
    ///
    /// # Errors
    ///
    /// Returns [`OsmError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`OsmError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        fetch_cap: usize,
    ) -> Result<Self, OsmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let interpreter_url =
            Url::parse(base_url).map_err(|_| OsmError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self {
            client,
            interpreter_url,
            fetch_cap,
        })
    }

    /// Fetches the raw elements matching `category` within `bbox`.
    ///
    /// # Errors
    ///
    /// - [`OsmError::Http`] / [`OsmError::Upstream`] on network failure or a
    ///   non-2xx response.
    /// - [`OsmError::Deserialize`] if the response body is not the expected
    ///   `{ "elements": [...] }` envelope.
    pub async fn fetch_places(
        &self,
        category: &Category,
        bbox: &BoundingBox,
    ) -> Result<Vec<RawElement>, OsmError> {
        let query = build_query(category, bbox);
        tracing::debug!(category = category.key, query, "querying overpass");

        let response = self
            .client
            .post(self.interpreter_url.clone())
            .header("Content-Type", "text/plain")
            .body(query)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OsmError::Upstream {
                service: "overpass",
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: OverpassEnvelope =
            serde_json::from_str(&body).map_err(|e| OsmError::Deserialize {
                context: format!("overpass({})", category.key),
                source: e,
            })?;

        let mut elements = envelope.elements;
        if elements.len() > self.fetch_cap {
            tracing::warn!(
                category = category.key,
                fetched = elements.len(),
                cap = self.fetch_cap,
                "overpass response exceeds fetch cap; truncating"
            );
            elements.truncate(self.fetch_cap);
        }

        Ok(elements)
    }
}

/// Builds the Overpass QL query text: a union over node/way/relation for
/// every tag predicate of the category, scoped to the bounding box, with
/// `out center` so ways and relations carry a representative coordinate.
fn build_query(category: &Category, bbox: &BoundingBox) -> String {
    let mut query = format!("[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n(\n");
    for predicate in category.predicates {
        for element_type in ["node", "way", "relation"] {
            let _ = writeln!(
                query,
                "  {element_type}[\"{}\"=\"{}\"]({},{},{},{});",
                predicate.key, predicate.value, bbox.south, bbox.west, bbox.north, bbox.east
            );
        }
    }
    query.push_str(");\nout center;\n");
    query
}
