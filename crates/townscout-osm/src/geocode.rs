//! HTTP client for the Nominatim geocoding service.
//!
//! Resolves a free-text town name into a best-match coordinate and bounding
//! box via `GET /search?q=<town>&format=json&limit=1`. Zero matches surface
//! as [`OsmError::TownNotFound`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::OsmError;
use crate::types::{BoundingBox, GeocodedTown};

/// Client for the Nominatim `/search` endpoint.
///
/// Use [`GeocoderClient::new`] with the production base URL, or point
/// `base_url` at a mock server in tests.
pub struct GeocoderClient {
    client: Client,
    search_url: Url,
}

/// One row of Nominatim's JSON search response. Coordinates and the bounding
/// box arrive as strings and are parsed explicitly.
#[derive(Debug, Deserialize)]
struct NominatimResult {
    display_name: String,
    lat: String,
    lon: String,
    /// Order is `[south, north, west, east]`.
    boundingbox: [String; 4],
}

impl GeocoderClient {
    /// Creates a new geocoder client.
    ///
    /// # Errors
    ///
    /// Returns [`OsmError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`OsmError::InvalidBaseUrl`] if `base_url` does not
    /// parse.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, OsmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // join appends to the path rather than replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let search_url = Url::parse(&normalised)
            .and_then(|base| base.join("search"))
            .map_err(|_| OsmError::InvalidBaseUrl(base_url.to_owned()))?;

        Ok(Self { client, search_url })
    }

    /// Resolves `town` to its best-match coordinate and bounding box.
    ///
    /// # Errors
    ///
    /// - [`OsmError::TownNotFound`] if the geocoder returns zero matches.
    /// - [`OsmError::Http`] / [`OsmError::Upstream`] on network failure or a
    ///   non-2xx response.
    /// - [`OsmError::Deserialize`] / [`OsmError::InvalidNumber`] if the
    ///   response does not match the expected shape.
    pub async fn geocode(&self, town: &str) -> Result<GeocodedTown, OsmError> {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("q", town)
            .append_pair("format", "json")
            .append_pair("limit", "1");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OsmError::Upstream {
                service: "nominatim",
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let results: Vec<NominatimResult> =
            serde_json::from_str(&body).map_err(|e| OsmError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        let Some(first) = results.into_iter().next() else {
            return Err(OsmError::TownNotFound(town.to_owned()));
        };

        Ok(GeocodedTown {
            lat: parse_coord(&first.lat, "lat")?,
            lon: parse_coord(&first.lon, "lon")?,
            bbox: parse_bbox(&first.boundingbox)?,
            display_name: first.display_name,
        })
    }
}

fn parse_coord(raw: &str, field: &'static str) -> Result<f64, OsmError> {
    raw.parse::<f64>().map_err(|_| OsmError::InvalidNumber {
        service: "nominatim",
        field,
    })
}

fn parse_bbox(raw: &[String; 4]) -> Result<BoundingBox, OsmError> {
    Ok(BoundingBox {
        south: parse_coord(&raw[0], "boundingbox")?,
        north: parse_coord(&raw[1], "boundingbox")?,
        west: parse_coord(&raw[2], "boundingbox")?,
        east: parse_coord(&raw[3], "boundingbox")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_parses_in_south_north_west_east_order() {
        let raw = [
            "50.85".to_string(),
            "50.89".to_string(),
            "-0.02".to_string(),
            "0.03".to_string(),
        ];
        let bbox = parse_bbox(&raw).expect("bbox should parse");
        assert!((bbox.south - 50.85).abs() < 1e-9);
        assert!((bbox.north - 50.89).abs() < 1e-9);
        assert!((bbox.west - -0.02).abs() < 1e-9);
        assert!((bbox.east - 0.03).abs() < 1e-9);
    }

    #[test]
    fn non_numeric_coordinate_is_rejected() {
        let err = parse_coord("fifty", "lat").unwrap_err();
        assert!(matches!(err, OsmError::InvalidNumber { field: "lat", .. }));
    }

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let with = GeocoderClient::new("http://localhost:9000/", 30, "test-agent")
            .expect("client should build");
        let without = GeocoderClient::new("http://localhost:9000", 30, "test-agent")
            .expect("client should build");
        assert_eq!(with.search_url, without.search_url);
        assert_eq!(with.search_url.path(), "/search");
    }
}
