//! Integration tests for the upstream clients using wiremock HTTP mocks.

use townscout_core::find_category;
use townscout_osm::{BoundingBox, GeocoderClient, OsmError, OverpassClient};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn geocoder(base_url: &str) -> GeocoderClient {
    GeocoderClient::new(base_url, 30, "townscout-tests").expect("client construction")
}

fn overpass(base_url: &str, cap: usize) -> OverpassClient {
    OverpassClient::new(base_url, 30, "townscout-tests", cap).expect("client construction")
}

fn test_bbox() -> BoundingBox {
    BoundingBox {
        south: 50.85,
        north: 50.89,
        west: -0.02,
        east: 0.03,
    }
}

#[tokio::test]
async fn geocode_returns_best_match_with_bounding_box() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "place_id": 12345,
            "display_name": "Lewes, East Sussex, England, United Kingdom",
            "lat": "50.8735",
            "lon": "0.0098",
            "boundingbox": ["50.85", "50.89", "-0.02", "0.03"]
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Lewes"))
        .and(query_param("format", "json"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let town = geocoder(&server.uri())
        .geocode("Lewes")
        .await
        .expect("should geocode");

    assert_eq!(
        town.display_name,
        "Lewes, East Sussex, England, United Kingdom"
    );
    assert!((town.lat - 50.8735).abs() < 1e-9);
    assert!((town.lon - 0.0098).abs() < 1e-9);
    assert!((town.bbox.south - 50.85).abs() < 1e-9);
    assert!((town.bbox.east - 0.03).abs() < 1e-9);
}

#[tokio::test]
async fn geocode_zero_matches_is_town_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let err = geocoder(&server.uri())
        .geocode("Atlantis")
        .await
        .expect_err("should fail");

    assert!(matches!(err, OsmError::TownNotFound(ref town) if town == "Atlantis"));
}

#[tokio::test]
async fn geocode_surfaces_upstream_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = geocoder(&server.uri())
        .geocode("Lewes")
        .await
        .expect_err("should fail");

    assert!(matches!(
        err,
        OsmError::Upstream {
            service: "nominatim",
            status: 503
        }
    ));
}

#[tokio::test]
async fn overpass_parses_nodes_and_way_centers() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "version": 0.6,
        "elements": [
            {
                "type": "node",
                "id": 101,
                "lat": 50.8731,
                "lon": 0.0101,
                "tags": { "amenity": "cafe", "name": "Flint Owl" }
            },
            {
                "type": "way",
                "id": 202,
                "center": { "lat": 50.8740, "lon": 0.0110 },
                "tags": { "amenity": "cafe" }
            },
            {
                "type": "relation",
                "id": 303,
                "tags": { "amenity": "cafe", "name": "No Coordinates" }
            }
        ]
    });

    Mock::given(method("POST"))
        .and(body_string_contains(r#"node["amenity"="cafe"]"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let cafe = find_category("cafe").expect("cafe category");
    let elements = overpass(&server.uri(), 500)
        .fetch_places(cafe, &test_bbox())
        .await
        .expect("should fetch");

    assert_eq!(elements.len(), 3);
    assert_eq!(elements[0].kind, "node");
    assert_eq!(elements[0].id, 101);
    assert_eq!(elements[0].tags.get("name").map(String::as_str), Some("Flint Owl"));
    assert!(elements[1].lat.is_none());
    assert!((elements[1].center.expect("center").lat - 50.8740).abs() < 1e-9);
    assert!(elements[2].center.is_none());
}

#[tokio::test]
async fn overpass_empty_elements_is_a_valid_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "elements": [] })),
        )
        .mount(&server)
        .await;

    let park = find_category("park").expect("park category");
    let elements = overpass(&server.uri(), 500)
        .fetch_places(park, &test_bbox())
        .await
        .expect("empty is not an error");

    assert!(elements.is_empty());
}

#[tokio::test]
async fn overpass_truncates_to_fetch_cap() {
    let server = MockServer::start().await;

    let elements: Vec<_> = (0..5)
        .map(|i| {
            serde_json::json!({
                "type": "node",
                "id": i,
                "lat": 50.87,
                "lon": 0.01,
                "tags": { "amenity": "pharmacy" }
            })
        })
        .collect();

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "elements": elements })),
        )
        .mount(&server)
        .await;

    let pharmacy = find_category("pharmacy").expect("pharmacy category");
    let elements = overpass(&server.uri(), 2)
        .fetch_places(pharmacy, &test_bbox())
        .await
        .expect("should fetch");

    assert_eq!(elements.len(), 2);
    assert_eq!(elements[1].id, 1);
}

#[tokio::test]
async fn overpass_surfaces_upstream_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let cafe = find_category("cafe").expect("cafe category");
    let err = overpass(&server.uri(), 500)
        .fetch_places(cafe, &test_bbox())
        .await
        .expect_err("should fail");

    assert!(matches!(
        err,
        OsmError::Upstream {
            service: "overpass",
            status: 429
        }
    ));
}
