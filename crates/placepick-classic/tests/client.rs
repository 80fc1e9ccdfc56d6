//! Integration tests for `ClassicBackend` using wiremock HTTP mocks.

use placepick_classic::ClassicBackend;
use placepick_core::{FieldSelection, PlaceBackend, Viewport};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_backend(base_url: &str) -> ClassicBackend {
    ClassicBackend::with_base_url("test-key", 30, base_url)
        .expect("backend construction should not fail")
}

fn coordinates(latitude: f64, longitude: f64) -> placepick_core::Coordinates {
    placepick_core::Coordinates {
        latitude,
        longitude,
    }
}

#[tokio::test]
async fn fetch_place_sends_selected_fields_and_parses_the_result() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "place_id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA",
            "name": "Googleplex",
            "geometry": {
                "location": { "lat": 37.422, "lng": -122.084 }
            },
            "rating": 4.5
        }
    });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("place_id", "ChIJ2eUgeAK6j4ARbn5u_wAGqWA"))
        .and(query_param("fields", "place_id,name,geometry/location,rating"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let fields =
        backend.resolve_fields(&FieldSelection::from_names(["id", "name", "lat_lng", "rating"]));
    let place = backend
        .fetch_place("ChIJ2eUgeAK6j4ARbn5u_wAGqWA", &fields)
        .await
        .expect("fetch should succeed");

    assert_eq!(place.id.as_deref(), Some("ChIJ2eUgeAK6j4ARbn5u_wAGqWA"));
    assert_eq!(place.name.as_deref(), Some("Googleplex"));
    assert_eq!(place.rating, Some(4.5));
    let lat_lng = place.lat_lng.expect("lat_lng should be populated");
    assert!((lat_lng.latitude - 37.422).abs() < f64::EPSILON);
    assert!((lat_lng.longitude - -122.084).abs() < f64::EPSILON);
    // Unrequested fields come back null, not missing.
    assert_eq!(place.phone_number, None);
}

#[tokio::test]
async fn fetch_place_with_all_fields_omits_the_fields_parameter() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": { "name": "Googleplex" }
    });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .and(query_param("place_id", "some-id"))
        .and(query_param_is_missing("fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let fields = backend.resolve_fields(&FieldSelection::all());
    let place = backend
        .fetch_place("some-id", &fields)
        .await
        .expect("fetch should succeed");
    assert_eq!(place.name.as_deref(), Some("Googleplex"));
}

#[tokio::test]
async fn autocomplete_applies_the_location_bias() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "predictions": [
            { "place_id": "p1", "description": "Coffee Corner, High St" },
            { "place_id": "p2", "description": "Coffee Culture, Market Sq" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/autocomplete/json"))
        .and(query_param("input", "coffee"))
        .and(query_param(
            "locationbias",
            "rectangle:51.4,-0.2|51.6,0.1",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let bias = Viewport {
        southwest: coordinates(51.4, -0.2),
        northeast: coordinates(51.6, 0.1),
    };
    let predictions = backend
        .autocomplete("coffee", Some(&bias))
        .await
        .expect("autocomplete should succeed");

    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0].place_id, "p1");
    assert_eq!(predictions[1].description, "Coffee Culture, Market Sq");
}

#[tokio::test]
async fn find_current_with_zero_results_is_empty_not_an_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({ "status": "ZERO_RESULTS" });

    Mock::given(method("GET"))
        .and(path("/findcurrentplace/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let fields = backend.resolve_fields(&FieldSelection::all());
    let candidates = backend
        .find_current(&fields)
        .await
        .expect("zero results should still succeed");
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn find_current_skips_malformed_candidates() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "likelihoods": [
            {
                "likelihood": 0.95,
                "place": { "name": "Coffee Corner", "place_id": "p1" }
            },
            { "likelihood": "not-a-number" },
            {
                "likelihood": 0.05,
                "place": { "name": "Bus Stop", "place_id": "p2" }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/findcurrentplace/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let fields = backend.resolve_fields(&FieldSelection::all());
    let candidates = backend
        .find_current(&fields)
        .await
        .expect("valid candidates should survive");

    assert_eq!(candidates.len(), 2);
    assert!((candidates[0].likelihood - 0.95).abs() < f64::EPSILON);
    assert_eq!(candidates[0].place.name.as_deref(), Some("Coffee Corner"));
    assert_eq!(candidates[1].place.id.as_deref(), Some("p2"));
}

#[tokio::test]
async fn service_error_surfaces_the_message_verbatim() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid."
    });

    Mock::given(method("GET"))
        .and(path("/details/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let fields = backend.resolve_fields(&FieldSelection::all());
    let err = backend
        .fetch_place("some-id", &fields)
        .await
        .expect_err("request should fail");
    assert!(
        err.to_string().contains("The provided API key is invalid."),
        "expected verbatim service message, got: {err}"
    );
}
