//! Integration tests for `V1Backend` using wiremock HTTP mocks.

use placepick_core::{FieldSelection, PlaceBackend, Viewport};
use placepick_v1::V1Backend;
use wiremock::matchers::{body_partial_json, header, headers, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_backend(base_url: &str) -> V1Backend {
    V1Backend::with_base_url("test-key", 30, base_url)
        .expect("backend construction should not fail")
}

#[tokio::test]
async fn fetch_place_sends_the_field_mask_header() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "id": "ChIJ2eUgeAK6j4ARbn5u_wAGqWA",
        "displayName": { "text": "Googleplex" },
        "location": { "latitude": 37.422, "longitude": -122.084 },
        "priceLevel": "PRICE_LEVEL_MODERATE"
    });

    Mock::given(method("GET"))
        .and(path("/places/ChIJ2eUgeAK6j4ARbn5u_wAGqWA"))
        .and(header("X-Goog-Api-Key", "test-key"))
        .and(headers(
            "X-Goog-FieldMask",
            vec!["id", "displayName", "priceLevel"],
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let fields =
        backend.resolve_fields(&FieldSelection::from_names(["price_level", "id", "name"]));
    let place = backend
        .fetch_place("ChIJ2eUgeAK6j4ARbn5u_wAGqWA", &fields)
        .await
        .expect("fetch should succeed");

    assert_eq!(place.id.as_deref(), Some("ChIJ2eUgeAK6j4ARbn5u_wAGqWA"));
    assert_eq!(place.name.as_deref(), Some("Googleplex"));
    assert_eq!(place.price_level, Some(2));
    let lat_lng = place.lat_lng.expect("lat_lng should be populated");
    assert!((lat_lng.latitude - 37.422).abs() < f64::EPSILON);
}

#[tokio::test]
async fn fetch_place_with_all_fields_sends_the_wildcard_mask() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/places/some-id"))
        .and(header("X-Goog-FieldMask", "*"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "displayName": { "text": "Somewhere" } })),
        )
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let fields = backend.resolve_fields(&FieldSelection::all());
    let place = backend
        .fetch_place("some-id", &fields)
        .await
        .expect("fetch should succeed");
    assert_eq!(place.name.as_deref(), Some("Somewhere"));
}

#[tokio::test]
async fn autocomplete_posts_input_and_rectangle_bias() {
    let server = MockServer::start().await;

    let expected_request = serde_json::json!({
        "input": "coffee",
        "locationBias": {
            "rectangle": {
                "low": { "latitude": 51.4, "longitude": -0.2 },
                "high": { "latitude": 51.6, "longitude": 0.1 }
            }
        }
    });

    let body = serde_json::json!({
        "suggestions": [
            {
                "placePrediction": {
                    "placeId": "p1",
                    "text": { "text": "Coffee Corner, High St" }
                }
            },
            { "queryPrediction": { "text": { "text": "coffee shops" } } }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/places:autocomplete"))
        .and(body_partial_json(&expected_request))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let bias = Viewport {
        southwest: placepick_core::Coordinates {
            latitude: 51.4,
            longitude: -0.2,
        },
        northeast: placepick_core::Coordinates {
            latitude: 51.6,
            longitude: 0.1,
        },
    };
    let predictions = backend
        .autocomplete("coffee", Some(&bias))
        .await
        .expect("autocomplete should succeed");

    // The non-place suggestion row is filtered out.
    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].place_id, "p1");
    assert_eq!(predictions[0].description, "Coffee Corner, High St");
}

#[tokio::test]
async fn find_current_parses_likelihoods_and_skips_malformed_rows() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "placeLikelihoods": [
            {
                "likelihood": 0.85,
                "place": {
                    "id": "p1",
                    "displayName": { "text": "Coffee Corner" }
                }
            },
            { "likelihood": "broken" }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/places:findCurrent"))
        .and(header("X-Goog-FieldMask", "*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let fields = backend.resolve_fields(&FieldSelection::all());
    let candidates = backend
        .find_current(&fields)
        .await
        .expect("find current should succeed");

    assert_eq!(candidates.len(), 1);
    assert!((candidates[0].likelihood - 0.85).abs() < f64::EPSILON);
    assert_eq!(candidates[0].place.name.as_deref(), Some("Coffee Corner"));
}

#[tokio::test]
async fn find_current_with_no_candidates_is_empty_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/places:findCurrent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let fields = backend.resolve_fields(&FieldSelection::all());
    let candidates = backend
        .find_current(&fields)
        .await
        .expect("empty response should still succeed");
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn rpc_error_envelope_surfaces_the_message_verbatim() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": {
            "code": 403,
            "message": "The request is missing a valid API key.",
            "status": "PERMISSION_DENIED"
        }
    });

    Mock::given(method("GET"))
        .and(path("/places/some-id"))
        .respond_with(ResponseTemplate::new(403).set_body_json(&body))
        .mount(&server)
        .await;

    let backend = test_backend(&server.uri());
    let fields = backend.resolve_fields(&FieldSelection::all());
    let err = backend
        .fetch_place("some-id", &fields)
        .await
        .expect_err("request should fail");
    assert!(
        err.to_string()
            .contains("The request is missing a valid API key."),
        "expected verbatim service message, got: {err}"
    );
}
