//! Wire types for the classic place web-service dialect.
//!
//! Every response carries a `status` string (`"OK"`, `"ZERO_RESULTS"`, or
//! an error code) and, on failure, an optional human-readable
//! `error_message`; [`ApiResponse`] captures that envelope generically.

use serde::Deserialize;

/// Top-level envelope for all classic responses.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

/// Wrapper for the `details` response: `{ "result": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub result: PlaceData,
}

/// The classic place graph. Every field is optional: the service only
/// serializes what the `fields` parameter requested.
#[derive(Debug, Deserialize)]
pub struct PlaceData {
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub price_level: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<i32>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub utc_offset: Option<i32>,
    #[serde(default)]
    pub address_components: Option<Vec<AddressComponentData>>,
}

/// Point and extent of a place, nested under `geometry`.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLngData>,
    #[serde(default)]
    pub viewport: Option<BoundsData>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLngData {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoundsData {
    pub southwest: LatLngData,
    pub northeast: LatLngData,
}

/// One structured address part; the classic dialect names the long form
/// `long_name`.
#[derive(Debug, Deserialize)]
pub struct AddressComponentData {
    pub long_name: String,
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

// ---------------------------------------------------------------------------
// autocomplete
// ---------------------------------------------------------------------------

/// Wrapper for the `autocomplete` response.
#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub predictions: Vec<PredictionData>,
}

#[derive(Debug, Deserialize)]
pub struct PredictionData {
    pub place_id: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// findcurrentplace
// ---------------------------------------------------------------------------

/// Wrapper for the `findcurrentplace` response.
///
/// Entries stay as raw values so a single malformed candidate can be
/// skipped without failing the whole response; callers deserialize each
/// one individually into [`LikelihoodData`].
#[derive(Debug, Deserialize)]
pub struct CurrentPlaceResponse {
    #[serde(default)]
    pub likelihoods: Vec<serde_json::Value>,
}

/// One current-place candidate: a place graph plus the service's
/// confidence in `[0, 1]`.
#[derive(Debug, Deserialize)]
pub struct LikelihoodData {
    pub place: PlaceData,
    pub likelihood: f64,
}
