//! Wire types for the v1 place dialect.
//!
//! All JSON is camelCase. Successful responses carry the payload
//! directly; failures carry an rpc-status envelope under `"error"`.

use serde::Deserialize;

/// The rpc-status envelope v1 returns on a non-2xx response.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorStatus,
}

#[derive(Debug, Deserialize)]
pub struct ErrorStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

// ---------------------------------------------------------------------------
// places/{id}
// ---------------------------------------------------------------------------

/// The v1 place graph. Every field is optional: the service only
/// serializes what the field mask requested.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceData {
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub location: Option<LatLngData>,
    #[serde(default)]
    pub display_name: Option<LocalizedText>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    /// Enum name such as `"PRICE_LEVEL_MODERATE"`.
    #[serde(default)]
    pub price_level: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_rating_count: Option<i32>,
    #[serde(default)]
    pub viewport: Option<BoundsData>,
    #[serde(default)]
    pub website_uri: Option<String>,
    #[serde(default)]
    pub types: Option<Vec<String>>,
    #[serde(default)]
    pub address_components: Option<Vec<AddressComponentData>>,
}

/// v1 wraps display strings with a language tag.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedText {
    pub text: String,
    #[serde(default)]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLngData {
    pub latitude: f64,
    pub longitude: f64,
}

/// v1 viewports name their corners `low` (southwest) and `high`
/// (northeast).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoundsData {
    pub low: LatLngData,
    pub high: LatLngData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressComponentData {
    pub long_text: String,
    pub short_text: String,
    #[serde(default)]
    pub types: Vec<String>,
}

// ---------------------------------------------------------------------------
// places:autocomplete
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// A suggestion row; only place predictions are of interest here, other
/// suggestion kinds deserialize to `None` and are filtered out.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    #[serde(default)]
    pub place_prediction: Option<PredictionData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionData {
    pub place_id: String,
    pub text: LocalizedText,
}

// ---------------------------------------------------------------------------
// places:findCurrent
// ---------------------------------------------------------------------------

/// Wrapper for the `places:findCurrent` response.
///
/// Entries stay as raw values so a single malformed candidate can be
/// skipped without failing the whole response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPlaceResponse {
    #[serde(default)]
    pub place_likelihoods: Vec<serde_json::Value>,
}

/// One current-place candidate with the service's confidence in `[0, 1]`.
#[derive(Debug, Deserialize)]
pub struct LikelihoodData {
    pub place: PlaceData,
    pub likelihood: f64,
}
