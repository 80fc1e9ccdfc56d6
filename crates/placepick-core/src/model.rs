//! The platform-neutral result shape shared by both wire dialects.
//!
//! Every entity here is transient: built fresh per call, immutable after
//! construction, and owned exclusively by the caller that receives it.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A rectangular geographic region: a result's extent, or a search bias.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub southwest: Coordinates,
    pub northeast: Coordinates,
}

/// One structured part of an address (street number, locality, country).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub name: String,
    pub short_name: String,
    pub types: Vec<String>,
}

/// The unified place shape.
///
/// Every field is independently optional: present when it was requested
/// and the backend returned it, `None` otherwise. Serialization keeps
/// absent fields as explicit nulls so consumers never have to tell an
/// omitted key from a null one.
///
/// `utc_offset` is only ever populated by the classic dialect; the v1
/// dialect has no mapping for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceResult {
    pub address: Option<String>,
    pub id: Option<String>,
    pub lat_lng: Option<Coordinates>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub price_level: Option<i32>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<i32>,
    pub viewport: Option<Viewport>,
    pub website_uri: Option<String>,
    pub types: Option<Vec<String>>,
    pub utc_offset: Option<i32>,
    pub address_components: Option<Vec<AddressComponent>>,
}

/// One candidate from the current-place operation.
///
/// Candidates arrive in backend order; nothing here guarantees they are
/// sorted by likelihood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceLikelihood {
    /// Confidence in `[0, 1]` that this is the current place.
    pub likelihood: f64,
    pub place: PlaceResult,
}

/// A single autocomplete suggestion offered to the selection surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub place_id: String,
    pub description: String,
}
