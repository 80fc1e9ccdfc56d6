//! HTTP client for the v1 place dialect.
//!
//! Wraps `reqwest` with the dialect's header-based authentication and
//! field-mask handling. Failures surface the rpc-status envelope's
//! message verbatim as [`PlacesError::Api`].

use std::time::Duration;

use reqwest::{Client, Response, Url};
use tracing::{debug, warn};

use placepick_core::{
    ClientConfig, FieldSelection, PlaceBackend, PlaceLikelihood, PlaceResult, PlacesError,
    Prediction, Viewport,
};

use crate::fields::FieldMask;
use crate::normalize;
use crate::types::{
    AutocompleteResponse, CurrentPlaceResponse, ErrorEnvelope, LikelihoodData, PlaceData,
};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/v1/";

/// Backend adapter for the v1 dialect.
///
/// Holds the HTTP client, API key, and base URL. Use [`V1Backend::new`]
/// for production or [`V1Backend::with_base_url`] to point at a mock
/// server in tests.
pub struct V1Backend {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl V1Backend {
    /// Creates a backend from a [`ClientConfig`], honouring its base-URL
    /// override when present.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidArgument`] for an
    /// unparseable base URL.
    pub fn new(config: &ClientConfig) -> Result<Self, PlacesError> {
        let base_url = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Self::with_base_url(&config.api_key, config.timeout_secs, base_url)
    }

    /// Creates a backend with a custom base URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidArgument`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("placepick/0.1 (place-search)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| {
            PlacesError::InvalidArgument(format!("invalid base URL '{base_url}': {e}"))
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Builds the full URL for an endpoint.
    ///
    /// v1 endpoints may contain `:` (custom methods such as
    /// `places:autocomplete`), which `Url::join` would misread as a URL
    /// scheme, so the path is extended textually instead.
    fn endpoint_url(&self, endpoint: &str) -> Result<Url, PlacesError> {
        let raw = format!("{}{endpoint}", self.base_url);
        Url::parse(&raw).map_err(|e| {
            PlacesError::InvalidArgument(format!("invalid endpoint '{endpoint}': {e}"))
        })
    }

    /// Asserts a 2xx HTTP status and parses the response body as JSON.
    ///
    /// On a non-2xx status the body is parsed as an rpc-status envelope
    /// and its message surfaced verbatim; bodies that are not an envelope
    /// fall back to the bare HTTP status.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Api`] for service-reported failures,
    /// [`PlacesError::Http`] on network failure, and
    /// [`PlacesError::Deserialize`] for a success body that is not valid
    /// JSON.
    async fn handle_response(
        response: Response,
        context: &str,
    ) -> Result<serde_json::Value, PlacesError> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
                context: context.to_owned(),
                source: e,
            });
        }
        if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&body) {
            return Err(PlacesError::Api(envelope.error.message));
        }
        Err(PlacesError::Api(format!("HTTP {status}")))
    }
}

impl PlaceBackend for V1Backend {
    type FieldSet = FieldMask;

    fn resolve_fields(&self, selection: &FieldSelection) -> FieldMask {
        FieldMask::resolve(selection)
    }

    async fn autocomplete(
        &self,
        input: &str,
        bias: Option<&Viewport>,
    ) -> Result<Vec<Prediction>, PlacesError> {
        let mut request_body = serde_json::json!({ "input": input });
        if let Some(bias) = bias {
            request_body["locationBias"] = serde_json::json!({
                "rectangle": {
                    "low": {
                        "latitude": bias.southwest.latitude,
                        "longitude": bias.southwest.longitude
                    },
                    "high": {
                        "latitude": bias.northeast.latitude,
                        "longitude": bias.northeast.longitude
                    }
                }
            });
        }

        let url = self.endpoint_url("places:autocomplete")?;
        debug!(input_len = input.len(), "v1 autocomplete request");
        let response = self
            .client
            .post(url)
            .header("X-Goog-Api-Key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;
        let body = Self::handle_response(response, "places:autocomplete").await?;

        let parsed: AutocompleteResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("places:autocomplete(input={input})"),
                source: e,
            })?;

        Ok(parsed
            .suggestions
            .into_iter()
            .filter_map(|suggestion| suggestion.place_prediction)
            .map(|prediction| Prediction {
                place_id: prediction.place_id,
                description: prediction.text.text,
            })
            .collect())
    }

    async fn fetch_place(
        &self,
        place_id: &str,
        fields: &FieldMask,
    ) -> Result<PlaceResult, PlacesError> {
        let url = self.endpoint_url(&format!("places/{place_id}"))?;
        debug!(place_id, "v1 place details request");
        let response = self
            .client
            .get(url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", fields.to_header())
            .send()
            .await?;
        let body = Self::handle_response(response, &format!("places/{place_id}")).await?;

        let data: PlaceData =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("places/{place_id}"),
                source: e,
            })?;

        Ok(normalize::place_result(data))
    }

    async fn find_current(&self, fields: &FieldMask) -> Result<Vec<PlaceLikelihood>, PlacesError> {
        let url = self.endpoint_url("places:findCurrent")?;
        debug!("v1 findCurrent request");
        let response = self
            .client
            .post(url)
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", fields.to_header())
            .json(&serde_json::json!({}))
            .send()
            .await?;
        let body = Self::handle_response(response, "places:findCurrent").await?;

        let parsed: CurrentPlaceResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: "places:findCurrent".to_string(),
                source: e,
            })?;

        let candidates = parsed
            .place_likelihoods
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value::<LikelihoodData>(value)
                    .map_err(|e| {
                        warn!(error = %e, "findCurrent: skipping malformed candidate");
                    })
                    .ok()
            })
            .map(|candidate| PlaceLikelihood {
                likelihood: candidate.likelihood,
                place: normalize::place_result(candidate.place),
            })
            .collect();

        Ok(candidates)
    }
}
