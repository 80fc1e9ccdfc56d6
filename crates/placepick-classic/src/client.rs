//! HTTP client for the classic place web-service dialect.
//!
//! Wraps `reqwest` with the dialect's envelope handling, API key
//! management, and typed response deserialization. Every endpoint checks
//! the `"status"` field and surfaces service-level errors as
//! [`PlacesError::Api`] with the service's message passed through
//! verbatim.

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, warn};

use placepick_core::{
    ClientConfig, FieldSelection, PlaceBackend, PlaceLikelihood, PlaceResult, PlacesError,
    Prediction, Viewport,
};

use crate::fields::FieldList;
use crate::normalize;
use crate::types::{
    ApiResponse, AutocompleteResponse, CurrentPlaceResponse, DetailsResponse, LikelihoodData,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place/";

/// Backend adapter for the classic dialect.
///
/// Holds the HTTP client, API key, and base URL. Use
/// [`ClassicBackend::new`] for production or
/// [`ClassicBackend::with_base_url`] to point at a mock server in tests.
pub struct ClassicBackend {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl ClassicBackend {
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

        // Normalise: ensure the base URL ends with exactly one slash so
        // joined endpoint paths extend the base instead of replacing its
        // last segment.
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

    /// Builds the full request URL with properly percent-encoded query
    /// parameters, always including the API key.
    fn build_url(&self, endpoint: &str, extra: &[(&str, String)]) -> Result<Url, PlacesError> {
        let mut url = self.base_url.join(endpoint).map_err(|e| {
            PlacesError::InvalidArgument(format!("invalid endpoint '{endpoint}': {e}"))
        })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure or a non-2xx
    /// status. Returns [`PlacesError::Deserialize`] if the body is not
    /// valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field and returns an error if it
    /// indicates failure. `ZERO_RESULTS` is success with an empty payload.
    fn check_api_error(body: &serde_json::Value) -> Result<(), PlacesError> {
        let status = body
            .get("status")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("OK");
        if matches!(status, "OK" | "ZERO_RESULTS") {
            return Ok(());
        }
        let message = body
            .get("error_message")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(status)
            .to_string();
        Err(PlacesError::Api(message))
    }
}

impl PlaceBackend for ClassicBackend {
    type FieldSet = FieldList;

    fn resolve_fields(&self, selection: &FieldSelection) -> FieldList {
        FieldList::resolve(selection)
    }

    async fn autocomplete(
        &self,
        input: &str,
        bias: Option<&Viewport>,
    ) -> Result<Vec<Prediction>, PlacesError> {
        let mut params = vec![("input", input.to_owned())];
        if let Some(bias) = bias {
            params.push((
                "locationbias",
                format!(
                    "rectangle:{},{}|{},{}",
                    bias.southwest.latitude,
                    bias.southwest.longitude,
                    bias.northeast.latitude,
                    bias.northeast.longitude
                ),
            ));
        }

        let url = self.build_url("autocomplete/json", &params)?;
        debug!(input_len = input.len(), "classic autocomplete request");
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: ApiResponse<AutocompleteResponse> =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("autocomplete(input={input})"),
                source: e,
            })?;

        Ok(envelope
            .data
            .predictions
            .into_iter()
            .map(|prediction| Prediction {
                place_id: prediction.place_id,
                description: prediction.description,
            })
            .collect())
    }

    async fn fetch_place(
        &self,
        place_id: &str,
        fields: &FieldList,
    ) -> Result<PlaceResult, PlacesError> {
        let mut params = vec![("place_id", place_id.to_owned())];
        if let Some(value) = fields.to_param() {
            params.push(("fields", value));
        }

        let url = self.build_url("details/json", &params)?;
        debug!(place_id, "classic details request");
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: ApiResponse<DetailsResponse> =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details(place_id={place_id})"),
                source: e,
            })?;

        Ok(normalize::place_result(envelope.data.result))
    }

    async fn find_current(&self, fields: &FieldList) -> Result<Vec<PlaceLikelihood>, PlacesError> {
        let mut params = Vec::new();
        if let Some(value) = fields.to_param() {
            params.push(("fields", value));
        }

        let url = self.build_url("findcurrentplace/json", &params)?;
        debug!("classic findcurrentplace request");
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: ApiResponse<CurrentPlaceResponse> =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: "findcurrentplace".to_string(),
                source: e,
            })?;

        let candidates = envelope
            .data
            .likelihoods
            .into_iter()
            .filter_map(|value| {
                serde_json::from_value::<LikelihoodData>(value)
                    .map_err(|e| {
                        warn!(error = %e, "findcurrentplace: skipping malformed candidate");
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

#[cfg(test)]
mod tests {
    use super::*;

    fn test_backend(base_url: &str) -> ClassicBackend {
        ClassicBackend::with_base_url("test-key", 30, base_url)
            .expect("backend construction should not fail")
    }

    #[test]
    fn build_url_appends_key_and_params() {
        let backend = test_backend("https://maps.googleapis.com/maps/api/place");
        let url = backend
            .build_url("details/json", &[("place_id", "abc".to_string())])
            .expect("url should build");
        assert_eq!(
            url.as_str(),
            "https://maps.googleapis.com/maps/api/place/details/json?key=test-key&place_id=abc"
        );
    }

    #[test]
    fn build_url_percent_encodes_values() {
        let backend = test_backend("https://maps.googleapis.com/maps/api/place");
        let url = backend
            .build_url("autocomplete/json", &[("input", "fish & chips".to_string())])
            .expect("url should build");
        assert!(
            url.as_str().contains("fish+%26+chips") || url.as_str().contains("fish%20%26%20chips"),
            "query param should be percent-encoded: {url}"
        );
    }

    #[test]
    fn check_api_error_accepts_ok_and_zero_results() {
        let ok = serde_json::json!({ "status": "OK" });
        assert!(ClassicBackend::check_api_error(&ok).is_ok());
        let zero = serde_json::json!({ "status": "ZERO_RESULTS" });
        assert!(ClassicBackend::check_api_error(&zero).is_ok());
    }

    #[test]
    fn check_api_error_surfaces_the_message_verbatim() {
        let body = serde_json::json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        });
        let err = ClassicBackend::check_api_error(&body).unwrap_err();
        assert!(
            matches!(err, PlacesError::Api(ref m) if m == "The provided API key is invalid."),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn check_api_error_falls_back_to_the_status_code() {
        let body = serde_json::json!({ "status": "OVER_QUERY_LIMIT" });
        let err = ClassicBackend::check_api_error(&body).unwrap_err();
        assert!(matches!(err, PlacesError::Api(ref m) if m == "OVER_QUERY_LIMIT"));
    }
}
