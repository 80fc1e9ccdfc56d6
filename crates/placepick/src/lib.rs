//! Unified place search and autocomplete over two wire dialects.
//!
//! One backend is linked in at build time via cargo features: `classic`
//! (default) selects the list-based web-service dialect, `v1` the
//! field-mask dialect. The capability set is identical either way —
//! [`show`], [`current_place`], and [`fetch_place`] — gated behind a
//! one-time [`initialize`].
//!
//! ```no_run
//! # async fn run() -> Result<(), placepick::PlacesError> {
//! placepick::initialize("my-api-key")?;
//! let options = placepick::SearchOptions::new()
//!     .with_fields(placepick::FieldSelection::from_names(["name", "rating"]));
//! let place = placepick::fetch_place("ChIJ2eUgeAK6j4ARbn5u_wAGqWA", &options).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

pub use placepick_core::{
    load_config, AddressComponent, ClientConfig, ConfigError, Coordinates, FieldSelection,
    PlaceBackend, PlaceField, PlaceLikelihood, PlaceResult, PlacesClient, PlacesError, Prediction,
    SearchOptions, SelectionUi, ShowTurn, Viewport,
};

#[cfg(all(feature = "classic", feature = "v1"))]
compile_error!("features `classic` and `v1` select the linked backend and are mutually exclusive");

#[cfg(not(any(feature = "classic", feature = "v1")))]
compile_error!("one of the `classic` or `v1` features must be enabled");

/// The backend linked into this build.
#[cfg(feature = "classic")]
pub use placepick_classic::ClassicBackend as DefaultBackend;
/// The backend linked into this build.
#[cfg(feature = "v1")]
pub use placepick_v1::V1Backend as DefaultBackend;

static CLIENT: OnceLock<PlacesClient<DefaultBackend>> = OnceLock::new();

/// Initialises the process-wide client with an API key and defaults for
/// everything else. Call once before any operation.
///
/// # Errors
///
/// Returns [`PlacesError::Http`] or [`PlacesError::InvalidArgument`] if
/// the backend cannot be constructed.
pub fn initialize(api_key: &str) -> Result<(), PlacesError> {
    initialize_with_config(&ClientConfig::new(api_key))
}

/// Initialises the process-wide client from a full [`ClientConfig`]
/// (custom timeout or base-URL override).
///
/// # Errors
///
/// Returns [`PlacesError::Http`] or [`PlacesError::InvalidArgument`] if
/// the backend cannot be constructed.
pub fn initialize_with_config(config: &ClientConfig) -> Result<(), PlacesError> {
    let backend = DefaultBackend::new(config)?;
    install(PlacesClient::new(backend));
    Ok(())
}

/// Installs an already-built client; useful for tests that point the
/// backend at a mock server. Repeat installation is ignored with a
/// warning.
pub fn install(client: PlacesClient<DefaultBackend>) {
    if CLIENT.set(client).is_err() {
        tracing::warn!("place client already initialised; ignoring");
    }
}

fn client() -> Result<&'static PlacesClient<DefaultBackend>, PlacesError> {
    CLIENT.get().ok_or(PlacesError::NotInitialized)
}

/// Interactive selection: drives `ui` until the user picks a prediction
/// or cancels.
///
/// Resolves with `Some(place)` on a pick and `None` on cancel; exactly
/// one resolution per invocation.
///
/// # Errors
///
/// Returns [`PlacesError::NotInitialized`] before [`initialize`], or the
/// first backend error raised by the flow.
pub async fn show(
    ui: &mut impl SelectionUi,
    options: &SearchOptions,
) -> Result<Option<PlaceResult>, PlacesError> {
    client()?.show(ui, options).await
}

/// Likely places for the current position, in backend order.
///
/// # Errors
///
/// Returns [`PlacesError::NotInitialized`] before [`initialize`], or the
/// backend error unchanged.
pub async fn current_place(
    options: &SearchOptions,
) -> Result<Vec<PlaceLikelihood>, PlacesError> {
    client()?.current_place(options).await
}

/// Details for one place by backend identifier.
///
/// # Errors
///
/// Returns [`PlacesError::NotInitialized`] before [`initialize`], then
/// [`PlacesError::InvalidArgument`] for an empty id — both without a wire
/// call — and otherwise the backend result.
pub async fn fetch_place(
    place_id: &str,
    options: &SearchOptions,
) -> Result<PlaceResult, PlacesError> {
    client()?.fetch_place(place_id, options).await
}
