//! The seam between the neutral session layer and a concrete wire dialect.

use crate::error::PlacesError;
use crate::fields::FieldSelection;
use crate::model::{PlaceLikelihood, PlaceResult, Prediction, Viewport};

/// One concrete place-service dialect.
///
/// Implementations translate logical field selections into their native
/// field-set representation, issue the wire call, and normalize the native
/// result graph into the shared shape. Which implementation backs the
/// public operations is decided at build time by the umbrella crate's
/// feature flags, never at runtime.
#[allow(async_fn_in_trait)]
pub trait PlaceBackend {
    /// The native field-set representation (token list or bitmask).
    /// Opaque above this seam; only the adapter renders it onto the wire.
    type FieldSet;

    /// Folds a logical selection into the native field set.
    ///
    /// Empty selections map to the dialect's all-fields sentinel, never to
    /// an empty native set. Catalog fields the dialect cannot express are
    /// dropped silently.
    fn resolve_fields(&self, selection: &FieldSelection) -> Self::FieldSet;

    /// Autocomplete suggestions for a partial query, optionally biased to
    /// a rectangular region.
    async fn autocomplete(
        &self,
        input: &str,
        bias: Option<&Viewport>,
    ) -> Result<Vec<Prediction>, PlacesError>;

    /// Details for one place, limited to the resolved field set.
    async fn fetch_place(
        &self,
        place_id: &str,
        fields: &Self::FieldSet,
    ) -> Result<PlaceResult, PlacesError>;

    /// Likely places for the current position. Zero candidates is a
    /// successful, empty response.
    async fn find_current(
        &self,
        fields: &Self::FieldSet,
    ) -> Result<Vec<PlaceLikelihood>, PlacesError>;
}
