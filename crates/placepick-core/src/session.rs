//! The caller-facing session: one backend handle, three operations.

use tracing::debug;

use crate::backend::PlaceBackend;
use crate::error::PlacesError;
use crate::model::{PlaceLikelihood, PlaceResult, Prediction};
use crate::options::SearchOptions;

/// What the selection surface decided to do with the current predictions.
#[derive(Debug, Clone, PartialEq)]
pub enum ShowTurn {
    /// Replace the query text; the session fetches fresh predictions.
    Refine(String),
    /// Commit to one of the offered predictions.
    Pick(Prediction),
    /// Dismiss the flow without choosing.
    Cancel,
}

/// The interactive selection surface — a terminal prompt, a view
/// controller, a test script.
///
/// The session drives the surface turn by turn and the surface never
/// outlives the `show` call that invoked it.
#[allow(async_fn_in_trait)]
pub trait SelectionUi {
    /// Presents the current predictions (empty on the first turn) and
    /// returns the host's next action.
    async fn turn(&mut self, predictions: &[Prediction]) -> ShowTurn;
}

/// A handle over one backend, stateless per call.
///
/// Each operation issues at most one outstanding wire call at a time and
/// settles exactly once. Concurrent operations share nothing but the
/// backend handle; in particular each [`show`](Self::show) invocation owns
/// its own flow state, so a second interactive flow cannot clobber the
/// first one's completion.
#[derive(Debug)]
pub struct PlacesClient<B> {
    backend: B,
}

impl<B: PlaceBackend> PlacesClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs the interactive selection flow to completion.
    ///
    /// Resolves with `Some(place)` when the surface picks a prediction and
    /// `None` when it cancels. Exactly one of resolve-with-place,
    /// resolve-with-none, or an error happens per invocation.
    ///
    /// # Errors
    ///
    /// Returns the first backend error raised by an autocomplete round or
    /// by fetching the picked place.
    pub async fn show(
        &self,
        ui: &mut impl SelectionUi,
        options: &SearchOptions,
    ) -> Result<Option<PlaceResult>, PlacesError> {
        let mut predictions: Vec<Prediction> = Vec::new();
        loop {
            match ui.turn(&predictions).await {
                ShowTurn::Refine(input) => {
                    predictions = self
                        .backend
                        .autocomplete(&input, options.location_bias.as_ref())
                        .await?;
                }
                ShowTurn::Pick(prediction) => {
                    debug!(place_id = %prediction.place_id, "show: prediction picked");
                    let fields = self.backend.resolve_fields(&options.fields);
                    let place = self.backend.fetch_place(&prediction.place_id, &fields).await?;
                    return Ok(Some(place));
                }
                ShowTurn::Cancel => return Ok(None),
            }
        }
    }

    /// Likely places for the current position, in backend order.
    ///
    /// # Errors
    ///
    /// Propagates the backend error unchanged; zero candidates is `Ok` with
    /// an empty list.
    pub async fn current_place(
        &self,
        options: &SearchOptions,
    ) -> Result<Vec<PlaceLikelihood>, PlacesError> {
        let fields = self.backend.resolve_fields(&options.fields);
        self.backend.find_current(&fields).await
    }

    /// Details for one place by backend identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::InvalidArgument`] for an empty id, before any
    /// wire call is made; otherwise propagates the backend result.
    pub async fn fetch_place(
        &self,
        place_id: &str,
        options: &SearchOptions,
    ) -> Result<PlaceResult, PlacesError> {
        if place_id.is_empty() {
            return Err(PlacesError::InvalidArgument(
                "place id must not be empty".to_string(),
            ));
        }
        let fields = self.backend.resolve_fields(&options.fields);
        self.backend.fetch_place(place_id, &fields).await
    }
}
