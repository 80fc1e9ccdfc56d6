//! Caller-supplied options shared by the search operations.

use crate::fields::FieldSelection;
use crate::model::Viewport;

/// Which fields to request, and an optional rectangular bias applied to
/// autocomplete requests. Both corners of the bias are required by
/// construction.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub fields: FieldSelection,
    pub location_bias: Option<Viewport>,
}

impl SearchOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fields(mut self, fields: FieldSelection) -> Self {
        self.fields = fields;
        self
    }

    #[must_use]
    pub fn with_location_bias(mut self, bias: Viewport) -> Self {
        self.location_bias = Some(bias);
        self
    }
}
