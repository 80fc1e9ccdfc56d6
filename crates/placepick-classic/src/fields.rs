//! Mapping from the logical field catalog to the classic dialect's
//! comma-separated `fields` parameter.

use placepick_core::{FieldSelection, PlaceField};

/// The classic dialect's native field set: an ordered token list, or the
/// all-fields sentinel.
///
/// The sentinel renders as no `fields` parameter at all, which the service
/// treats as "return everything". An explicit empty token list is never
/// produced for an empty selection, so "all fields" and "no fields" cannot
/// be confused on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldList {
    All,
    Selected(Vec<&'static str>),
}

impl FieldList {
    /// Folds a logical selection into wire tokens, preserving selection
    /// order. Every catalog field has a classic token, so nothing is
    /// dropped by this dialect.
    #[must_use]
    pub fn resolve(selection: &FieldSelection) -> Self {
        if selection.is_all() {
            return Self::All;
        }
        Self::Selected(selection.iter().map(token).collect())
    }

    /// Renders the value of the `fields` query parameter, or `None` when
    /// the parameter should be omitted.
    #[must_use]
    pub fn to_param(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Selected(tokens) => Some(tokens.join(",")),
        }
    }
}

/// The fixed logical-name → wire-token table.
fn token(field: PlaceField) -> &'static str {
    match field {
        PlaceField::Address => "formatted_address",
        PlaceField::Id => "place_id",
        PlaceField::LatLng => "geometry/location",
        PlaceField::Name => "name",
        PlaceField::PhoneNumber => "formatted_phone_number",
        PlaceField::PriceLevel => "price_level",
        PlaceField::Rating => "rating",
        PlaceField::UserRatingsTotal => "user_ratings_total",
        PlaceField::Viewport => "geometry/viewport",
        PlaceField::WebsiteUri => "website",
        PlaceField::Types => "types",
        PlaceField::UtcOffset => "utc_offset",
        PlaceField::AddressComponents => "address_components",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_resolves_to_the_all_sentinel() {
        let list = FieldList::resolve(&FieldSelection::all());
        assert_eq!(list, FieldList::All);
        assert_eq!(list.to_param(), None);
    }

    #[test]
    fn selection_resolves_to_tokens_in_selection_order() {
        let selection = FieldSelection::from_names(["rating", "id", "lat_lng"]);
        let list = FieldList::resolve(&selection);
        assert_eq!(
            list.to_param().as_deref(),
            Some("rating,place_id,geometry/location")
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        let selection = FieldSelection::from_names(["name", "viewport", "name"]);
        assert_eq!(
            FieldList::resolve(&selection),
            FieldList::resolve(&selection)
        );
        assert_eq!(
            FieldList::resolve(&selection).to_param().as_deref(),
            Some("name,geometry/viewport")
        );
    }

    #[test]
    fn utc_offset_is_supported_by_this_dialect() {
        let selection = FieldSelection::from_names(["utc_offset"]);
        assert_eq!(
            FieldList::resolve(&selection).to_param().as_deref(),
            Some("utc_offset")
        );
    }
}
