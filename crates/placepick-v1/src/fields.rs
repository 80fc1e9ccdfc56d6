//! Mapping from the logical field catalog to the v1 dialect's field mask.

use placepick_core::{FieldSelection, PlaceField};

/// The v1 dialect's native field set: a bitmask over the catalog.
///
/// The mask renders as the comma-joined paths of the `X-Goog-FieldMask`
/// header. The all-fields sentinel is the wildcard `*`, distinct from any
/// explicit combination, so an empty selection can never be mistaken for
/// "request nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMask(u16);

impl FieldMask {
    pub const EMPTY: Self = Self(0);
    /// Wildcard sentinel: request every field.
    pub const ALL: Self = Self(u16::MAX);

    /// Folds a logical selection into the mask.
    ///
    /// An empty selection maps to the wildcard. Catalog fields without a
    /// v1 path (UTC offset) are dropped silently.
    #[must_use]
    pub fn resolve(selection: &FieldSelection) -> Self {
        if selection.is_all() {
            return Self::ALL;
        }
        let mut mask = Self::EMPTY;
        for field in selection.iter() {
            if let Some(b) = bit(field) {
                mask.0 |= b;
            }
        }
        mask
    }

    #[must_use]
    pub fn contains(self, field: PlaceField) -> bool {
        bit(field).is_some_and(|b| self.0 & b != 0)
    }

    /// Renders the header value.
    ///
    /// Paths come out in catalog order, so the same mask always renders the
    /// same string regardless of how the caller ordered its selector.
    #[must_use]
    pub fn to_header(self) -> String {
        if self == Self::ALL {
            return "*".to_owned();
        }
        let mut paths = Vec::new();
        for field in PlaceField::ALL {
            if self.contains(field) {
                if let Some(p) = path(field) {
                    paths.push(p);
                }
            }
        }
        paths.join(",")
    }
}

/// Mask bit per catalog field; `None` for fields this dialect cannot
/// express.
fn bit(field: PlaceField) -> Option<u16> {
    match field {
        PlaceField::Address => Some(1),
        PlaceField::Id => Some(1 << 1),
        PlaceField::LatLng => Some(1 << 2),
        PlaceField::Name => Some(1 << 3),
        PlaceField::PhoneNumber => Some(1 << 4),
        PlaceField::PriceLevel => Some(1 << 5),
        PlaceField::Rating => Some(1 << 6),
        PlaceField::UserRatingsTotal => Some(1 << 7),
        PlaceField::Viewport => Some(1 << 8),
        PlaceField::WebsiteUri => Some(1 << 9),
        PlaceField::Types => Some(1 << 10),
        PlaceField::AddressComponents => Some(1 << 11),
        PlaceField::UtcOffset => None,
    }
}

/// Mask path per catalog field, mirroring [`bit`].
fn path(field: PlaceField) -> Option<&'static str> {
    match field {
        PlaceField::Address => Some("formattedAddress"),
        PlaceField::Id => Some("id"),
        PlaceField::LatLng => Some("location"),
        PlaceField::Name => Some("displayName"),
        PlaceField::PhoneNumber => Some("internationalPhoneNumber"),
        PlaceField::PriceLevel => Some("priceLevel"),
        PlaceField::Rating => Some("rating"),
        PlaceField::UserRatingsTotal => Some("userRatingCount"),
        PlaceField::Viewport => Some("viewport"),
        PlaceField::WebsiteUri => Some("websiteUri"),
        PlaceField::Types => Some("types"),
        PlaceField::AddressComponents => Some("addressComponents"),
        PlaceField::UtcOffset => None,
    }
}
