//! Normalization of the v1 wire graph into the shared result shape.

use placepick_core::{AddressComponent, Coordinates, PlaceResult, Viewport};

use crate::types::{AddressComponentData, BoundsData, LatLngData, PlaceData};

/// Converts one v1 place graph.
///
/// Every field maps independently and a missing field never fails the
/// conversion. This dialect has no UTC offset, so `utc_offset` is always
/// `None` here.
#[must_use]
pub fn place_result(data: PlaceData) -> PlaceResult {
    PlaceResult {
        address: data.formatted_address,
        id: data.id,
        lat_lng: data.location.map(coordinates),
        name: data.display_name.map(|name| name.text),
        phone_number: data.international_phone_number,
        price_level: data.price_level.as_deref().and_then(price_level),
        rating: data.rating,
        user_ratings_total: data.user_rating_count,
        viewport: data.viewport.map(viewport),
        website_uri: data.website_uri,
        types: data.types,
        utc_offset: None,
        address_components: data.address_components.map(|components| {
            components.into_iter().map(address_component).collect()
        }),
    }
}

/// Maps a v1 price-level enum name onto the numeric scale shared with the
/// classic dialect. Unknown names map to `None` rather than a guess.
#[must_use]
pub fn price_level(value: &str) -> Option<i32> {
    match value {
        "PRICE_LEVEL_FREE" => Some(0),
        "PRICE_LEVEL_INEXPENSIVE" => Some(1),
        "PRICE_LEVEL_MODERATE" => Some(2),
        "PRICE_LEVEL_EXPENSIVE" => Some(3),
        "PRICE_LEVEL_VERY_EXPENSIVE" => Some(4),
        _ => None,
    }
}

fn coordinates(data: LatLngData) -> Coordinates {
    Coordinates {
        latitude: data.latitude,
        longitude: data.longitude,
    }
}

fn viewport(data: BoundsData) -> Viewport {
    Viewport {
        southwest: coordinates(data.low),
        northeast: coordinates(data.high),
    }
}

fn address_component(data: AddressComponentData) -> AddressComponent {
    AddressComponent {
        name: data.long_text,
        short_name: data.short_text,
        types: data.types,
    }
}
