//! Normalization of the classic wire graph into the shared result shape.

use placepick_core::{AddressComponent, Coordinates, PlaceResult, Viewport};

use crate::types::{AddressComponentData, BoundsData, LatLngData, PlaceData};

/// Converts one classic place graph.
///
/// Every field maps independently: a field the service omitted stays
/// `None`, and a missing field never fails the conversion.
#[must_use]
pub fn place_result(data: PlaceData) -> PlaceResult {
    PlaceResult {
        address: data.formatted_address,
        id: data.place_id,
        lat_lng: data
            .geometry
            .as_ref()
            .and_then(|geometry| geometry.location)
            .map(coordinates),
        name: data.name,
        phone_number: data.formatted_phone_number,
        price_level: data.price_level,
        rating: data.rating,
        user_ratings_total: data.user_ratings_total,
        viewport: data
            .geometry
            .as_ref()
            .and_then(|geometry| geometry.viewport)
            .map(viewport),
        website_uri: data.website,
        types: data.types,
        utc_offset: data.utc_offset,
        address_components: data.address_components.map(|components| {
            components.into_iter().map(address_component).collect()
        }),
    }
}

fn coordinates(data: LatLngData) -> Coordinates {
    Coordinates {
        latitude: data.lat,
        longitude: data.lng,
    }
}

fn viewport(data: BoundsData) -> Viewport {
    Viewport {
        southwest: coordinates(data.southwest),
        northeast: coordinates(data.northeast),
    }
}

fn address_component(data: AddressComponentData) -> AddressComponent {
    AddressComponent {
        name: data.long_name,
        short_name: data.short_name,
        types: data.types,
    }
}
