//! The logical field catalog and caller-supplied field selections.
//!
//! Logical names are backend-independent; each adapter carries its own
//! fixed table from [`PlaceField`] to the native token or mask bit.

/// A caller-facing name for a place attribute, independent of how either
/// backend encodes it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceField {
    Address,
    Id,
    LatLng,
    Name,
    PhoneNumber,
    PriceLevel,
    Rating,
    UserRatingsTotal,
    Viewport,
    WebsiteUri,
    Types,
    UtcOffset,
    AddressComponents,
}

impl PlaceField {
    /// Every logical field, in catalog order. Adapters fold selections and
    /// render native sets in this order, which keeps the mapping
    /// deterministic regardless of how the caller ordered its selector.
    pub const ALL: [Self; 13] = [
        Self::Address,
        Self::Id,
        Self::LatLng,
        Self::Name,
        Self::PhoneNumber,
        Self::PriceLevel,
        Self::Rating,
        Self::UserRatingsTotal,
        Self::Viewport,
        Self::WebsiteUri,
        Self::Types,
        Self::UtcOffset,
        Self::AddressComponents,
    ];

    /// Parses a logical field name.
    ///
    /// Unknown names yield `None`; callers drop them rather than erroring,
    /// so selectors written against a newer catalog keep working.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "address" => Some(Self::Address),
            "id" => Some(Self::Id),
            "lat_lng" => Some(Self::LatLng),
            "name" => Some(Self::Name),
            "phone_number" => Some(Self::PhoneNumber),
            "price_level" => Some(Self::PriceLevel),
            "rating" => Some(Self::Rating),
            "user_ratings_total" => Some(Self::UserRatingsTotal),
            "viewport" => Some(Self::Viewport),
            "website_uri" => Some(Self::WebsiteUri),
            "types" => Some(Self::Types),
            "utc_offset" => Some(Self::UtcOffset),
            "address_components" => Some(Self::AddressComponents),
            _ => None,
        }
    }

    /// The canonical name of this field.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Id => "id",
            Self::LatLng => "lat_lng",
            Self::Name => "name",
            Self::PhoneNumber => "phone_number",
            Self::PriceLevel => "price_level",
            Self::Rating => "rating",
            Self::UserRatingsTotal => "user_ratings_total",
            Self::Viewport => "viewport",
            Self::WebsiteUri => "website_uri",
            Self::Types => "types",
            Self::UtcOffset => "utc_offset",
            Self::AddressComponents => "address_components",
        }
    }
}

/// An ordered, duplicate-free set of logical fields requested by a caller.
///
/// An empty selection means "all fields". An explicit empty list and an
/// absent list are deliberately equivalent: a selector that resolves to
/// nothing can only over-fetch, never silently request no data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<PlaceField>,
}

impl FieldSelection {
    /// The all-fields selection.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a selection from logical field names.
    ///
    /// Unknown names are dropped silently; duplicates keep their first
    /// position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::default();
        for name in names {
            if let Some(field) = PlaceField::parse(name.as_ref()) {
                selection.push(field);
            }
        }
        selection
    }

    /// Appends a field unless it is already selected.
    pub fn push(&mut self, field: PlaceField) {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }

    /// Whether this selection stands for "all fields".
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn contains(&self, field: PlaceField) -> bool {
        self.fields.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = PlaceField> + '_ {
        self.fields.iter().copied()
    }
}

impl FromIterator<PlaceField> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = PlaceField>>(iter: I) -> Self {
        let mut selection = Self::default();
        for field in iter {
            selection.push(field);
        }
        selection
    }
}
