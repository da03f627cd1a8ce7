use crate::id::*;

/// A single named point of interest.
///
/// The identity and the coordinates are fixed at construction; only `name`
/// and `description` may be edited afterwards. Equality is structural over
/// all fields, so two records that agree on every label and coordinate but
/// carry different ids are distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    // Immutable part.
    id: Id,
    latitude: f64,
    longitude: f64,

    // Mutable part.
    pub name: String,
    pub description: String,
}

impl Location {
    /// Creates a record with a freshly generated id.
    ///
    /// Coordinates are taken as-is. Callers are expected to pass latitude in
    /// [-90, 90] and longitude in [-180, 180] degrees, but the range is not
    /// checked here.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self::with_id(Id::new(), name, description, latitude, longitude)
    }

    /// Rebuilds a record with a known identity, e.g. when restoring it from
    /// a serialized document.
    pub fn with_id(
        id: Id,
        name: impl Into<String>,
        description: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            latitude,
            longitude,
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    /// Latitude in degrees, expected in [-90, 90].
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, expected in [-180, 180].
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
