use super::*;
use placemark_entities as e;

impl From<e::location::Location> for Location {
    fn from(from: e::location::Location) -> Self {
        let id = from.id().to_string();
        let latitude = from.latitude();
        let longitude = from.longitude();
        let e::location::Location {
            name, description, ..
        } = from;
        Self {
            id,
            name,
            description,
            latitude,
            longitude,
        }
    }
}

impl TryFrom<Location> for e::location::Location {
    type Error = e::id::IdParseError;

    fn try_from(from: Location) -> Result<Self, Self::Error> {
        let Location {
            id,
            name,
            description,
            latitude,
            longitude,
        } = from;
        let id = id.parse::<e::id::Id>()?;
        Ok(Self::with_id(id, name, description, latitude, longitude))
    }
}
