pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::location_builder::*;

pub mod location_builder {

    use super::*;
    use crate::{id::*, location::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        id: Id,
        name: String,
        description: String,
        latitude: f64,
        longitude: f64,
    }

    impl LocationBuild {
        pub fn id(mut self, id: Id) -> Self {
            self.id = id;
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.name = name.into();
            self
        }
        pub fn description(mut self, description: &str) -> Self {
            self.description = description.into();
            self
        }
        pub fn pos(mut self, latitude: f64, longitude: f64) -> Self {
            self.latitude = latitude;
            self.longitude = longitude;
            self
        }
        pub fn finish(self) -> Location {
            Location::with_id(
                self.id,
                self.name,
                self.description,
                self.latitude,
                self.longitude,
            )
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> LocationBuild {
            LocationBuild {
                id: Id::new(),
                name: "".into(),
                description: "".into(),
                latitude: 0.0,
                longitude: 0.0,
            }
        }
    }
}
