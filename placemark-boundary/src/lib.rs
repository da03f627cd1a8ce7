use serde::{Deserialize, Serialize};

mod conv;
pub mod json;

/// Wire representation of a placemark record.
///
/// The id travels in its canonical hyphenated string form. Field order in
/// the serialized document is not significant.
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Location {
    pub id          : String,
    pub name        : String,
    pub description : String,
    pub latitude    : f64,
    pub longitude   : f64,
}
