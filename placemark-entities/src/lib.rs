#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # placemark-entities
//!
//! Plain domain entities for placemark records.
//!
//! The entities are serialization-agnostic; wire representations live in
//! `placemark-boundary`.

pub mod id;
pub mod location;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
