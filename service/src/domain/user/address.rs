//! [`Address`] definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(doc)]
use super::User;

/// Postal address of a [`User`].
///
/// Displayed (and matched by filters) as `{street}, {city}, {zipcode}`.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Address {
    /// Street of this [`Address`].
    pub street: String,

    /// Suite of this [`Address`].
    #[serde(default)]
    pub suite: String,

    /// City of this [`Address`].
    pub city: String,

    /// Zip code of this [`Address`].
    pub zipcode: String,

    /// [`Geo`] location of this [`Address`].
    #[serde(default)]
    pub geo: Geo,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            street,
            city,
            zipcode,
            ..
        } = self;
        write!(f, "{street}, {city}, {zipcode}")
    }
}

/// Geographical coordinates, kept verbatim as received.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Geo {
    /// Latitude.
    pub lat: String,

    /// Longitude.
    pub lng: String,
}
