//! [`User`] definitions.

pub mod address;
pub mod company;

use derive_more::{AsRef, Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};

pub use self::{address::Address, company::Company};

/// Dashboard user, as listed by the remote endpoint.
///
/// [`User`]s are immutable values: they are never modified after being
/// loaded.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct User {
    /// ID of this [`User`].
    pub id: Id,

    /// [`Name`] of this [`User`].
    pub name: Name,

    /// [`Username`] of this [`User`].
    #[serde(default)]
    pub username: Username,

    /// [`Email`] of this [`User`].
    pub email: Email,

    /// [`Phone`] of this [`User`].
    pub phone: Phone,

    /// [`Website`] of this [`User`].
    pub website: Website,

    /// [`Address`] of this [`User`].
    pub address: Address,

    /// [`Company`] of this [`User`].
    pub company: Company,
}

/// ID of a [`User`].
///
/// Unique within a single loaded collection.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct Id(i64);

/// Defines a transparent string value of a [`User`].
macro_rules! define_text {
    ($(#[doc = $doc:literal] $name:ident),* $(,)?) => {$(
        #[doc = $doc]
        #[derive(
            AsRef,
            Clone,
            Debug,
            Default,
            Deserialize,
            Display,
            Eq,
            From,
            Hash,
            Ord,
            PartialEq,
            PartialOrd,
            Serialize,
        )]
        #[as_ref(str)]
        #[from(&str, String)]
        #[serde(transparent)]
        pub struct $name(String);
    )*};
}

define_text! {
    #[doc = "Full name of a [`User`]."]
    Name,

    #[doc = "Username of a [`User`]."]
    Username,

    #[doc = "Email address of a [`User`].\n\nNot validated: shown and \
             matched exactly as received."]
    Email,

    #[doc = "Phone number of a [`User`], in a free-form format."]
    Phone,

    #[doc = "Website of a [`User`]."]
    Website,
}
