//! [`Company`] definitions.

use serde::{Deserialize, Serialize};

#[cfg(doc)]
use super::User;

/// Company a [`User`] works for.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    /// Name of this [`Company`].
    pub name: String,

    /// Catch phrase of this [`Company`].
    #[serde(default)]
    pub catch_phrase: String,

    /// Business slogan of this [`Company`].
    #[serde(default)]
    pub bs: String,
}
