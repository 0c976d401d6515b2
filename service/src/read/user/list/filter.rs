//! [`Filter`] stage of the [`User`]s list.

use common::define_kind;

use crate::domain::User;

define_kind! {
    #[doc = "[`User`] attribute(s) a [`Filter`] text is matched against."]
    enum Field {
        #[doc = "[`User::name`]."]
        Name = "name",

        #[doc = "[`User::email`]."]
        Email = "email",

        #[doc = "[`User::phone`]."]
        Phone = "phone",

        #[doc = "[`User::website`]."]
        Website = "website",

        #[doc = "[`User::address`] joined as `{street}, {city}, {zipcode}`."]
        Address = "address",

        #[doc = "Any of the fields above or the company name."]
        #[default]
        All = "all",
    }
}

/// Case-insensitive substring filter over [`User`]s.
///
/// No trimming, normalization or word-boundary logic is applied: the
/// lower-cased text must be a substring of the lower-cased [`Field`] value.
/// An empty text matches every [`User`].
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Filter {
    /// Text to search for.
    pub text: String,

    /// [`Field`] to search in.
    pub field: Field,
}

impl Filter {
    /// Creates a new [`Filter`].
    #[must_use]
    pub fn new(text: impl Into<String>, field: Field) -> Self {
        Self {
            text: text.into(),
            field,
        }
    }

    /// Indicates whether this [`Filter`] matches every [`User`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Checks whether the provided [`User`] matches this [`Filter`].
    #[must_use]
    pub fn matches(&self, user: &User) -> bool {
        Needle::new(&self.text).matches(user, self.field)
    }

    /// Returns [`User`]s matching this [`Filter`], preserving their order.
    #[must_use]
    pub fn apply<'u>(
        &self,
        users: impl IntoIterator<Item = &'u User>,
    ) -> Vec<&'u User> {
        let needle = Needle::new(&self.text);
        users
            .into_iter()
            .filter(|user| needle.matches(user, self.field))
            .collect()
    }
}

/// Lower-cased [`Filter`] text.
#[derive(Debug)]
struct Needle(String);

impl Needle {
    fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    fn matches(&self, user: &User, field: Field) -> bool {
        if self.0.is_empty() {
            return true;
        }
        match field {
            Field::Name => self.found_in(user.name.as_ref()),
            Field::Email => self.found_in(user.email.as_ref()),
            Field::Phone => self.found_in(user.phone.as_ref()),
            Field::Website => self.found_in(user.website.as_ref()),
            Field::Address => self.found_in(&user.address.to_string()),
            Field::All => {
                self.found_in(user.name.as_ref())
                    || self.found_in(user.email.as_ref())
                    || self.found_in(user.phone.as_ref())
                    || self.found_in(user.website.as_ref())
                    || self.found_in(&user.address.to_string())
                    || self.found_in(&user.company.name)
            }
        }
    }

    fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}
