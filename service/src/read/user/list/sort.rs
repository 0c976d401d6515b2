//! [`Sort`] stage of the [`User`]s list.

use common::{define_kind, Order};

use crate::domain::User;

define_kind! {
    #[doc = "[`User`] attribute used as a [`Sort`] key."]
    enum Field {
        #[doc = "[`User::name`]."]
        #[default]
        Name = "name",

        #[doc = "[`User::email`]."]
        Email = "email",
    }
}

/// Stable sort of [`User`]s by the raw (case-sensitive) value of a [`Field`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Sort {
    /// [`Field`] to sort by.
    pub field: Field,

    /// [`Order`] to sort in.
    pub order: Order,
}

impl Sort {
    /// Creates a new [`Sort`].
    #[must_use]
    pub const fn new(field: Field, order: Order) -> Self {
        Self { field, order }
    }

    /// Returns the [`Sort`] resulting from requesting to sort by the
    /// provided [`Field`].
    ///
    /// Requesting the currently active [`Field`] flips the [`Order`], while
    /// requesting another one sorts by it in [`Order::Ascending`].
    #[must_use]
    pub const fn toggle(self, field: Field) -> Self {
        let order = match (self.field, field) {
            (Field::Name, Field::Name) | (Field::Email, Field::Email) => {
                self.order.reverse()
            }
            (Field::Name, Field::Email) | (Field::Email, Field::Name) => {
                Order::Ascending
            }
        };
        Self { field, order }
    }

    /// Returns the key of the provided [`User`] this [`Sort`] compares.
    #[must_use]
    pub fn key(self, user: &User) -> &str {
        match self.field {
            Field::Name => user.name.as_ref(),
            Field::Email => user.email.as_ref(),
        }
    }

    /// Sorts the provided [`User`]s in place.
    ///
    /// [`User`]s with equal keys keep their relative order in both
    /// [`Order`]s.
    pub fn apply(self, users: &mut [&User]) {
        users.sort_by(|a, b| self.order.apply(self.key(a).cmp(self.key(b))));
    }
}

#[cfg(test)]
mod spec {
    use common::Order;

    use crate::{
        domain::User,
        read::user::list::spec::{user, users},
    };

    use super::{Field, Sort};

    fn names(users: &[&User]) -> Vec<String> {
        users.iter().map(|u| u.name.to_string()).collect()
    }

    #[test]
    fn sorts_ascending_and_descending() {
        let users = users();
        let mut sorted = users.iter().collect::<Vec<_>>();

        Sort::new(Field::Name, Order::Ascending).apply(&mut sorted);
        assert_eq!(names(&sorted), ["Amy", "Bob"]);

        Sort::new(Field::Name, Order::Descending).apply(&mut sorted);
        assert_eq!(names(&sorted), ["Bob", "Amy"]);
    }

    #[test]
    fn compares_raw_values() {
        let users = [
            user(1, "bob", "b@x.com"),
            user(2, "Zed", "Z@x.com"),
            user(3, "alice", "a@x.com"),
            user(4, "Carl", "c@x.com"),
        ];
        let mut sorted = users.iter().collect::<Vec<_>>();

        Sort::new(Field::Name, Order::Ascending).apply(&mut sorted);
        assert_eq!(names(&sorted), ["Carl", "Zed", "alice", "bob"]);

        Sort::new(Field::Email, Order::Descending).apply(&mut sorted);
        assert_eq!(names(&sorted), ["Carl", "bob", "alice", "Zed"]);
    }

    #[test]
    fn is_stable_in_both_orders() {
        let users = [
            user(1, "Sam", "s1@x.com"),
            user(2, "Ann", "a@x.com"),
            user(3, "Sam", "s2@x.com"),
            user(4, "Ann", "a2@x.com"),
            user(5, "Sam", "s3@x.com"),
        ];

        for order in [Order::Ascending, Order::Descending] {
            let mut sorted = users.iter().collect::<Vec<_>>();
            Sort::new(Field::Name, order).apply(&mut sorted);

            let sams = sorted
                .iter()
                .filter(|u| u.name.as_ref() == "Sam")
                .map(|u| i64::from(u.id))
                .collect::<Vec<_>>();
            let anns = sorted
                .iter()
                .filter(|u| u.name.as_ref() == "Ann")
                .map(|u| i64::from(u.id))
                .collect::<Vec<_>>();

            assert_eq!(sams, [1, 3, 5], "order: {order}");
            assert_eq!(anns, [2, 4], "order: {order}");
        }
    }

    #[test]
    fn adjacent_pairs_are_ordered() {
        let users = users()
            .into_iter()
            .chain([
                user(3, "amy", "AMY@y.com"),
                user(4, "Émile", "e@z.com"),
                user(5, "Bob", "bob@a.com"),
            ])
            .collect::<Vec<_>>();

        for field in Field::ALL {
            let mut sorted = users.iter().collect::<Vec<_>>();
            let sort = Sort::new(*field, Order::Ascending);
            sort.apply(&mut sorted);
            assert!(sorted
                .windows(2)
                .all(|w| sort.key(w[0]) <= sort.key(w[1])));

            let sort = Sort::new(*field, Order::Descending);
            sort.apply(&mut sorted);
            assert!(sorted
                .windows(2)
                .all(|w| sort.key(w[0]) >= sort.key(w[1])));
        }
    }

    #[test]
    fn toggles() {
        let name_asc = Sort::default();
        assert_eq!(name_asc, Sort::new(Field::Name, Order::Ascending));

        let name_desc = name_asc.toggle(Field::Name);
        assert_eq!(name_desc, Sort::new(Field::Name, Order::Descending));
        assert_eq!(name_desc.toggle(Field::Name), name_asc);

        assert_eq!(
            name_desc.toggle(Field::Email),
            Sort::new(Field::Email, Order::Ascending),
        );
        assert_eq!(
            Sort::new(Field::Email, Order::Descending).toggle(Field::Name),
            name_asc,
        );
    }
}
