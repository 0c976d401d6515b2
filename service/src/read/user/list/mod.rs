//! [`User`]s list definitions: the filter → sort → paginate pipeline.

pub mod filter;
pub mod sort;

use common::{define_pagination, pagination, RowsPerPage};

use crate::domain::User;

pub use self::{filter::Filter, sort::Sort};

define_pagination!(User);

/// Immutable selection of a [`Page`] of [`User`]s.
///
/// Changes are expressed as [`Action`]s producing a new [`Selector`] rather
/// than by mutating an existing one.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Selector {
    /// [`Filter`] to apply first.
    pub filter: Filter,

    /// [`Sort`] to apply to the filtered [`User`]s.
    pub sort: Sort,

    /// Pagination [`Arguments`] to slice the sorted [`User`]s with.
    pub arguments: Arguments,
}

impl Selector {
    /// Returns the [`Selector`] resulting from the provided [`Action`].
    #[must_use]
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::SetFilterText(text) => Self {
                filter: Filter { text, ..self.filter },
                ..self
            },
            Action::ClearFilter => Self {
                filter: Filter {
                    text: String::new(),
                    ..self.filter
                },
                ..self
            },
            Action::SetFilterField(field) => Self {
                filter: Filter { field, ..self.filter },
                ..self
            },
            Action::SortBy(field) => Self {
                sort: self.sort.toggle(field),
                ..self
            },
            Action::GoToPage(index) => Self {
                arguments: self.arguments.with_index(index),
                ..self
            },
            Action::SetRowsPerPage(size) => Self {
                arguments: self.arguments.with_size(size),
                ..self
            },
        }
    }

    /// Selects a page out of the provided [`User`]s.
    ///
    /// Stages are always applied in the same order: [`Filter`], [`Sort`],
    /// pagination. The returned page counts every [`User`] passing the
    /// [`Filter`].
    #[must_use]
    pub fn select<'u>(&self, users: &'u [User]) -> pagination::Page<&'u User> {
        let mut matched = self.filter.apply(users);
        self.sort.apply(&mut matched);
        pagination::Page::new(matched, self.arguments)
    }
}

/// Interaction changing a [`Selector`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Sets the [`Filter`] text.
    SetFilterText(String),

    /// Clears the [`Filter`] text.
    ClearFilter,

    /// Sets the [`filter::Field`] to match against.
    SetFilterField(filter::Field),

    /// Requests sorting by a [`sort::Field`], following [`Sort::toggle`].
    SortBy(sort::Field),

    /// Navigates to the page with the provided zero-based index.
    GoToPage(usize),

    /// Changes the page size, navigating back to the first page.
    SetRowsPerPage(RowsPerPage),
}
