//! Abstractions for offset pagination.

use std::{cmp, fmt, num::NonZeroUsize, str::FromStr};

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A page of nodes sliced out of a larger ordered collection.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page<T> {
    /// Nodes on this [`Page`].
    pub nodes: Vec<T>,

    /// Total number of nodes in the sliced collection.
    pub total_count: usize,

    /// [`Arguments`] this [`Page`] was sliced with.
    pub arguments: Arguments,
}

impl<T> Page<T> {
    /// Slices a new [`Page`] out of the provided ordered `nodes`.
    ///
    /// Requesting a page beyond the end yields an empty [`Page`].
    #[must_use]
    pub fn new(nodes: Vec<T>, arguments: Arguments) -> Self {
        let total_count = nodes.len();
        Self {
            nodes: nodes
                .into_iter()
                .skip(arguments.offset())
                .take(arguments.limit())
                .collect(),
            total_count,
            arguments,
        }
    }

    /// Maps nodes of this [`Page`] with the provided function.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        let Self {
            nodes,
            total_count,
            arguments,
        } = self;
        Page {
            nodes: nodes.into_iter().map(f).collect(),
            total_count,
            arguments,
        }
    }

    /// Returns [`PageInfo`] of this [`Page`].
    #[must_use]
    pub fn page_info(&self) -> PageInfo {
        let offset = self.arguments.offset();
        let page_count = self.total_count.div_ceil(self.arguments.limit());
        PageInfo {
            index: self.arguments.index,
            page_count,
            total_count: self.total_count,
            start: if self.nodes.is_empty() { 0 } else { offset + 1 },
            end: offset.saturating_add(self.nodes.len()),
            has_next_page: offset.saturating_add(self.arguments.limit())
                < self.total_count,
            has_previous_page: self.arguments.index > 0,
        }
    }
}

/// Information about a [`Page`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PageInfo {
    /// Zero-based index of the [`Page`].
    pub index: usize,

    /// Number of non-empty pages in the collection.
    pub page_count: usize,

    /// Total number of nodes in the collection.
    pub total_count: usize,

    /// One-based position of the first node on the [`Page`], or `0` if the
    /// [`Page`] is empty.
    pub start: usize,

    /// One-based position of the last node on the [`Page`], or `0` if the
    /// [`Page`] is empty.
    pub end: usize,

    /// Indicator whether the collection has a next page.
    pub has_next_page: bool,

    /// Indicator whether the collection has a previous page.
    pub has_previous_page: bool,
}

impl PageInfo {
    /// Returns index of the last non-empty page (`0` for an empty
    /// collection).
    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.page_count.saturating_sub(1)
    }

    /// Returns index of the next page, staying within the collection.
    #[must_use]
    pub fn next_index(&self) -> usize {
        cmp::min(self.index.saturating_add(1), self.last_index())
    }

    /// Returns index of the previous page, staying within the collection.
    ///
    /// From a page beyond the end, this is the last non-empty page.
    #[must_use]
    pub fn previous_index(&self) -> usize {
        cmp::min(self.index.saturating_sub(1), self.last_index())
    }
}

impl Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            start,
            end,
            total_count,
            ..
        } = self;
        write!(f, "{start}\u{2013}{end} of {total_count}")
    }
}

/// Pagination arguments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Arguments {
    /// Zero-based index of the requested page.
    pub index: usize,

    /// Number of nodes on a single page.
    pub size: NonZeroUsize,
}

impl Default for Arguments {
    fn default() -> Self {
        Self::new(0, RowsPerPage::default())
    }
}

impl Arguments {
    /// Creates new [`Arguments`].
    #[must_use]
    pub fn new(index: usize, size: impl Into<NonZeroUsize>) -> Self {
        Self {
            index,
            size: size.into(),
        }
    }

    /// Returns these [`Arguments`] pointing to the page with the provided
    /// `index`.
    #[must_use]
    pub const fn with_index(self, index: usize) -> Self {
        Self { index, ..self }
    }

    /// Returns these [`Arguments`] with the provided page `size`.
    ///
    /// Resets the page index, so an out-of-range page is never requested.
    #[must_use]
    pub fn with_size(self, size: impl Into<NonZeroUsize>) -> Self {
        Self::new(0, size)
    }

    /// Returns number of nodes to skip before the requested page.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.index.saturating_mul(self.size.get())
    }

    /// Returns maximum number of nodes on the requested page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size.get()
    }
}

/// Allowed number of rows on a single [`Page`].
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum RowsPerPage {
    /// 10 rows.
    #[default]
    Ten,

    /// 25 rows.
    TwentyFive,

    /// 50 rows.
    Fifty,
}

impl RowsPerPage {
    /// All the allowed [`RowsPerPage`] values, in ascending order.
    pub const ALL: [Self; 3] = [Self::Ten, Self::TwentyFive, Self::Fifty];

    /// Returns the number of rows.
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Fifty => 50,
        }
    }
}

impl From<RowsPerPage> for usize {
    fn from(value: RowsPerPage) -> Self {
        value.get()
    }
}

impl From<RowsPerPage> for NonZeroUsize {
    fn from(value: RowsPerPage) -> Self {
        Self::new(value.get()).unwrap_or(Self::MIN)
    }
}

impl TryFrom<usize> for RowsPerPage {
    type Error = InvalidRowsPerPage;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|rows| rows.get() == value)
            .ok_or_else(|| InvalidRowsPerPage(value.to_string()))
    }
}

impl FromStr for RowsPerPage {
    type Err = InvalidRowsPerPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .map_err(|_| InvalidRowsPerPage(s.to_owned()))
            .and_then(Self::try_from)
    }
}

impl Display for RowsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Error of converting a number into [`RowsPerPage`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display("`{_0}` is not an allowed rows per page value (10, 25 or 50)")]
pub struct InvalidRowsPerPage(#[error(not(source))] pub String);

/// Order of sorting.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Order {
    /// Ascending order.
    #[default]
    #[serde(rename = "asc")]
    #[strum(serialize = "asc")]
    Ascending,

    /// Descending order.
    #[serde(rename = "desc")]
    #[strum(serialize = "desc")]
    Descending,
}

impl Order {
    /// Returns the opposite [`Order`].
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies this [`Order`] to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: cmp::Ordering) -> cmp::Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Defines pagination types for the provided node type.
#[macro_export]
macro_rules! define_pagination {
    ($node:ty) => {
        #[doc = "A [`Page`] of nodes."]
        pub type Page = $crate::pagination::Page<$node>;

        #[doc = "An information about a [`Page`]."]
        pub type PageInfo = $crate::pagination::PageInfo;

        #[doc = "Arguments for selecting a [`Page`]."]
        pub type Arguments = $crate::pagination::Arguments;
    };
}
