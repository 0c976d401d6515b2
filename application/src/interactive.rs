//! Interactive [`Command`]s read line by line from the standard input.

use std::str::FromStr;

use common::RowsPerPage;
use derive_more::{Display, Error};
use service::read::user::list::{
    filter, sort, Action, PageInfo, Selector,
};

/// Usage hint of every [`Command`].
pub const HELP: &str = "\
Commands:
  filter <text>       filter users by the text (case-insensitive)
  clear               clear the filter text
  field <field>       match the filter against: \
all, name, email, phone, website, address
  sort <field>        sort by `name` or `email` (repeat to reverse)
  page <index>        go to the page with the zero-based index
  next | prev         go to the next or previous page
  rows <count>        show 10, 25 or 50 users per page
  reload              load users from the endpoint again
  help                show this help
  quit                exit";

/// Command entered by a user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Changes the [`Selector`] with the [`Action`].
    Apply(Action),

    /// Navigates to the next page, if any.
    Next,

    /// Navigates to the previous page, if any.
    Previous,

    /// Loads users again.
    Reload,

    /// Shows the [`HELP`].
    Help,

    /// Exits the dashboard.
    Quit,
}

impl Command {
    /// Returns the [`Selector`] this [`Command`] leads to from the current
    /// one, with [`PageInfo`] of the currently shown page.
    ///
    /// [`Command`]s not changing the [`Selector`] return it as is.
    #[must_use]
    pub fn navigate(self, selector: Selector, info: &PageInfo) -> Selector {
        match self {
            Self::Apply(action) => selector.apply(action),
            Self::Next => selector.apply(Action::GoToPage(info.next_index())),
            Self::Previous => {
                selector.apply(Action::GoToPage(info.previous_index()))
            }
            Self::Reload | Self::Help | Self::Quit => selector,
        }
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (name, rest) = line
            .split_once(char::is_whitespace)
            .unwrap_or((line, ""));
        let arg = rest.trim();

        let command = match name {
            // Filter text is taken verbatim, including inner spaces.
            "filter" => Action::SetFilterText(rest.to_owned()).into(),
            "clear" => Action::ClearFilter.into(),
            "field" => {
                Action::SetFilterField(argument::<filter::Field>(arg)?).into()
            }
            "sort" => Action::SortBy(argument::<sort::Field>(arg)?).into(),
            "page" => Action::GoToPage(argument(arg)?).into(),
            "rows" => {
                Action::SetRowsPerPage(argument::<RowsPerPage>(arg)?).into()
            }
            "next" => Self::Next,
            "prev" => Self::Previous,
            "reload" => Self::Reload,
            "help" | "" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => return Err(ParseError::UnknownCommand(name.to_owned())),
        };
        Ok(command)
    }
}

/// Parses a [`Command`] argument.
fn argument<T: FromStr>(arg: &str) -> Result<T, ParseError> {
    arg.parse()
        .map_err(|_| ParseError::InvalidArgument(arg.to_owned()))
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Self::Apply(action)
    }
}

/// Error of parsing a [`Command`].
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
pub enum ParseError {
    /// Command name is not recognized.
    #[display("unknown command `{_0}`, type `help` to list commands")]
    UnknownCommand(#[error(not(source))] String),

    /// Command argument is not valid.
    #[display("invalid argument `{_0}`, type `help` to list commands")]
    InvalidArgument(#[error(not(source))] String),
}
