//! [`Args`] definitions.

use clap::Parser;
use common::{Order, RowsPerPage};
use service::read::user::list::{
    filter, sort, Arguments, Filter, Selector, Sort,
};

/// Terminal dashboard listing users of a remote endpoint.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Text to filter users by (case-insensitive substring).
    #[arg(short, long, default_value = "")]
    pub filter: String,

    /// Field the filter text is matched against.
    #[arg(long, default_value_t)]
    pub field: filter::Field,

    /// Field to sort users by.
    #[arg(short, long, default_value_t)]
    pub sort: sort::Field,

    /// Sorting order.
    #[arg(short, long, default_value_t)]
    pub order: Order,

    /// Zero-based index of the page to show.
    #[arg(short, long, default_value_t = 0)]
    pub page: usize,

    /// Number of users on a single page (10, 25 or 50), overriding the
    /// configured one.
    #[arg(short, long)]
    pub rows_per_page: Option<RowsPerPage>,

    /// Terminal width in columns, deciding between table and cards layout.
    #[arg(short, long, env = "COLUMNS")]
    pub width: Option<usize>,

    /// Keep reading commands from the standard input after the first page.
    #[arg(short, long)]
    pub interactive: bool,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }

    /// Returns the initial [`Selector`] described by these [`Args`].
    ///
    /// The provided `rows_per_page` is used unless overridden.
    #[must_use]
    pub fn selector(&self, rows_per_page: RowsPerPage) -> Selector {
        Selector {
            filter: Filter::new(self.filter.clone(), self.field),
            sort: Sort::new(self.sort, self.order),
            arguments: Arguments::new(
                self.page,
                self.rows_per_page.unwrap_or(rows_per_page),
            ),
        }
    }
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;
    use common::{Order, RowsPerPage};
    use service::read::user::list::{filter, sort, Arguments, Filter, Sort};

    use super::Args;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["user-dashboard"]).unwrap();

        assert_eq!(args.config, "config.toml");
        assert!(!args.interactive);
        assert_eq!(
            args.selector(RowsPerPage::TwentyFive),
            service::read::user::list::Selector {
                arguments: Arguments::new(0, RowsPerPage::TwentyFive),
                ..Default::default()
            },
        );
    }

    #[test]
    fn builds_selector() {
        let args = Args::try_parse_from([
            "user-dashboard",
            "--filter",
            "Ave",
            "--field",
            "address",
            "--sort",
            "email",
            "--order",
            "desc",
            "--page",
            "2",
            "--rows-per-page",
            "50",
        ])
        .unwrap();

        let selector = args.selector(RowsPerPage::Ten);

        assert_eq!(selector.filter, Filter::new("Ave", filter::Field::Address));
        assert_eq!(
            selector.sort,
            Sort::new(sort::Field::Email, Order::Descending),
        );
        assert_eq!(selector.arguments, Arguments::new(2, RowsPerPage::Fifty));
    }

    #[test]
    fn rejects_unknown_values() {
        for args in [
            ["user-dashboard", "--field", "company"],
            ["user-dashboard", "--sort", "phone"],
            ["user-dashboard", "--rows-per-page", "20"],
            ["user-dashboard", "--order", "up"],
        ] {
            assert!(Args::try_parse_from(args).is_err(), "{args:?}");
        }
    }
}
