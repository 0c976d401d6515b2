//! Terminal rendering of a [`list::Page`] of [`User`]s.

use std::io;

use common::Order;
use itertools::Itertools as _;
use service::{
    domain::User,
    read::user::{
        list::{self, filter, sort},
        Status,
    },
};

/// Layout of the rendered [`User`]s.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Layout {
    /// One row per [`User`], with sortable column headers.
    Table,

    /// One stacked card per [`User`], for narrow terminals.
    Cards,
}

impl Layout {
    /// Chooses a [`Layout`] for the provided terminal `width`.
    ///
    /// Terminals narrower than the `breakpoint` get [`Layout::Cards`].
    #[must_use]
    pub const fn for_width(width: usize, breakpoint: usize) -> Self {
        if width < breakpoint {
            Self::Cards
        } else {
            Self::Table
        }
    }
}

/// Everything shown on a single screen of the dashboard.
#[derive(Clone, Copy, Debug)]
pub struct Screen<'a> {
    /// [`list::Page`] of [`User`]s to show.
    pub page: &'a list::Page,

    /// [`list::Selector`] the `page` was selected with.
    pub selector: &'a list::Selector,

    /// [`Status`] of the loaded [`User`]s.
    pub status: Status,
}

impl Screen<'_> {
    /// Renders this [`Screen`] in the provided [`Layout`].
    ///
    /// # Errors
    ///
    /// Errors if writing to the `out`put fails.
    pub fn render(
        &self,
        layout: Layout,
        out: &mut impl io::Write,
    ) -> io::Result<()> {
        match self.status {
            Status::Loading => writeln!(out, "Loading users...")?,
            Status::Failed => writeln!(
                out,
                "Failed to load users, showing the last known ones \
                 (type `reload` to retry).",
            )?,
            Status::Ready => {}
        }

        let filter = &self.selector.filter;
        if !filter.is_empty() {
            writeln!(out, "{}: {:?}", filter_label(filter.field), filter.text)?;
        }

        match layout {
            Layout::Table => self.render_table(out)?,
            Layout::Cards => self.render_cards(out)?,
        }

        let info = self.page.page_info();
        write!(
            out,
            "Rows per page: {}  {info}  (page {} of {})",
            self.page.arguments.size,
            info.index + 1,
            info.page_count.max(1),
        )?;
        let hints = [
            (info.has_previous_page, "prev"),
            (info.has_next_page, "next"),
        ]
        .into_iter()
        .filter_map(|(available, hint)| available.then_some(hint))
        .join(" | ");
        if !hints.is_empty() {
            write!(out, "  [{hints}]")?;
        }
        writeln!(out)
    }

    /// Renders [`User`]s as a table with sortable column headers.
    fn render_table(&self, out: &mut impl io::Write) -> io::Result<()> {
        let sort = self.selector.sort;
        let header = [
            sortable_header("Name", sort::Field::Name, sort),
            sortable_header("Email", sort::Field::Email, sort),
            "Phone".to_owned(),
            "Website".to_owned(),
            "Address".to_owned(),
        ];
        let rows = self.page.nodes.iter().map(row).collect::<Vec<_>>();

        let widths = header.clone().map(|cell| cell.chars().count());
        let widths = rows.iter().fold(widths, |mut widths, row| {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
            widths
        });

        let line = |cells: &[String; 5]| {
            cells
                .iter()
                .zip(widths)
                .format_with("  ", |(cell, width), f| {
                    f(&format_args!("{cell:<width$}"))
                })
                .to_string()
                .trim_end()
                .to_owned()
        };

        writeln!(out, "{}", line(&header))?;
        writeln!(
            out,
            "{}",
            widths.iter().format_with("  ", |w, f| f(&"-".repeat(*w))),
        )?;
        if rows.is_empty() {
            writeln!(out, "No users to show.")?;
        }
        for row in &rows {
            writeln!(out, "{}", line(row))?;
        }
        Ok(())
    }

    /// Renders [`User`]s as stacked cards.
    fn render_cards(&self, out: &mut impl io::Write) -> io::Result<()> {
        let sort = self.selector.sort;
        writeln!(
            out,
            "Sort users: [{}] [{}]",
            sortable_header("Name", sort::Field::Name, sort),
            sortable_header("Email", sort::Field::Email, sort),
        )?;

        if self.page.nodes.is_empty() {
            writeln!(out, "No users to show.")?;
        }
        for user in &self.page.nodes {
            writeln!(out)?;
            writeln!(out, "{}", user.name)?;
            writeln!(out, "  Email: {}", user.email)?;
            writeln!(out, "  Phone: {}", user.phone)?;
            writeln!(out, "  Website: {}", user.website)?;
            writeln!(out, "  Address: {}", user.address)?;
        }
        writeln!(out)
    }
}

/// Returns label of the filter text input for the provided
/// [`filter::Field`].
#[must_use]
pub fn filter_label(field: filter::Field) -> String {
    match field {
        filter::Field::All => "Filter by any field".to_owned(),
        filter::Field::Name
        | filter::Field::Email
        | filter::Field::Phone
        | filter::Field::Website
        | filter::Field::Address => format!("Filter by {field}"),
    }
}

/// Returns header of a sortable column, marking the active [`list::Sort`].
fn sortable_header(
    title: &str,
    field: sort::Field,
    sort: list::Sort,
) -> String {
    if sort.field != field {
        return title.to_owned();
    }
    let arrow = match sort.order {
        Order::Ascending => '\u{2191}',
        Order::Descending => '\u{2193}',
    };
    format!("{title} {arrow}")
}

/// Returns table cells of the provided [`User`].
fn row(user: &User) -> [String; 5] {
    [
        user.name.to_string(),
        user.email.to_string(),
        user.phone.to_string(),
        user.website.to_string(),
        user.address.to_string(),
    ]
}

#[cfg(test)]
mod spec {
    use std::num::NonZeroUsize;

    use common::{pagination, Order, RowsPerPage};
    use service::{
        domain::{
            user::{Address, Company},
            User,
        },
        read::user::{
            list::{
                filter, sort, Action, Arguments, Filter, Selector, Sort,
            },
            Status,
        },
    };

    use super::{filter_label, Layout, Screen};

    fn users() -> Vec<User> {
        [("Bob", "bob@x.com"), ("Amy", "amy@y.com")]
            .into_iter()
            .zip(1_i64..)
            .map(|((name, email), id)| User {
                id: id.into(),
                name: name.into(),
                username: name.to_lowercase().into(),
                email: email.into(),
                phone: "555".into(),
                website: format!("{}.dev", name.to_lowercase()).into(),
                address: Address {
                    street: "Main St".into(),
                    city: "Springfield".into(),
                    zipcode: "12345".into(),
                    ..Address::default()
                },
                company: Company::default(),
            })
            .collect()
    }

    fn render(selector: &Selector, status: Status, layout: Layout) -> String {
        let users = users();
        let page = selector.select(&users).map(User::clone);
        let mut out = Vec::new();
        Screen {
            page: &page,
            selector,
            status,
        }
        .render(layout, &mut out)
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn chooses_layout_by_width() {
        assert_eq!(Layout::for_width(80, 100), Layout::Cards);
        assert_eq!(Layout::for_width(100, 100), Layout::Table);
        assert_eq!(Layout::for_width(160, 100), Layout::Table);
    }

    #[test]
    fn renders_table() {
        let out = render(&Selector::default(), Status::Ready, Layout::Table);
        let lines = out.lines().collect::<Vec<_>>();

        assert!(lines[0].starts_with("Name \u{2191}  Email "));
        assert!(lines[1].starts_with("------"));
        assert!(lines[2].starts_with("Amy "));
        assert!(lines[2].ends_with("Main St, Springfield, 12345"));
        assert!(lines[3].starts_with("Bob "));
        assert_eq!(
            lines[4],
            "Rows per page: 10  1\u{2013}2 of 2  (page 1 of 1)",
        );
    }

    #[test]
    fn renders_cards() {
        let selector = Selector {
            sort: Sort::new(sort::Field::Email, Order::Descending),
            ..Selector::default()
        };

        let out = render(&selector, Status::Ready, Layout::Cards);

        assert!(
            out.starts_with("Sort users: [Name] [Email \u{2193}]\n\nBob\n"),
        );
        assert!(out.contains("  Website: amy.dev\n"));
        assert!(out.contains("  Address: Main St, Springfield, 12345\n"));
    }

    #[test]
    fn renders_filter_and_status() {
        let selector = Selector {
            filter: Filter::new("zzz", filter::Field::All),
            arguments: Arguments::new(0, RowsPerPage::TwentyFive),
            ..Selector::default()
        };

        let out = render(&selector, Status::Failed, Layout::Table);

        assert!(out.starts_with("Failed to load users"));
        assert!(out.contains("Filter by any field: \"zzz\"\n"));
        assert!(out.contains("No users to show.\n"));
        assert!(out.ends_with(
            "Rows per page: 25  0\u{2013}0 of 0  (page 1 of 1)\n",
        ));
    }

    #[test]
    fn hints_page_navigation() {
        let first = Selector {
            arguments: Arguments::new(0, NonZeroUsize::MIN),
            ..Selector::default()
        };

        let out = render(&first, Status::Ready, Layout::Table);
        assert!(out.ends_with(
            "Rows per page: 1  1\u{2013}1 of 2  (page 1 of 2)  [next]\n",
        ));

        let second = first.apply(Action::GoToPage(1));
        let out = render(&second, Status::Ready, Layout::Cards);
        assert!(out.ends_with(
            "Rows per page: 1  2\u{2013}2 of 2  (page 2 of 2)  [prev]\n",
        ));

        let beyond = second.apply(Action::GoToPage(4));
        let out = render(&beyond, Status::Ready, Layout::Table);
        assert!(out.ends_with("(page 5 of 2)  [prev]\n"));
    }

    #[test]
    fn renders_loading() {
        let empty = pagination::Page::new(Vec::new(), Arguments::default());
        let mut out = Vec::new();

        Screen {
            page: &empty,
            selector: &Selector::default(),
            status: Status::Loading,
        }
        .render(Layout::Cards, &mut out)
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Loading users...\n"));
        assert!(out.contains("No users to show."));
    }

    #[test]
    fn labels_filter_input() {
        assert_eq!(filter_label(filter::Field::All), "Filter by any field");
        assert_eq!(filter_label(filter::Field::Phone), "Filter by phone");
    }
}
