use std::{
    io::{self, Write as _},
    sync::OnceLock,
};

use service::{
    command::LoadUsers,
    infra::{http, Http},
    query,
    read::user::list,
    Query as _,
};
use tokio::io::{AsyncBufReadExt as _, BufReader};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};
use user_dashboard::{
    interactive::{self, Command},
    render::Screen,
    Args, Config, Layout, Service,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() -> std::process::ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_thread_names(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .init();

    match start().await {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(()) => std::process::ExitCode::FAILURE,
    }
}

async fn start() -> Result<(), ()> {
    let args = Args::parse().unwrap_or_else(|e| e.exit());

    let Config {
        repository,
        view,
        log,
    } = Config::new(&args.config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let http_config = http::Config::try_from(repository).map_err(|e| {
        log::error!("invalid `User`s endpoint URL: {e}");
    })?;
    let http = Http::new(http_config).map_err(|e| {
        log::error!("failed to initialize `Http` client: {e}");
    })?;

    let service = Service::new(view.into(), http);
    let layout =
        Layout::for_width(args.width.unwrap_or(view.width), view.breakpoint);
    let mut selector = args.selector(view.rows_per_page);

    load(&service).await;
    let mut info = show(&service, &selector, layout).await?;

    if !args.interactive {
        return Ok(());
    }

    println!("{}", interactive::HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| {
            log::error!("failed to flush stdout: {e}");
        })?;

        let Some(line) = lines.next_line().await.map_err(|e| {
            log::error!("failed to read stdin: {e}");
        })?
        else {
            return Ok(());
        };

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match command {
            Command::Quit => return Ok(()),
            Command::Help => {
                println!("{}", interactive::HELP);
                continue;
            }
            Command::Reload => load(&service).await,
            Command::Apply(_) | Command::Next | Command::Previous => {}
        }

        selector = command.navigate(selector, &info);
        info = show(&service, &selector, layout).await?;
    }
}

/// Loads `User`s into the provided [`Service`], keeping the previous ones on
/// failure.
async fn load(service: &Service) {
    match service.execute(LoadUsers).await {
        Ok(count) => {
            log::debug!(count, endpoint = %service.repository().endpoint());
        }
        Err(e) => {
            log::error!(
                endpoint = %service.repository().endpoint(),
                "failed to load `User`s: {e}\n{}",
                e.trace(),
            );
        }
    }
}

/// Renders the page selected by the provided [`list::Selector`] to stdout,
/// returning its [`list::PageInfo`].
async fn show(
    service: &Service,
    selector: &list::Selector,
    layout: Layout,
) -> Result<list::PageInfo, ()> {
    let page = service
        .execute(query::users::List(selector.clone()))
        .await
        .unwrap_or_else(|e| match e {});
    let status = service
        .execute(query::users::Status)
        .await
        .unwrap_or_else(|e| match e {});

    Screen {
        page: &page,
        selector,
        status,
    }
    .render(layout, &mut io::stdout().lock())
    .map_err(|e| {
        log::error!("failed to render `User`s: {e}");
    })?;

    Ok(page.page_info())
}
