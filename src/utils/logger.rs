use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_CRATE_DIRECTIVE: &str = "meter_graphql=debug";

/// Filter directive used when `RUST_LOG` is not set.
///
/// A configured level is kept as is; `verbose` appends a debug directive for
/// this crate, which takes precedence over any crate-level entry before it.
fn filter_directive(verbose: bool, level: Option<&str>) -> String {
    match (level, verbose) {
        (Some(directive), true) => format!("{},{}", directive, VERBOSE_CRATE_DIRECTIVE),
        (Some(directive), false) => directive.to_string(),
        (None, true) => format!("{},info", VERBOSE_CRATE_DIRECTIVE),
        (None, false) => "meter_graphql=info".to_string(),
    }
}

fn build_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, level)))
}

pub fn init_logger(verbose: bool, json: bool, level: Option<&str>) {
    let filter = build_filter(verbose, level);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .init();
    }
}
