use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global JSON subscriber on stderr.
///
/// `quiet` limits output to errors unless `RUST_LOG` says otherwise.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(quiet));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();
}

fn default_filter(quiet: bool) -> EnvFilter {
    if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::new("info")
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(true).max_level_hint(), Some(LevelFilter::ERROR));
        assert_eq!(default_filter(false).max_level_hint(), Some(LevelFilter::INFO));
    }
}
