//! Structured logging bootstrap.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `debug` widens the default filter and normally comes from the record's
/// `EnableDebug` field. An explicit `RUST_LOG` still wins. Calling this
/// again (hot reload) keeps the first subscriber.
pub fn init(debug: bool) {
    let default_filter = if debug {
        "chat_logger=debug"
    } else {
        "chat_logger=info"
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init(false);
        init(true);
    }
}
