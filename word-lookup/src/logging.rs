//! Logging setup for word-lookup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "word_lookup=info,dictionary=info,tower_http=info";

/// Initialize logging.
///
/// An explicit `level` applies to this binary and the dictionary client.
/// Without one, `RUST_LOG` is used, falling back to info.
pub fn init(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(format!(
            "word_lookup={level},dictionary={level},tower_http={level}"
        )),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
