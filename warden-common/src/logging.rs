use std::str::FromStr;

use tracing::metadata::LevelFilter;
use tracing_subscriber::{
    Layer, filter::FilterFn, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
};

/// Environment variable consulted for the maximum log level.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

#[macro_export]
macro_rules! log {
    ($level:expr, $span:expr, $($msg:expr),*) => {{
        let span = $crate::tracing::span!($level, $span);
        let _enter = span.enter();

        $crate::tracing::event!($level, $($msg),*)
    }};
}

/// Events about warden's own lifecycle: configuration, session set-up.
#[macro_export]
macro_rules! internal {
    (level = $level:ident, $($msg:expr),*) => {
        $crate::log!($crate::tracing::Level::$level, "internal", $($msg),*)
    };

    ($($msg:expr),*) => {
        $crate::internal!(level = TRACE, $($msg),*)
    };
}

/// Events about individual calls made to an identity backend.
#[macro_export]
macro_rules! verify {
    (level = $level:ident, $($msg:expr),*) => {
        $crate::log!($crate::tracing::Level::$level, "verify", $($msg),*)
    };

    ($($msg:expr),*) => {
        $crate::verify!(level = TRACE, $($msg),*)
    };
}

/// The level used when `LOG_LEVEL` is unset.
#[must_use]
pub const fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::TRACE
    } else {
        LevelFilter::INFO
    }
}

/// Resolve the level filter from an optional `LOG_LEVEL` value.
///
/// Unparseable values fall back to `default` with a note on stderr, since the
/// subscriber that would otherwise report it does not exist yet.
#[must_use]
pub fn resolve_level(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.map_or(default, |level| {
        LevelFilter::from_str(level).unwrap_or_else(|_| {
            eprintln!("Invalid log level specified {level}, defaulting to {default}");
            default
        })
    })
}

/// Install the global subscriber. Only events from `warden*` targets are kept.
pub fn init() {
    let level = resolve_level(
        std::env::var(LOG_LEVEL_ENV).ok().as_deref(),
        default_level(),
    );

    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(false)
                .with_line_number(false)
                .compact()
                .with_ansi(true)
                .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc_3339())
                .with_filter(level)
                .with_filter(FilterFn::new(|metadata| {
                    metadata.target().starts_with("warden")
                })),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_resolve_level_unset_uses_default() {
        assert_eq!(resolve_level(None, LevelFilter::INFO), LevelFilter::INFO);
        assert_eq!(resolve_level(None, LevelFilter::TRACE), LevelFilter::TRACE);
    }

    #[test]
    fn test_resolve_level_parses_names() {
        assert_eq!(
            resolve_level(Some("warn"), LevelFilter::INFO),
            LevelFilter::WARN
        );
        assert_eq!(
            resolve_level(Some("DEBUG"), LevelFilter::INFO),
            LevelFilter::DEBUG
        );
        assert_eq!(
            resolve_level(Some("off"), LevelFilter::INFO),
            LevelFilter::OFF
        );
    }

    #[test]
    fn test_resolve_level_invalid_falls_back() {
        assert_eq!(
            resolve_level(Some("loud"), LevelFilter::ERROR),
            LevelFilter::ERROR
        );
    }

    #[test]
    fn test_macros_expand_without_subscriber() {
        let domain = "svc.low";
        crate::internal!("no subscriber for {}", domain);
        crate::verify!(level = DEBUG, "attempt {} against {}", 1, domain);
    }
}
