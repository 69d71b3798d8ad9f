//! Browser console logging.
//!
//! Debug output for this crate and the API payloads is on by default. A
//! `LOG_FILTER` set at build time replaces it, e.g.
//! `LOG_FILTER="warn,ui::ad_form=trace" trunk build`.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

const DEFAULT_DIRECTIVES: &str = "error,ui=debug,payloads=debug";

/// The filter to install, plus the reason an override was rejected.
fn env_filter(directives: Option<&str>) -> (EnvFilter, Option<String>) {
    let fallback = || EnvFilter::new(DEFAULT_DIRECTIVES);
    match directives.map(|raw| (raw, EnvFilter::try_new(raw))) {
        None => (fallback(), None),
        Some((_, Ok(filter))) => (filter, None),
        Some((raw, Err(e))) => (fallback(), Some(format!("Ignoring LOG_FILTER {raw:?}: {e}"))),
    }
}

/// Initialize logging. Call once, before the app is rendered; later calls
/// leave the first subscriber in place.
pub fn init_logging() {
    let (filter, rejected) = env_filter(option_env!("LOG_FILTER"));
    let active = filter.to_string();

    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_line_number(true)
        .with_level(false)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    if tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .try_init()
        .is_err()
    {
        return;
    }

    if let Some(reason) = rejected {
        tracing::warn!("{reason}");
    }
    tracing::info!("Console logging at {active}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_crate_debug_output() {
        let (filter, rejected) = env_filter(None);
        assert!(rejected.is_none());
        let active = filter.to_string();
        assert!(active.contains("ui=debug"), "{active}");
        assert!(active.contains("payloads=debug"), "{active}");
    }

    #[test]
    fn build_time_override_replaces_the_default() {
        let (filter, rejected) = env_filter(Some("warn,ui::ad_form=trace"));
        assert!(rejected.is_none());
        let active = filter.to_string();
        assert!(active.contains("ui::ad_form=trace"), "{active}");
        assert!(!active.contains("payloads"), "{active}");
    }

    #[test]
    fn malformed_override_is_reported_and_ignored() {
        let (filter, rejected) = env_filter(Some("ui=loud"));
        assert!(rejected.is_some_and(|reason| reason.contains("ui=loud")));
        assert!(filter.to_string().contains("ui=debug"));
    }
}
