//! Observability hooks for the codec kernels.
//!
//! Chunked compress/decompress calls stop at buffer boundaries as a matter of
//! routine, and the only way to see *why* a call returned early is to log it.
//! The `log_metric!` macro emits a structured key-value line through the `log`
//! facade at `trace` level. It is wrapped in `#[cfg(debug_assertions)]`, so the
//! macro and all calls to it are compiled out of release builds.

use log::LevelFilter;
use std::sync::Once;

/// Logs a structured key-value metric string at `trace` level, only in debug builds.
///
/// # Example
/// ```
/// use tambak_intcodec::log_metric;
/// let consumed = 4;
/// log_metric!("event"="vlq_compress", "outcome"="output_full", "consumed"=&consumed);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            // Collect each pair as a JSON string fragment
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            log::trace!("INTCODEC_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` backend at the given level. Only the first call has
/// any effect; `RUST_LOG` still overrides the level when set.
pub fn enable_verbose_logging(level: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(cfg!(test));
        builder.filter_level(level);
        builder.parse_env("RUST_LOG");

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())
        });

        let _ = builder.try_init();
    });
}
