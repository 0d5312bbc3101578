use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};
use std::time::Instant;

pub static LAST_LOG: LazyLock<Mutex<HashMap<String, Instant>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

#[allow(unused_macros)]
#[macro_export]
macro_rules! current_location {
    () => {
        format!("{}:{}", file!(), line!())
    };
}

/// Emits a `warn!` at most once every `$seconds` per call site.
///
/// A poisoned rate-limit table drops the message rather than panicking.
#[macro_export]
macro_rules! warn_every_seconds {
    ($seconds:expr, $($args:expr),+) => {{
        let loc = $crate::current_location!();
        if let Ok(mut last_log) = $crate::util::log::LAST_LOG.lock() {
            if last_log.get(&loc).map_or(true, |then| then.elapsed().as_secs() >= $seconds) {
                $crate::core::prelude::warn!($($args),+);
                last_log.insert(loc, std::time::Instant::now());
            }
        }
    }};
}

/// Installs a fmt subscriber that writes through the test harness. Safe to call repeatedly.
#[cfg(test)]
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_every_seconds_records_call_site() {
        init_test_logging();
        for _ in 0..3 {
            warn_every_seconds!(60, "rate limited: {}", 1);
        }
        let last_log = LAST_LOG.lock().unwrap();
        assert!(last_log.keys().any(|loc| loc.contains("log.rs")));
    }

    #[test]
    fn current_location_names_file_and_line() {
        let loc = current_location!();
        let (file, line) = loc.rsplit_once(':').unwrap();
        assert!(file.ends_with("log.rs"));
        assert!(line.parse::<u32>().is_ok());
    }
}
