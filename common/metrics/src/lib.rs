//! A wrapper around the `prometheus` crate that provides a global, `Result`
//! friendly metrics registry.
//!
//! ## Global metrics registry
//!
//! Metrics are registered against the default registry at first access. The
//! `try_create_*` functions return a `Result` instead of panicking so that a
//! name collision (e.g. in tests that build the crate twice) degrades to a
//! metric that silently does nothing, rather than taking the process down.
//!
//! Each metric is intended to be defined once in a `metrics` module of the
//! crate that updates it, as a `LazyLock` static, and updated through the
//! infallible helper functions (`inc_counter`, `set_gauge`, `start_timer`).

use prometheus::{HistogramOpts, Opts};

pub use prometheus::{Error, Histogram, HistogramTimer, IntCounter, IntGauge, Result};

/// Attempts to create an `IntCounter`, returning `Err` if the registry does
/// not accept the counter (potentially due to naming conflict).
pub fn try_create_int_counter(name: &str, help: &str) -> Result<IntCounter> {
    let opts = Opts::new(name, help);
    let counter = IntCounter::with_opts(opts)?;
    prometheus::register(Box::new(counter.clone()))?;
    Ok(counter)
}

/// Attempts to create an `IntGauge`, returning `Err` if the registry does not
/// accept the gauge (potentially due to naming conflict).
pub fn try_create_int_gauge(name: &str, help: &str) -> Result<IntGauge> {
    let opts = Opts::new(name, help);
    let gauge = IntGauge::with_opts(opts)?;
    prometheus::register(Box::new(gauge.clone()))?;
    Ok(gauge)
}

/// Attempts to create a `Histogram`, returning `Err` if the registry does not
/// accept the histogram (potentially due to naming conflict).
pub fn try_create_histogram(name: &str, help: &str) -> Result<Histogram> {
    let opts = HistogramOpts::new(name, help);
    let histogram = Histogram::with_opts(opts)?;
    prometheus::register(Box::new(histogram.clone()))?;
    Ok(histogram)
}

/// Starts a timer for the given `Histogram`, stopping when it gets dropped or
/// given to `stop_timer(..)`.
pub fn start_timer(histogram: &Result<Histogram>) -> Option<HistogramTimer> {
    if let Ok(histogram) = histogram {
        Some(histogram.start_timer())
    } else {
        None
    }
}

/// Stops a timer created with `start_timer(..)`.
pub fn stop_timer(timer: Option<HistogramTimer>) {
    if let Some(t) = timer {
        t.observe_duration();
    }
}

pub fn inc_counter(counter: &Result<IntCounter>) {
    if let Ok(counter) = counter {
        counter.inc();
    }
}

pub fn set_gauge(gauge: &Result<IntGauge>, value: i64) {
    if let Ok(gauge) = gauge {
        gauge.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_registration_is_an_error_not_a_panic() {
        let first = try_create_int_counter("metrics_test_counter", "help");
        assert!(first.is_ok());

        let second = try_create_int_counter("metrics_test_counter", "help");
        assert!(second.is_err());

        // Updating through a failed handle is a no-op.
        inc_counter(&second);
        inc_counter(&first);
        assert_eq!(first.unwrap().get(), 1);
    }
}
