//! Logging initialization
//!
//! Library code only emits through the `log` facade; the sink is chosen
//! here, once, by whichever binary runs the conversion.

/// Initialize env_logger with millisecond timestamps and a default
/// filter level of `info`. Override with the RUST_LOG environment
/// variable.
pub fn init() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();
}
