use std::{any::Any, backtrace::Backtrace, panic::PanicHookInfo};

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Installs the fmt subscriber and a panic hook that reports through it.
///
/// `RUST_LOG` wins over the configured filter when it is set. Calling this
/// twice keeps the first subscriber.
pub fn init_tracing(cfg: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.rust_log));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(cfg.show_target)
        .try_init();
    std::panic::set_hook(Box::new(log_panic));
}

fn log_panic(info: &PanicHookInfo<'_>) {
    let current = std::thread::current();
    let thread = current.name().unwrap_or("<unnamed>");
    let location = info
        .location()
        .map(ToString::to_string)
        .unwrap_or_else(|| "<unknown>".to_string());

    tracing::error!(
        panic = %panic_message(info.payload()),
        thread,
        location = %location,
        backtrace = %Backtrace::capture(),
        "panic"
    );
}

/// Text of a panic payload raised with a string or a format string.
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use super::panic_message;

    #[test]
    fn reads_static_and_formatted_payloads() {
        let fixed: Box<dyn std::any::Any + Send> = Box::new("boom");
        let formatted: Box<dyn std::any::Any + Send> = Box::new(format!("project {}", 7));
        let other: Box<dyn std::any::Any + Send> = Box::new(42_u8);

        assert_eq!(panic_message(fixed.as_ref()), "boom");
        assert_eq!(panic_message(formatted.as_ref()), "project 7");
        assert_eq!(panic_message(other.as_ref()), "unknown panic");
    }
}
