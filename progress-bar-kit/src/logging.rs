//! Tracing setup for hosts that do not install their own subscriber.

/// Default filter when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "error,progress_bar_kit=info";

/// Installs a formatted `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already set, so calling it more
/// than once is harmless.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
        tracing::info!("tracing initialised twice without panicking");
    }
}
