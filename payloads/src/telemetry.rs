use tracing::Subscriber;
use tracing::subscriber::set_global_default;
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Log an error with the alternate selector, which emits the error chain.
pub fn log_error(e: impl Into<anyhow::Error>) {
    let e: anyhow::Error = e.into();
    tracing::error!("{e:#}");
}

/// `log_level` is the fallback filter when RUST_LOG is not set.
pub fn get_subscriber(log_level: &str) -> impl Subscriber + Sync + Send {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));
    let stderr = fmt::Layer::new().with_writer(std::io::stderr).pretty();
    Registry::default().with(env_filter).with(stderr)
}

/// Register a subscriber as global default. Fails when called twice.
pub fn init_subscriber(
    subscriber: impl Subscriber + Sync + Send,
) -> anyhow::Result<()> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_is_an_error() {
        let _ = init_subscriber(get_subscriber("error"));
        assert!(init_subscriber(get_subscriber("error")).is_err());
    }
}
